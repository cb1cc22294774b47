use anyhow::Result;
use gachaduel_data::{
    CharacterData,
    DataStore,
    Difficulty,
    Id,
    ItemData,
    Rarity,
};
use gachaduel_prng::{
    RandomSource,
    util,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    Profile,
    error::{
        InsufficientCurrencyError,
        general_error,
    },
};

/// The coin cost of one character gacha draw.
pub const CHARACTER_DRAW_COST: u64 = 100;

/// The coin cost of one item gacha draw.
pub const ITEM_DRAW_COST: u64 = 50;

/// The probability of a character draw yielding the UR boss, out of
/// [`UR_DRAW_DENOMINATOR`].
pub const UR_DRAW_NUMERATOR: u64 = 15;
pub const UR_DRAW_DENOMINATOR: u64 = 100;

/// The coins awarded for defeating the full CPU team, per difficulty.
///
/// Awarded exactly once, on the transition to victory.
pub fn victory_coins(difficulty: Difficulty) -> u64 {
    match difficulty {
        Difficulty::Easy => 100,
        Difficulty::Normal => 150,
        Difficulty::Hard => 450,
    }
}

/// The kind of a gacha draw.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum GachaKind {
    #[string = "Character"]
    Character,
    #[string = "Item"]
    Item,
}

impl GachaKind {
    /// The coin cost of one draw of this kind.
    pub fn cost(&self) -> u64 {
        match self {
            Self::Character => CHARACTER_DRAW_COST,
            Self::Item => ITEM_DRAW_COST,
        }
    }
}

/// The result of a gacha draw.
#[derive(Debug, Clone, PartialEq)]
pub enum GachaDraw {
    /// A character draw.
    ///
    /// `duplicate` is set when the character was already owned; the draw
    /// still occurred and cost coins, but ownership did not change.
    Character {
        id: Id,
        character: CharacterData,
        duplicate: bool,
    },
    /// An item draw. Always added to inventory; duplicates stack.
    Item { id: Id, item: ItemData },
}

fn draw_character(
    data: &dyn DataStore,
    rng: &mut dyn RandomSource,
    profile: &mut Profile,
) -> Result<GachaDraw> {
    let id = if util::chance(rng, UR_DRAW_NUMERATOR, UR_DRAW_DENOMINATOR) {
        let boss = data.all_character_ids(&|character| character.rarity == Rarity::UltraRare)?;
        boss.first()
            .cloned()
            .ok_or_else(|| general_error("the catalog has no UR character"))?
    } else {
        let pool = data.all_character_ids(&|character| character.rarity != Rarity::UltraRare)?;
        util::sample_slice(rng, &pool)
            .cloned()
            .ok_or_else(|| general_error("the catalog has no non-UR characters"))?
    };
    let character = data
        .character(&id)?
        .ok_or_else(|| general_error(format!("drawn character {id} is not in the catalog")))?;
    let duplicate = !profile.add_character(id.clone());
    Ok(GachaDraw::Character {
        id,
        character,
        duplicate,
    })
}

fn draw_item(
    data: &dyn DataStore,
    rng: &mut dyn RandomSource,
    profile: &mut Profile,
) -> Result<GachaDraw> {
    let pool = data.all_item_ids()?;
    let id = util::sample_slice(rng, &pool)
        .cloned()
        .ok_or_else(|| general_error("the catalog has no items"))?;
    let item = data
        .item(&id)?
        .ok_or_else(|| general_error(format!("drawn item {id} is not in the catalog")))?;
    profile.add_item(id.clone(), 1);
    Ok(GachaDraw::Item { id, item })
}

/// Rolls the gacha once.
///
/// The coin deduction and the draw are a single operation: if the balance
/// cannot cover the cost, the roll fails with
/// [`InsufficientCurrencyError`], no coins move, and no randomness is
/// consumed.
pub fn roll(
    data: &dyn DataStore,
    rng: &mut dyn RandomSource,
    profile: &mut Profile,
    kind: GachaKind,
) -> Result<GachaDraw> {
    let cost = kind.cost();
    if profile.coins() < cost {
        return Err(InsufficientCurrencyError {
            cost,
            coins: profile.coins(),
        }
        .into());
    }
    // A draw from a valid catalog cannot fail, so the deduction commits
    // first and the draw follows as part of the same operation.
    profile.debit_coins(cost);
    match kind {
        GachaKind::Character => draw_character(data, rng, profile),
        GachaKind::Item => draw_item(data, rng, profile),
    }
}

#[cfg(test)]
mod victory_coins_test {
    use gachaduel_data::Difficulty;

    use crate::rewards::victory_coins;

    #[test]
    fn fixed_amount_per_difficulty() {
        assert_eq!(victory_coins(Difficulty::Easy), 100);
        assert_eq!(victory_coins(Difficulty::Normal), 150);
        assert_eq!(victory_coins(Difficulty::Hard), 450);
    }
}
