use gachaduel_calc::Fraction;
use gachaduel_data::{
    Attribute,
    CharacterData,
    Id,
    ItemEffect,
    Rarity,
};

/// A character instance participating in a battle.
///
/// A combatant is derived once, at team assembly, from a character template
/// and an HP scale (difficulty scaling for CPU combatants, 1 for the
/// player). Its current HP is the only thing that mutates during the battle;
/// the template is never written back.
#[derive(Debug, Clone)]
pub struct Combatant {
    id: Id,
    name: String,
    attribute: Attribute,
    rarity: Rarity,
    attack: u64,
    max_hp: u64,
    hp: u64,
}

impl Combatant {
    /// Creates a new combatant from a template.
    ///
    /// Both current and max HP are the template HP scaled by `hp_scale`,
    /// rounded down, so the combatant always starts at full scaled HP.
    pub fn new(id: Id, data: &CharacterData, hp_scale: Fraction) -> Self {
        let max_hp = hp_scale.scale_floor(data.hp);
        Self {
            id,
            name: data.name.clone(),
            attribute: data.attribute,
            rarity: data.rarity,
            attack: data.attack,
            max_hp,
            hp: max_hp,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn attack(&self) -> u64 {
        self.attack
    }

    pub fn hp(&self) -> u64 {
        self.hp
    }

    pub fn max_hp(&self) -> u64 {
        self.max_hp
    }

    /// Whether the combatant has fainted.
    pub fn fainted(&self) -> bool {
        self.hp == 0
    }

    /// Applies damage, clamping HP at 0.
    pub fn apply_damage(&mut self, amount: u64) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Applies a healing item effect, clamping HP at max HP.
    ///
    /// Returns the amount of HP actually restored.
    pub fn apply_heal(&mut self, effect: ItemEffect) -> u64 {
        let healed = match effect {
            ItemEffect::HealFixed { amount } => self.hp.saturating_add(amount).min(self.max_hp),
            ItemEffect::HealFull => self.max_hp,
        };
        let restored = healed - self.hp;
        self.hp = healed;
        restored
    }
}
