use ahash::{
    HashSet,
    HashSetExt,
};
use anyhow::Result;
use gachaduel_calc::Fraction;
use gachaduel_data::{
    DataStore,
    Difficulty,
    Id,
    Rarity,
};
use gachaduel_prng::{
    RandomSource,
    util,
};

use crate::{
    Profile,
    battle::{
        Combatant,
        TEAM_SIZE,
        Team,
    },
    error::{
        general_error,
        invalid_team_size_error,
        not_found_error,
    },
};

/// The HP scale applied to CPU combatants at team assembly.
///
/// Player combatants are never scaled.
fn cpu_hp_scale(difficulty: Difficulty) -> Fraction {
    match difficulty {
        Difficulty::Easy => Fraction::new(4, 5),
        Difficulty::Normal => Fraction::whole(1),
        Difficulty::Hard => Fraction::new(3, 2),
    }
}

/// Assembles the player's team from an ordered list of character IDs.
///
/// The list must contain exactly [`TEAM_SIZE`] distinct characters owned by
/// the player. Combatants enter at template HP, with no difficulty scaling.
pub fn assemble_player_team(
    data: &dyn DataStore,
    profile: &Profile,
    ids: &[Id],
) -> Result<Team> {
    if ids.len() != TEAM_SIZE {
        return Err(invalid_team_size_error(format!(
            "got {} characters",
            ids.len()
        )));
    }
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(invalid_team_size_error(format!("{id} appears twice")));
        }
        if !profile.owns_character(id) {
            return Err(invalid_team_size_error(format!("{id} is not owned")));
        }
    }
    let mut members = Vec::with_capacity(TEAM_SIZE);
    for id in ids {
        let character = data
            .character(id)?
            .ok_or_else(|| not_found_error(id))?;
        members.push(Combatant::new(id.clone(), &character, Fraction::whole(1)));
    }
    Team::new(members)
}

/// Samples the CPU's team: [`TEAM_SIZE`] distinct characters drawn uniformly
/// at random from the catalog, excluding the UR boss, with both current and
/// max HP scaled by the difficulty multiplier.
pub fn sample_cpu_team(
    data: &dyn DataStore,
    rng: &mut dyn RandomSource,
    difficulty: Difficulty,
) -> Result<Team> {
    let candidates = data.all_character_ids(&|character| character.rarity != Rarity::UltraRare)?;
    let picks = util::sample_distinct(rng, &candidates, TEAM_SIZE)
        .ok_or_else(|| general_error("the catalog is too small to field a CPU team"))?;
    let scale = cpu_hp_scale(difficulty);
    let mut members = Vec::with_capacity(TEAM_SIZE);
    for id in picks {
        let character = data
            .character(&id)?
            .ok_or_else(|| not_found_error(&id))?;
        members.push(Combatant::new(id, &character, scale));
    }
    Team::new(members)
}
