use anyhow::Result;
use gachaduel_data::{
    DataStore,
    Difficulty,
    Id,
};
use gachaduel_prng::LinearCongruentialSource;

use crate::{
    Profile,
    battle::BattleSession,
    teams,
};

/// Object for building a new battle session.
///
/// The builder validates and assembles the player's team, samples the CPU
/// team from the catalog, and fixes the difficulty and random seed for the
/// session's lifetime.
pub struct BattleBuilder {
    seed: Option<u64>,
    difficulty: Difficulty,
    team: Vec<Id>,
}

impl BattleBuilder {
    /// Constructs a new battle builder.
    pub fn new() -> Self {
        Self {
            seed: None,
            difficulty: Difficulty::default(),
            team: Vec::new(),
        }
    }

    /// Sets the initial seed for random number generation.
    ///
    /// This can be used to effectively replay a battle.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the difficulty of the battle.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the player's team, as an ordered list of character IDs.
    pub fn with_team<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        self.team = ids.into_iter().map(|id| id.into()).collect();
        self
    }

    /// Builds the battle session.
    ///
    /// Fails, mutating nothing, if the player's team is not exactly
    /// [`TEAM_SIZE`][`crate::battle::TEAM_SIZE`] distinct owned characters.
    pub fn build(self, data: &dyn DataStore, profile: &Profile) -> Result<BattleSession> {
        let player_team = teams::assemble_player_team(data, profile, &self.team)?;
        let mut prng = LinearCongruentialSource::new(self.seed);
        let cpu_team = teams::sample_cpu_team(data, &mut prng, self.difficulty)?;
        BattleSession::new(
            self.difficulty,
            data.attribute_chart()?,
            player_team,
            cpu_team,
            Box::new(prng),
        )
    }
}

impl Default for BattleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
