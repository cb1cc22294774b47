use anyhow::Result;

use crate::{
    battle::Combatant,
    error::general_error,
};

/// The fixed number of combatants on each side of a battle.
pub const TEAM_SIZE: usize = 3;

/// An ordered team of exactly [`TEAM_SIZE`] combatants.
///
/// Order is fixed at formation and determines succession on faint: when the
/// active combatant faints, the active index advances to the next slot and
/// never revisits or skips one. The team is exhausted once the index passes
/// the last slot.
#[derive(Debug, Clone)]
pub struct Team {
    members: Vec<Combatant>,
    active: usize,
}

impl Team {
    /// Creates a new team.
    ///
    /// The first member is active.
    pub fn new(members: Vec<Combatant>) -> Result<Self> {
        if members.len() != TEAM_SIZE {
            return Err(general_error(format!(
                "a team holds exactly {TEAM_SIZE} combatants, got {}",
                members.len()
            )));
        }
        Ok(Self { members, active: 0 })
    }

    /// All members, in formation order.
    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    /// The active combatant index.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active combatant, if the team is not exhausted.
    pub fn active(&self) -> Option<&Combatant> {
        self.members.get(self.active)
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut Combatant> {
        self.members.get_mut(self.active)
    }

    /// Advances the active index to the next combatant in formation order.
    ///
    /// Returns the newly active combatant, or `None` if the team is now
    /// exhausted.
    pub(crate) fn advance(&mut self) -> Option<&Combatant> {
        self.active += 1;
        self.active()
    }

    /// Whether every combatant has fainted and no successor remains.
    pub fn exhausted(&self) -> bool {
        self.active >= self.members.len()
    }
}
