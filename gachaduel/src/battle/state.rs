use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The actor that owns the current turn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum TurnOwner {
    #[string = "Player"]
    Player,
    #[string = "Cpu"]
    #[alias = "CPU"]
    Cpu,
}

/// The outcome of a finished battle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum BattleOutcome {
    #[string = "Victory"]
    Victory,
    #[string = "Defeat"]
    Defeat,
}

/// The state of the battle turn machine.
///
/// A battle starts in `PlayerTurn`, alternates between the two turn states,
/// and ends in the terminal `Over` state, which accepts no further actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleState {
    PlayerTurn,
    CpuTurn,
    Over(BattleOutcome),
}

impl BattleState {
    /// The owner of the current turn, if the battle is still running.
    pub fn turn_owner(&self) -> Option<TurnOwner> {
        match self {
            Self::PlayerTurn => Some(TurnOwner::Player),
            Self::CpuTurn => Some(TurnOwner::Cpu),
            Self::Over(_) => None,
        }
    }

    /// The outcome, if the battle is over.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self {
            Self::Over(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
