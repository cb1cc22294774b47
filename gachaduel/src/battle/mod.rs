mod action;
mod battle_builder;
mod combatant;
mod core_battle;
mod state;
mod team;

pub use action::PlayerAction;
pub use battle_builder::BattleBuilder;
pub use combatant::Combatant;
pub use core_battle::BattleSession;
pub use state::{
    BattleOutcome,
    BattleState,
    TurnOwner,
};
pub use team::{
    TEAM_SIZE,
    Team,
};
