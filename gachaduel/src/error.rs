use std::fmt::Display;

use anyhow::Error;
use gachaduel_data::Id;
use thiserror::Error;

use crate::battle::TEAM_SIZE;

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    /// Constructs a new general error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A not found error.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    /// Constructs a new not found error.
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// A player team that is not exactly the required number of distinct, owned
/// characters.
#[derive(Error, Debug)]
#[error("team must be exactly {TEAM_SIZE} distinct owned characters: {problem}")]
pub struct InvalidTeamSizeError {
    problem: String,
}

impl InvalidTeamSizeError {
    /// Constructs a new invalid team error.
    pub fn new<M>(problem: M) -> Self
    where
        M: Display,
    {
        Self {
            problem: problem.to_string(),
        }
    }
}

/// A player action submitted when it is not the player's turn.
#[derive(Error, Debug)]
#[error("it is not the player's turn")]
pub struct NotPlayerTurnError;

/// A CPU turn advanced when it is not the CPU's turn.
#[derive(Error, Debug)]
#[error("it is not the CPU's turn")]
pub struct NotCpuTurnError;

/// An action submitted to a battle that has already ended.
#[derive(Error, Debug)]
#[error("the battle is over")]
pub struct BattleOverError;

/// An action submitted while the previous action has not yet committed.
#[derive(Error, Debug)]
#[error("an action is already in progress")]
pub struct ActionInProgressError;

/// An item used with no remaining inventory.
#[derive(Error, Debug)]
#[error("no {item} in inventory")]
pub struct ItemUnavailableError {
    item: Id,
}

impl ItemUnavailableError {
    /// Constructs a new item unavailable error.
    pub fn new(item: Id) -> Self {
        Self { item }
    }
}

/// A gacha draw attempted with fewer coins than it costs.
///
/// The draw is rejected as a whole: no coins are deducted and no draw
/// occurs.
#[derive(Error, Debug)]
#[error("insufficient coins: have {coins}, need {cost}")]
pub struct InsufficientCurrencyError {
    pub cost: u64,
    pub coins: u64,
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).into()
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).into()
}

/// Helper for an [`struct@Error`] wrapping an [`InvalidTeamSizeError`].
#[track_caller]
pub fn invalid_team_size_error<M>(problem: M) -> Error
where
    M: Display,
{
    InvalidTeamSizeError::new(problem).into()
}
