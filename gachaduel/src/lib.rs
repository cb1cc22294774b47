//! Turn-based duel engine with a gacha acquisition loop.
//!
//! The engine is synchronous and owns no global state: the caller holds a
//! [`Profile`] (coins, inventory, unlocked characters) and at most one live
//! [`battle::BattleSession`]. All randomness flows through a seedable
//! source, so battles and gacha draws can be replayed deterministically.

extern crate alloc;

pub mod battle;
pub mod error;
pub mod log;
pub mod profile;
pub mod rewards;
pub mod teams;

pub use profile::Profile;
