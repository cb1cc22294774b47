use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The difficulty level of a battle, fixed at session start.
///
/// Difficulty scales CPU hit points at team assembly, CPU attack damage, and
/// the coin reward for victory. It never affects player-controlled attacks.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Difficulty {
    #[string = "Easy"]
    Easy,
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Hard"]
    #[alias = "Lunatic"]
    Hard,
}
