use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The acquisition rarity tier of a character.
///
/// Rarity has no mechanical effect in battle, except that UR marks the
/// singleton boss character that only the player can field.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Rarity {
    #[string = "N"]
    #[default]
    Normal,
    #[string = "R"]
    Rare,
    #[string = "SR"]
    SuperRare,
    #[string = "UR"]
    UltraRare,
}
