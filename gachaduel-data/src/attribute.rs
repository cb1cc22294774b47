use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental attribute of a character, which determines damage multipliers
/// between attackers and defenders.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Attribute {
    #[string = "Snow"]
    Snow,
    #[string = "Flame"]
    Flame,
    #[string = "Wind"]
    Wind,
    #[string = "Dark"]
    Dark,
}

/// The attribute advantage chart.
///
/// Snow, Wind, and Flame form a cycle: each is strong against exactly one of
/// the others and weak against the remaining one (Snow > Wind > Flame > Snow).
/// Dark sits outside the chart entirely; it is neither strong nor weak against
/// anything, and nothing is strong or weak against it.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeChart;

impl AttributeChart {
    /// The attribute the given attribute is strong against, if any.
    pub fn strong_against(&self, attribute: Attribute) -> Option<Attribute> {
        match attribute {
            Attribute::Snow => Some(Attribute::Wind),
            Attribute::Wind => Some(Attribute::Flame),
            Attribute::Flame => Some(Attribute::Snow),
            Attribute::Dark => None,
        }
    }

    /// The attribute the given attribute is weak against, if any.
    pub fn weak_against(&self, attribute: Attribute) -> Option<Attribute> {
        match attribute {
            Attribute::Snow => Some(Attribute::Flame),
            Attribute::Wind => Some(Attribute::Snow),
            Attribute::Flame => Some(Attribute::Wind),
            Attribute::Dark => None,
        }
    }
}
