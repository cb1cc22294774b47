use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Attribute,
    Rarity,
};

/// Data about a character template.
///
/// Templates are immutable reference data. A battle derives per-battle
/// combatants from them and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterData {
    /// Display name of the character.
    pub name: String,
    /// Base hit points.
    pub hp: u64,
    /// Base attack.
    pub attack: u64,
    /// Elemental attribute.
    pub attribute: Attribute,
    /// Acquisition rarity tier.
    pub rarity: Rarity,
}

#[cfg(test)]
mod character_data_test {
    use pretty_assertions::assert_eq;

    use crate::{
        Attribute,
        CharacterData,
        Rarity,
    };

    #[test]
    fn deserializes_from_json() {
        let data = serde_json::from_str::<CharacterData>(
            r#"{
                "name": "Cirno",
                "hp": 99,
                "attack": 19,
                "attribute": "Snow",
                "rarity": "N"
            }"#,
        )
        .unwrap();
        assert_eq!(
            data,
            CharacterData {
                name: "Cirno".to_owned(),
                hp: 99,
                attack: 19,
                attribute: Attribute::Snow,
                rarity: Rarity::Normal,
            }
        );
    }
}
