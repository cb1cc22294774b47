use serde::{
    Deserialize,
    Serialize,
};

/// The effect an item applies when used on a combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemEffect {
    /// Restores a fixed amount of hit points, clamped to max HP.
    HealFixed { amount: u64 },
    /// Restores hit points all the way to max HP.
    HealFull,
}

/// Data about a consumable item.
///
/// Items are reference data. The player's inventory maps item IDs to counts;
/// using an item consumes one count and applies the effect to the active
/// player combatant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    /// Display name of the item.
    pub name: String,
    /// What the item does when used.
    pub effect: ItemEffect,
}

#[cfg(test)]
mod item_data_test {
    use pretty_assertions::assert_eq;

    use crate::{
        ItemData,
        ItemEffect,
    };

    #[test]
    fn deserializes_fixed_heal() {
        let data = serde_json::from_str::<ItemData>(
            r#"{
                "name": "Ohagi",
                "effect": { "type": "heal_fixed", "amount": 40 }
            }"#,
        )
        .unwrap();
        assert_eq!(
            data,
            ItemData {
                name: "Ohagi".to_owned(),
                effect: ItemEffect::HealFixed { amount: 40 },
            }
        );
    }

    #[test]
    fn deserializes_full_heal() {
        let data = serde_json::from_str::<ItemData>(
            r#"{
                "name": "Grail",
                "effect": { "type": "heal_full" }
            }"#,
        )
        .unwrap();
        assert_eq!(data.effect, ItemEffect::HealFull);
    }
}
