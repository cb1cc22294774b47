use gachaduel_data::Id;
use serde::{
    Deserialize,
    Serialize,
};

/// An action the player can take on their turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Attack the active CPU combatant.
    Attack,
    /// Guard against the CPU's next attack, halving its damage.
    Guard,
    /// Use a consumable item on the active player combatant.
    UseItem { item: Id },
}

#[cfg(test)]
mod action_test {
    use gachaduel_data::Id;
    use pretty_assertions::assert_eq;

    use crate::battle::PlayerAction;

    #[test]
    fn deserializes_from_json() {
        assert_eq!(
            serde_json::from_str::<PlayerAction>(r#"{ "type": "attack" }"#).unwrap(),
            PlayerAction::Attack,
        );
        assert_eq!(
            serde_json::from_str::<PlayerAction>(r#"{ "type": "use_item", "item": "ohagi" }"#)
                .unwrap(),
            PlayerAction::UseItem {
                item: Id::from("ohagi"),
            },
        );
    }
}
