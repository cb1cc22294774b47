use ahash::HashMap;
use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    AttributeChart,
    CharacterData,
    Id,
    ItemData,
};

/// Collection of tables for all catalog data.
///
/// This trait can be implemented for different data sources, such as an
/// external database or disk. The battle engine only performs raw lookup of
/// resources by ID.
pub trait DataStore {
    /// Gets all character IDs, applying the given filter on the underlying
    /// data.
    ///
    /// IDs are returned in a stable order, so that seeded random sampling
    /// over them is reproducible.
    fn all_character_ids(&self, filter: &dyn Fn(&CharacterData) -> bool) -> Result<Vec<Id>>;

    /// Gets all item IDs, in a stable order.
    fn all_item_ids(&self) -> Result<Vec<Id>>;

    /// Gets the attribute advantage chart.
    fn attribute_chart(&self) -> Result<AttributeChart>;

    /// Gets a character by ID.
    fn character(&self, id: &Id) -> Result<Option<CharacterData>>;

    /// Gets an item by ID.
    fn item(&self, id: &Id) -> Result<Option<ItemData>>;
}

/// Serialized form of a full catalog.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub characters: HashMap<Id, CharacterData>,
    pub items: HashMap<Id, ItemData>,
}

/// An implementation of [`DataStore`] backed by in-memory tables,
/// deserialized from JSON.
#[derive(Debug, Default, Clone)]
pub struct LocalDataStore {
    characters: HashMap<Id, CharacterData>,
    items: HashMap<Id, ItemData>,
}

/// The default catalog, taken from the original game data.
///
/// One UR boss character (Dark attribute), nine non-UR characters across the
/// other three attributes, and three healing items.
const BUILTIN_CATALOG: &str = r#"{
    "characters": {
        "flandre": { "name": "Flandre Scarlet", "hp": 80, "attack": 120, "attribute": "Dark", "rarity": "UR" },
        "reimu": { "name": "Reimu Hakurei", "hp": 140, "attack": 28, "attribute": "Flame", "rarity": "SR" },
        "remilia": { "name": "Remilia Scarlet", "hp": 120, "attack": 45, "attribute": "Flame", "rarity": "R" },
        "mokou": { "name": "Fujiwara no Mokou", "hp": 200, "attack": 35, "attribute": "Flame", "rarity": "SR" },
        "marisa": { "name": "Marisa Kirisame", "hp": 100, "attack": 60, "attribute": "Wind", "rarity": "SR" },
        "sanae": { "name": "Sanae Kochiya", "hp": 130, "attack": 32, "attribute": "Wind", "rarity": "R" },
        "aya": { "name": "Aya Shameimaru", "hp": 110, "attack": 40, "attribute": "Wind", "rarity": "N" },
        "cirno": { "name": "Cirno", "hp": 99, "attack": 19, "attribute": "Snow", "rarity": "N" },
        "youmu": { "name": "Youmu Konpaku", "hp": 150, "attack": 42, "attribute": "Snow", "rarity": "R" },
        "sakuya": { "name": "Sakuya Izayoi", "hp": 125, "attack": 38, "attribute": "Snow", "rarity": "SR" }
    },
    "items": {
        "ohagi": { "name": "Ohagi", "effect": { "type": "heal_fixed", "amount": 40 } },
        "elixir": { "name": "Hourai Elixir", "effect": { "type": "heal_fixed", "amount": 80 } },
        "cup": { "name": "Grail", "effect": { "type": "heal_full" } }
    }
}"#;

impl LocalDataStore {
    /// Creates a new data store from catalog data.
    pub fn new(catalog: CatalogData) -> Self {
        Self {
            characters: catalog.characters,
            items: catalog.items,
        }
    }

    /// Creates a new data store from serialized catalog data.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Creates a new data store with the built-in catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }
}

impl DataStore for LocalDataStore {
    fn all_character_ids(&self, filter: &dyn Fn(&CharacterData) -> bool) -> Result<Vec<Id>> {
        let mut ids = self
            .characters
            .iter()
            .filter(|(_, data)| filter(data))
            .map(|(id, _)| id.clone())
            .collect::<Vec<_>>();
        ids.sort();
        Ok(ids)
    }

    fn all_item_ids(&self) -> Result<Vec<Id>> {
        let mut ids = self.items.keys().cloned().collect::<Vec<_>>();
        ids.sort();
        Ok(ids)
    }

    fn attribute_chart(&self) -> Result<AttributeChart> {
        Ok(AttributeChart)
    }

    fn character(&self, id: &Id) -> Result<Option<CharacterData>> {
        Ok(self.characters.get(id).cloned())
    }

    fn item(&self, id: &Id) -> Result<Option<ItemData>> {
        Ok(self.items.get(id).cloned())
    }
}
