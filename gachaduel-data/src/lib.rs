extern crate alloc;

mod attribute;
mod character_data;
mod datastore;
mod difficulty;
mod id;
mod item_data;
mod rarity;

#[cfg(test)]
pub mod test_util;

pub use attribute::{
    Attribute,
    AttributeChart,
};
pub use character_data::CharacterData;
pub use datastore::{
    DataStore,
    LocalDataStore,
};
pub use difficulty::Difficulty;
pub use id::{
    Id,
    Identifiable,
};
pub use item_data::{
    ItemData,
    ItemEffect,
};
pub use rarity::Rarity;
