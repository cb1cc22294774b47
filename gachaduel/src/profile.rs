use ahash::{
    HashMap,
    HashMapExt,
    HashSet,
    HashSetExt,
};
use gachaduel_data::Id;
use serde::{
    Deserialize,
    Serialize,
};

/// The player's process-wide state: coins, item inventory, and the set of
/// unlocked characters.
///
/// A profile outlives individual battles. It is owned by the caller and
/// passed into each engine operation that reads or mutates it; the engine
/// keeps no global state of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    coins: u64,
    inventory: HashMap<Id, u64>,
    owned: HashSet<Id>,
}

impl Profile {
    /// Creates an empty profile with the given coin balance.
    pub fn new(coins: u64) -> Self {
        Self {
            coins,
            inventory: HashMap::new(),
            owned: HashSet::new(),
        }
    }

    /// The starting profile of a new player: 1000 coins, three ohagi, and
    /// the three starter characters.
    pub fn starting() -> Self {
        let mut profile = Self::new(1000);
        for id in ["reimu", "marisa", "cirno"] {
            profile.add_character(Id::from(id));
        }
        profile.add_item(Id::from("ohagi"), 3);
        profile
    }

    /// The current coin balance.
    pub fn coins(&self) -> u64 {
        self.coins
    }

    /// Credits coins to the balance.
    pub fn credit_coins(&mut self, amount: u64) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Debits coins from the balance.
    ///
    /// Fails without mutating if the balance is insufficient.
    pub fn debit_coins(&mut self, amount: u64) -> bool {
        match self.coins.checked_sub(amount) {
            Some(remaining) => {
                self.coins = remaining;
                true
            }
            None => false,
        }
    }

    /// Whether the player owns the given character.
    pub fn owns_character(&self, id: &Id) -> bool {
        self.owned.contains(id)
    }

    /// Unlocks a character.
    ///
    /// Returns false if the character was already owned. Duplicates are a
    /// no-op, not a refund.
    pub fn add_character(&mut self, id: Id) -> bool {
        self.owned.insert(id)
    }

    /// All owned character IDs.
    pub fn owned_characters(&self) -> impl Iterator<Item = &Id> {
        self.owned.iter()
    }

    /// The inventory count for the given item.
    pub fn item_count(&self, id: &Id) -> u64 {
        self.inventory.get(id).copied().unwrap_or(0)
    }

    /// Adds items to the inventory. Duplicates stack.
    pub fn add_item(&mut self, id: Id, count: u64) {
        *self.inventory.entry(id).or_insert(0) += count;
    }

    /// Consumes one of the given item.
    ///
    /// Returns false without mutating if the inventory count is zero.
    pub fn consume_item(&mut self, id: &Id) -> bool {
        match self.inventory.get_mut(id) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}
