//! Building categories and the merchant set used by the faction override.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// What a building lot is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuildingCategory {
    /// Potion and ingredient merchant.
    Alchemist,
    /// Residence offered for sale.
    HouseForSale,
    /// Armor merchant.
    Armorer,
    /// Bank; handles letters of credit and loans.
    Bank,
    /// Unused town slot.
    Town4,
    /// Book merchant.
    Bookseller,
    /// Clothing merchant.
    ClothingStore,
    /// Furniture merchant.
    FurnitureStore,
    /// Gem and jewelry merchant.
    GemStore,
    /// General goods merchant.
    GeneralStore,
    /// Public library.
    Library,
    /// Guild headquarters.
    GuildHall,
    /// Pawnbroker.
    PawnShop,
    /// Weapon merchant.
    WeaponSmith,
    /// Temple of a divine order.
    Temple,
    /// Tavern with rooms to rent.
    Tavern,
    /// Seat of the local ruler.
    Palace,
    /// Residence, variant 1.
    House1,
    /// Residence, variant 2.
    House2,
    /// Residence, variant 3.
    House3,
    /// Residence, variant 4.
    House4,
    /// Residence, variant 5.
    House5,
    /// Residence, variant 6.
    House6,
    /// Ship at dock.
    Ship,
    /// Quest-specific building, slot 1.
    Special1,
    /// Quest-specific building, slot 2.
    Special2,
    /// Quest-specific building, slot 3.
    Special3,
    /// Quest-specific building, slot 4.
    Special4,
}

impl fmt::Display for BuildingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Building categories whose faction id is forced when flattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerchantCategories(BTreeSet<BuildingCategory>);

impl MerchantCategories {
    /// A set with no categories; the override never fires.
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Whether `category` is treated as a merchant.
    pub fn contains(&self, category: BuildingCategory) -> bool {
        self.0.contains(&category)
    }

    /// Add a category to the set.
    pub fn with(mut self, category: BuildingCategory) -> Self {
        self.0.insert(category);
        self
    }

    /// Remove a category from the set.
    pub fn without(mut self, category: BuildingCategory) -> Self {
        self.0.remove(&category);
        self
    }

    /// Iterate the categories in order.
    pub fn iter(&self) -> impl Iterator<Item = BuildingCategory> + '_ {
        self.0.iter().copied()
    }
}

impl Default for MerchantCategories {
    fn default() -> Self {
        use BuildingCategory::*;
        Self(BTreeSet::from([
            Bank,
            Armorer,
            GeneralStore,
            Bookseller,
            ClothingStore,
            GemStore,
            Library,
            PawnShop,
            Tavern,
            WeaponSmith,
            Alchemist,
        ]))
    }
}

impl FromIterator<BuildingCategory> for MerchantCategories {
    fn from_iter<I: IntoIterator<Item = BuildingCategory>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
