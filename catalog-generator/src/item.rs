use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// The closed set of catalog categories, in round-robin order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Furniture,
    Accessories,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    Software,
    Networking,
    Storage,
    Audio,
    Video,
    Security,
    Cleaning,
    Kitchen,
    Stationery,
    #[serde(rename = "Health & Safety")]
    HealthAndSafety,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::Electronics,
        Category::Furniture,
        Category::Accessories,
        Category::OfficeSupplies,
        Category::Software,
        Category::Networking,
        Category::Storage,
        Category::Audio,
        Category::Video,
        Category::Security,
        Category::Cleaning,
        Category::Kitchen,
        Category::Stationery,
        Category::HealthAndSafety,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Accessories => "Accessories",
            Category::OfficeSupplies => "Office Supplies",
            Category::Software => "Software",
            Category::Networking => "Networking",
            Category::Storage => "Storage",
            Category::Audio => "Audio",
            Category::Video => "Video",
            Category::Security => "Security",
            Category::Cleaning => "Cleaning",
            Category::Kitchen => "Kitchen",
            Category::Stationery => "Stationery",
            Category::HealthAndSafety => "Health & Safety",
        }
    }

    /// Category assigned to the generation step at `index`.
    pub fn round_robin(index: usize) -> Category {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// One catalog entry. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub quantity: u32,
    pub price: f64,
}

impl Item {
    /// The basic shape the downstream inventory model requires of a record.
    pub fn check_shape(&self) -> Result<()> {
        let reason = if self.name.trim().is_empty() {
            "name is empty"
        } else if self.name.trim() != self.name {
            "name has surrounding whitespace"
        } else if self.description.is_empty() {
            "description is empty"
        } else if !self.price.is_finite() || self.price < 0.0 {
            "price must be a non-negative number"
        } else {
            return Ok(());
        };
        Err(CatalogError::InvalidItem {
            name: self.name.clone(),
            reason,
        })
    }
}
