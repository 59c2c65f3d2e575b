//! Menu items and categories.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{MenuItemId, Price};

/// Error returned when parsing an unrecognized category slug.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown menu category: {0}")]
pub struct UnknownCategory(pub String);

/// Menu section a dish belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Starters,
    Mains,
    Desserts,
    Drinks,
}

impl Category {
    /// All categories in menu display order.
    pub const ALL: [Self; 4] = [Self::Starters, Self::Mains, Self::Desserts, Self::Drinks];

    /// URL-safe identifier for the category.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Starters => "starters",
            Self::Mains => "mains",
            Self::Desserts => "desserts",
            Self::Drinks => "drinks",
        }
    }

    /// Human-readable tab title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Starters => "Starters",
            Self::Mains => "Mains",
            Self::Desserts => "Desserts",
            Self::Drinks => "Drinks",
        }
    }

    /// Emoji shown on the category tab.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Starters => "\u{1f957}",
            Self::Mains => "\u{1f356}",
            Self::Desserts => "\u{1f370}",
            Self::Drinks => "\u{1f379}",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starters" => Ok(Self::Starters),
            "mains" => Ok(Self::Mains),
            "desserts" => Ok(Self::Desserts),
            "drinks" => Ok(Self::Drinks),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}

/// Nutrition breakdown shown on the item detail view.
///
/// Values are pre-formatted display strings ("320", "12g") straight
/// from the catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// A single orderable dish in the catalog.
///
/// Read-only once constructed; the cart snapshots `name` and `price`
/// at the moment an item is added. `model_url` marks that a 3D model
/// exists for the AR preview stub - its presence is purely advisory
/// and carries no behavior beyond showing the AR affordance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub spicy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionInfo>,
}
