//! Wardrobe catalog types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{empty_if_null, ItemId};
use crate::errors::SharedError;

/// Garment category assigned by the tagging pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    Accessory,
}

/// Whether a category takes part in the no-repeat rule of a planning horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryClass {
    /// top, bottom, dress
    Restricted,
    /// outerwear, shoes, accessory
    Flexible,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Top,
        Category::Bottom,
        Category::Dress,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessory,
    ];

    pub fn class(self) -> CategoryClass {
        match self {
            Category::Top | Category::Bottom | Category::Dress => CategoryClass::Restricted,
            Category::Outerwear | Category::Shoes | Category::Accessory => CategoryClass::Flexible,
        }
    }

    pub fn is_restricted(self) -> bool {
        self.class() == CategoryClass::Restricted
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Dress => "dress",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessory => "accessory",
        };
        f.write_str(label)
    }
}

impl FromStr for Category {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Category::Top),
            "bottom" => Ok(Category::Bottom),
            "dress" => Ok(Category::Dress),
            "outerwear" => Ok(Category::Outerwear),
            "shoes" => Ok(Category::Shoes),
            "accessory" => Ok(Category::Accessory),
            _ => Err(SharedError::InvalidCategory { input: s.to_string() }),
        }
    }
}

/// Descriptive tags of an item; absent and `null` lists both read as empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTags {
    #[serde(default, deserialize_with = "empty_if_null")]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub seasons: Vec<String>,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub styles: Vec<String>,
}

/// A tagged garment. Immutable to the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeItem {
    pub id: ItemId,
    pub category: Category,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub tags: ItemTags,
}

impl WardrobeItem {
    pub fn new(id: impl Into<ItemId>, category: Category) -> Self {
        Self {
            id: id.into(),
            category,
            name: None,
            image_url: None,
            tags: ItemTags::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tags(mut self, tags: ItemTags) -> Self {
        self.tags = tags;
        self
    }
}

/// Display projection returned when resolving item ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    pub id: ItemId,
    pub category: Category,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub colors: Vec<String>,
}

impl From<&WardrobeItem> for DisplayItem {
    fn from(item: &WardrobeItem) -> Self {
        Self {
            id: item.id.clone(),
            category: item.category,
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            colors: item.tags.colors.clone(),
        }
    }
}
