//! Travel dataset records
//!
//! One `Dataset` snapshot feeds every page region. Records are read-only after
//! load; the whole dataset is replaced, never merged.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{GuideError, Result};

/// Root record of the travel data file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    /// Hotels in display order; the first two feed the comparison view
    #[serde(deserialize_with = "null_as_empty")]
    pub hotels: Vec<Hotel>,
    /// Day plans in chronological order
    #[serde(deserialize_with = "null_as_empty")]
    pub itinerary: Vec<DayPlan>,
    /// Attractions in display order
    #[serde(deserialize_with = "null_as_empty")]
    pub attractions: Vec<Attraction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub highlights: Vec<String>,
    pub features: HotelFeatures,
    pub price: String,
    pub suitable: String,
    pub image: String,
}

/// Fixed set of feature categories keyed by the labels used in data files.
///
/// The amenity categories are lists, the rest are single strings. A value of
/// the wrong shape for its key fails deserialisation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelFeatures {
    #[serde(rename = "核心特色", alias = "core_feature")]
    pub core_feature: String,
    #[serde(rename = "房型", alias = "room_types")]
    pub room_types: String,
    #[serde(rename = "餐饮", alias = "dining")]
    pub dining: String,
    #[serde(
        rename = "免费设施",
        alias = "free_amenities",
        deserialize_with = "null_as_empty"
    )]
    pub free_amenities: Vec<String>,
    #[serde(
        rename = "收费设施",
        alias = "paid_amenities",
        deserialize_with = "null_as_empty"
    )]
    pub paid_amenities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPlan {
    /// Display ordinal, starting at 1
    pub day: u32,
    pub date: String,
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    pub time: String,
    pub activity: String,
    pub location: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attraction {
    pub name: String,
    /// Scenic-area grade, e.g. "5A"
    pub level: String,
    pub description: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub highlights: Vec<String>,
    pub price: String,
    pub duration: String,
    pub image: String,
}

impl Dataset {
    /// Parse a dataset from the JSON travel data document
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| GuideError::parse(format!("Failed to parse travel data: {e}")))
    }

    /// Serialize back to pretty JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GuideError::general(format!("Failed to serialize travel data: {e}")))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty() && self.itinerary.is_empty() && self.attractions.is_empty()
    }

    /// Total number of activities across all days
    #[must_use]
    pub fn activity_count(&self) -> usize {
        self.itinerary.iter().map(|day| day.activities.len()).sum()
    }
}

// `null` in hand-written data means "absent", same as a missing key
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
