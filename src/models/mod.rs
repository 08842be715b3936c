//! Data models for the travel guide
//!
//! - `dataset` - hotels, itinerary and attractions as read from the data file
//! - `fallback` - the built-in dataset substituted when retrieval fails

pub mod dataset;
pub mod fallback;

pub use dataset::{Activity, Attraction, Dataset, DayPlan, Hotel, HotelFeatures};
pub use fallback::fallback_dataset;
