//! Heyuan travel guide renderer
//!
//! Loads the travel dataset (hotels, a day-by-day itinerary and attractions),
//! falls back to a built-in dataset when it cannot be retrieved, and renders
//! the markup fragments for each page region.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod page;
pub mod render;
pub mod source;
pub mod web;

// Re-export core types for public API
pub use config::GuideConfig;
pub use error::GuideError;
pub use models::{Activity, Attraction, Dataset, DayPlan, Hotel, HotelFeatures, fallback_dataset};
pub use page::{HotelView, PageContext, RenderedPage};
pub use render::Region;
pub use source::{DatasetSource, FileSource, HttpSource, Origin, Resolution, resolve, source_for};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GuideError>;
