//! Markup renderers
//!
//! Each renderer is a pure projection from one slice of the dataset to an
//! HTML fragment for one page region. Renderers never read each other's
//! output; the class names match the site's stylesheet.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::GuideError;

pub mod attractions;
pub mod hotels;
pub mod itinerary;

/// Page containers that receive a rendered fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    HotelCards,
    HotelComparison,
    ItineraryTimeline,
    AttractionsGrid,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::HotelCards,
        Region::HotelComparison,
        Region::ItineraryTimeline,
        Region::AttractionsGrid,
    ];

    /// `id` of the container element in the page template
    #[must_use]
    pub fn container_id(self) -> &'static str {
        match self {
            Region::HotelCards => "hotels-cards",
            Region::HotelComparison => "hotels-comparison",
            Region::ItineraryTimeline => "itinerary-timeline",
            Region::AttractionsGrid => "attractions-grid",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.container_id())
    }
}

impl FromStr for Region {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.container_id() == s)
            .ok_or_else(|| GuideError::general(format!("Unknown page region '{s}'")))
    }
}

/// HTML-escapes text and attribute values on display
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut last = 0;
        for (i, c) in self.0.char_indices() {
            let entity = match c {
                '&' => "&amp;",
                '<' => "&lt;",
                '>' => "&gt;",
                '"' => "&quot;",
                '\'' => "&#39;",
                _ => continue,
            };
            f.write_str(&self.0[last..i])?;
            f.write_str(entity)?;
            last = i + c.len_utf8();
        }
        f.write_str(&self.0[last..])
    }
}

/// One `<span>` per label, order preserved
pub(crate) fn write_tags(f: &mut Formatter<'_>, class: &str, labels: &[String]) -> fmt::Result {
    for label in labels {
        write!(f, r#"<span class="{class}">{}</span>"#, Escaped(label))?;
    }
    Ok(())
}

/// Placeholder image shown by the browser when the real image fails to load
#[must_use]
pub fn placeholder_image_url(size: &str, color: &str, text: &str) -> String {
    format!(
        "https://via.placeholder.com/{size}/{color}/ffffff?text={}",
        urlencoding::encode(text)
    )
}
