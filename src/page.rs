//! Page assembly
//!
//! The dataset is rendered once into four fragments. Which hotel view is
//! visible is a separate flag: switching it never re-renders or re-fetches,
//! it only changes which hotel container is marked `hidden` when the
//! fragments are injected into the page template.

use serde::{Deserialize, Deserializer, Serialize, de};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use tracing::{debug, info};

use crate::GuideError;
use crate::models::Dataset;
use crate::render::{self, Region, hotels};
use crate::source::Resolution;

/// Page shell with the region containers, used when no template is configured
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/index.html");

/// Which hotel container is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HotelView {
    #[default]
    Cards,
    Compare,
}

impl HotelView {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            HotelView::Cards => HotelView::Compare,
            HotelView::Compare => HotelView::Cards,
        }
    }

    /// Whether `region` is shown under this view. Non-hotel regions always are.
    #[must_use]
    pub fn shows(self, region: Region) -> bool {
        match region {
            Region::HotelCards => self == HotelView::Cards,
            Region::HotelComparison => self == HotelView::Compare,
            Region::ItineraryTimeline | Region::AttractionsGrid => true,
        }
    }
}

impl Display for HotelView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            HotelView::Cards => f.write_str("cards"),
            HotelView::Compare => f.write_str("compare"),
        }
    }
}

impl FromStr for HotelView {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cards" => Ok(HotelView::Cards),
            "compare" => Ok(HotelView::Compare),
            other => Err(GuideError::general(format!(
                "Unknown hotel view '{other}'. Must be one of: cards, compare"
            ))),
        }
    }
}

// Same rules as the CLI flag: trimmed and case-insensitive
impl<'de> Deserialize<'de> for HotelView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// Fragments for every region, rendered once from one dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedPage {
    fragments: BTreeMap<Region, String>,
}

impl RenderedPage {
    #[must_use]
    pub fn render(dataset: &Dataset) -> Self {
        let mut fragments = BTreeMap::new();
        fragments.insert(Region::HotelCards, hotels::render_cards(&dataset.hotels));
        fragments.insert(
            Region::HotelComparison,
            hotels::render_comparison(&dataset.hotels),
        );
        fragments.insert(
            Region::ItineraryTimeline,
            render::itinerary::render(&dataset.itinerary),
        );
        fragments.insert(
            Region::AttractionsGrid,
            render::attractions::render(&dataset.attractions),
        );
        Self { fragments }
    }

    #[must_use]
    pub fn fragment(&self, region: Region) -> &str {
        self.fragments.get(&region).map_or("", String::as_str)
    }

    /// Inject every fragment into `template`.
    ///
    /// Each fragment replaces the content of the element whose `id` matches
    /// its region. The hotel container selected by `view` loses any `hidden`
    /// attribute or `hidden` class; the other one gets the `hidden`
    /// attribute. Regions absent from the template are skipped.
    #[must_use]
    pub fn compose(&self, template: &str, view: HotelView) -> String {
        let mut html = template.to_string();
        for region in Region::ALL {
            let visible = matches!(region, Region::HotelCards | Region::HotelComparison)
                .then(|| view.shows(region));
            if !inject(&mut html, region, self.fragment(region), visible) {
                debug!("Container #{} not found in template, skipping", region);
            }
        }
        html
    }
}

/// Replace the content of the element carrying `id="<region>"` with
/// `fragment`. `visible` rewrites the element's hidden state when set.
fn inject(html: &mut String, region: Region, fragment: &str, visible: Option<bool>) -> bool {
    let marker = format!(r#"id="{}""#, region.container_id());
    let Some(id_at) = html
        .match_indices(&marker)
        .map(|(at, _)| at)
        .find(|&at| html[..at].ends_with(|c: char| c.is_ascii_whitespace()))
    else {
        return false;
    };
    let Some(start) = html[..id_at].rfind('<') else {
        return false;
    };
    let Some(open_end) = tag_end(html, start) else {
        return false;
    };

    let tag = OpenTag::parse(&html[start..open_end]);
    let name = tag.name.to_string();
    let self_closing = tag.self_closing;
    let opening = match visible {
        Some(visible) => tag.with_visibility(visible).to_string(),
        None => html[start..open_end].to_string(),
    };
    let (end, replacement) = if self_closing {
        // nothing can be nested in `<div ... />`
        (open_end, opening)
    } else {
        let content_end = closing_tag(html, &name, open_end).unwrap_or(open_end);
        (content_end, format!("{opening}{fragment}"))
    };

    html.replace_range(start..end, &replacement);
    true
}

/// Offset just past the `>` closing the tag that starts at `start`. A `>`
/// inside a quoted attribute value does not end the tag.
fn tag_end(html: &str, start: usize) -> Option<usize> {
    let mut quote = None;
    for (offset, c) in html[start..].char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '>' => return Some(start + offset + 1),
            None => {}
        }
    }
    None
}

fn tag_name(tag: &str) -> &str {
    let end = tag
        .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
        .unwrap_or(tag.len());
    &tag[..end]
}

/// Offset of the `</name>` matching an element opened just before `from`.
fn closing_tag(html: &str, name: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut at = from;
    while let Some(offset) = html[at..].find('<') {
        let start = at + offset;
        let end = tag_end(html, start)?;
        let tag = &html[start..end];
        if let Some(rest) = tag.strip_prefix("</") {
            if tag_name(rest).eq_ignore_ascii_case(name) {
                depth -= 1;
                if depth == 0 {
                    return Some(start);
                }
            }
        } else if tag_name(&tag[1..]).eq_ignore_ascii_case(name) && !tag.ends_with("/>") {
            depth += 1;
        }
        at = end;
    }
    None
}

/// An opening tag split into its name and attributes
#[derive(Debug, Clone, PartialEq)]
struct OpenTag<'a> {
    name: &'a str,
    attrs: Vec<(&'a str, Option<String>)>,
    self_closing: bool,
}

impl<'a> OpenTag<'a> {
    fn parse(tag: &'a str) -> Self {
        let inner = tag.trim_start_matches('<').trim_end_matches('>').trim_end();
        let (inner, self_closing) = match inner.strip_suffix('/') {
            Some(inner) => (inner, true),
            None => (inner, false),
        };
        let name = tag_name(inner);

        let mut attrs = Vec::new();
        let mut rest = inner[name.len()..].trim_start();
        while !rest.is_empty() {
            let name_end = rest
                .find(|c: char| c.is_ascii_whitespace() || c == '=')
                .unwrap_or(rest.len());
            let attr = &rest[..name_end];
            rest = rest[name_end..].trim_start();

            let Some(after_eq) = rest.strip_prefix('=') else {
                attrs.push((attr, None));
                continue;
            };
            let after_eq = after_eq.trim_start();
            let (value, remaining) = match after_eq.chars().next() {
                Some(q @ ('"' | '\'')) => {
                    let body = &after_eq[1..];
                    let close = body.find(q).unwrap_or(body.len());
                    (&body[..close], body.get(close + 1..).unwrap_or(""))
                }
                _ => {
                    let end = after_eq
                        .find(|c: char| c.is_ascii_whitespace())
                        .unwrap_or(after_eq.len());
                    (&after_eq[..end], &after_eq[end..])
                }
            };
            attrs.push((attr, Some(value.to_string())));
            rest = remaining.trim_start();
        }

        Self {
            name,
            attrs,
            self_closing,
        }
    }

    fn with_visibility(mut self, visible: bool) -> Self {
        if visible {
            self.attrs
                .retain(|(name, _)| !name.eq_ignore_ascii_case("hidden"));
            for (name, value) in &mut self.attrs {
                if !name.eq_ignore_ascii_case("class") {
                    continue;
                }
                if let Some(classes) = value {
                    *classes = classes
                        .split_ascii_whitespace()
                        .filter(|class| *class != "hidden")
                        .collect::<Vec<_>>()
                        .join(" ");
                }
            }
            self.attrs.retain(|(name, value)| {
                !(name.eq_ignore_ascii_case("class") && value.as_deref() == Some(""))
            });
        } else if !self
            .attrs
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("hidden"))
        {
            self.attrs.push(("hidden", None));
        }
        self
    }
}

impl Display for OpenTag<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attrs {
            match value {
                Some(value) if value.contains('"') => write!(f, " {name}='{value}'")?,
                Some(value) => write!(f, " {name}=\"{value}\"")?,
                None => write!(f, " {name}")?,
            }
        }
        if self.self_closing {
            f.write_str(" /")?;
        }
        f.write_str(">")
    }
}

/// Page state owned by the top-level controller: the resolved dataset, its
/// rendered fragments and the active hotel view.
#[derive(Debug, Clone)]
pub struct PageContext {
    resolution: Resolution,
    page: RenderedPage,
    hotel_view: HotelView,
}

impl PageContext {
    /// Render all regions from the resolved dataset, in sequence, once.
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        let page = RenderedPage::render(&resolution.dataset);
        info!(
            origin = resolution.origin.label(),
            "Rendered {} hotels, {} days, {} attractions",
            resolution.dataset.hotels.len(),
            resolution.dataset.itinerary.len(),
            resolution.dataset.attractions.len()
        );
        Self {
            resolution,
            page,
            hotel_view: HotelView::default(),
        }
    }

    #[must_use]
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    #[must_use]
    pub fn page(&self) -> &RenderedPage {
        &self.page
    }

    #[must_use]
    pub fn hotel_view(&self) -> HotelView {
        self.hotel_view
    }

    pub fn set_hotel_view(&mut self, view: HotelView) {
        self.hotel_view = view;
    }

    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        self.hotel_view.shows(region)
    }

    /// Compose the page with the current hotel view
    #[must_use]
    pub fn compose(&self, template: &str) -> String {
        self.page.compose(template, self.hotel_view)
    }
}
