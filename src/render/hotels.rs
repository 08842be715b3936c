//! Hotel cards and the two-hotel comparison table

use std::fmt::{self, Display, Formatter};
use tracing::{debug, warn};

use super::{Escaped, placeholder_image_url, write_tags};
use crate::models::Hotel;

/// One card per hotel, in input order
pub struct HotelCards<'a>(pub &'a [Hotel]);

/// Side-by-side table of two hotels
pub struct HotelComparison<'a> {
    pub left: &'a Hotel,
    pub right: &'a Hotel,
}

/// Render the card view. Empty input yields an empty fragment.
#[must_use]
pub fn render_cards(hotels: &[Hotel]) -> String {
    if hotels.is_empty() {
        warn!("No hotels data available");
        return String::new();
    }
    HotelCards(hotels).to_string()
}

/// Render the comparison view from the first two hotels.
///
/// Hotels beyond the second are never compared; fewer than two hotels
/// yields an empty fragment.
#[must_use]
pub fn render_comparison(hotels: &[Hotel]) -> String {
    match hotels {
        [left, right, ..] => HotelComparison { left, right }.to_string(),
        _ => {
            debug!(
                "Comparison needs at least two hotels, got {}",
                hotels.len()
            );
            String::new()
        }
    }
}

impl Display for HotelCards<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for hotel in self.0 {
            write_card(f, hotel)?;
        }
        Ok(())
    }
}

fn write_card(f: &mut Formatter<'_>, hotel: &Hotel) -> fmt::Result {
    let name = Escaped(&hotel.name);
    let fallback = placeholder_image_url("800x400", "0ea5e9", &hotel.name);

    writeln!(
        f,
        r#"<div class="hotel-card bg-white rounded-xl shadow-lg overflow-hidden">"#
    )?;
    writeln!(f, r#"<div class="relative h-64">"#)?;
    writeln!(
        f,
        r#"<img src="{}" alt="{name}" class="w-full h-full object-cover" onerror="this.src='{}'">"#,
        Escaped(&hotel.image),
        Escaped(&fallback)
    )?;
    writeln!(
        f,
        r#"<div class="absolute top-4 right-4"><span class="bg-white/90 backdrop-blur-sm px-3 py-1 rounded-full text-sm font-medium text-gray-800">{}</span></div>"#,
        Escaped(&hotel.kind)
    )?;
    writeln!(f, "</div>")?;
    writeln!(f, r#"<div class="p-6">"#)?;
    writeln!(
        f,
        r#"<h3 class="text-xl font-bold text-gray-800 mb-2">{name}</h3>"#
    )?;
    write!(f, r#"<div class="flex flex-wrap gap-2 mb-4">"#)?;
    write_tags(f, "feature-tag", &hotel.highlights)?;
    writeln!(f, "</div>")?;
    writeln!(
        f,
        r#"<p class="text-gray-600 mb-4">{}</p>"#,
        Escaped(&hotel.features.core_feature)
    )?;
    writeln!(f, r#"<div class="space-y-2 text-sm">"#)?;
    write_labelled_line(f, "fa-bed", "房型", &hotel.features.room_types)?;
    write_labelled_line(f, "fa-utensils", "餐饮", &hotel.features.dining)?;
    write_labelled_line(f, "fa-tag", "价格", &hotel.price)?;
    writeln!(f, "</div>")?;
    writeln!(
        f,
        r#"<div class="mt-4 pt-4 border-t border-gray-100"><p class="text-sm text-gray-600"><i class="fas fa-users text-lake-blue mr-1"></i><strong>适合:</strong> {}</p></div>"#,
        Escaped(&hotel.suitable)
    )?;
    writeln!(f, "</div>")?;
    writeln!(f, "</div>")
}

fn write_labelled_line(f: &mut Formatter<'_>, icon: &str, label: &str, value: &str) -> fmt::Result {
    writeln!(
        f,
        r#"<div class="flex items-start"><i class="fas {icon} text-lake-blue mr-2 mt-0.5"></i><span><strong>{label}:</strong> {}</span></div>"#,
        Escaped(value)
    )
}

impl Display for HotelComparison<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (left, right) = (self.left, self.right);

        writeln!(
            f,
            r#"<div class="bg-white rounded-xl shadow-lg overflow-hidden">"#
        )?;
        writeln!(f, r#"<div class="comparison-table w-full">"#)?;
        writeln!(f, r#"<table class="w-full">"#)?;
        writeln!(
            f,
            r#"<thead><tr><th class="w-1/3">对比维度</th><th class="w-1/3">{}</th><th class="w-1/3">{}</th></tr></thead>"#,
            Escaped(&left.name),
            Escaped(&right.name)
        )?;
        writeln!(f, "<tbody>")?;
        write_text_row(f, "酒店类型", &left.kind, &right.kind)?;
        write_text_row(
            f,
            "核心特色",
            &left.features.core_feature,
            &right.features.core_feature,
        )?;
        write_text_row(
            f,
            "房型",
            &left.features.room_types,
            &right.features.room_types,
        )?;
        write_text_row(f, "餐饮", &left.features.dining, &right.features.dining)?;
        write_tag_row(
            f,
            "免费设施",
            "feature-tag free",
            &left.features.free_amenities,
            &right.features.free_amenities,
        )?;
        write_tag_row(
            f,
            "收费设施",
            "feature-tag paid",
            &left.features.paid_amenities,
            &right.features.paid_amenities,
        )?;
        write_text_row(f, "价格定位", &left.price, &right.price)?;
        write_text_row(f, "适合人群", &left.suitable, &right.suitable)?;
        writeln!(f, "</tbody>")?;
        writeln!(f, "</table>")?;
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")
    }
}

fn write_text_row(f: &mut Formatter<'_>, label: &str, left: &str, right: &str) -> fmt::Result {
    writeln!(
        f,
        r#"<tr><td class="font-medium">{label}</td><td>{}</td><td>{}</td></tr>"#,
        Escaped(left),
        Escaped(right)
    )
}

fn write_tag_row(
    f: &mut Formatter<'_>,
    label: &str,
    class: &str,
    left: &[String],
    right: &[String],
) -> fmt::Result {
    write!(f, r#"<tr><td class="font-medium">{label}</td>"#)?;
    for tags in [left, right] {
        write!(f, r#"<td><div class="flex flex-wrap gap-1">"#)?;
        write_tags(f, class, tags)?;
        write!(f, "</div></td>")?;
    }
    writeln!(f, "</tr>")
}
