//! Attraction cards

use std::fmt::{self, Display, Formatter};
use tracing::warn;

use super::{Escaped, placeholder_image_url, write_tags};
use crate::models::Attraction;

pub struct AttractionGrid<'a>(pub &'a [Attraction]);

#[must_use]
pub fn render(attractions: &[Attraction]) -> String {
    if attractions.is_empty() {
        warn!("No attractions data available");
        return String::new();
    }
    AttractionGrid(attractions).to_string()
}

impl Display for AttractionGrid<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for attraction in self.0 {
            let name = Escaped(&attraction.name);
            let fallback = placeholder_image_url("400x300", "22c55e", &attraction.name);

            writeln!(
                f,
                r#"<div class="attraction-card bg-white rounded-xl shadow-lg overflow-hidden">"#
            )?;
            writeln!(f, r#"<div class="relative h-48">"#)?;
            writeln!(
                f,
                r#"<img src="{}" alt="{name}" class="w-full h-full object-cover" onerror="this.src='{}'">"#,
                Escaped(&attraction.image),
                Escaped(&fallback)
            )?;
            writeln!(
                f,
                r#"<div class="absolute top-4 left-4"><span class="bg-gradient-to-r from-warm-orange to-soft-pink text-white px-3 py-1 rounded-full text-sm font-bold">{}级景区</span></div>"#,
                Escaped(&attraction.level)
            )?;
            writeln!(f, "</div>")?;
            writeln!(f, r#"<div class="p-6">"#)?;
            writeln!(
                f,
                r#"<h3 class="text-xl font-bold text-gray-800 mb-2">{name}</h3>"#
            )?;
            writeln!(
                f,
                r#"<p class="text-gray-600 mb-4">{}</p>"#,
                Escaped(&attraction.description)
            )?;
            write!(f, r#"<div class="flex flex-wrap gap-2 mb-4">"#)?;
            write_tags(
                f,
                "bg-nature-green/10 text-nature-green px-2 py-1 rounded text-sm",
                &attraction.highlights,
            )?;
            writeln!(f, "</div>")?;
            writeln!(f, r#"<div class="space-y-2 text-sm">"#)?;
            writeln!(
                f,
                r#"<div class="flex items-center"><i class="fas fa-ticket-alt text-warm-orange mr-2"></i><span><strong>票价:</strong> {}</span></div>"#,
                Escaped(&attraction.price)
            )?;
            writeln!(
                f,
                r#"<div class="flex items-center"><i class="fas fa-clock text-warm-orange mr-2"></i><span><strong>游玩时长:</strong> {}</span></div>"#,
                Escaped(&attraction.duration)
            )?;
            writeln!(f, "</div>")?;
            writeln!(f, "</div>")?;
            writeln!(f, "</div>")?;
        }
        Ok(())
    }
}
