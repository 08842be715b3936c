//! Day-by-day timeline

use std::fmt::{self, Display, Formatter};
use tracing::warn;

use super::Escaped;
use crate::models::{Activity, DayPlan};

pub struct Timeline<'a>(pub &'a [DayPlan]);

/// Entry animation alternates by position; order is never changed.
#[must_use]
pub fn slide_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "animate-slide-in-left"
    } else {
        "animate-slide-in-right"
    }
}

#[must_use]
pub fn render(itinerary: &[DayPlan]) -> String {
    if itinerary.is_empty() {
        warn!("No itinerary data available");
        return String::new();
    }
    Timeline(itinerary).to_string()
}

impl Display for Timeline<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, day) in self.0.iter().enumerate() {
            writeln!(
                f,
                r#"<div class="timeline-item mb-12 {}">"#,
                slide_class(index)
            )?;
            writeln!(f, r#"<div class="bg-white rounded-xl shadow-lg p-6 ml-8">"#)?;
            writeln!(f, r#"<div class="flex items-center mb-4">"#)?;
            writeln!(
                f,
                r#"<div class="w-12 h-12 bg-gradient-to-r from-lake-blue to-nature-green rounded-full flex items-center justify-center text-white font-bold text-lg mr-4">{}</div>"#,
                day.day
            )?;
            writeln!(
                f,
                r#"<div><h3 class="text-xl font-bold text-gray-800">{}</h3><p class="text-lake-blue font-medium">{}</p></div>"#,
                Escaped(&day.title),
                Escaped(&day.date)
            )?;
            writeln!(f, "</div>")?;
            writeln!(f, r#"<div class="space-y-4">"#)?;
            for activity in &day.activities {
                write_activity(f, activity)?;
            }
            writeln!(f, "</div>")?;
            writeln!(f, "</div>")?;
            writeln!(f, "</div>")?;
        }
        Ok(())
    }
}

fn write_activity(f: &mut Formatter<'_>, activity: &Activity) -> fmt::Result {
    writeln!(f, r#"<div class="activity-card p-4 bg-gray-50 rounded-lg">"#)?;
    writeln!(
        f,
        r#"<div class="flex items-start justify-between mb-2"><div class="flex items-center"><i class="fas fa-clock text-lake-blue mr-2"></i><span class="font-medium text-gray-800">{}</span></div><span class="text-sm text-gray-500 bg-white px-2 py-1 rounded"><i class="fas fa-map-marker-alt mr-1"></i>{}</span></div>"#,
        Escaped(&activity.time),
        Escaped(&activity.location)
    )?;
    writeln!(
        f,
        r#"<h4 class="font-medium text-gray-800 mb-1">{}</h4>"#,
        Escaped(&activity.activity)
    )?;
    writeln!(
        f,
        r#"<p class="text-sm text-gray-600">{}</p>"#,
        Escaped(&activity.notes)
    )?;
    writeln!(f, "</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fallback_dataset;

    fn day(n: u32, activities: &[&str]) -> DayPlan {
        DayPlan {
            day: n,
            date: format!("6月{}日", 20 + n),
            title: format!("Day {n} title"),
            activities: activities
                .iter()
                .map(|a| Activity {
                    time: "09:00".to_string(),
                    activity: (*a).to_string(),
                    location: "河源".to_string(),
                    notes: format!("{a} notes"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_days_and_activities_keep_input_order() {
        let itinerary = vec![
            day(1, &["drive", "soak"]),
            day(2, &["boat", "hike", "dinner"]),
            day(3, &["return"]),
        ];
        let html = render(&itinerary);

        assert_eq!(html.matches(r#"class="timeline-item "#).count(), 3);
        assert_eq!(html.matches(r#"class="activity-card "#).count(), 6);

        let order = [
            "Day 1 title", ">drive<", ">soak<", "Day 2 title", ">boat<", ">hike<", ">dinner<",
            "Day 3 title", ">return<",
        ];
        let positions: Vec<usize> = order.iter().map(|s| html.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_slide_class_alternates_by_position() {
        let html = render(&[day(3, &[]), day(1, &[]), day(2, &[])]);
        let classes: Vec<&str> = html
            .lines()
            .filter(|line| line.starts_with(r#"<div class="timeline-item"#))
            .collect();
        assert!(classes[0].contains("animate-slide-in-left"));
        assert!(classes[1].contains("animate-slide-in-right"));
        assert!(classes[2].contains("animate-slide-in-left"));
        // day ordinal is displayed as given, not re-numbered
        assert!(html.find("Day 3 title").unwrap() < html.find("Day 1 title").unwrap());
    }

    #[test]
    fn test_activity_with_missing_fields_renders_empty() {
        let plan = DayPlan {
            day: 1,
            activities: vec![Activity::default()],
            ..DayPlan::default()
        };
        let html = render(&[plan]);
        assert!(html.contains(r#"<h4 class="font-medium text-gray-800 mb-1"></h4>"#));
    }

    #[test]
    fn test_empty_itinerary_renders_nothing() {
        assert!(render(&[]).is_empty());
    }

    #[test]
    fn test_fallback_itinerary() {
        let html = render(&fallback_dataset().itinerary);
        assert_eq!(html.matches(r#"class="timeline-item "#).count(), 1);
        assert_eq!(html.matches(r#"class="activity-card "#).count(), 2);
        assert!(html.contains("深圳 → 河源"));
    }
}
