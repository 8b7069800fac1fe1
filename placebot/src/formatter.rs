//! Renders search results as the Markdown listing sent to the user.
//!
//! Hours rendering keeps a known defect: structured periods always print the open time with `AM` and the
//! close time with `PM`, whatever the actual hour. Existing users see this format, so it stays.

use places_client::{LatLng, OpeningHours, Period, Place};
use placebot_core::{OutgoingMessage, ParseMode};

/// Maximum number of places rendered; the rest of the provider's list is dropped.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

const HOURS_LABEL: &str = "🕒 **Ochilish vaqti:**";
const HOURS_UNKNOWN: &str = "🕒 **Ish vaqti:** Ma'lumot yo'q\n";

/// Google Maps search link for a coordinate.
pub fn maps_link(location: &LatLng) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        location.lat, location.lng
    )
}

/// `HHMM` → `HH:MM`. Shorter inputs are split as far as they go.
fn clock(time: &str) -> String {
    let (hours, minutes) = match (time.get(..2), time.get(2..)) {
        (Some(h), Some(m)) => (h, m),
        _ => (time, ""),
    };
    format!("{}:{}", hours, minutes)
}

/// One period line: `Day <day+1>: <open> AM – <close> PM`. Periods without a close time
/// (open around the clock) render only the open part.
pub fn format_period(period: &Period) -> String {
    let day = u16::from(period.open.day) + 1;
    match &period.close {
        Some(close) => format!(
            "Day {}: {} AM – {} PM",
            day,
            clock(&period.open.time),
            clock(&close.time)
        ),
        None => format!("Day {}: {} AM", day, clock(&period.open.time)),
    }
}

/// Opening-hours block for one place, newline-terminated.
///
/// Weekday text wins when present and non-empty, then structured periods, then the "no information" placeholder.
pub fn format_opening_hours(hours: Option<&OpeningHours>) -> String {
    let Some(hours) = hours else {
        return HOURS_UNKNOWN.to_string();
    };

    if let Some(lines) = hours.weekday_text.as_ref().filter(|l| !l.is_empty()) {
        return format!("{} {}\n", HOURS_LABEL, lines.join("\n"));
    }

    match hours.periods.as_ref().filter(|p| !p.is_empty()) {
        Some(periods) => {
            let mut out = format!("{}\n", HOURS_LABEL);
            for period in periods {
                out.push_str(&format_period(period));
                out.push('\n');
            }
            out
        }
        None => HOURS_UNKNOWN.to_string(),
    }
}

/// Listing block for one place, including the trailing blank line.
pub fn format_place(index: usize, place: &Place) -> String {
    let mut out = format!("{}. *{}*\n", index, place.name);
    out.push_str(&format!(
        "📍 **Manzil:** [{}]({})\n",
        place.vicinity,
        maps_link(&place.geometry.location)
    ));
    if let Some(rating) = place.rating.filter(|r| *r != 0.0) {
        out.push_str(&format!("⭐ **Reyting:** {}\n", rating));
    }
    out.push_str(&format_opening_hours(place.opening_hours.as_ref()));
    out.push('\n');
    out
}

/// Full listing: header plus the first `limit` places in provider order, indexed from 1.
pub fn format_places(category_name: &str, places: &[Place], limit: usize) -> String {
    let mut out = format!("Yaqin atrofdagi {}lar:\n\n", category_name);
    for (i, place) in places.iter().take(limit).enumerate() {
        out.push_str(&format_place(i + 1, place));
    }
    out
}

/// Fixed message for an empty result list.
pub fn not_found_message(type_code: &str) -> String {
    format!("{}lar yaqin atrofda topilmadi. 🤷‍♂️", type_code)
}

/// Message for a finished search: Markdown listing, or plain "nothing found" text when empty.
pub fn render_results(
    category_name: &str,
    type_code: &str,
    places: &[Place],
    limit: usize,
) -> OutgoingMessage {
    if places.is_empty() {
        OutgoingMessage::text(not_found_message(type_code))
    } else {
        OutgoingMessage::text(format_places(category_name, places, limit))
            .with_parse_mode(ParseMode::Markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use places_client::{DayTime, Geometry};

    fn place(name: &str) -> Place {
        Place {
            name: name.to_string(),
            vicinity: "Amir Temur ko'chasi 1".to_string(),
            geometry: Geometry {
                location: LatLng {
                    lat: 41.31,
                    lng: 69.28,
                },
            },
            rating: None,
            opening_hours: None,
        }
    }

    fn period(day: u8, open: &str, close: Option<&str>) -> Period {
        Period {
            open: DayTime {
                day,
                time: open.to_string(),
            },
            close: close.map(|t| DayTime {
                day,
                time: t.to_string(),
            }),
        }
    }

    #[test]
    fn test_empty_results_render_not_found_only() {
        let msg = render_results("🌳 Parks", "park", &[], DEFAULT_RESULT_LIMIT);
        assert_eq!(msg.text, "parklar yaqin atrofda topilmadi. 🤷‍♂️");
        assert_eq!(msg.parse_mode, None);
        assert!(!msg.text.contains("Yaqin atrofdagi"));
    }

    #[test]
    fn test_fifteen_results_render_first_ten() {
        let places: Vec<Place> = (1..=15).map(|i| place(&format!("Place {}", i))).collect();
        let text = format_places("🌳 Parks", &places, DEFAULT_RESULT_LIMIT);

        for i in 1..=10 {
            assert!(text.contains(&format!("{}. *Place {}*\n", i, i)));
        }
        assert!(!text.contains("11. "));
        assert!(!text.contains("*Place 11*"));
        assert_eq!(text.matches("📍 **Manzil:**").count(), 10);
    }

    #[test]
    fn test_single_place_block_exact() {
        let mut p = place("Ankhor");
        p.rating = Some(4.5);
        let text = format_places("🌳 Parks", &[p], DEFAULT_RESULT_LIMIT);
        assert_eq!(
            text,
            "Yaqin atrofdagi 🌳 Parkslar:\n\n\
             1. *Ankhor*\n\
             📍 **Manzil:** [Amir Temur ko'chasi 1](https://www.google.com/maps/search/?api=1&query=41.31,69.28)\n\
             ⭐ **Reyting:** 4.5\n\
             🕒 **Ish vaqti:** Ma'lumot yo'q\n\
             \n"
        );
    }

    #[test]
    fn test_zero_rating_is_not_rendered() {
        let mut p = place("New place");
        p.rating = Some(0.0);
        assert!(!format_place(1, &p).contains("Reyting"));
    }

    #[test]
    fn test_weekday_text_joined_verbatim() {
        let hours = OpeningHours {
            open_now: Some(true),
            weekday_text: Some(vec![
                "Monday: 9:00 AM – 6:00 PM".to_string(),
                "Tuesday: Closed".to_string(),
            ]),
            periods: Some(vec![period(1, "0900", Some("1800"))]),
        };
        assert_eq!(
            format_opening_hours(Some(&hours)),
            "🕒 **Ochilish vaqti:** Monday: 9:00 AM – 6:00 PM\nTuesday: Closed\n"
        );
    }

    #[test]
    fn test_periods_keep_am_pm_labels() {
        let hours = OpeningHours {
            open_now: None,
            weekday_text: Some(vec![]),
            periods: Some(vec![
                period(0, "1400", Some("0200")),
                period(6, "0830", Some("2130")),
            ]),
        };
        assert_eq!(
            format_opening_hours(Some(&hours)),
            "🕒 **Ochilish vaqti:**\nDay 1: 14:00 AM – 02:00 PM\nDay 7: 08:30 AM – 21:30 PM\n"
        );
    }

    #[test]
    fn test_period_without_close() {
        assert_eq!(format_period(&period(0, "0000", None)), "Day 1: 00:00 AM");
    }

    #[test]
    fn test_no_hours_information() {
        assert_eq!(format_opening_hours(None), HOURS_UNKNOWN);
        let empty = OpeningHours::default();
        assert_eq!(format_opening_hours(Some(&empty)), HOURS_UNKNOWN);
    }

    #[test]
    fn test_non_empty_results_use_markdown() {
        let msg = render_results("🌳 Parks", "park", &[place("A")], DEFAULT_RESULT_LIMIT);
        assert_eq!(msg.parse_mode, Some(ParseMode::Markdown));
        assert!(msg.text.starts_with("Yaqin atrofdagi 🌳 Parkslar:\n\n1. *A*\n"));
    }
}
