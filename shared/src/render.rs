use chrono::DateTime;

use crate::forecast::ForecastEntry;

pub const FORECAST_UNAVAILABLE: &str = "Unable to load forecast. Please try again later.";

/// Display-ready fields for one forecast card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastCard {
    pub weekday: String,
    pub short_date: String,
    pub icon: String,
    pub temperature: String,
    pub condition: String,
    pub humidity: String,
    pub wind: String,
    pub location: String,
}

/// Everything a forecast container shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForecastView {
    Unavailable,
    Cards(Vec<ForecastCard>),
}

impl ForecastView {
    pub fn card_count(&self) -> usize {
        match self {
            Self::Unavailable => 0,
            Self::Cards(cards) => cards.len(),
        }
    }
}

/// A container the forecast is written into. Each call replaces prior content.
pub trait ForecastTarget {
    fn replace(&mut self, view: ForecastView);
}

impl ForecastCard {
    pub fn from_entry(entry: &ForecastEntry) -> Self {
        // Weekday and date are always formatted in English, independent of the browser locale.
        let (weekday, short_date) = DateTime::parse_from_rfc3339(&entry.timestamp)
            .map(|dt| (dt.format("%a").to_string(), dt.format("%b %-d").to_string()))
            .unwrap_or_default();
        Self {
            weekday,
            short_date,
            icon: entry.icon.clone(),
            temperature: format!("{}°C", entry.temperature_celsius),
            condition: entry.condition.label().to_string(),
            humidity: format!("{}%", entry.humidity_percent),
            wind: format!("{} km/h", entry.wind_speed_kmh),
            location: entry.location.clone(),
        }
    }
}

pub fn forecast_view(entries: &[ForecastEntry]) -> ForecastView {
    if entries.is_empty() {
        return ForecastView::Unavailable;
    }
    ForecastView::Cards(entries.iter().map(ForecastCard::from_entry).collect())
}

pub fn render<T: ForecastTarget + ?Sized>(entries: &[ForecastEntry], target: &mut T) {
    target.replace(forecast_view(entries));
}

#[cfg(test)]
mod tests {
    use super::{ForecastCard, ForecastTarget, ForecastView, render};
    use crate::forecast::ForecastEntry;

    #[derive(Default)]
    struct Recorder {
        current: Option<ForecastView>,
        writes: usize,
    }

    impl ForecastTarget for Recorder {
        fn replace(&mut self, view: ForecastView) {
            self.current = Some(view);
            self.writes += 1;
        }
    }

    fn entry(location: &str, temp: i32, timestamp: &str) -> ForecastEntry {
        ForecastEntry::new(location, temp, 70, 15, timestamp)
    }

    #[test]
    fn empty_list_renders_single_error_fragment() {
        let mut target = Recorder::default();
        render(&[], &mut target);
        assert_eq!(target.current, Some(ForecastView::Unavailable));
        assert_eq!(target.current.map(|v| v.card_count()), Some(0));
    }

    #[test]
    fn cards_follow_input_order_for_short_lists() {
        let entries = vec![
            entry("Changi", 31, "2026-12-08T09:00:00+08:00"),
            entry("Sentosa", 14, "2026-12-09T09:00:00+08:00"),
            entry("Pasir Ris", 22, "2026-12-10T09:00:00+08:00"),
        ];
        let mut target = Recorder::default();
        render(&entries, &mut target);

        let Some(ForecastView::Cards(cards)) = target.current else {
            panic!("expected cards");
        };
        let locations: Vec<&str> = cards.iter().map(|c| c.location.as_str()).collect();
        assert_eq!(locations, ["Changi", "Sentosa", "Pasir Ris"]);
    }

    #[test]
    fn card_fields_are_formatted_for_display() {
        let card = ForecastCard::from_entry(&entry("Changi", 31, "2026-12-08T09:00:00+08:00"));
        assert_eq!(card.weekday, "Tue");
        assert_eq!(card.short_date, "Dec 8");
        assert_eq!(card.icon, "☀️");
        assert_eq!(card.temperature, "31°C");
        assert_eq!(card.condition, "Hot & Sunny");
        assert_eq!(card.humidity, "70%");
        assert_eq!(card.wind, "15 km/h");
    }

    #[test]
    fn weekday_uses_the_entry_offset_not_utc() {
        // 00:30 at +08:00 is still the previous day in UTC.
        let card = ForecastCard::from_entry(&entry("Changi", 28, "2026-12-08T00:30:00+08:00"));
        assert_eq!(card.weekday, "Tue");
    }

    #[test]
    fn bad_timestamp_leaves_date_blank() {
        let card = ForecastCard::from_entry(&entry("Changi", 28, "yesterday"));
        assert!(card.weekday.is_empty());
        assert!(card.short_date.is_empty());
        assert_eq!(card.condition, "Warm & Clear");
    }

    #[test]
    fn rerender_replaces_instead_of_appending() {
        let entries = vec![entry("Changi", 31, "2026-12-08T09:00:00+08:00")];
        let mut target = Recorder::default();
        render(&entries, &mut target);
        render(&entries, &mut target);
        assert_eq!(target.writes, 2);
        assert_eq!(target.current.map(|v| v.card_count()), Some(1));
    }
}
