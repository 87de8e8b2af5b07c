use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta};
use rand::Rng;

use crate::forecast::ForecastEntry;
use crate::provider::AirTemperatureResponse;
use crate::source::RawForecast;

pub const FORECAST_DAYS: usize = 7;

const MOCK_TEMPERATURE_C: std::ops::RangeInclusive<i32> = 24..=32;
const MOCK_HUMIDITY_PCT: std::ops::RangeInclusive<i32> = 65..=90;
const MOCK_WIND_KMH: std::ops::RangeInclusive<i32> = 10..=25;

// The provider only reports temperature. Humidity and wind are placeholder
// approximations scaled from it, not measurements.
const HUMIDITY_PER_DEGREE: f64 = 2.5;
const WIND_PER_DEGREE: f64 = 0.7;

/// Turn raw weather data into forecast entries.
///
/// Mock data passes through untouched. Live data without a usable reading batch
/// is replaced by a fresh mock week. Otherwise up to seven readings are matched
/// against the station metadata; readings for unknown stations are dropped, so
/// the result can be shorter than a week.
pub fn normalize<R: Rng>(
    raw: RawForecast,
    now: DateTime<FixedOffset>,
    rng: &mut R,
) -> Vec<ForecastEntry> {
    match raw {
        RawForecast::Mock(entries) => entries,
        RawForecast::Live(response) => {
            if response.latest_batch().is_none() {
                return mock_forecast(now, rng);
            }
            live_entries(&response)
        }
    }
}

fn live_entries(response: &AirTemperatureResponse) -> Vec<ForecastEntry> {
    let Some(batch) = response.latest_batch() else {
        return Vec::new();
    };
    let base = DateTime::parse_from_rfc3339(&batch.timestamp).ok();

    batch
        .readings
        .iter()
        .take(FORECAST_DAYS)
        .enumerate()
        .filter_map(|(day, reading)| {
            let location = response.station_name(&reading.station_id)?;
            let temperature = reading.value.round() as i32;
            let timestamp = match base {
                Some(base) => (base + TimeDelta::days(day as i64))
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
                None => batch.timestamp.clone(),
            };
            Some(ForecastEntry::new(
                location,
                temperature,
                derived_humidity(temperature),
                derived_wind_speed(temperature),
                timestamp,
            ))
        })
        .collect()
}

pub fn derived_humidity(temperature_celsius: i32) -> i32 {
    (f64::from(temperature_celsius) * HUMIDITY_PER_DEGREE).round() as i32
}

pub fn derived_wind_speed(temperature_celsius: i32) -> i32 {
    (f64::from(temperature_celsius) * WIND_PER_DEGREE).round() as i32
}

/// Seven synthetic days starting at `now`. Day labels and timestamps use the
/// offset of `now`, so pass the viewer's local time.
pub fn mock_forecast<R: Rng>(now: DateTime<FixedOffset>, rng: &mut R) -> Vec<ForecastEntry> {
    (0..FORECAST_DAYS)
        .map(|day| {
            let date = now + TimeDelta::days(day as i64);
            let location = format!("Coastline ({} {})", date.format("%A"), date.format("%-d"));
            ForecastEntry::new(
                location,
                rng.gen_range(MOCK_TEMPERATURE_C),
                rng.gen_range(MOCK_HUMIDITY_PCT),
                rng.gen_range(MOCK_WIND_KMH),
                date.to_rfc3339_opts(SecondsFormat::Secs, true),
            )
        })
        .collect()
}
