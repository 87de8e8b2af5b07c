use chrono::{DateTime, FixedOffset};
use rand::Rng;

use crate::forecast::ForecastEntry;
use crate::formatter::mock_forecast;
use crate::provider::AirTemperatureResponse;

/// Weather data as handed to the formatter: either the provider payload or a
/// synthetic week standing in for it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawForecast {
    Live(AirTemperatureResponse),
    Mock(Vec<ForecastEntry>),
}

/// Why the live payload was not used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    Request(String),
    EmptyPayload,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Request(e) => f.write_str(e),
            Self::EmptyPayload => f.write_str("no readings in payload"),
        }
    }
}

impl RawForecast {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

/// Absorb a fetch outcome. Errors and payloads without readings become a mock
/// week; the reason is returned alongside so the caller can log it.
pub fn absorb<R: Rng>(
    result: Result<AirTemperatureResponse, String>,
    now: DateTime<FixedOffset>,
    rng: &mut R,
) -> (RawForecast, Option<FallbackReason>) {
    let reason = match result {
        Ok(response) if response.latest_batch().is_some() => {
            return (RawForecast::Live(response), None);
        }
        Ok(_) => FallbackReason::EmptyPayload,
        Err(e) => FallbackReason::Request(e),
    };
    (RawForecast::Mock(mock_forecast(now, rng)), Some(reason))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{FallbackReason, RawForecast, absorb};
    use crate::formatter::FORECAST_DAYS;
    use crate::provider::{AirTemperatureResponse, ReadingBatch, StationReading};

    fn now() -> chrono::DateTime<chrono::FixedOffset> {
        Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0)
            .single()
            .expect("valid date")
            .fixed_offset()
    }

    #[test]
    fn request_errors_fall_back_to_mock_week() {
        let mut rng = StdRng::seed_from_u64(9);
        let (raw, reason) = absorb(Err("HTTP 503".to_string()), now(), &mut rng);
        let RawForecast::Mock(entries) = raw else {
            panic!("expected mock data");
        };
        assert_eq!(entries.len(), FORECAST_DAYS);
        assert_eq!(reason, Some(FallbackReason::Request("HTTP 503".to_string())));
    }

    #[test]
    fn empty_payload_falls_back_to_mock_week() {
        let mut rng = StdRng::seed_from_u64(9);
        let (raw, reason) = absorb(Ok(AirTemperatureResponse::default()), now(), &mut rng);
        assert!(!raw.is_live());
        assert_eq!(reason, Some(FallbackReason::EmptyPayload));
        assert_eq!(reason.map(|r| r.to_string()).as_deref(), Some("no readings in payload"));
    }

    #[test]
    fn payload_with_readings_is_kept() {
        let mut response = AirTemperatureResponse::default();
        response.items.push(ReadingBatch {
            timestamp: "2026-10-19T08:00:00+08:00".to_string(),
            readings: vec![StationReading {
                station_id: "S24".to_string(),
                value: 28.0,
            }],
        });
        let mut rng = StdRng::seed_from_u64(9);
        let (raw, reason) = absorb(Ok(response.clone()), now(), &mut rng);
        assert_eq!(raw, RawForecast::Live(response));
        assert!(reason.is_none());
    }
}
