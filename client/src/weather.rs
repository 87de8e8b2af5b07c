use rand::Rng;

use shoresquad_shared::AirTemperatureResponse;
use shoresquad_shared::source::{RawForecast, absorb};

use crate::config;

/// Single GET against the air temperature endpoint. No retry.
pub async fn fetch_air_temperature() -> Result<AirTemperatureResponse, String> {
    let resp = gloo_net::http::Request::get(config::WEATHER_URL)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    resp.json::<AirTemperatureResponse>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}

/// Fetch raw weather data, substituting a mock week on any failure.
pub async fn fetch_forecast<R: Rng>(rng: &mut R) -> RawForecast {
    let result = fetch_air_temperature().await;
    let (raw, fallback) = absorb(result, chrono::Local::now().fixed_offset(), rng);
    match fallback {
        None => web_sys::console::info_1(&"✅ Weather: live data used".into()),
        Some(reason) => web_sys::console::warn_1(
            &format!("Weather: mock fallback used ({reason})").into(),
        ),
    }
    raw
}
