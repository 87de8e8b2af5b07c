use serde::{Deserialize, Serialize};

/// Weather condition tier — derived purely from the day's temperature in Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    HotAndSunny,
    WarmAndClear,
    Pleasant,
    CoolAndCloudy,
    Cold,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Self::HotAndSunny,
        Self::WarmAndClear,
        Self::Pleasant,
        Self::CoolAndCloudy,
        Self::Cold,
    ];

    /// Classify a temperature. Shared by the live and mock forecast paths.
    pub fn from_celsius(t: i32) -> Self {
        if t >= 30 {
            Self::HotAndSunny
        } else if t >= 25 {
            Self::WarmAndClear
        } else if t >= 20 {
            Self::Pleasant
        } else if t >= 15 {
            Self::CoolAndCloudy
        } else {
            Self::Cold
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::HotAndSunny => "Hot & Sunny",
            Self::WarmAndClear => "Warm & Clear",
            Self::Pleasant => "Pleasant",
            Self::CoolAndCloudy => "Cool & Cloudy",
            Self::Cold => "Cold",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::HotAndSunny => "☀️",
            Self::WarmAndClear => "⛅",
            Self::Pleasant => "🌤️",
            Self::CoolAndCloudy => "☁️",
            Self::Cold => "❄️",
        }
    }
}

/// One day's normalized weather summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub location: String,
    pub temperature_celsius: i32,
    pub condition: Condition,
    pub icon: String,
    pub humidity_percent: i32,
    pub wind_speed_kmh: i32,
    /// RFC 3339 timestamp of the day this entry describes.
    pub timestamp: String,
}

impl ForecastEntry {
    /// Build an entry whose condition and icon follow from `temperature_celsius`.
    pub fn new(
        location: impl Into<String>,
        temperature_celsius: i32,
        humidity_percent: i32,
        wind_speed_kmh: i32,
        timestamp: impl Into<String>,
    ) -> Self {
        let condition = Condition::from_celsius(temperature_celsius);
        Self {
            location: location.into(),
            temperature_celsius,
            condition,
            icon: condition.icon().to_string(),
            humidity_percent,
            wind_speed_kmh,
            timestamp: timestamp.into(),
        }
    }
}
