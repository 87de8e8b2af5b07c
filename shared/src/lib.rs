pub mod cleanup;
pub mod crew;
pub mod forecast;
pub mod formatter;
pub mod join;
pub mod joined;
pub mod provider;
pub mod render;
pub mod source;

pub use cleanup::{AppData, CleanupEvent};
pub use crew::{CrewStats, UserProfile};
pub use forecast::{Condition, ForecastEntry};
pub use provider::AirTemperatureResponse;
pub use render::{ForecastCard, ForecastView};
pub use source::RawForecast;
