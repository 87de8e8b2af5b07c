pub const DEFAULT_WEATHER_URL: &str = "https://api.data.gov.sg/v1/environment/air-temperature";

/// Weather endpoint, overridable at build time with `SHORESQUAD_WEATHER_URL`.
pub const WEATHER_URL: &str = match option_env!("SHORESQUAD_WEATHER_URL") {
    Some(url) => url,
    None => DEFAULT_WEATHER_URL,
};

pub const JOIN_LABEL: &str = "Join Cleanup";

// IntersectionObserver settings for section reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_CLASS: &str = "in-view";
