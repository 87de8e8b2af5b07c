use serde::{Deserialize, Serialize};

/// Real-time air temperature payload (data.gov.sg `environment/air-temperature`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirTemperatureResponse {
    #[serde(default)]
    pub metadata: StationMetadata,
    #[serde(default)]
    pub items: Vec<ReadingBatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationMetadata {
    #[serde(default)]
    pub stations: Vec<Station>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingBatch {
    pub timestamp: String,
    #[serde(default)]
    pub readings: Vec<StationReading>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationReading {
    pub station_id: String,
    pub value: f64,
}

impl AirTemperatureResponse {
    /// The newest batch, if it carries at least one reading.
    pub fn latest_batch(&self) -> Option<&ReadingBatch> {
        self.items.first().filter(|batch| !batch.readings.is_empty())
    }

    pub fn station_name(&self, station_id: &str) -> Option<&str> {
        self.metadata
            .stations
            .iter()
            .find(|station| station.id == station_id)
            .map(|station| station.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::AirTemperatureResponse;

    const SAMPLE: &str = r#"{
        "metadata": {
            "stations": [
                {"id": "S109", "device_id": "S109", "name": "Ang Mo Kio Avenue 5",
                 "location": {"latitude": 1.3764, "longitude": 103.8492}},
                {"id": "S24", "device_id": "S24", "name": "Upper Changi Road North",
                 "location": {"latitude": 1.3678, "longitude": 103.9826}}
            ],
            "reading_type": "DBT 1M F",
            "reading_unit": "deg C"
        },
        "items": [
            {"timestamp": "2026-10-19T14:00:00+08:00",
             "readings": [{"station_id": "S109", "value": 31.2}, {"station_id": "S24", "value": 29.6}]}
        ],
        "api_info": {"status": "healthy"}
    }"#;

    #[test]
    fn parses_provider_payload_and_ignores_unknown_fields() {
        let parsed: AirTemperatureResponse = serde_json::from_str(SAMPLE).expect("valid payload");
        assert_eq!(parsed.metadata.stations.len(), 2);
        let batch = parsed.latest_batch().expect("batch");
        assert_eq!(batch.readings.len(), 2);
        assert_eq!(parsed.station_name("S24"), Some("Upper Changi Road North"));
        assert_eq!(parsed.station_name("S999"), None);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let parsed: AirTemperatureResponse = serde_json::from_str("{}").expect("empty object");
        assert!(parsed.items.is_empty());
        assert!(parsed.latest_batch().is_none());
    }

    #[test]
    fn batch_without_readings_is_not_usable() {
        let parsed: AirTemperatureResponse =
            serde_json::from_str(r#"{"items": [{"timestamp": "2026-10-19T14:00:00+08:00"}]}"#)
                .expect("payload");
        assert!(parsed.latest_batch().is_none());
    }
}
