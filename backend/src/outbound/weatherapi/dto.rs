//! DTOs for decoding WeatherAPI `current.json` responses.

use serde::Deserialize;

use crate::domain::WeatherReading;

#[derive(Debug, Deserialize)]
pub(super) struct WeatherApiResponseDto {
    #[serde(default)]
    pub(super) location: Option<LocationDto>,
    pub(super) current: CurrentDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct LocationDto {
    #[serde(default)]
    pub(super) name: Option<String>,
    #[serde(default)]
    pub(super) region: Option<String>,
    #[serde(default)]
    pub(super) country: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CurrentDto {
    pub(super) temp_c: f64,
    pub(super) temp_f: f64,
    #[serde(default)]
    pub(super) condition: Option<ConditionDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConditionDto {
    #[serde(default)]
    pub(super) text: Option<String>,
}

impl LocationDto {
    fn describe(self) -> Option<String> {
        let parts: Vec<String> = [self.name, self.region, self.country]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

impl WeatherApiResponseDto {
    pub(super) fn into_domain_reading(self) -> WeatherReading {
        WeatherReading {
            temp_c: self.current.temp_c,
            temp_f: self.current.temp_f,
            location: self.location.and_then(LocationDto::describe),
            condition: self.current.condition.and_then(|condition| condition.text),
        }
    }
}
