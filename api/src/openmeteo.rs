/// Wire types for the Open-Meteo forecast API.
/// Endpoint: https://api.open-meteo.com/v1/forecast?hourly=temperature_2m,weathercode
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ForecastResponse {
    pub hourly: Option<WireHourly>,
}

/// Parallel arrays, index-aligned by hour. Timestamps are local to the
/// timezone named in the request, minute-precision ("2026-02-07T18:00").
#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireHourly {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<f64>,
    #[serde(default)]
    pub weathercode: Vec<i64>,
}
