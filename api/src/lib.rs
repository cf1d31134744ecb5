pub mod client;
pub mod openmeteo;
pub mod sportsengine;

use crate::client::ApiResult;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the upstream wire formats
// ---------------------------------------------------------------------------

/// One roster line, verbatim from the roster upstream — no derived fields.
/// Jersey and position may be empty; the page substitutes placeholders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterEntry {
    pub first_name: String,
    pub last_name: String,
    pub jersey: String,
    pub position: String,
    pub team_name: String,
}

/// A scheduled game as the upstream reports it. The two sides carry no
/// guaranteed ordering relative to the tracked team, and `start_time` stays
/// a raw ISO-8601 string until the display layer parses it.
#[derive(Debug, Clone, Default)]
pub struct RawGame {
    pub id: String,
    pub start_time: String,
    pub team1: GameSide,
    pub team2: GameSide,
}

#[derive(Debug, Clone, Default)]
pub struct GameSide {
    pub name: String,
    /// Upstream home flag. Carried for completeness; the display rule keys
    /// off slot order, not this flag.
    pub is_home: bool,
}

/// One division's standings, in the upstream's row order.
#[derive(Debug, Clone, Default)]
pub struct Division {
    pub id: String,
    pub records: Vec<TeamRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct TeamRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

/// Hourly forecast series: parallel vectors, index-aligned by hour. Used as
/// a lookup table keyed by hour-truncated timestamp prefix.
#[derive(Debug, Clone, Default)]
pub struct HourlyForecast {
    pub times: Vec<String>,
    pub temps_f: Vec<f64>,
    pub codes: Vec<i64>,
}

/// Per-source fetch outcome. A failed source keeps its error here so callers
/// can tell "empty upstream" from "upstream down", even though the page
/// renders both as an empty section.
#[derive(Debug)]
pub struct SourceData {
    pub roster: ApiResult<Vec<RosterEntry>>,
    pub schedule: ApiResult<Vec<RawGame>>,
    pub standings: ApiResult<Vec<Division>>,
    pub forecast: ApiResult<HourlyForecast>,
}

impl SourceData {
    /// Every source present and empty. Baseline for tests and degraded paths.
    pub fn empty() -> Self {
        Self {
            roster: Ok(Vec::new()),
            schedule: Ok(Vec::new()),
            standings: Ok(Vec::new()),
            forecast: Ok(HourlyForecast::default()),
        }
    }
}
