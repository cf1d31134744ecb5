/// Wire types for the SportsEngine microsites API.
/// Endpoints: https://se-api.sportsengine.com/v3/microsites/*
/// Every envelope keys its payload under "result"; these map to our clean
/// domain types via the mapping functions in client.rs.
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Roster  (/roster_players)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RosterResponse {
    #[serde(default)]
    pub result: Vec<WirePlayer>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WirePlayer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Empty or absent for players without an assigned number.
    pub jersey_number: Option<String>,
    pub positions: Option<String>,
    pub team_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Schedule  (/events)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub result: Vec<WireGame>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireGame {
    pub id: Option<String>,
    /// ISO-8601 start instant, e.g. "2026-02-07T23:30:00.000Z".
    pub start_date_time: Option<String>,
    pub game_details: Option<WireGameDetails>,
}

/// The two sides carry no guaranteed ordering relative to any one team.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireGameDetails {
    pub team_1: Option<WireGameTeam>,
    pub team_2: Option<WireGameTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireGameTeam {
    pub name: Option<String>,
    pub is_home_team: Option<bool>,
}

// ---------------------------------------------------------------------------
// Standings  (/standings)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StandingsResponse {
    #[serde(default)]
    pub result: Vec<WireDivision>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireDivision {
    pub id: Option<String>,
    #[serde(rename = "teamRecords", default)]
    pub team_records: Vec<WireTeamRecord>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireTeamRecord {
    pub team_name: Option<String>,
    pub values: Option<WireRecordValues>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct WireRecordValues {
    pub w: Option<u32>,
    pub l: Option<u32>,
    pub t: Option<u32>,
}
