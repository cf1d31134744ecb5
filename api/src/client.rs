use crate::openmeteo::ForecastResponse;
use crate::sportsengine::{
    RosterResponse, ScheduleResponse, StandingsResponse, WireDivision, WireGame, WireGameTeam,
    WirePlayer, WireTeamRecord,
};
use crate::{Division, GameSide, HourlyForecast, RawGame, RosterEntry, SourceData, TeamRecord};
use reqwest::Client;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ROSTER_URL: &str =
    "https://se-api.sportsengine.com/v3/microsites/roster_players?roster_id=69763da031a69300010a09c8";
// Page 1 of 15 covers the remaining season; bump per_page for longer ones.
const SCHEDULE_URL: &str = "https://se-api.sportsengine.com/v3/microsites/events?page=1&per_page=15&program_id=69763d9a3dc6b20df8c68bb9&order_by=starts_at&direction=asc&team_id=11f0fa06-ae85-42fa-bcf3-9e3f2a32c39c&starts_at=2026-02-03T05:00:00.000Z";
const STANDINGS_URL: &str =
    "https://se-api.sportsengine.com/v3/microsites/standings?program_id=69763d9a3dc6b20df8c68bb9";
// Hourly forecast for Chattanooga, TN. Free endpoint, no key needed.
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast?latitude=35.0456&longitude=-85.3097&hourly=temperature_2m,weathercode&temperature_unit=fahrenheit&timezone=America%2FNew_York";

/// League data client backed by the SportsEngine microsites API, plus the
/// Open-Meteo forecast endpoint for game-day weather.
#[derive(Debug, Clone)]
pub struct LeagueApi {
    client: Client,
    timeout: Duration,
}

impl Default for LeagueApi {
    fn default() -> Self {
        Self {
            // SportsEngine rejects default client identification; present a
            // browser-like user-agent.
            client: Client::builder()
                .user_agent("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)")
                .build()
                .unwrap_or_default(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl LeagueApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the tracked team's roster.
    pub async fn fetch_roster(&self) -> ApiResult<Vec<RosterEntry>> {
        let raw: RosterResponse = self.get(ROSTER_URL).await?;
        Ok(raw.result.into_iter().map(map_player).collect())
    }

    /// Fetch the upcoming schedule, earliest game first.
    pub async fn fetch_schedule(&self) -> ApiResult<Vec<RawGame>> {
        let raw: ScheduleResponse = self.get(SCHEDULE_URL).await?;
        Ok(raw.result.into_iter().map(map_game).collect())
    }

    /// Fetch standings for the whole program, one entry per division.
    pub async fn fetch_standings(&self) -> ApiResult<Vec<Division>> {
        let raw: StandingsResponse = self.get(STANDINGS_URL).await?;
        Ok(raw.result.into_iter().map(map_division).collect())
    }

    /// Fetch the hourly forecast around the home rink.
    pub async fn fetch_forecast(&self) -> ApiResult<HourlyForecast> {
        let raw: ForecastResponse = self.get(FORECAST_URL).await?;
        Ok(map_forecast(raw))
    }

    /// Run all four fetches and pack the per-source outcomes. Never fails as
    /// a whole: a dead upstream is recorded in its slot, nothing more.
    pub async fn fetch_all(&self) -> SourceData {
        SourceData {
            roster: self.fetch_roster().await,
            schedule: self.fetch_schedule().await,
            standings: self.fetch_standings().await,
            forecast: self.fetch_forecast().await,
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        // Status is deliberately not inspected: an upstream error body either
        // decodes like any other or surfaces as a Parsing error.
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Mapping: wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_player(p: WirePlayer) -> RosterEntry {
    RosterEntry {
        first_name: p.first_name.unwrap_or_default(),
        last_name: p.last_name.unwrap_or_default(),
        jersey: p.jersey_number.unwrap_or_default(),
        position: p.positions.unwrap_or_default(),
        team_name: p.team_name.unwrap_or_default(),
    }
}

fn map_game(g: WireGame) -> RawGame {
    let details = g.game_details.unwrap_or_default();
    RawGame {
        id: g.id.unwrap_or_default(),
        start_time: g.start_date_time.unwrap_or_default(),
        team1: map_side(details.team_1),
        team2: map_side(details.team_2),
    }
}

fn map_side(side: Option<WireGameTeam>) -> GameSide {
    let side = side.unwrap_or_default();
    GameSide {
        name: side.name.unwrap_or_default(),
        is_home: side.is_home_team.unwrap_or_default(),
    }
}

fn map_division(d: WireDivision) -> Division {
    Division {
        id: d.id.unwrap_or_default(),
        records: d.team_records.into_iter().map(map_record).collect(),
    }
}

fn map_record(r: WireTeamRecord) -> TeamRecord {
    let values = r.values.unwrap_or_default();
    TeamRecord {
        name: r.team_name.unwrap_or_default(),
        wins: values.w.unwrap_or_default(),
        losses: values.l.unwrap_or_default(),
        ties: values.t.unwrap_or_default(),
    }
}

fn map_forecast(raw: ForecastResponse) -> HourlyForecast {
    let hourly = raw.hourly.unwrap_or_default();
    HourlyForecast {
        times: hourly.time,
        temps_f: hourly.temperature_2m,
        codes: hourly.weathercode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER_BODY: &str = r#"{"result":[
        {"first_name":"Sam","last_name":"Hale","jersey_number":"12","positions":"D","team_name":"Crease Crusaders"},
        {"first_name":"Rin","last_name":"Okafor","jersey_number":"","positions":"","team_name":"Crease Crusaders"}
    ]}"#;

    #[tokio::test]
    async fn get_decodes_a_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/roster")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(ROSTER_BODY)
            .create_async()
            .await;

        let url = format!("{}/roster", server.url());
        let raw: RosterResponse = LeagueApi::new().get(&url).await.expect("decode");
        assert_eq!(raw.result.len(), 2);
        assert_eq!(raw.result[0].first_name.as_deref(), Some("Sam"));
        assert_eq!(raw.result[1].jersey_number.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn get_still_decodes_on_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/roster")
            .with_status(500)
            .with_body(ROSTER_BODY)
            .create_async()
            .await;

        let url = format!("{}/roster", server.url());
        let raw: RosterResponse = LeagueApi::new()
            .get(&url)
            .await
            .expect("body should decode regardless of status");
        assert_eq!(raw.result.len(), 2);
    }

    #[tokio::test]
    async fn get_surfaces_malformed_json_as_parsing_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/standings")
            .with_status(200)
            .with_body("<html>maintenance window</html>")
            .create_async()
            .await;

        let url = format!("{}/standings", server.url());
        let err = LeagueApi::new()
            .get::<StandingsResponse>(&url)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parsing(..)), "got: {err}");
    }

    #[tokio::test]
    async fn get_reports_connection_failure_as_network_error() {
        // Nothing listens on the discard port.
        let err = LeagueApi::new()
            .get::<RosterResponse>("http://127.0.0.1:9/roster")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(..)), "got: {err}");
    }

    #[test]
    fn map_game_tolerates_missing_details() {
        let game = map_game(WireGame {
            id: Some("g1".into()),
            start_date_time: None,
            game_details: None,
        });
        assert_eq!(game.id, "g1");
        assert!(game.start_time.is_empty());
        assert!(game.team1.name.is_empty());
        assert!(!game.team2.is_home);
    }

    #[test]
    fn map_division_carries_record_order_and_values() {
        let wire: StandingsResponse = serde_json::from_str(
            r#"{"result":[{"id":"div-9","teamRecords":[
                {"team_name":"Night Owls","values":{"w":5,"l":2,"t":1}},
                {"team_name":"Crease Crusaders","values":{"w":4,"l":3,"t":1}}
            ]}]}"#,
        )
        .expect("fixture parses");
        let divisions: Vec<Division> = wire.result.into_iter().map(map_division).collect();
        assert_eq!(divisions.len(), 1);
        assert_eq!(divisions[0].id, "div-9");
        assert_eq!(divisions[0].records[0].name, "Night Owls");
        assert_eq!(divisions[0].records[0].wins, 5);
        assert_eq!(divisions[0].records[1].ties, 1);
    }

    #[test]
    fn map_forecast_flattens_parallel_arrays() {
        let wire: ForecastResponse = serde_json::from_str(
            r#"{"hourly":{"time":["2026-02-07T18:00"],"temperature_2m":[41.3],"weathercode":[3]}}"#,
        )
        .expect("fixture parses");
        let forecast = map_forecast(wire);
        assert_eq!(forecast.times, vec!["2026-02-07T18:00"]);
        assert_eq!(forecast.temps_f, vec![41.3]);
        assert_eq!(forecast.codes, vec![3]);
    }

    #[test]
    fn map_forecast_handles_missing_hourly_block() {
        let forecast = map_forecast(ForecastResponse { hourly: None });
        assert!(forecast.times.is_empty());
        assert!(forecast.temps_f.is_empty());
        assert!(forecast.codes.is_empty());
    }
}
