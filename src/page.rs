use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use league_api::{Division, HourlyForecast, RawGame, RosterEntry, SourceData};

/// The one team this deployment tracks, matched by literal name.
pub const TEAM_NAME: &str = "Crease Crusaders";
/// Bronze division id in the standings feed.
pub const DIVISION_ID: &str = "8nLg9ZsBicTerF07t22O";

/// All dates and clock labels on the page are Eastern.
const TEAM_TZ: Tz = chrono_tz::America::New_York;

// ---------------------------------------------------------------------------
// Display model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameDisplay {
    pub date: String,
    pub time: String,
    pub opponent: String,
    /// "vs" when the tracked team is listed first, "@" otherwise.
    pub home_away: String,
    /// "72°F ⛅" style annotation; empty when unavailable or out of range.
    pub weather: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandingsRow {
    pub rank: usize,
    pub team: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub is_us: bool,
}

/// The complete display model for one aggregation cycle — the unit of
/// caching.
#[derive(Debug, Clone, Default)]
pub struct PageSnapshot {
    pub team_name: String,
    pub roster: Vec<RosterEntry>,
    pub games: Vec<GameDisplay>,
    pub standings: Vec<StandingsRow>,
    /// Human-readable "as of" clock label, Eastern.
    pub updated: String,
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Assemble the page model from whatever the upstreams produced. A failed
/// source degrades to an empty section; the page itself always builds.
pub fn build_snapshot(sources: SourceData, now: DateTime<Utc>) -> PageSnapshot {
    let roster = sources.roster.unwrap_or_default();
    let raw_games = sources.schedule.unwrap_or_default();
    let divisions = sources.standings.unwrap_or_default();
    let forecast = sources.forecast.unwrap_or_default();

    PageSnapshot {
        team_name: TEAM_NAME.to_owned(),
        roster,
        games: map_games(&raw_games, &forecast, now),
        standings: map_standings(&divisions),
        updated: now.with_timezone(&TEAM_TZ).format("%-I:%M %p").to_string(),
    }
}

pub fn map_games(raw: &[RawGame], forecast: &HourlyForecast, now: DateTime<Utc>) -> Vec<GameDisplay> {
    raw.iter().map(|g| map_game(g, forecast, now)).collect()
}

fn map_game(g: &RawGame, forecast: &HourlyForecast, now: DateTime<Utc>) -> GameDisplay {
    // A malformed start time renders as the epoch rather than dropping the
    // game.
    let start = DateTime::parse_from_rfc3339(&g.start_time)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH);
    let local = start.with_timezone(&TEAM_TZ);

    // Tracked team listed first → home ("vs"); otherwise we travel ("@").
    let (opponent, home_away) = if g.team1.name == TEAM_NAME {
        (g.team2.name.clone(), "vs")
    } else {
        (g.team1.name.clone(), "@")
    };

    GameDisplay {
        date: local.format("%a, %b %d").to_string(),
        time: local.format("%-I:%M %p").to_string(),
        opponent,
        home_away: home_away.to_owned(),
        weather: weather_label(local, forecast, now),
    }
}

/// Forecast annotation for one game, or empty. Only games starting within
/// the next 7 days get one; the forecast horizon ends there and past games
/// have nothing to forecast.
fn weather_label(game_time: DateTime<Tz>, forecast: &HourlyForecast, now: DateTime<Utc>) -> String {
    let lead = game_time.with_timezone(&Utc) - now;
    if lead < Duration::zero() || lead > Duration::days(7) {
        return String::new();
    }

    // Forecast timestamps are zone-local strings; match on the hour prefix.
    let prefix = game_time.format("%Y-%m-%dT%H").to_string();
    let Some(i) = forecast.times.iter().position(|t| t.starts_with(&prefix)) else {
        return String::new();
    };
    match (forecast.temps_f.get(i), forecast.codes.get(i)) {
        (Some(temp), Some(code)) => format!("{temp:.0}°F {}", weather_emoji(*code)),
        _ => String::new(),
    }
}

fn weather_emoji(code: i64) -> &'static str {
    match code {
        0 => "☀️",
        1..=3 => "⛅",
        45..=48 => "🌫️",
        51..=67 => "🌧️",
        71..=77 => "❄️",
        95.. => "⛈️",
        _ => "🌡️",
    }
}

/// Standings rows for the tracked division, ranked by upstream order. An
/// unmatched division id yields an empty list, not an error.
pub fn map_standings(divisions: &[Division]) -> Vec<StandingsRow> {
    let Some(division) = divisions.iter().find(|d| d.id == DIVISION_ID) else {
        return Vec::new();
    };

    division
        .records
        .iter()
        .enumerate()
        .map(|(i, team)| StandingsRow {
            rank: i + 1,
            team: team.name.clone(),
            games_played: team.wins + team.losses + team.ties,
            wins: team.wins,
            losses: team.losses,
            ties: team.ties,
            is_us: team.name == TEAM_NAME,
        })
        .collect()
}
