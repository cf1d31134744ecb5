use crate::page::PageSnapshot;
use std::fmt::{self, Write};

/// Render the full single-page document: sticky tab bar, one card per
/// section, client-side tab switching. Presentation only — the snapshot is
/// taken as-is.
pub fn render_page(data: &PageSnapshot) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(16 * 1024);
    let team = escape(&data.team_name);

    write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n    <title>{team}</title>\n    \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n    \
         <style>{STYLE}</style>\n</head>\n<body>\n"
    )?;

    out.push_str(
        "\n    <div class=\"tabs\">\n        \
         <button class=\"tab-btn active\" onclick=\"openTab('games')\">Games</button>\n        \
         <button class=\"tab-btn\" onclick=\"openTab('standings')\">Standings</button>\n        \
         <button class=\"tab-btn\" onclick=\"openTab('roster')\">Roster</button>\n    </div>\n",
    );

    write!(out, "\n    <div class=\"container\">\n        <h1>{team}</h1>\n")?;

    write_games(&mut out, data)?;
    write_standings(&mut out, data)?;
    write_roster(&mut out, data)?;

    write!(
        out,
        "\n        <p class=\"footer\">Updated at {}</p>\n    </div>\n",
        escape(&data.updated)
    )?;

    write!(out, "\n    <script>{SCRIPT}</script>\n</body>\n</html>\n")?;
    Ok(out)
}

fn write_games(out: &mut String, data: &PageSnapshot) -> fmt::Result {
    out.push_str("\n        <div id=\"games\" class=\"tab-content active\">\n            <div class=\"card\">\n");
    if data.games.is_empty() {
        out.push_str("                <div class=\"empty\">No upcoming games found.</div>\n");
    }
    for game in &data.games {
        write!(
            out,
            "                <div class=\"game-row\">\n                    \
             <div class=\"date-box\">\n                        \
             <span class=\"date-day\">{}</span>\n                        \
             <span class=\"date-time\">{}</span>\n                    </div>\n                    \
             <div class=\"matchup\">\n                        \
             <span class=\"vs-badge\">{}</span> {}",
            escape(&game.date),
            escape(&game.time),
            escape(&game.home_away),
            escape(&game.opponent),
        )?;
        if !game.weather.is_empty() {
            write!(out, "\n                        <span class=\"weather\">{}</span>", escape(&game.weather))?;
        }
        out.push_str("\n                    </div>\n                </div>\n");
    }
    out.push_str("            </div>\n        </div>\n");
    Ok(())
}

fn write_standings(out: &mut String, data: &PageSnapshot) -> fmt::Result {
    out.push_str(
        "\n        <div id=\"standings\" class=\"tab-content\">\n            <div class=\"card\">\n                \
         <table>\n                    <thead>\n                        <tr>\n                            \
         <th class=\"text-left\">Team</th>\n                            <th>GP</th>\n                            \
         <th>W</th>\n                            <th>L</th>\n                            <th>T</th>\n                        \
         </tr>\n                    </thead>\n                    <tbody>\n",
    );
    for row in &data.standings {
        let class = if row.is_us { " class=\"my-team\"" } else { "" };
        write!(
            out,
            "                        <tr{class}>\n                            \
             <td class=\"text-left\">{}</td>\n                            \
             <td>{}</td>\n                            <td>{}</td>\n                            \
             <td>{}</td>\n                            <td>{}</td>\n                        </tr>\n",
            escape(&row.team),
            row.games_played,
            row.wins,
            row.losses,
            row.ties,
        )?;
    }
    out.push_str("                    </tbody>\n                </table>\n            </div>\n        </div>\n");
    Ok(())
}

fn write_roster(out: &mut String, data: &PageSnapshot) -> fmt::Result {
    out.push_str("\n        <div id=\"roster\" class=\"tab-content\">\n            <div class=\"card\">\n");
    for player in &data.roster {
        let jersey = if player.jersey.is_empty() {
            "--".to_owned()
        } else {
            format!("#{}", escape(&player.jersey))
        };
        write!(
            out,
            "                <div class=\"player-row\">\n                    <div>\n                        \
             <span class=\"jersey\">{jersey}</span>\n                        {} {}\n                    </div>\n                    \
             <div class=\"position\">{}</div>\n                </div>\n",
            escape(&player.first_name),
            escape(&player.last_name),
            escape(&player.position),
        )?;
    }
    out.push_str("            </div>\n        </div>\n");
    Ok(())
}

/// Minimal HTML entity escaping for text interpolated into the page.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; background: #f0f2f5; color: #333; margin: 0; padding: 0; }
        .container { max-width: 600px; margin: 0 auto; padding: 15px; }
        h1 { text-align: center; color: #003366; margin: 10px 0 20px 0; }

        .tabs { display: flex; background: white; border-bottom: 1px solid #ddd; position: sticky; top: 0; z-index: 100; }
        .tab-btn {
            flex: 1; text-align: center; padding: 15px; cursor: pointer;
            font-weight: 600; color: #666; border-bottom: 3px solid transparent;
            background: none; border-top: none; border-left: none; border-right: none;
            font-size: 1rem;
        }
        .tab-btn.active { color: #003366; border-bottom-color: #003366; }

        .tab-content { display: none; animation: fadeIn 0.3s; }
        .tab-content.active { display: block; }
        @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }

        .card { background: white; border-radius: 10px; box-shadow: 0 2px 5px rgba(0,0,0,0.05); margin-bottom: 10px; overflow: hidden; }
        table { width: 100%; border-collapse: collapse; font-size: 0.9em; }
        th { background: #f8f9fa; color: #666; font-weight: 600; text-align: center; padding: 12px 5px; border-bottom: 1px solid #eee; }
        td { padding: 12px 5px; text-align: center; border-bottom: 1px solid #eee; }
        th.text-left, td.text-left { text-align: left; padding-left: 15px; }
        .my-team { background-color: #e3f2fd; font-weight: bold; }

        .game-row { display: flex; align-items: center; padding: 15px; border-bottom: 1px solid #eee; }
        .date-box { background: #f8f9fa; border: 1px solid #e9ecef; border-radius: 6px; padding: 8px 12px; text-align: center; margin-right: 15px; min-width: 60px; }
        .date-day { font-weight: bold; display: block; font-size: 0.9em; }
        .date-time { font-size: 0.8em; color: #666; }
        .matchup { flex-grow: 1; font-weight: 500; }
        .vs-badge { font-size: 0.8em; background: #e9ecef; color: #555; padding: 2px 6px; border-radius: 4px; margin-right: 6px; }
        .weather { font-size: 0.85em; color: #666; margin-left: 8px; white-space: nowrap; }
        .empty { padding: 20px; text-align: center; color: #888; }

        .player-row { display: flex; justify-content: space-between; padding: 12px 15px; border-bottom: 1px solid #eee; }
        .jersey { font-weight: bold; color: #003366; width: 30px; display: inline-block; }
        .position { color: #888; font-size: 0.9em; }
        .footer { text-align: center; color: #999; font-size: 0.8em; margin-top: 30px; }
"#;

const SCRIPT: &str = r#"
        function openTab(tabName) {
            var contents = document.getElementsByClassName("tab-content");
            for (var i = 0; i < contents.length; i++) {
                contents[i].classList.remove("active");
            }
            var buttons = document.getElementsByClassName("tab-btn");
            for (var i = 0; i < buttons.length; i++) {
                buttons[i].classList.remove("active");
            }
            document.getElementById(tabName).classList.add("active");
            event.currentTarget.classList.add("active");
        }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{GameDisplay, StandingsRow, TEAM_NAME};
    use league_api::RosterEntry;

    fn base_snapshot() -> PageSnapshot {
        PageSnapshot {
            team_name: TEAM_NAME.to_owned(),
            updated: "3:04 PM".to_owned(),
            ..PageSnapshot::default()
        }
    }

    #[test]
    fn empty_snapshot_still_renders_a_full_page() {
        let html = render_page(&base_snapshot()).expect("render");
        assert!(html.contains("<title>Crease Crusaders</title>"));
        assert!(html.contains("No upcoming games found."));
        assert!(html.contains("Updated at 3:04 PM"));
    }

    #[test]
    fn game_rows_carry_badge_opponent_and_weather() {
        let mut data = base_snapshot();
        data.games.push(GameDisplay {
            date: "Fri, Feb 13".into(),
            time: "6:30 PM".into(),
            opponent: "Night Owls".into(),
            home_away: "@".into(),
            weather: "72°F ⛅".into(),
        });
        let html = render_page(&data).expect("render");
        assert!(html.contains("<span class=\"vs-badge\">@</span> Night Owls"));
        assert!(html.contains("<span class=\"weather\">72°F ⛅</span>"));
        assert!(!html.contains("No upcoming games found."));
    }

    #[test]
    fn tracked_team_standings_row_is_highlighted() {
        let mut data = base_snapshot();
        data.standings.push(StandingsRow {
            rank: 1,
            team: TEAM_NAME.into(),
            games_played: 8,
            wins: 5,
            losses: 2,
            ties: 1,
            is_us: true,
        });
        let html = render_page(&data).expect("render");
        assert!(html.contains("<tr class=\"my-team\">"));
    }

    #[test]
    fn missing_jersey_renders_the_placeholder() {
        let mut data = base_snapshot();
        data.roster.push(RosterEntry {
            first_name: "Rin".into(),
            last_name: "Okafor".into(),
            ..RosterEntry::default()
        });
        let html = render_page(&data).expect("render");
        assert!(html.contains("<span class=\"jersey\">--</span>"));
    }

    #[test]
    fn markup_in_upstream_names_is_escaped() {
        let mut data = base_snapshot();
        data.games.push(GameDisplay {
            opponent: "<b>Rivals & Co</b>".into(),
            home_away: "vs".into(),
            ..GameDisplay::default()
        });
        let html = render_page(&data).expect("render");
        assert!(html.contains("&lt;b&gt;Rivals &amp; Co&lt;/b&gt;"));
        assert!(!html.contains("<b>Rivals"));
    }
}
