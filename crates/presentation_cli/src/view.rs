//! Text rendering of the session state
//!
//! Pure functions from [`SessionState`] to the lines printed on stdout.

use std::fmt::{Display, Write};

use application::SessionState;
use chrono::{DateTime, Local, TimeZone, Utc};
use domain::{SearchHistory, WeatherSnapshot};

const PLACEHOLDER: &str = "N/A";

/// Timestamp layout shared by the weather block and the history list
const TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

/// Render a full frame in the local time zone
pub fn render(state: &SessionState) -> String {
    render_in(state, &Local)
}

/// Render a full frame with timestamps shown in `tz`
pub fn render_in<Tz>(state: &SessionState, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();

    if state.is_loading {
        let location = state
            .current_location
            .as_ref()
            .map_or(PLACEHOLDER, |k| k.as_str());
        let _ = writeln!(out, "Loading {location}...");
    } else if let Some(failure) = state.last_error {
        let _ = writeln!(out, "{failure}");
    }

    out.push('\n');
    out.push_str(&render_weather(state.current_snapshot.as_ref(), tz));
    out.push('\n');
    out.push_str(&render_history(&state.history, tz));
    out
}

/// The "Today's Weather" block
pub fn render_weather<Tz>(snapshot: Option<&WeatherSnapshot>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::from("Today's Weather\n");

    let lines = snapshot.map_or_else(
        || {
            [
                PLACEHOLDER.to_string(),
                format!("High: {PLACEHOLDER} | Low: {PLACEHOLDER}"),
                format!("Location: {PLACEHOLDER}"),
                format!("Date: {PLACEHOLDER}"),
                format!("Humidity: {PLACEHOLDER}"),
                format!("Condition: {PLACEHOLDER}"),
            ]
        },
        |s| {
            [
                format!("{}°", s.temperature_c),
                format!("H: {}° | L: {}°", s.temperature_max_c, s.temperature_min_c),
                s.place_label(),
                format_timestamp(&s.observed_at, tz),
                format!("Humidity: {}", s.humidity),
                s.condition_label(),
            ]
        },
    );

    for line in lines {
        let _ = writeln!(out, "  {line}");
    }
    out
}

/// The "Search history" list, numbered from 1
pub fn render_history<Tz>(history: &SearchHistory, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::from("Search history\n");

    if history.is_empty() {
        out.push_str("  No History Available\n");
        return out;
    }

    for (n, entry) in history.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {}  {}",
            n + 1,
            entry.label(),
            format_timestamp(&entry.searched_at, tz)
        );
    }
    out
}

fn format_timestamp<Tz>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
}
