//! Domain entities

mod history_entry;
mod search_history;
mod weather_snapshot;

pub use history_entry::HistoryEntry;
pub use search_history::SearchHistory;
pub use weather_snapshot::WeatherSnapshot;
