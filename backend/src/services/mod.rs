//! Business logic services for the AgriSat mock backend

pub mod analysis;
pub mod history;
pub mod info;
pub mod weather;

pub use analysis::FieldAnalysisService;
pub use history::FieldHistoryService;
pub use weather::WeatherService;
