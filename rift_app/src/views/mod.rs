//! Views rendered by the app's routes.

pub mod champion;
mod dashboard;

pub use champion::ChampionView;
pub use dashboard::Dashboard;
