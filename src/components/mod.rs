//! UIコンポーネントモジュール

pub mod history_summary;
pub mod history_table;
pub mod result_card;
pub mod verdict_banner;

pub use history_summary::HistorySummaryBar;
pub use history_table::HistoryTable;
pub use result_card::ResultCard;
pub use verdict_banner::VerdictBanner;
