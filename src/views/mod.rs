//! ビューモジュール

pub mod history_panel;
pub mod scanner;

pub use history_panel::HistoryPanel;
pub use scanner::EmailScanner;
