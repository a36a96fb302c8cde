//! ユーティリティモジュール

pub mod api;
pub mod config;
pub mod download;
pub mod format;
pub mod log_trace;
