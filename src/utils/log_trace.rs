//! 時系列トレースログ
//! 通信やUI操作のイベントを記録し、コンソールにも出力する

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::download::download_json;

const MAX_LOG_ENTRIES: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String, // "info", "warn", "error"
    pub category: String, // "history", "scan", "config", "export"
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub struct LogTrace {
    logs: VecDeque<LogEntry>,
}

impl LogTrace {
    pub fn new() -> Self {
        LogTrace {
            logs: VecDeque::with_capacity(MAX_LOG_ENTRIES),
        }
    }

    pub fn log(&mut self, level: &str, category: &str, message: &str, data: Option<serde_json::Value>) {
        let timestamp = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default();

        let line = format!("[{}] {}", category, message);
        match level {
            "error" => web_sys::console::error_1(&line.into()),
            "warn" => web_sys::console::warn_1(&line.into()),
            _ => web_sys::console::log_1(&line.into()),
        }

        self.push(LogEntry {
            timestamp,
            level: level.to_string(),
            category: category.to_string(),
            message: message.to_string(),
            data,
        });
    }

    fn push(&mut self, entry: LogEntry) {
        if self.logs.len() >= MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
        self.logs.push_back(entry);
    }

    pub fn get_logs_json(&self) -> String {
        let logs: Vec<&LogEntry> = self.logs.iter().collect();
        serde_json::to_string_pretty(&logs).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for LogTrace {
    fn default() -> Self {
        Self::new()
    }
}

// グローバルなログトレースインスタンス
thread_local! {
    static LOG_TRACE: std::cell::RefCell<LogTrace> = std::cell::RefCell::new(LogTrace::new());
}

pub fn log_info(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("info", category, message, None));
}

pub fn log_info_with_data(category: &str, message: &str, data: serde_json::Value) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("info", category, message, Some(data)));
}

pub fn log_warn(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("warn", category, message, None));
}

pub fn log_error(category: &str, message: &str) {
    LOG_TRACE.with(|trace| trace.borrow_mut().log("error", category, message, None));
}

/// ログをJSONファイルとしてダウンロード
pub fn download_logs() -> Result<(), String> {
    let json = LOG_TRACE.with(|trace| trace.borrow().get_logs_json());
    download_json("email_guard_log", &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "2026-01-01T00:00:00.000Z".to_string(),
            level: "info".to_string(),
            category: "scan".to_string(),
            message: message.to_string(),
            data: None,
        }
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut trace = LogTrace::new();
        for i in 0..(MAX_LOG_ENTRIES + 3) {
            trace.push(entry(&i.to_string()));
        }
        assert_eq!(trace.logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(trace.logs.front().map(|e| e.message.as_str()), Some("3"));
    }

    #[test]
    fn test_logs_json() {
        let mut trace = LogTrace::new();
        assert_eq!(trace.get_logs_json(), "[]");
        trace.push(entry("hello"));
        let parsed: Vec<LogEntry> = serde_json::from_str(&trace.get_logs_json()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].message, "hello");
    }
}
