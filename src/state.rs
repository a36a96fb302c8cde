//! スキャン画面の状態
//!
//! 画面状態は `ScannerState` のスナップショットとして持ち、
//! 送信・成功・失敗・履歴読込の各イベントで遷移関数から新しい値を作る。
//! 遷移関数はブラウザAPIに触れない。

use crate::error::ScanError;
use crate::models::{HistoryEntry, ScanRequest, ScanResponse};

/// 履歴の読込状況
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryStatus {
    #[default]
    Loading,
    Ready,
    /// 読込失敗（画面には出さない）
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScannerState {
    /// 直近のスキャン結果
    pub results: Option<ScanResponse>,
    /// 新しい順
    pub history: Vec<HistoryEntry>,
    pub error: Option<String>,
    pub scanning: bool,
    pub history_status: HistoryStatus,
    /// このセッションで先頭に追加した件数
    session_scans: usize,
}

impl ScannerState {
    /// 送信要求。リクエストを返したときだけ通信を行う
    pub fn submit(&self, email_text: &str) -> (ScannerState, Option<ScanRequest>) {
        if self.scanning {
            return (self.clone(), None);
        }

        let mut next = self.clone();
        if email_text.trim().is_empty() {
            next.error = Some(ScanError::EmptyInput.to_string());
            return (next, None);
        }

        next.error = None;
        next.scanning = true;
        let request = ScanRequest {
            email: email_text.to_string(),
        };
        (next, Some(request))
    }

    pub fn scan_succeeded(&self, response: ScanResponse) -> ScannerState {
        let mut next = self.clone();
        next.scanning = false;
        next.error = None;
        next.history.insert(0, response.clone());
        next.results = Some(response);
        next.session_scans += 1;
        next
    }

    /// 失敗時は結果と履歴を変えない
    pub fn scan_failed(&self, err: &ScanError) -> ScannerState {
        let mut next = self.clone();
        next.scanning = false;
        next.error = Some(err.to_string());
        next
    }

    /// 起動時の履歴読込完了。エンドポイントの順を反転し、
    /// 先に終わったセッション中のスキャンの後ろに並べる。
    /// バックエンドは応答前に履歴へ追記するので、セッション分と同じ行は
    /// 1件ずつ読込側から除く
    pub fn history_loaded(&self, mut entries: Vec<HistoryEntry>) -> ScannerState {
        let mut next = self.clone();
        next.history.truncate(self.session_scans);
        for session_entry in &next.history {
            if let Some(pos) = entries.iter().rposition(|e| e == session_entry) {
                entries.remove(pos);
            }
        }
        next.history.extend(entries.into_iter().rev());
        next.history_status = HistoryStatus::Ready;
        next
    }

    pub fn history_failed(&self) -> ScannerState {
        let mut next = self.clone();
        next.history_status = HistoryStatus::Unavailable;
        next
    }
}
