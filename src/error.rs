//! スキャン関連のエラー定義

use thiserror::Error;

/// サーバーがメッセージを返さなかった場合の表示文言
pub const GENERIC_SCAN_ERROR: &str = "Error scanning email";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    /// 入力が空（送信前に弾く）
    #[error("Please enter email text.")]
    EmptyInput,
    /// fetch自体の失敗
    #[error("{0}")]
    Transport(String),
    /// 非2xxレスポンス
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_SCAN_ERROR))]
    Server { status: u16, message: Option<String> },
    #[error("{0}")]
    MalformedResponse(String),
}

impl ScanError {
    /// 非2xxレスポンスから作る。空文字のメッセージは無いものとして扱う
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        ScanError::Server { status, message }
    }

    /// ログ用の詳細（ステータス付き）
    pub fn detail(&self) -> String {
        match self {
            ScanError::Server { status, .. } => format!("HTTP {}: {}", status, self),
            ScanError::Transport(_) => format!("通信エラー: {}", self),
            ScanError::MalformedResponse(_) => format!("レスポンス不正: {}", self),
            ScanError::EmptyInput => self.to_string(),
        }
    }
}
