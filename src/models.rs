//! データ構造体モジュール

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ScanError;

// ============================================
// スキャンAPI用データ構造
// ============================================

/// `POST /scan` のリクエストボディ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanRequest {
    pub email: String,
}

/// カテゴリ（spam / phishing）ごとの判定結果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClassificationResult {
    #[serde(default)]
    pub label: String,
    /// カテゴリ名 → 確率。キー順で表示する
    #[serde(default)]
    pub probabilities: BTreeMap<String, f64>,
    #[serde(default)]
    pub description: String,
}

impl ClassificationResult {
    /// 確率値がすべて [0, 1] の有限値か
    pub fn has_valid_probabilities(&self) -> bool {
        self.probabilities
            .values()
            .all(|p| p.is_finite() && (0.0..=1.0).contains(p))
    }
}

/// `POST /scan` の成功レスポンス。どちらの判定も欠ける場合がある
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScanResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spam: Option<ClassificationResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phishing: Option<ClassificationResult>,
    #[serde(default)]
    pub email: String,
}

/// 履歴の1行。形はスキャンレスポンスと同じ
pub type HistoryEntry = ScanResponse;

impl ScanResponse {
    /// 存在する判定結果をカテゴリ付きで返す（spam → phishing の順）
    pub fn results(&self) -> impl Iterator<Item = (Category, &ClassificationResult)> {
        [
            (Category::Spam, self.spam.as_ref()),
            (Category::Phishing, self.phishing.as_ref()),
        ]
        .into_iter()
        .filter_map(|(category, result)| result.map(|r| (category, r)))
    }

    pub fn is_well_formed(&self) -> bool {
        self.results().all(|(_, r)| r.has_valid_probabilities())
    }

    /// 確率が範囲外ならレスポンス不正
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(ScanError::MalformedResponse(
                "Classification probabilities are out of range".to_string(),
            ))
        }
    }
}

/// 履歴を1件ずつデコードし、読めない行と確率が不正な行を除く。
/// 戻り値は (残った履歴, 除外件数)
pub fn decode_history(values: Vec<serde_json::Value>) -> (Vec<HistoryEntry>, usize) {
    let total = values.len();
    let entries: Vec<HistoryEntry> = values
        .into_iter()
        .filter_map(|v| serde_json::from_value::<HistoryEntry>(v).ok())
        .filter(|e| e.is_well_formed())
        .collect();
    let dropped = total - entries.len();
    (entries, dropped)
}

/// 非2xxレスポンスのボディ
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// ============================================
// 判定カテゴリ
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Spam,
    Phishing,
}

impl Category {
    pub fn title(self) -> &'static str {
        match self {
            Category::Spam => "Spam Detection",
            Category::Phishing => "Phishing Detection",
        }
    }

    pub fn column_name(self) -> &'static str {
        match self {
            Category::Spam => "Spam",
            Category::Phishing => "Phishing",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Category::Spam => "spam",
            Category::Phishing => "phishing",
        }
    }
}
