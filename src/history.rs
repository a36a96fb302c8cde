//! スキャン履歴の検索と集計

use serde::Serialize;

use crate::models::HistoryEntry;
use crate::utils::format::unescape_html;
use crate::verdict::{is_overall_legit, label_severity, max_threat_probability, RiskLevel, Severity};

/// クエリに一致する履歴を順序を保ったまま返す。空クエリは全件
pub fn filter_history<'a>(entries: &'a [HistoryEntry], query: &str) -> Vec<&'a HistoryEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return entries.iter().collect();
    }
    entries.iter().filter(|e| matches_query(e, &query)).collect()
}

// queryは小文字化済み。本文は表示と同じく実体参照を戻してから比較する
fn matches_query(entry: &HistoryEntry, query: &str) -> bool {
    if unescape_html(&entry.email).to_lowercase().contains(query) {
        return true;
    }
    entry.results().any(|(_, r)| {
        r.label.to_lowercase().contains(query) || r.description.to_lowercase().contains(query)
    })
}

/// 履歴全体の集計
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistorySummary {
    pub total: usize,
    pub spam: usize,
    pub phishing: usize,
    pub legitimate: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
}

impl HistorySummary {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let mut summary = HistorySummary {
            total: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            if is_danger(entry.spam.as_ref().map(|r| r.label.as_str())) {
                summary.spam += 1;
            }
            if is_danger(entry.phishing.as_ref().map(|r| r.label.as_str())) {
                summary.phishing += 1;
            }
            if is_overall_legit(entry) {
                summary.legitimate += 1;
            }
            // 脅威確率が無い行は集計しない
            match max_threat_probability(entry).map(RiskLevel::from_probability) {
                Some(RiskLevel::High) => summary.high_risk += 1,
                Some(RiskLevel::Medium) => summary.medium_risk += 1,
                Some(RiskLevel::Low) => summary.low_risk += 1,
                None => {}
            }
        }

        summary
    }
}

fn is_danger(label: Option<&str>) -> bool {
    label.map(label_severity) == Some(Severity::Danger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassificationResult, ScanResponse};

    fn result(label: &str, probs: &[(&str, f64)], description: &str) -> ClassificationResult {
        ClassificationResult {
            label: label.to_string(),
            probabilities: probs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            description: description.to_string(),
        }
    }

    fn sample() -> Vec<HistoryEntry> {
        vec![
            ScanResponse {
                spam: Some(result("spam", &[("spam", 0.95), ("not spam", 0.05)], "promotional")),
                phishing: Some(result("not phishing", &[("phishing", 0.3)], "")),
                email: "Claim your FREE prize".to_string(),
            },
            ScanResponse {
                spam: Some(result("not spam", &[("spam", 0.1)], "")),
                phishing: Some(result("phishing", &[("phishing", 0.65)], "credential request")),
                email: "Reset your password".to_string(),
            },
            ScanResponse {
                spam: Some(result("not spam", &[("spam", 0.05)], "")),
                phishing: Some(result("not phishing", &[("phishing", 0.02)], "")),
                email: "Lunch today?".to_string(),
            },
            ScanResponse {
                spam: Some(result("unknown", &[("ham", 1.0)], "")),
                phishing: None,
                email: "???".to_string(),
            },
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let entries = sample();
        let found = filter_history(&entries, "  ");
        assert_eq!(found.len(), 4);
        assert_eq!(found[0].email, "Claim your FREE prize");
    }

    #[test]
    fn test_query_matches_email_case_insensitive() {
        let entries = sample();
        let found = filter_history(&entries, "free");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].email, "Claim your FREE prize");
    }

    #[test]
    fn test_query_matches_displayed_email_text() {
        let entries = vec![ScanResponse {
            email: "Tom &amp; Jerry &lt;deals&gt;".to_string(),
            ..Default::default()
        }];
        assert_eq!(filter_history(&entries, "tom & jerry").len(), 1);
        assert_eq!(filter_history(&entries, "<DEALS>").len(), 1);
        // エスケープ表記自体には一致しない
        assert!(filter_history(&entries, "amp").is_empty());
    }

    #[test]
    fn test_query_matches_labels_and_descriptions() {
        let entries = sample();
        let found = filter_history(&entries, "Credential");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].email, "Reset your password");

        // "phishing" はラベル "not phishing" にも一致する
        let found = filter_history(&entries, "phishing");
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_summary_counts() {
        let summary = HistorySummary::from_entries(&sample());
        assert_eq!(summary.total, 4);
        assert_eq!(summary.spam, 1);
        assert_eq!(summary.phishing, 1);
        assert_eq!(summary.legitimate, 1);
        assert_eq!(summary.high_risk, 1);
        assert_eq!(summary.medium_risk, 1);
        assert_eq!(summary.low_risk, 1);
    }

    #[test]
    fn test_summary_of_empty_history() {
        assert_eq!(HistorySummary::from_entries(&[]), HistorySummary::default());
    }
}
