//! 判定結果の解釈
//!
//! ラベル文字列と確率から表示用の区分を導く純粋関数群。
//! バックエンドのラベル語彙は決まっていないため、文字列判定は
//! 「"not" を含む」「"legit" と一致」をそのまま使う。

use crate::models::{ClassificationResult, ScanResponse};

// ============================================
// ラベル区分
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Danger,
    Success,
    Warning,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Danger => "status-danger",
            Severity::Success => "status-success",
            Severity::Warning => "status-warning",
        }
    }
}

/// ラベルの色分け区分
pub fn label_severity(label: &str) -> Severity {
    let lower = label.to_lowercase();
    if lower == "spam" || lower == "phishing" {
        Severity::Danger
    } else if is_legit_label(label) {
        Severity::Success
    } else {
        Severity::Warning
    }
}

/// "not" を含むか "legit" と一致すれば正常扱い
pub fn is_legit_label(label: &str) -> bool {
    let lower = label.to_lowercase();
    lower.contains("not") || lower == "legit"
}

// ============================================
// リスクレベル
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// 境界値は下の区分に入る（0.8 → Medium, 0.5 → Low）
    pub fn from_probability(p: f64) -> Self {
        if p > 0.8 {
            RiskLevel::High
        } else if p > 0.5 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::Low => "Low Risk",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::High => "risk-high",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::Low => "risk-low",
        }
    }
}

/// 危険カテゴリ名（spam / phishing）に付いた確率の最大値
pub fn threat_probability(result: &ClassificationResult) -> Option<f64> {
    result
        .probabilities
        .iter()
        .filter(|(name, _)| label_severity(name) == Severity::Danger)
        .map(|(_, p)| *p)
        .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |a| a.max(p))))
}

/// レスポンス全体での最大脅威確率
pub fn max_threat_probability(response: &ScanResponse) -> Option<f64> {
    response
        .results()
        .filter_map(|(_, r)| threat_probability(r))
        .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |a| a.max(p))))
}

/// 存在する判定がすべて正常ラベルなら true（判定が一つも無ければ false）
pub fn is_overall_legit(response: &ScanResponse) -> bool {
    let mut any = false;
    for (_, result) in response.results() {
        if !is_legit_label(&result.label) {
            return false;
        }
        any = true;
    }
    any
}

/// 正常判定でない場合に表示する注意事項
pub const SECURITY_TIPS: [&str; 4] = [
    "Always verify the sender's identity before clicking links.",
    "Be cautious with urgent or threatening language.",
    "Check URL destinations before entering credentials.",
    "If in doubt, verify through a trusted channel.",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: &str, probs: &[(&str, f64)]) -> ClassificationResult {
        ClassificationResult {
            label: label.to_string(),
            probabilities: probs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            description: String::new(),
        }
    }

    #[test]
    fn test_label_severity() {
        assert_eq!(label_severity("spam"), Severity::Danger);
        assert_eq!(label_severity("PHISHING"), Severity::Danger);
        assert_eq!(label_severity("not spam"), Severity::Success);
        assert_eq!(label_severity("Not Phishing"), Severity::Success);
        assert_eq!(label_severity("legit"), Severity::Success);
        assert_eq!(label_severity("suspicious"), Severity::Warning);
        assert_eq!(label_severity("spammy"), Severity::Warning);
        assert_eq!(label_severity(""), Severity::Warning);
    }

    #[test]
    fn test_legit_heuristic_is_substring_based() {
        // "not" の部分一致はそのまま残す
        assert!(is_legit_label("nothing suspicious"));
        assert!(is_legit_label("LEGIT"));
        assert!(!is_legit_label("legitimate"));
        assert!(!is_legit_label("ham"));
    }

    #[test]
    fn test_risk_levels() {
        assert_eq!(RiskLevel::from_probability(0.85).label(), "High Risk");
        assert_eq!(RiskLevel::from_probability(0.6).label(), "Medium Risk");
        assert_eq!(RiskLevel::from_probability(0.3).label(), "Low Risk");
    }

    #[test]
    fn test_risk_boundaries_are_strict() {
        assert_eq!(RiskLevel::from_probability(0.8), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_probability(0.5), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(1.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
    }

    #[test]
    fn test_threat_probability_uses_danger_categories() {
        let r = result("spam", &[("spam", 0.7), ("not spam", 0.3)]);
        assert_eq!(threat_probability(&r), Some(0.7));

        let r = result("ham", &[("ham", 0.9), ("other", 0.1)]);
        assert_eq!(threat_probability(&r), None);
    }

    #[test]
    fn test_max_threat_probability_across_results() {
        let resp = ScanResponse {
            spam: Some(result("not spam", &[("spam", 0.2), ("not spam", 0.8)])),
            phishing: Some(result("phishing", &[("phishing", 0.9)])),
            email: String::new(),
        };
        assert_eq!(max_threat_probability(&resp), Some(0.9));
        assert_eq!(max_threat_probability(&ScanResponse::default()), None);
    }

    #[test]
    fn test_overall_legit_requires_all_present_results() {
        let both_ok = ScanResponse {
            spam: Some(result("not spam", &[])),
            phishing: Some(result("legit", &[])),
            email: String::new(),
        };
        assert!(is_overall_legit(&both_ok));

        let one_bad = ScanResponse {
            spam: Some(result("not spam", &[])),
            phishing: Some(result("phishing", &[])),
            email: String::new(),
        };
        assert!(!is_overall_legit(&one_bad));

        let unknown = ScanResponse {
            spam: Some(result("unsure", &[])),
            ..Default::default()
        };
        assert!(!is_overall_legit(&unknown));
    }

    #[test]
    fn test_overall_legit_ignores_absent_results() {
        let only_spam = ScanResponse {
            spam: Some(result("Not Spam", &[])),
            ..Default::default()
        };
        assert!(is_overall_legit(&only_spam));
        assert!(!is_overall_legit(&ScanResponse::default()));
    }
}
