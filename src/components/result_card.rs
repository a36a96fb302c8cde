//! 判定結果カードコンポーネント

use leptos::*;

use crate::models::{Category, ClassificationResult};
use crate::utils::format::format_percent;
use crate::verdict::{label_severity, threat_probability, RiskLevel};

/// spam / phishing の判定結果カード
/// ラベルで色分けし、危険カテゴリの確率があればリスクバッジを出す
#[component]
pub fn ResultCard(category: Category, result: ClassificationResult) -> impl IntoView {
    let severity = label_severity(&result.label);
    let risk = threat_probability(&result).map(RiskLevel::from_probability);
    let ClassificationResult { label, probabilities, description } = result;

    view! {
        <div class=format!("result-card {}", category.css_class())>
            <div class="result-card-header">
                <span class=format!("status-indicator indicator-{}", category.css_class())></span>
                <h4>{category.title()}</h4>
                {risk.map(|r| view! {
                    <span class=format!("risk-badge {}", r.css_class())>{r.label()}</span>
                })}
            </div>

            <div class="result-details">
                <div class="result-row">
                    <span class="result-label">"Status:"</span>
                    <span class=format!("result-value {}", severity.css_class())>{label}</span>
                </div>

                {probabilities.into_iter().map(|(name, p)| view! {
                    <div class="result-row">
                        <span class="result-label">{name}":"</span>
                        <span class="result-value">{format_percent(p)}</span>
                    </div>
                }).collect_view()}

                {(!description.is_empty()).then(|| view! {
                    <div class="result-description">{description}</div>
                })}
            </div>
        </div>
    }
}
