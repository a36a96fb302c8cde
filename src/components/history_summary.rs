//! 履歴集計バー

use leptos::*;

use crate::history::HistorySummary;

#[component]
pub fn HistorySummaryBar(summary: HistorySummary) -> impl IntoView {
    view! {
        <div class="history-summary">
            <span class="summary-total">"Total: " {summary.total}</span>
            <span class="summary-spam">"Spam: " {summary.spam}</span>
            <span class="summary-phishing">"Phishing: " {summary.phishing}</span>
            <span class="summary-legit">"Legitimate: " {summary.legitimate}</span>
            <span class="summary-risk">
                <span class="risk-high">"High " {summary.high_risk}</span>
                <span class="risk-medium">"Medium " {summary.medium_risk}</span>
                <span class="risk-low">"Low " {summary.low_risk}</span>
            </span>
        </div>
    }
}
