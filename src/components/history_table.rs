//! スキャン履歴テーブル

use leptos::*;

use crate::models::{Category, ClassificationResult, HistoryEntry};
use crate::utils::format::{email_snippet, probability_summary, SNIPPET_CHARS};
use crate::verdict::label_severity;

/// 履歴テーブル（渡された順に表示。呼び出し側で新しい順にしておく）
#[component]
pub fn HistoryTable(entries: Vec<HistoryEntry>) -> impl IntoView {
    view! {
        <table class="history-table">
            <thead>
                <tr>
                    <th>{Category::Spam.column_name()}" Label"</th>
                    <th>{Category::Spam.column_name()}" Probabilities"</th>
                    <th>{Category::Phishing.column_name()}" Label"</th>
                    <th>{Category::Phishing.column_name()}" Probabilities"</th>
                    <th>"Email Snippet"</th>
                </tr>
            </thead>
            <tbody>
                {entries.into_iter().enumerate().map(|(index, entry)| view! {
                    <tr class={if index % 2 == 0 { "row-alt" } else { "" }}>
                        <LabelCell result=entry.spam.clone() />
                        <td>{entry.spam.as_ref().map(|r| probability_summary(&r.probabilities))}</td>
                        <LabelCell result=entry.phishing.clone() />
                        <td>{entry.phishing.as_ref().map(|r| probability_summary(&r.probabilities))}</td>
                        <td class="email-snippet">{email_snippet(&entry.email, SNIPPET_CHARS)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn LabelCell(result: Option<ClassificationResult>) -> impl IntoView {
    match result {
        Some(r) => {
            let class = label_severity(&r.label).css_class();
            view! { <td class=class>{r.label}</td> }
        }
        None => view! { <td class="empty">"−"</td> },
    }
}
