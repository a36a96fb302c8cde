//! スキャン履歴パネル
//!
//! 検索・集計・エクスポート付きの履歴表示

use leptos::*;

use crate::components::{HistorySummaryBar, HistoryTable};
use crate::history::{filter_history, HistorySummary};
use crate::models::HistoryEntry;
use crate::utils::download::{download_json, now_iso};
use crate::utils::log_trace::{log_error, log_info};

/// 履歴をエクスポート用JSONにする
fn export_payload(entries: &[HistoryEntry], exported_at: &str) -> serde_json::Result<String> {
    let payload = serde_json::json!({
        "exported_at": exported_at,
        "total": entries.len(),
        "summary": HistorySummary::from_entries(entries),
        "entries": entries,
    });
    serde_json::to_string_pretty(&payload)
}

#[component]
pub fn HistoryPanel(#[prop(into)] history: Signal<Vec<HistoryEntry>>) -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let (export_done, set_export_done) = create_signal(false);

    let has_history = create_memo(move |_| history.with(|h| !h.is_empty()));
    let summary = create_memo(move |_| history.with(|h| HistorySummary::from_entries(h)));
    let filtered = create_memo(move |_| {
        let q = query.get();
        history.with(|h| filter_history(h, &q).into_iter().cloned().collect::<Vec<_>>())
    });

    let on_export = move |_| {
        let result = history.with_untracked(|h| {
            export_payload(h, &now_iso())
                .map_err(|e| format!("JSON生成失敗: {}", e))
                .and_then(|json| download_json("scan_history", &json))
                .map(|_| h.len())
        });
        match result {
            Ok(count) => {
                log_info("export", &format!("履歴を{}件エクスポートしました", count));
                set_export_done.set(true);
                // 2秒後にリセット
                spawn_local(async move {
                    gloo::timers::future::TimeoutFuture::new(2000).await;
                    set_export_done.set(false);
                });
            }
            Err(e) => log_error("export", &e),
        }
    };

    view! {
        {move || has_history.get().then(|| view! {
            <div class="history-table-wrapper">
                <div class="history-header">
                    <h2>"Scan History"</h2>
                    <button class="export-btn" on:click=on_export>
                        {move || if export_done.get() { "Exported!" } else { "Export JSON" }}
                    </button>
                </div>

                {move || view! { <HistorySummaryBar summary=summary.get() /> }}

                <input type="search" class="history-search"
                    placeholder="Search email text, labels or descriptions"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev)) />

                {move || {
                    let entries = filtered.get();
                    if entries.is_empty() {
                        view! { <p class="history-empty">"No matching scans."</p> }.into_view()
                    } else {
                        view! { <HistoryTable entries=entries /> }.into_view()
                    }
                }}
            </div>
        })}
    }
}
