//! メールスキャン画面
//!
//! 画面状態は `ScannerState` の1つのシグナルで持ち、
//! イベントごとに遷移関数の結果で置き換える。

use leptos::*;

use crate::components::{ResultCard, VerdictBanner};
use crate::state::{HistoryStatus, ScannerState};
use crate::utils::api;
use crate::utils::log_trace::{log_error, log_info, log_info_with_data, log_warn};
use crate::verdict::is_overall_legit;
use super::HistoryPanel;

#[component]
pub fn EmailScanner(api_base: String) -> impl IntoView {
    let api_base = store_value(api_base);
    let (state, set_state) = create_signal(ScannerState::default());
    let (email_text, set_email_text) = create_signal(String::new());

    let scanning = create_memo(move |_| state.with(|s| s.scanning));
    let history = create_memo(move |_| state.with(|s| s.history.clone()));

    // 起動時に履歴を読み込む（失敗は画面に出さない）
    spawn_local(async move {
        match api::fetch_history(&api_base.get_value()).await {
            Ok(entries) => {
                log_info("history", &format!("履歴を{}件読み込みました", entries.len()));
                set_state.update(|s| *s = s.history_loaded(entries));
            }
            Err(e) => {
                log_error("history", &format!("履歴の取得に失敗: {}", e.detail()));
                set_state.update(|s| *s = s.history_failed());
            }
        }
    });

    let on_scan = move |_| {
        let (next, request) = state.with_untracked(|s| s.submit(&email_text.get_untracked()));
        set_state.set(next);

        let Some(request) = request else {
            if let Some(e) = state.with_untracked(|s| s.error.clone()) {
                log_warn("scan", &e);
            }
            return;
        };

        spawn_local(async move {
            log_info("scan", &format!("スキャン開始 ({}文字)", request.email.chars().count()));
            match api::submit_scan(&api_base.get_value(), &request).await {
                Ok(response) => {
                    let labels = serde_json::json!({
                        "spam": response.spam.as_ref().map(|r| r.label.clone()),
                        "phishing": response.phishing.as_ref().map(|r| r.label.clone()),
                    });
                    log_info_with_data("scan", "スキャン完了", labels);
                    set_state.update(|s| *s = s.scan_succeeded(response));
                }
                Err(e) => {
                    log_error("scan", &format!("スキャン失敗: {}", e.detail()));
                    set_state.update(|s| *s = s.scan_failed(&e));
                }
            }
        });
    };

    view! {
        <div class="scanner">
            <div class="card">
                <div class="form-group">
                    <label for="emailText">"Paste Email Content:"</label>
                    <textarea id="emailText"
                        placeholder="e.g., Hello user, click here to claim your prize..."
                        prop:value=move || email_text.get()
                        on:input=move |ev| set_email_text.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <button class="scan-btn" on:click=on_scan disabled=move || scanning.get()>
                    {move || scanning.get().then(|| view! { <span class="spinner"></span> })}
                    <span>{move || if scanning.get() { "Scanning..." } else { "Scan Email" }}</span>
                </button>

                {move || state.with(|s| s.error.clone()).map(|e| view! {
                    <div class="error">{e}</div>
                })}
            </div>

            {move || state.with(|s| s.results.clone()).map(|results| {
                let legit = is_overall_legit(&results);
                view! {
                    <div class="results">
                        <h2>"Scan Results"</h2>
                        <div class="results-grid">
                            {results.results().map(|(category, result)| view! {
                                <ResultCard category=category result=result.clone() />
                            }).collect_view()}
                        </div>
                        <VerdictBanner legit=legit />
                    </div>
                }
            })}

            {move || (state.with(|s| s.history_status) == HistoryStatus::Loading).then(|| view! {
                <p class="history-loading">"Loading history..."</p>
            })}

            <HistoryPanel history=history />
        </div>
    }
}
