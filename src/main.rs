mod components;
mod error;
mod history;
mod models;
mod state;
mod utils;
mod verdict;
mod views;

use leptos::*;

use utils::config;
use utils::log_trace::{download_logs, log_error, log_info};
use views::EmailScanner;

// ============================================
// メインアプリ
// ============================================

#[component]
fn App() -> impl IntoView {
    let api_base = config::api_base();
    log_info("config", &format!("APIベースURL: {}", api_base));

    let on_download_logs = move |_| {
        if let Err(e) = download_logs() {
            log_error("export", &format!("ログのダウンロードに失敗: {}", e));
        }
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Email Security Scanner"</h1>
                <p class="subtitle">"Detect spam and phishing risks in emails"</p>
            </header>

            <main class="container">
                <EmailScanner api_base=api_base />
            </main>

            <footer class="app-footer">
                <button class="link-btn" on:click=on_download_logs>"Download diagnostic log"</button>
            </footer>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    // ?api=xxx で開かれた場合は保存してURLから消す
    config::init_api_base_from_url_params();
    mount_to_body(App);
}
