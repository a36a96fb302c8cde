//! APIベースURLの設定
//!
//! 優先順: localStorageの保存値 > ビルド時の `EMAIL_GUARD_API_BASE` > 既定値。
//! `?api=xxx` で開くと保存値を更新する。

use wasm_bindgen::prelude::*;

use super::log_trace::{log_info, log_warn};

pub const DEFAULT_API_BASE: &str = "http://172.17.0.2:5000";
const API_BASE_KEY: &str = "email_guard_api_base";

/// ビルド時に埋め込まれたベースURL
fn compiled_api_base() -> Option<&'static str> {
    option_env!("EMAIL_GUARD_API_BASE")
}

/// 保存値・ビルド時値から実際に使うベースURLを決める
pub fn resolve_api_base(stored: Option<String>, compiled: Option<&str>) -> String {
    stored
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| compiled.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// ベースURLとパスを結合（末尾スラッシュは無視）
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `?a=1&b=2` 形式の検索文字列から指定キーの値（未デコード）を取り出す
pub fn query_param<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
}

/// 指定キーを除いた検索文字列。残りが無ければ空文字
pub fn without_query_param(search: &str, key: &str) -> String {
    let rest: Vec<&str> = search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| pair.split('=').next() != Some(key))
        .collect();
    if rest.is_empty() {
        String::new()
    } else {
        format!("?{}", rest.join("&"))
    }
}

/// 起動時に使うベースURL
pub fn api_base() -> String {
    resolve_api_base(get_stored_api_base(), compiled_api_base())
}

/// ベースURLを保存
pub fn save_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(API_BASE_KEY, url).is_err() {
                log_warn("config", "APIベースURLの保存に失敗しました");
            }
        }
    }
}

fn get_stored_api_base() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let url = storage.get_item(API_BASE_KEY).ok()??;
    if url.is_empty() { None } else { Some(url) }
}

/// URLパラメータからベースURLを読み込む (?api=xxx)
pub fn init_api_base_from_url_params() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let encoded = query_param(&search, "api")?;
    let decoded = js_sys::decode_uri_component(encoded).ok()?.as_string()?;
    save_api_base(&decoded);
    log_info("config", &format!("APIベースURLを設定: {}", decoded));

    // URLから api パラメータだけを削除
    let pathname = window.location().pathname().ok()?;
    let hash = window.location().hash().ok().unwrap_or_default();
    let rest = without_query_param(&search, "api");
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(
            &JsValue::NULL,
            "",
            Some(&format!("{}{}{}", pathname, rest, hash)),
        );
    }
    Some(decoded)
}
