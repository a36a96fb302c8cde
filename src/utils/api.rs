//! スキャンAPI連携
//!
//! `GET /history` と `POST /scan` を `fetch` で呼び出す。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::config::endpoint;
use super::log_trace::log_warn;
use crate::error::ScanError;
use crate::models::{decode_history, ErrorBody, HistoryEntry, ScanRequest, ScanResponse};

/// JS側の例外からメッセージを取り出す
fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

async fn send(request: &Request) -> Result<Response, ScanError> {
    let window = web_sys::window()
        .ok_or_else(|| ScanError::Transport("windowがありません".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| ScanError::Transport(describe_js_error(&e)))?;
    resp_value
        .dyn_into::<Response>()
        .map_err(|_| ScanError::Transport("Responseへの変換失敗".to_string()))
}

async fn read_json(resp: &Response) -> Result<JsValue, JsValue> {
    JsFuture::from(resp.json()?).await
}

/// 非2xxのボディから `error` を読む。JSONでなければ None
async fn read_error_message(resp: &Response) -> Option<String> {
    let json = read_json(resp).await.ok()?;
    let body: ErrorBody = serde_wasm_bindgen::from_value(json).ok()?;
    body.error
}

/// 過去のスキャン履歴を取得（エンドポイントの順のまま返す）
pub async fn fetch_history(base: &str) -> Result<Vec<HistoryEntry>, ScanError> {
    let url = endpoint(base, "history");
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ScanError::Transport(format!("Request作成失敗: {}", describe_js_error(&e))))?;
    let resp = send(&request).await?;

    if !resp.ok() {
        let message = read_error_message(&resp).await;
        return Err(ScanError::server(resp.status(), message));
    }

    let json = read_json(&resp)
        .await
        .map_err(|e| ScanError::MalformedResponse(describe_js_error(&e)))?;
    // 1件ずつデコードして、壊れた行で全件を失わないようにする
    let values: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(json)
        .map_err(|e| ScanError::MalformedResponse(e.to_string()))?;

    let (entries, dropped) = decode_history(values);
    if dropped > 0 {
        log_warn("history", &format!("不正な履歴を{}件除外しました", dropped));
    }
    Ok(entries)
}

/// メール本文をスキャン
pub async fn submit_scan(base: &str, scan: &ScanRequest) -> Result<ScanResponse, ScanError> {
    let url = endpoint(base, "scan");
    let body = serde_json::to_string(scan)
        .map_err(|e| ScanError::Transport(format!("リクエスト生成失敗: {}", e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ScanError::Transport(format!("Request作成失敗: {}", describe_js_error(&e))))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ScanError::Transport(format!("ヘッダー設定失敗: {}", describe_js_error(&e))))?;

    let resp = send(&request).await?;

    if !resp.ok() {
        let message = read_error_message(&resp).await;
        return Err(ScanError::server(resp.status(), message));
    }

    let json = read_json(&resp)
        .await
        .map_err(|e| ScanError::MalformedResponse(describe_js_error(&e)))?;
    let response: ScanResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| ScanError::MalformedResponse(e.to_string()))?;

    response.validate()?;
    Ok(response)
}
