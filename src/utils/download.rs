//! JSONファイルのダウンロード

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `<prefix>_<timestamp>.json` の形のファイル名
pub fn timestamped_filename(prefix: &str, iso_timestamp: &str) -> String {
    format!("{}_{}.json", prefix, iso_timestamp.replace(':', "-").replace('.', "-"))
}

/// 現在時刻（ISO 8601）
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default()
}

/// JSON文字列をBlob経由でダウンロードさせる
pub fn download_json(prefix: &str, json: &str) -> Result<(), String> {
    let filename = timestamped_filename(prefix, &now_iso());

    let window = web_sys::window().ok_or("windowがありません")?;
    let document = window.document().ok_or("documentがありません")?;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&JsValue::from_str(json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &options)
        .map_err(|e| format!("Blob作成失敗: {:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("URL作成失敗: {:?}", e))?;

    let a = document
        .create_element("a")
        .map_err(|e| format!("要素作成失敗: {:?}", e))?;
    let _ = a.set_attribute("href", &url);
    let _ = a.set_attribute("download", &filename);
    if let Some(element) = a.dyn_ref::<web_sys::HtmlElement>() {
        element.click();
    }
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
