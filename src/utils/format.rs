//! 表示用フォーマット

use std::collections::BTreeMap;

/// 履歴テーブルのメール抜粋の文字数
pub const SNIPPET_CHARS: usize = 50;

// バックエンドがエスケープして返す実体参照
const ENTITIES: [(&str, char); 6] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&#34;", '"'),
    ("&quot;", '"'),
    ("&#39;", '\''),
];

/// 0.853 → "85.3%"
pub fn format_percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

/// "not spam: 9.0%, spam: 91.0%"
pub fn probability_summary(probabilities: &BTreeMap<String, f64>) -> String {
    probabilities
        .iter()
        .map(|(name, p)| format!("{}: {}", name, format_percent(*p)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// HTML実体参照を1パスで戻す（"&amp;lt;" は "&lt;" になる）
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(entity)) {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// 先頭 `max_chars` 文字の抜粋。切り詰めた場合のみ "..." を付ける
pub fn email_snippet(email: &str, max_chars: usize) -> String {
    let text = unescape_html(email);
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text,
    }
}
