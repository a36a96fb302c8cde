//! 総合判定バナー

use leptos::*;

use crate::verdict::SECURITY_TIPS;

/// 正常判定なら完了メッセージ、それ以外は注意事項を表示
#[component]
pub fn VerdictBanner(legit: bool) -> impl IntoView {
    if legit {
        view! {
            <div class="success-message">
                <div class="success-icon">"✓"</div>
                <div class="success-content">
                    <h3>"Email appears to be legitimate"</h3>
                    <p>"No spam or phishing threats detected."</p>
                </div>
            </div>
        }
        .into_view()
    } else {
        view! {
            <div class="security-tips">
                <h3>"Security Tips:"</h3>
                <ul>
                    {SECURITY_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                </ul>
            </div>
        }
        .into_view()
    }
}
