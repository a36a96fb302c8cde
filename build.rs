use std::env;

fn main() {
    // ビルド時にAPIベースURLを差し替え可能にする
    match env::var("EMAIL_GUARD_API_BASE") {
        Ok(base) if base.starts_with("http://") || base.starts_with("https://") => {
            println!("cargo:warning=EMAIL_GUARD_API_BASE set to {}", base);
        }
        Ok(base) if !base.is_empty() => {
            println!("cargo:warning=EMAIL_GUARD_API_BASE has no http(s) scheme: {}", base);
        }
        _ => {}
    }

    // 環境変数変更時に再ビルド
    println!("cargo:rerun-if-env-changed=EMAIL_GUARD_API_BASE");
}
