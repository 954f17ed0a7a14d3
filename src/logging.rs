use tracing_subscriber::EnvFilter;

/// 安裝寫入 stderr 的 subscriber，以 `RUST_LOG` 過濾。
///
/// 未設定時只放行 error 等級，而本 crate 不產生 error 事件，
/// 因此 stderr 只會出現最後的錯誤訊息。
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}
