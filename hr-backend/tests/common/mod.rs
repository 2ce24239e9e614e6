// tests/common/mod.rs
pub mod app_helper;
pub mod db;
pub mod request;
pub mod test_data;

use std::sync::Once;

static INIT: Once = Once::new();

/// テスト用のログ設定を一度だけ行う
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("hr_backend=debug,tower_http=info")
            .with_test_writer()
            .try_init();
    });
}
