pub mod api;
pub mod core;
pub mod scanner;

pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("barcode_scan_rust"),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        // 多次调用时保留已安装的 logger
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("info"),
        )
        .try_init();
    }
}
