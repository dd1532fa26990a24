use pitchcast::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},pitchcast=debug,tower_http=info", config.level))
    });

    // Prefer PITCHCAST_LOG_DIR, then logging.dir from config.
    let log_dir = std::env::var("PITCHCAST_LOG_DIR")
        .ok()
        .or_else(|| config.dir.clone());

    // `tracing_appender::rolling::daily` panics if it cannot create the first
    // file, so check the directory is writable before handing it over.
    let file_layer = log_dir.and_then(|log_dir| {
        if let Err(e) = std::fs::create_dir_all(&log_dir) {
            eprintln!(
                "Warning: Could not create log directory {} ({}), file logging disabled",
                log_dir, e
            );
            return None;
        }

        let test_path = std::path::Path::new(&log_dir).join(".pitchcast_write_test");
        if let Err(e) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&test_path)
        {
            eprintln!(
                "Warning: Could not write to log directory {} ({}), file logging disabled",
                log_dir, e
            );
            return None;
        }
        let _ = std::fs::remove_file(&test_path);

        let file_appender = tracing_appender::rolling::daily(&log_dir, "pitchcast.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Keep the guard alive for the life of the process
        Box::leak(Box::new(guard));

        eprintln!("Logging to: {}/pitchcast.log", log_dir);
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
    });

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .init();
    }
}

pub fn init_logging_simple() {
    // Minimal logging for one-shot CLI commands
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}
