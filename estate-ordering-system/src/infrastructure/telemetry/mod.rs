mod config;
pub use self::config::*;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Directives from `level_filter_env` win over `level_filter` when that variable is named.
fn build_filter(max_level: &LoggingLevel, level_filter: &str, level_filter_env: &str) -> EnvFilter {
    let filter_builder = EnvFilter::builder().with_default_directive(max_level.clone().into());
    if level_filter_env.is_empty() {
        filter_builder.parse_lossy(level_filter)
    } else {
        filter_builder.with_env_var(level_filter_env).from_env_lossy()
    }
}

/// Installs the global subscriber with the console and file outputs enabled in `config`.
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let filter = build_filter(
        &config.max_level,
        &config.level_filter,
        &config.level_filter_env,
    );
    let console = {
        let config = &config.console;
        config.enable.then(|| {
            let enable_debug_logging = config.enable_debug_logging;
            tracing_subscriber::fmt::layer()
                .with_file(enable_debug_logging)
                .with_line_number(enable_debug_logging)
                .with_thread_ids(enable_debug_logging)
                .with_target(enable_debug_logging)
                .with_filter(build_filter(
                    &config.max_level,
                    &config.level_filter,
                    &config.level_filter_env,
                ))
        })
    };
    let file = {
        let config = &config.file;
        config.enable.then(|| {
            let enable_debug_logging = config.enable_debug_logging;
            let file_appender = RollingFileAppender::new(
                config.rolling_time.clone().into(),
                &config.path,
                &config.prefix,
            );
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_appender)
                .with_file(enable_debug_logging)
                .with_line_number(enable_debug_logging)
                .with_thread_ids(enable_debug_logging)
                .with_target(enable_debug_logging)
                .with_filter(build_filter(
                    &config.max_level,
                    &config.level_filter,
                    &config.level_filter_env,
                ))
        })
    };
    Registry::default()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()?;
    Ok(())
}
