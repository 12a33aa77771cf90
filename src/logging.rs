use env_logger::{Builder, Target};
use log::{info, LevelFilter};

fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Level comes from `FER_AUTH_LOG`, falling back to `info`.
/// Accepts either a plain level or `module=level` pairs separated by commas.
pub fn init_logger() {
    let log_level = std::env::var("FER_AUTH_LOG").unwrap_or_else(|_| "info".to_string());

    let mut log_builder = Builder::from_default_env();
    log_builder.target(Target::Stdout);

    for pair in log_level.split(',') {
        let mut kv_iter = pair.split('=').map(str::trim);
        match (kv_iter.next(), kv_iter.next()) {
            (Some(module), Some(level)) => {
                log_builder.filter_module(module, get_log_level(level));
            }
            (Some(level), None) => {
                log_builder.filter_level(get_log_level(level));
            }
            _ => {}
        }
    }

    log_builder.init();
    info!("Log level {log_level}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_levels_fall_back_to_info() {
        assert_eq!(get_log_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(get_log_level(" warn "), LevelFilter::Warn);
        assert_eq!(get_log_level("verbose"), LevelFilter::Info);
    }
}
