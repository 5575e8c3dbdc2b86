use std::{str::FromStr, sync::LazyLock};

use ember_config::advanced_config;
use log::{Level, LevelFilter};
use simplelog::SimpleLogger;

pub mod block;
pub mod net;
pub mod world;

pub static LOGGER_IMPL: LazyLock<Option<(Box<SimpleLogger>, LevelFilter)>> = LazyLock::new(|| {
    if advanced_config().logging.enabled {
        let mut config = simplelog::ConfigBuilder::new();

        if advanced_config().logging.timestamp {
            config.set_time_format_custom(time::macros::format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ));
            config.set_time_level(LevelFilter::Error);
            let _ = config.set_time_offset_to_local();
        } else {
            config.set_time_level(LevelFilter::Off);
        }

        if !advanced_config().logging.color {
            for level in Level::iter() {
                config.set_level_color(level, None);
            }
        }

        if advanced_config().logging.threads {
            config.set_thread_level(LevelFilter::Info);
        } else {
            config.set_thread_level(LevelFilter::Off);
        }

        let level = std::env::var("RUST_LOG")
            .ok()
            .as_deref()
            .map(LevelFilter::from_str)
            .and_then(Result::ok)
            .unwrap_or(LevelFilter::Info);

        Some((SimpleLogger::new(level, config.build()), level))
    } else {
        None
    }
});

/// Installs [`LOGGER_IMPL`] as the global logger. Does nothing if logging is
/// disabled or a logger is already set.
#[macro_export]
macro_rules! init_log {
    () => {
        if let Some((logger_impl, level)) = &*$crate::LOGGER_IMPL {
            if log::set_logger(&**logger_impl).is_ok() {
                log::set_max_level(*level);
            }
        }
    };
}
