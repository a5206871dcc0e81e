use env_logger::fmt::Formatter;
use env_logger::Builder;
use log::{LevelFilter, Record};
use std::io::Write;

/// Initialize log environment variables
///
/// Everything the tool reports goes through `log`, so records are written
/// bare to stdout. `RUST_LOG` tunes dependencies only; this crate's own
/// records always pass at Info (Debug with `verbose`).
pub fn log_env_init(verbose: bool) {
    let mut builder = env_logger::builder();
    builder
        .filter_level(level_filter(verbose))
        .parse_default_env();
    let _ = keep_own_records(builder, verbose).try_init();
}

fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Must run after the environment filters are parsed, the last directive
/// for a module wins.
fn keep_own_records(mut builder: Builder, verbose: bool) -> Builder {
    builder
        .filter_module(env!("CARGO_CRATE_NAME"), level_filter(verbose))
        .format(log_formatter)
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false)
        .format_level(false)
        .target(env_logger::Target::Stdout);
    builder
}

/// Logging formatter function
pub fn log_formatter(
    buf: &mut Formatter,
    record: &Record,
) -> std::result::Result<(), std::io::Error> {
    writeln!(buf, "{}{}", level_prefix(record.level()), record.args())
}

fn level_prefix(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "⛔ ",
        log::Level::Warn => "⚠️ ",
        _ => "",
    }
}
