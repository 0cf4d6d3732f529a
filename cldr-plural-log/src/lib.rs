//! Logging for the cldr-plural crates
//!
//! A small, environment-controlled logger. Library code in the workspace
//! logs through the macros exported here; applications decide what is
//! printed by setting `PLURAL_*` variables.
//!
//! # Usage
//!
//! ```rust
//! use cldr_plural_log::{debug, info, trace};
//!
//! let tags = 212;
//! debug!("indexed {} locale tags", tags);
//! info!(target: "cldr_plural::loader", "loaded rules.json");
//! trace!("candidate: {}", "en-GB");
//! ```
//!
//! # Environment Variables
//!
//! - `PLURAL_DEBUG=1` - Enable debug logging
//! - `PLURAL_LOG_LEVEL=trace|debug|info|warn|error|off` - Minimum level
//! - `PLURAL_LOG_FORMAT=pretty|compact|json` - Output format
//! - `PLURAL_LOG_COLOR=1|0` - Colored level names (`color` feature)
//! - `PLURAL_LOG_TIMESTAMPS=1|0` - Prefix each line with a timestamp
//! - `PLURAL_LOG_MODULE=1|0` - Include the log target

use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

// ============================================================================
// Levels and formats
// ============================================================================

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Per-step detail
    Trace = 0,
    /// Construction summaries
    Debug = 1,
    /// Notable events
    Info = 2,
    /// Suspicious data
    Warn = 3,
    /// Failures
    Error = 4,
    /// Nothing is printed
    Off = 5,
}

impl Level {
    /// Parse a level name. Case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }

    fn to_log_filter(self) -> log::LevelFilter {
        match self {
            Level::Trace => log::LevelFilter::Trace,
            Level::Debug => log::LevelFilter::Debug,
            Level::Info => log::LevelFilter::Info,
            Level::Warn => log::LevelFilter::Warn,
            Level::Error => log::LevelFilter::Error,
            Level::Off => log::LevelFilter::Off,
        }
    }

    #[cfg(feature = "color")]
    fn colored(&self) -> colored::ColoredString {
        use colored::Colorize;
        match self {
            Level::Trace => "TRACE".magenta(),
            Level::Debug => "DEBUG".blue(),
            Level::Info => "INFO".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERROR".red().bold(),
            Level::Off => "OFF".white(),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Trace,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable with full timestamp
    Pretty,
    /// One short line per record
    Compact,
    /// One JSON object per line
    Json,
}

impl Format {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

/// Logger settings, read once from the environment.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub debug: bool,
    pub level: Level,
    pub format: Format,
    pub color: bool,
    pub timestamps: bool,
    pub module_path: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            color: false,
            timestamps: true,
            module_path: true,
        }
    }
}

impl LogConfig {
    /// Read `PLURAL_*` variables and publish the resulting level.
    pub fn from_env() -> Self {
        let config = Self::from_lookup(|key| env::var(key).ok());
        DEBUG_ENABLED.store(config.debug, Ordering::SeqCst);
        LOG_LEVEL.store(config.level as u8, Ordering::SeqCst);
        config
    }

    /// Build a config from an arbitrary key lookup. Does not touch globals.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| lookup(key).map(|v| v == "1" || v.eq_ignore_ascii_case("true"));
        let defaults = Self::default();

        let debug = flag("PLURAL_DEBUG").unwrap_or(false);
        let level = lookup("PLURAL_LOG_LEVEL")
            .and_then(|s| Level::parse(&s))
            .unwrap_or(if debug { Level::Debug } else { defaults.level });
        let format = lookup("PLURAL_LOG_FORMAT")
            .and_then(|s| Format::parse(&s))
            .unwrap_or(defaults.format);
        let color = flag("PLURAL_LOG_COLOR")
            .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some());

        Self {
            debug,
            level,
            format,
            color,
            timestamps: flag("PLURAL_LOG_TIMESTAMPS").unwrap_or(defaults.timestamps),
            module_path: flag("PLURAL_LOG_MODULE").unwrap_or(defaults.module_path),
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Force the environment read and route `log` facade records through
/// this logger. Safe to call more than once; only the first call installs
/// the bridge.
pub fn init() {
    Lazy::force(&CONFIG);
    if log::set_logger(&BRIDGE).is_ok() {
        log::set_max_level(current_level().to_log_filter());
    }
}

#[inline]
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    level != Level::Off && level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Debug mode lets `Debug` records through whatever the minimum level is.
fn passes(level: Level, min: Level, debug: bool) -> bool {
    level != Level::Off && (level >= min || (debug && level == Level::Debug))
}

pub fn current_level() -> Level {
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Change the minimum level at runtime.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
    log::set_max_level(level.to_log_filter());
}

/// Toggle debug mode. Enabling it lowers the level to at least `Debug`.
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

pub fn config() -> &'static LogConfig {
    &CONFIG
}

// ============================================================================
// Output
// ============================================================================

#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    if !passes(level, current_level(), is_debug_enabled()) {
        return;
    }

    let config = config();
    let line = match config.format {
        Format::Pretty => render_pretty(level, target, message, config),
        Format::Compact => render_compact(level, target, message, config),
        Format::Json => render_json(level, target, message),
    };

    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{}", line);
}

fn render_pretty(level: Level, target: &str, message: &str, config: &LogConfig) -> String {
    let mut line = String::new();
    if config.timestamps {
        line.push_str(&chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f ").to_string());
    }

    #[cfg(feature = "color")]
    let level_name = if config.color {
        level.colored().to_string()
    } else {
        level.as_str().to_string()
    };
    #[cfg(not(feature = "color"))]
    let level_name = level.as_str().to_string();

    line.push_str(&format!("{:5} ", level_name));
    if config.module_path && !target.is_empty() {
        line.push_str(&format!("[{}] ", target));
    }
    line.push_str(message);
    line
}

fn render_compact(level: Level, target: &str, message: &str, config: &LogConfig) -> String {
    let mut line = String::new();
    if config.timestamps {
        line.push_str(&chrono::Local::now().format("%H:%M:%S ").to_string());
    }
    line.push(level.as_str().chars().next().unwrap_or('?'));
    line.push(' ');
    if config.module_path && !target.is_empty() {
        line.push_str(target);
        line.push_str(": ");
    }
    line.push_str(message);
    line
}

#[cfg(feature = "json")]
fn render_json(level: Level, target: &str, message: &str) -> String {
    #[derive(serde::Serialize)]
    struct Record<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let record = Record {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };

    serde_json::to_string(&record).unwrap_or_else(|_| message.to_string())
}

#[cfg(not(feature = "json"))]
fn render_json(level: Level, target: &str, message: &str) -> String {
    format!(
        r#"{{"timestamp":"{}","level":"{}","target":"{}","message":"{}"}}"#,
        chrono::Utc::now().to_rfc3339(),
        level.as_str(),
        target.escape_default(),
        message.escape_default()
    )
}

// ============================================================================
// `log` facade bridge
// ============================================================================

struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        is_level_enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            log(record.level().into(), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

// ============================================================================
// Macros
// ============================================================================

/// Log at trace level.
#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log at debug level. Also printed when `PLURAL_DEBUG=1`.
///
/// ```rust
/// use cldr_plural_log::debug;
///
/// debug!("built {} cultures", 3);
/// debug!(target: "cldr_plural::index", "{} others", 2);
/// ```
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log at info level.
#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log at warn level.
#[macro_export]
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log at error level.
#[macro_export]
macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, module_path!(), &format!($($arg)+));
        }
    };
}

#[cfg(feature = "tracing")]
pub mod tracing_compat {
    //! Build a `tracing` subscriber whose default filter follows
    //! `PLURAL_LOG_LEVEL`. `RUST_LOG` still takes precedence.

    use super::*;

    pub fn subscriber() -> impl tracing::Subscriber {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{EnvFilter, fmt};

        let config = config();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.as_str().to_ascii_lowercase()));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(config.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::parse("DEBUG"), Some(Level::Debug));
        assert_eq!(Level::parse(" warning "), Some(Level::Warn));
        assert_eq!(Level::parse("none"), Some(Level::Off));
        assert_eq!(Level::parse("loud"), None);
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(Format::parse("compact"), Some(Format::Compact));
        assert_eq!(Format::parse("JSON"), Some(Format::Json));
        assert_eq!(Format::parse("xml"), None);
    }

    #[test]
    fn test_config_defaults_without_env() {
        let config = LogConfig::from_lookup(lookup(&[]));
        assert!(!config.debug);
        assert_eq!(config.level, Level::Info);
        assert_eq!(config.format, Format::Json);
        assert!(!config.color);
    }

    #[test]
    fn test_config_debug_flag_lowers_level() {
        let config = LogConfig::from_lookup(lookup(&[("PLURAL_DEBUG", "true")]));
        assert!(config.debug);
        assert_eq!(config.level, Level::Debug);

        let config = LogConfig::from_lookup(lookup(&[
            ("PLURAL_DEBUG", "1"),
            ("PLURAL_LOG_LEVEL", "error"),
        ]));
        assert_eq!(config.level, Level::Error);
    }

    #[test]
    fn test_config_format_and_switches() {
        let config = LogConfig::from_lookup(lookup(&[
            ("PLURAL_LOG_FORMAT", "pretty"),
            ("PLURAL_LOG_TIMESTAMPS", "0"),
            ("PLURAL_LOG_MODULE", "false"),
            ("TERM", "xterm"),
        ]));
        assert_eq!(config.format, Format::Pretty);
        assert!(!config.timestamps);
        assert!(!config.module_path);
        assert!(config.color);
    }

    #[test]
    fn test_compact_render() {
        let config = LogConfig {
            timestamps: false,
            ..LogConfig::default()
        };
        let line = render_compact(Level::Warn, "cldr", "duplicate", &config);
        assert_eq!(line, "W cldr: duplicate");
    }

    #[test]
    fn test_debug_mode_bypasses_level() {
        assert!(passes(Level::Debug, Level::Error, true));
        assert!(!passes(Level::Debug, Level::Error, false));
        assert!(!passes(Level::Trace, Level::Error, true));
        assert!(!passes(Level::Info, Level::Error, true));
        assert!(passes(Level::Error, Level::Error, false));
        assert!(!passes(Level::Off, Level::Trace, true));
    }

    #[test]
    fn test_off_is_never_enabled() {
        assert!(!is_level_enabled(Level::Off));
    }

    #[test]
    fn test_macros_compile() {
        trace!("trace {}", 1);
        debug!("debug");
        info!(target: "test", "info");
        warn!("warn");
        error!(target: "test", "error {}", "x");
    }
}
