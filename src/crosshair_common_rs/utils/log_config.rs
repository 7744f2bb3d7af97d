use chrono::Local;
use env_logger::{Builder, Env};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel { Trace, Debug, Info, Warn, Error }

impl LogLevel {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self { LogLevel::Trace => "trace", LogLevel::Debug => "debug", LogLevel::Info => "info", LogLevel::Warn => "warn", LogLevel::Error => "error" }
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self { LogLevel::Trace => LevelFilter::Trace, LogLevel::Debug => LevelFilter::Debug, LogLevel::Info => LevelFilter::Info, LogLevel::Warn => LevelFilter::Warn, LogLevel::Error => LevelFilter::Error }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig { pub level: String, pub timestamps: bool }

impl Default for LogConfig {
    fn default() -> Self { Self { level: "warn".into(), timestamps: true } }
}

impl LogConfig {
    pub fn level(&self) -> Result<LogLevel, String> { LogLevel::from_str(&self.level) }
}

/// `[YYYY-mm-dd HH:MM:SS.mmm] [LEVEL] [target] message` 形式のロガーを構築する
/// RUST_LOG が設定されていればそちらを優先する
pub fn build_logger(config: &LogConfig, debug: bool) -> Builder {
    let level = if debug { LogLevel::Debug } else { config.level().unwrap_or(LogLevel::Warn) };
    let mut builder = Builder::new();
    builder.filter_level(level.to_level_filter());
    builder.parse_env(Env::default());

    let timestamps = config.timestamps;
    builder.format(move |buf, record| {
        if timestamps {
            write!(buf, "[{}] ", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))?;
        }
        writeln!(buf, "[{}] [{}] {}", record.level(), record.target(), record.args())
    });
    builder
}

/// グローバルロガーを初期化する（2回目以降はエラーを返す）
pub fn init_logging(config: &LogConfig, debug: bool) -> Result<(), log::SetLoggerError> {
    build_logger(config, debug).try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::from_str("INFO").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("trace").unwrap().to_level_filter(), LevelFilter::Trace);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.level().unwrap(), LogLevel::Warn);
        assert!(config.timestamps);
    }

    #[test]
    fn test_init_logging_twice() {
        let config = LogConfig { level: "debug".into(), timestamps: false };
        let _ = init_logging(&config, false);
        let second = init_logging(&config, true);
        assert!(second.is_err());
    }
}
