//! CLI・エディタ向けユーティリティ
//! 設定ファイルの読み込みとログ初期化

pub mod config_loader;
pub mod log_config;

pub use config_loader::{ConfigError, ConfigLoader, CrosshairToolConfig, EditorConfig, OutputConfig, OutputFormat};
pub use log_config::{init_logging, LogConfig, LogLevel};
