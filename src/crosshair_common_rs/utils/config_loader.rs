use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::log_config::LogConfig;
use crate::crosshair_common_rs::sharecode::codec::{decode, encode};
use crate::crosshair_common_rs::sharecode::core::exceptions::SharecodeError;
use crate::crosshair_common_rs::sharecode::types::CrosshairConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("設定ファイルの読み込みに失敗しました: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON設定の解析に失敗しました: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML設定の解析に失敗しました: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML設定の書き出しに失敗しました: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("未対応の設定ファイル形式です: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("設定値が不正です: {0}")]
    Invalid(String),
    #[error("エディタ初期値が不正です: {0}")]
    Sharecode(#[from] SharecodeError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat { #[default] Table, Json }

impl OutputFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() { "table" => Ok(OutputFormat::Table), "json" => Ok(OutputFormat::Json), _ => Err(format!("Invalid output format: {}", s)) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig { pub compact: bool, pub format: OutputFormat }

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig { pub defaults: CrosshairConfig }

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairToolConfig {
    pub editor: EditorConfig,
    pub output: OutputConfig,
    pub logging: LogConfig,
}

pub struct ConfigLoader { config_paths: Vec<PathBuf>, env_prefix: String }

impl Default for ConfigLoader {
    fn default() -> Self { Self::new() }
}

impl ConfigLoader {
    pub fn new() -> Self { Self { config_paths: vec![PathBuf::from("crosshair.config.toml"), PathBuf::from("crosshair.config.json"), PathBuf::from("config.toml"), PathBuf::from("config.json")], env_prefix: "CROSSHAIR_".into() } }
    pub fn with_paths(paths: Vec<PathBuf>) -> Self { Self { config_paths: paths, env_prefix: "CROSSHAIR_".into() } }
    pub fn with_env_prefix(mut self, prefix: &str) -> Self { self.env_prefix = prefix.into(); self }

    /// 候補パスのうち最初に読めたファイルを使い、環境変数で上書きして検証する
    pub fn load(&self) -> Result<CrosshairToolConfig, ConfigError> {
        let mut config = CrosshairToolConfig::default();
        for path in &self.config_paths {
            if path.exists() {
                match self.load_from_file(path) {
                    Ok(fc) => { debug!("Loaded config from {}", path.display()); config = fc; break; }
                    Err(e) => { warn!("Failed to load config from {}: {}", path.display(), e); }
                }
            }
        }
        let mut config = self.apply_env_overrides(config)?;
        self.validate_config(&mut config)?;
        Ok(config)
    }

    /// 指定ファイルから読み込む（読めなければエラー）
    pub fn load_from(&self, path: &Path) -> Result<CrosshairToolConfig, ConfigError> {
        let config = self.load_from_file(path)?;
        debug!("Loaded config from {}", path.display());
        let mut config = self.apply_env_overrides(config)?;
        self.validate_config(&mut config)?;
        Ok(config)
    }

    pub fn load_from_file(&self, path: &Path) -> Result<CrosshairToolConfig, ConfigError> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn env_var(&self, key: &str) -> Option<String> { env::var(format!("{}{}", self.env_prefix, key)).ok() }

    fn apply_env_overrides(&self, mut config: CrosshairToolConfig) -> Result<CrosshairToolConfig, ConfigError> {
        if let Some(level) = self.env_var("LOG_LEVEL") { config.logging.level = level; }
        if let Some(ts) = self.env_var("LOG_TIMESTAMPS") { config.logging.timestamps = ts.parse().map_err(|_| ConfigError::Invalid(format!("Invalid log timestamps flag in environment variable: {}", ts)))?; }
        if let Some(compact) = self.env_var("OUTPUT_COMPACT") { config.output.compact = compact.parse().map_err(|_| ConfigError::Invalid(format!("Invalid output compact flag in environment variable: {}", compact)))?; }
        if let Some(format) = self.env_var("OUTPUT_FORMAT") { config.output.format = OutputFormat::from_str(&format).map_err(ConfigError::Invalid)?; }
        if let Some(code) = self.env_var("DEFAULT_CODE") {
            config.editor.defaults = decode(&code)?;
            debug!("Editor defaults overridden by sharecode {}", code);
        }
        Ok(config)
    }

    /// 検証し、ログレベルを小文字の正規形にそろえる
    fn validate_config(&self, config: &mut CrosshairToolConfig) -> Result<(), ConfigError> {
        let level = config.logging.level().map_err(|_| ConfigError::Invalid("Invalid log level. Must be one of: trace, debug, info, warn, error".into()))?;
        config.logging.level = level.as_str().into();
        encode(&config.editor.defaults)?;
        Ok(())
    }

    pub fn save_config(&self, config: &CrosshairToolConfig, path: &Path) -> Result<(), ConfigError> {
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(config)?,
            Some("toml") => toml::to_string_pretty(config)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        fs::write(path, content)?;
        Ok(())
    }
}
