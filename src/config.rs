use crate::error::{CemeteryError, Result};
use cemetery_search_common::{Column, ColumnVisibility, SearchCategories, PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データセットのパスを指定する環境変数
pub const DATA_ENV_VAR: &str = "CEMETERY_DATA";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub page_size: usize,
    pub default_categories: SearchCategories,
    pub hidden_columns: Vec<Column>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（無ければ既定値）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            log::debug!("設定を読み込み: {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    /// 書き換え用の読み込み（壊れた設定は既定値から作り直す）
    pub fn load_for_update() -> Result<Self> {
        Self::load_for_update_from(&Self::config_path()?)
    }

    pub fn load_for_update_from(config_path: &Path) -> Result<Self> {
        match Self::load_from(config_path) {
            Err(CemeteryError::JsonParse(e)) => {
                log::warn!("設定ファイルを解析できないため既定値で上書きします: {} ({})", config_path.display(), e);
                Ok(Self::default_config())
            }
            other => other,
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CemeteryError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("cemetery-search").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            data_path: None,
            page_size: PAGE_SIZE,
            default_categories: SearchCategories::default(),
            hidden_columns: Vec::new(),
        }
    }

    /// 設定済みのデータセットパス（環境変数を優先）
    pub fn configured_data_path(&self) -> Option<PathBuf> {
        if let Ok(path) = std::env::var(DATA_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        self.data_path.clone()
    }

    pub fn set_data_path(&mut self, path: PathBuf) -> Result<()> {
        self.data_path = Some(path);
        self.save()
    }

    pub fn column_visibility(&self) -> ColumnVisibility {
        ColumnVisibility::with_hidden(self.hidden_columns.iter().copied())
    }
}
