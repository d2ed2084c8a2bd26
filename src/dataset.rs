//! データセットの読み込みと探索
//!
//! パスの解決順:
//! 1. `--data` 引数
//! 2. 環境変数 `CEMETERY_DATA`
//! 3. 設定ファイルの `data_path`
//! 4. カレントディレクトリからの探索

use crate::config::Config;
use crate::error::{CemeteryError, Result};
use cemetery_search_common::{repair_json, CemeteryRecord, RepairReport};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 探索するファイル名（優先順）
pub const DATASET_FILE_NAMES: &[&str] = &[
    "cemetery_records_fixed.json",
    "cemetery_records_structured.json",
    "cemetery_records.json",
];

/// 記録の配列を読み込む（空配列も有効）
pub fn load_records(path: &Path) -> Result<Vec<CemeteryRecord>> {
    if !path.is_file() {
        return Err(CemeteryError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<CemeteryRecord> = serde_json::from_str(&content)?;
    log::debug!("{}件の記録を読み込み: {}", records.len(), path.display());

    Ok(records)
}

/// フォルダ直下、次に1階層下からデータセットを探す
pub fn discover_dataset(folder: &Path) -> Result<PathBuf> {
    if !folder.is_dir() {
        return Err(CemeteryError::DatasetNotFound(folder.display().to_string()));
    }

    let mut candidates: Vec<(usize, usize, PathBuf)> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(2)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let name = e.file_name().to_string_lossy();
            DATASET_FILE_NAMES
                .iter()
                .position(|&n| n == name)
                .map(|priority| (e.depth(), priority, e.path().to_path_buf()))
        })
        .collect();

    candidates.sort();
    log::debug!("データセット候補: {}件", candidates.len());

    candidates
        .into_iter()
        .next()
        .map(|(_, _, path)| path)
        .ok_or_else(|| CemeteryError::DatasetNotFound(folder.display().to_string()))
}

/// 読み込むデータセットのパスを決める
pub fn resolve_data_path(explicit: Option<&Path>, config: &Config, cwd: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        log::debug!("--data 指定: {}", path.display());
        return Ok(path.to_path_buf());
    }

    if let Some(path) = config.configured_data_path() {
        log::debug!("設定からデータセットを使用: {}", path.display());
        return Ok(path);
    }

    let found = discover_dataset(cwd)?;
    log::debug!("データセットを検出: {}", found.display());
    Ok(found)
}

/// 修復後の既定の出力先
///
/// 入力と同じフォルダの `cemetery_records_fixed.json`（探索で最優先される名前）。
/// 入力がその名前なら `<名前>_fixed.json`。
pub fn default_repaired_path(source: &Path) -> PathBuf {
    let preferred = source.with_file_name(DATASET_FILE_NAMES[0]);
    if preferred != source {
        return preferred;
    }

    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("cemetery_records");
    source.with_file_name(format!("{}_fixed.json", stem))
}

/// JSONファイルを修復して書き出す
pub fn repair_file(input: &Path, output: &Path) -> Result<RepairReport> {
    if !input.is_file() {
        return Err(CemeteryError::FileNotFound(input.display().to_string()));
    }

    let content = std::fs::read_to_string(input)?;
    let report = repair_json(&content)?;
    log::debug!(
        "修復: 三重引用符 {}件, NaN {}件",
        report.triple_quotes_fixed,
        report.nan_replaced
    );

    std::fs::write(output, report.to_json_pretty()?)?;
    Ok(report)
}
