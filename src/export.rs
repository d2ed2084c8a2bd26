//! 検索結果のExcel出力（CLI版）

use crate::error::{CemeteryError, Result};
use cemetery_search_common::export::generate_table_buffer;
use cemetery_search_common::{CemeteryRecord, Column};
use std::path::{Path, PathBuf};

const DEFAULT_TITLE: &str = "Cemetery Records";

/// 出力先がフォルダなら `<title>.xlsx` を付ける
pub fn output_path_for_excel(output: &Path, title: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.xlsx", title))
    } else {
        output.to_path_buf()
    }
}

/// 表示中の列で検索結果を書き出す
pub fn export_table(rows: &[&CemeteryRecord], columns: &[Column], output: &Path) -> Result<PathBuf> {
    let output_path = output_path_for_excel(output, DEFAULT_TITLE);
    let buffer = generate_table_buffer(rows, columns, DEFAULT_TITLE)
        .map_err(CemeteryError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output_path, buffer)?;
    log::debug!("{}行をExcelに出力: {}", rows.len(), output_path.display());

    Ok(output_path)
}
