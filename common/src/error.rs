//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 修復後もJSONとして読めない（行・列と前後の抜粋付き）
    #[error("Repair error at line {line}, column {column}: {message}\n{excerpt}")]
    Repair {
        line: usize,
        column: usize,
        message: String,
        excerpt: String,
    },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
