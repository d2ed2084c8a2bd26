use thiserror::Error;

#[derive(Error, Debug)]
pub enum CemeteryError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データセットが見つかりません: {0}（`--data` または `cemetery-search config --set-data PATH` で指定してください）")]
    DatasetNotFound(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Common(#[from] cemetery_search_common::Error),
}

pub type Result<T> = std::result::Result<T, CemeteryError>;
