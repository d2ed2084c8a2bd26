//! Cemetery Search Common Library
//!
//! 簡易検索（カード表示）とテーブル検索の両方で共有される型とフィルタ

pub mod types;
pub mod error;
pub mod date;
pub mod filter;
pub mod table;
pub mod card;
pub mod repair;
#[cfg(feature = "excel")]
pub mod export;

pub use types::{CemeteryRecord, ExtraData};
pub use error::{Error, Result};
pub use date::{normalize_date, classify_date, date_sort_key, DatePrecision};
pub use filter::{
    matches, filter_records, quick_matches, quick_filter,
    Category, SearchCategories, SearchRequest, SpecialTerm, MIN_QUICK_QUERY_LEN,
};
pub use table::{Column, ColumnVisibility, SortDirection, SortState, TableView, ViewMode, PAGE_SIZE};
pub use card::RecordCard;
pub use repair::{repair_json, RepairReport};
