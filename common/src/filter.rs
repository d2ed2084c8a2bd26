//! 記録検索フィルタ
//!
//! 2つの検索方針を提供する:
//! - `matches` / `filter_records`: カテゴリ指定付きの全体検索（テーブル画面用）
//! - `quick_matches` / `quick_filter`: 姓・名だけを対象にした簡易検索（カード画面用）
//!
//! どちらも入力だけで結果が決まる純粋関数で、内部状態は持たない。

use crate::date::normalize_date;
use crate::types::{text_or_empty, CemeteryRecord};
use serde::{Deserialize, Serialize};

/// 簡易検索の最小クエリ長（文字数）
pub const MIN_QUICK_QUERY_LEN: usize = 2;

/// 検索対象カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Names,
    Dates,
    Location,
    Places,
    Notes,
    Special,
}

impl Category {
    /// 全カテゴリ（走査順）
    pub const ALL: [Category; 6] = [
        Category::Names,
        Category::Dates,
        Category::Location,
        Category::Places,
        Category::Notes,
        Category::Special,
    ];
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "names" | "name" => Ok(Category::Names),
            "dates" | "date" => Ok(Category::Dates),
            "location" | "loc" => Ok(Category::Location),
            "places" | "place" => Ok(Category::Places),
            "notes" | "note" => Ok(Category::Notes),
            "special" => Ok(Category::Special),
            _ => Err(format!(
                "Unknown category: {}. Use names, dates, location, places, notes, or special",
                s
            )),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Names => write!(f, "names"),
            Category::Dates => write!(f, "dates"),
            Category::Location => write!(f, "location"),
            Category::Places => write!(f, "places"),
            Category::Notes => write!(f, "notes"),
            Category::Special => write!(f, "special"),
        }
    }
}

/// カテゴリごとの有効/無効
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCategories {
    pub names: bool,
    pub dates: bool,
    pub location: bool,
    pub places: bool,
    pub notes: bool,
    pub special: bool,
}

impl Default for SearchCategories {
    fn default() -> Self {
        Self {
            names: true,
            dates: false,
            location: false,
            places: false,
            notes: false,
            special: false,
        }
    }
}

impl SearchCategories {
    /// すべて無効
    pub fn none() -> Self {
        Self {
            names: false,
            dates: false,
            location: false,
            places: false,
            notes: false,
            special: false,
        }
    }

    /// すべて有効
    pub fn all() -> Self {
        Self {
            names: true,
            dates: true,
            location: true,
            places: true,
            notes: true,
            special: true,
        }
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Names => self.names,
            Category::Dates => self.dates,
            Category::Location => self.location,
            Category::Places => self.places,
            Category::Notes => self.notes,
            Category::Special => self.special,
        }
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        match category {
            Category::Names => self.names = enabled,
            Category::Dates => self.dates = enabled,
            Category::Location => self.location = enabled,
            Category::Places => self.places = enabled,
            Category::Notes => self.notes = enabled,
            Category::Special => self.special = enabled,
        }
    }

    /// 有効なカテゴリの一覧
    pub fn enabled(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }
}

impl FromIterator<Category> for SearchCategories {
    /// 指定したカテゴリだけを有効にする
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut categories = Self::none();
        for category in iter {
            categories.set(category, true);
        }
        categories
    }
}

/// 特別語（フラグで一致判定する固定クエリ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialTerm {
    Veteran,
    Widow,
    Divorced,
}

impl SpecialTerm {
    /// 小文字化済みクエリ全体が特別語かどうか
    pub fn parse(lowered_query: &str) -> Option<Self> {
        match lowered_query {
            "veteran" => Some(SpecialTerm::Veteran),
            "widow" => Some(SpecialTerm::Widow),
            "divorced" => Some(SpecialTerm::Divorced),
            _ => None,
        }
    }

    /// 記録のフラグが真か（未設定は偽）
    pub fn flag(&self, record: &CemeteryRecord) -> bool {
        let flag = match self {
            SpecialTerm::Veteran => record.veteran,
            SpecialTerm::Widow => record.widow,
            SpecialTerm::Divorced => record.divorced,
        };
        flag == Some(true)
    }
}

/// 画面側が保持する検索条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub categories: SearchCategories,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, categories: SearchCategories) -> Self {
        Self {
            query: query.into(),
            categories,
        }
    }

    pub fn matches(&self, record: &CemeteryRecord) -> bool {
        matches(record, &self.categories, &self.query)
    }

    pub fn apply<'a>(&self, records: &'a [CemeteryRecord]) -> Vec<&'a CemeteryRecord> {
        filter_records(records, &self.categories, &self.query)
    }
}

/// カテゴリ指定付きの一致判定
///
/// 空クエリはすべて一致。すべてのカテゴリが無効なら空でないクエリには何も一致しない。
pub fn matches(record: &CemeteryRecord, categories: &SearchCategories, query: &str) -> bool {
    let search_value = query.to_lowercase();
    if search_value.is_empty() {
        return true;
    }

    if categories.special {
        if let Some(term) = SpecialTerm::parse(&search_value) {
            if term.flag(record) {
                return true;
            }
        }
    }

    candidate_fields(record, categories)
        .iter()
        .any(|field| field.to_lowercase().contains(&search_value))
}

/// 有効なカテゴリの検索対象フィールドを固定順で集める（欠落は空文字）
fn candidate_fields(record: &CemeteryRecord, categories: &SearchCategories) -> Vec<String> {
    let mut fields = Vec::new();

    if categories.names {
        fields.push(record.lastname.clone());
        fields.push(text_or_empty(&record.firstname).to_string());
        fields.push(text_or_empty(&record.middlename).to_string());
    }

    // 日付は表示形式で比較する（"12" は MM/DD/YYYY 上で一致する）
    if categories.dates {
        fields.push(normalize_date(text_or_empty(&record.dob)));
        fields.push(normalize_date(text_or_empty(&record.dod)));
    }

    if categories.location {
        fields.push(text_or_empty(&record.section).to_string());
        fields.push(text_or_empty(&record.block).to_string());
        fields.push(text_or_empty(&record.plot).to_string());
    }

    if categories.places {
        fields.push(text_or_empty(&record.place_of_birth).to_string());
        fields.push(text_or_empty(&record.place_of_death).to_string());
    }

    if categories.notes {
        fields.push(text_or_empty(&record.notes).to_string());
    }

    fields
}

/// 一致する記録を元の順序のまま抽出
pub fn filter_records<'a>(
    records: &'a [CemeteryRecord],
    categories: &SearchCategories,
    query: &str,
) -> Vec<&'a CemeteryRecord> {
    records
        .iter()
        .filter(|r| matches(r, categories, query))
        .collect()
}

/// 簡易検索の一致判定（姓・名のみ、カテゴリ指定なし）
pub fn quick_matches(record: &CemeteryRecord, query: &str) -> bool {
    if query.chars().count() < MIN_QUICK_QUERY_LEN {
        return false;
    }
    let lower = query.to_lowercase();

    record.lastname.to_lowercase().contains(&lower)
        || record
            .firstname
            .as_deref()
            .is_some_and(|f| f.to_lowercase().contains(&lower))
}

/// 簡易検索（最小長未満のクエリは空の結果）
pub fn quick_filter<'a>(records: &'a [CemeteryRecord], query: &str) -> Vec<&'a CemeteryRecord> {
    if query.chars().count() < MIN_QUICK_QUERY_LEN {
        return Vec::new();
    }
    records.iter().filter(|r| quick_matches(r, query)).collect()
}
