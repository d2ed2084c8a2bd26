//! 日付表記の正規化
//!
//! 元データには少なくとも7種類の日付表記が混在している:
//! - `1965-07-01 00:00:00`（タイムスタンプ）
//! - `03/04/1920`（月/日/年）
//! - `1909-10`（年月のみ）
//! - `1909-10-23`
//! - `1897`（年のみ）
//! - `1863?`（年が不確か）
//! - それ以外の自由記述
//!
//! 完全な日付は `MM/DD/YYYY` に揃え、精度の低い表記は手を加えずに残す。
//! 解釈できない値は常にそのまま返し、エラーにはしない。

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

/// 空値の表示
pub const EMPTY_PLACEHOLDER: &str = "-";

/// 年月表記に付ける日の不明マーカー
pub const UNKNOWN_DAY_SUFFIX: &str = "-??";

const TIMESTAMP_MIDNIGHT: &str = " 00:00:00";

lazy_static! {
    static ref YEAR_MONTH_RE: Regex = Regex::new(r"^\d{4}-\d{2}$").unwrap();
    static ref YEAR_MONTH_DAY_RE: Regex = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap();
    static ref YEAR_RE: Regex = Regex::new(r"^\d{4}$").unwrap();
    static ref UNCERTAIN_YEAR_RE: Regex = Regex::new(r"^\d{4}\?$").unwrap();
    static ref MONTH_DAY_YEAR_RE: Regex = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap();
    static ref YEAR_MONTH_DAY_SLASH_RE: Regex = Regex::new(r"^(\d{4})/(\d{1,2})/(\d{1,2})$").unwrap();
}

/// 日付の精度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePrecision {
    /// 空または空白のみ
    Empty,
    /// 年月日がそろった実在の日付
    Full,
    /// 年月のみ（`1909-10`）
    YearMonth,
    /// 年のみ（`1897`）
    Year,
    /// 不確かな年（`1863?`）
    UncertainYear,
    /// 上記以外
    Unknown,
}

/// 日付文字列を表示用に正規化する
///
/// 判定順（最初に一致したものを採用）:
/// 1. 空・空白のみ → `-`
/// 2. `<日付> 00:00:00` → 日付部分を `MM/DD/YYYY` に。解析できなければ日付部分のみ返す
/// 3. `/` を含む → `MM/DD/YYYY` に。解析できなければそのまま
/// 4. `YYYY-MM` → `YYYY-MM-??`
/// 5. `YYYY-MM-DD` → `MM/DD/YYYY`。実在しない日付ならそのまま
/// 6. `YYYY` → そのまま
/// 7. `YYYY?` → そのまま
/// 8. その他 → そのまま
///
/// # Examples
/// ```
/// use cemetery_search_common::normalize_date;
///
/// assert_eq!(normalize_date("1965-07-01 00:00:00"), "07/01/1965");
/// assert_eq!(normalize_date("1909-10"), "1909-10-??");
/// assert_eq!(normalize_date("1863?"), "1863?");
/// ```
pub fn normalize_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    if raw.contains(TIMESTAMP_MIDNIGHT) {
        let date_part = raw.split(' ').next().unwrap_or(raw);
        return match parse_calendar_date(date_part) {
            Some(date) => render(date),
            None => date_part.to_string(),
        };
    }

    if raw.contains('/') {
        return match parse_slash_date(raw) {
            Some(date) => render(date),
            None => raw.to_string(),
        };
    }

    if YEAR_MONTH_RE.is_match(raw) {
        return format!("{}{}", raw, UNKNOWN_DAY_SUFFIX);
    }

    if YEAR_MONTH_DAY_RE.is_match(raw) {
        return match parse_dash_date(raw) {
            Some(date) => render(date),
            None => raw.to_string(),
        };
    }

    // 年のみ・不確かな年は精度を落とさずそのまま
    raw.to_string()
}

/// 日付文字列の精度を判定する
pub fn classify_date(raw: &str) -> DatePrecision {
    if raw.trim().is_empty() {
        return DatePrecision::Empty;
    }
    if parse_full_date(raw).is_some() {
        return DatePrecision::Full;
    }
    if YEAR_MONTH_RE.is_match(raw) {
        DatePrecision::YearMonth
    } else if YEAR_RE.is_match(raw) {
        DatePrecision::Year
    } else if UNCERTAIN_YEAR_RE.is_match(raw) {
        DatePrecision::UncertainYear
    } else {
        DatePrecision::Unknown
    }
}

/// 並び替え用の `(年, 月, 日)`
///
/// 不明な月・日は 0 とし、同じ年の完全な日付より前に並ぶ。
/// 年を読み取れない表記は None。
pub fn date_sort_key(raw: &str) -> Option<(i32, u32, u32)> {
    let raw = raw.trim();
    if let Some(date) = parse_full_date(raw) {
        return Some((date.year(), date.month(), date.day()));
    }
    if YEAR_MONTH_RE.is_match(raw) {
        let (year, month) = raw.split_once('-')?;
        return Some((year.parse().ok()?, month.parse().ok()?, 0));
    }
    if YEAR_RE.is_match(raw) || UNCERTAIN_YEAR_RE.is_match(raw) {
        return Some((raw[..4].parse().ok()?, 0, 0));
    }
    None
}

/// 年月日がそろった表記を暦日として解析する
///
/// タイムスタンプ・スラッシュ区切り・`YYYY-MM-DD` に対応。
/// タイムゾーンは扱わないので表示上の日付がずれることはない。
pub fn parse_full_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.contains(TIMESTAMP_MIDNIGHT) {
        return raw.split(' ').next().and_then(parse_calendar_date);
    }
    parse_calendar_date(raw)
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    if raw.contains('/') {
        parse_slash_date(raw)
    } else {
        parse_dash_date(raw)
    }
}

fn parse_slash_date(raw: &str) -> Option<NaiveDate> {
    if let Some(caps) = MONTH_DAY_YEAR_RE.captures(raw) {
        return ymd(&caps[3], &caps[1], &caps[2]);
    }
    if let Some(caps) = YEAR_MONTH_DAY_SLASH_RE.captures(raw) {
        return ymd(&caps[1], &caps[2], &caps[3]);
    }
    None
}

fn parse_dash_date(raw: &str) -> Option<NaiveDate> {
    let caps = YEAR_MONTH_DAY_RE.captures(raw)?;
    ymd(&caps[1], &caps[2], &caps[3])
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn render(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}
