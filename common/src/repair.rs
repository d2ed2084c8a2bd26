//! データセット修復
//!
//! 抽出パイプラインが書き出したJSONには、置換処理の名残で次のような崩れがある:
//! - `"""text"` のような三重引用符
//! - 引用符なしの `NaN`、文字列の `"NaN"`
//!
//! これらを直してから配列として読み込み、`null` と空白だけの文字列を空文字に揃える。

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

lazy_static! {
    static ref TRIPLE_QUOTE_RE: Regex = Regex::new(r#""""([^"]*)""#).unwrap();
    static ref BARE_NAN_RE: Regex = Regex::new(r":\s*NaN\s*([,}])").unwrap();
}

/// エラー位置の前後に表示する行数
const EXCERPT_CONTEXT: usize = 2;

/// 修復結果
#[derive(Debug, Clone, Default)]
pub struct RepairReport {
    pub records: Vec<Map<String, Value>>,
    /// 三重引用符の修正数
    pub triple_quotes_fixed: usize,
    /// NaN の置換数
    pub nan_replaced: usize,
}

impl RepairReport {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

/// JSONテキストを修復して記録配列を返す
pub fn repair_json(content: &str) -> Result<RepairReport> {
    let triple_quotes_fixed = TRIPLE_QUOTE_RE.find_iter(content).count();
    let fixed = TRIPLE_QUOTE_RE.replace_all(content, "\"$1\"");

    let bare_nan = BARE_NAN_RE.find_iter(&fixed).count();
    let fixed = BARE_NAN_RE.replace_all(&fixed, ": null$1");

    let quoted_nan = fixed.matches("\"NaN\"").count();
    let fixed = fixed.replace("\"NaN\"", "null");

    let parsed: Vec<Map<String, Value>> =
        serde_json::from_str(&fixed).map_err(|e| Error::Repair {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
            excerpt: excerpt(&fixed, e.line()),
        })?;

    let records = parsed.into_iter().map(clean_record).collect();

    Ok(RepairReport {
        records,
        triple_quotes_fixed,
        nan_replaced: bare_nan + quoted_nan,
    })
}

/// `null` と空白のみの文字列を空文字に揃える
pub fn clean_record(record: Map<String, Value>) -> Map<String, Value> {
    record
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Null => Value::String(String::new()),
                Value::String(s) if s.trim().is_empty() => Value::String(String::new()),
                other => other,
            };
            (key, value)
        })
        .collect()
}

/// エラー行の前後を行番号付きで抜き出す（エラー行に `>>>`）
fn excerpt(content: &str, line: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let error_line = line.saturating_sub(1);
    let start = error_line.saturating_sub(EXCERPT_CONTEXT);
    let end = std::cmp::min(lines.len(), error_line + EXCERPT_CONTEXT + 1);

    (start..end)
        .map(|i| {
            let marker = if i == error_line { " >>> " } else { "     " };
            format!("{}{:6}: {}", marker, i + 1, lines[i])
        })
        .collect::<Vec<_>>()
        .join("\n")
}
