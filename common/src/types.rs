//! 埋葬記録の型定義
//!
//! データセットは抽出パイプラインの出力をそのまま同梱したもので、
//! 同じ列でも文字列・数値・null・空文字が混在する。既知の列は型付きの
//! フィールドに寄せ、解釈しない構造化データは `ExtraData` にそのまま保持する。

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 埋葬記録 1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CemeteryRecord {
    /// 姓（壊れた行では欠落することがあるので空文字で受ける）
    #[serde(rename = "Lastname", default, deserialize_with = "lenient_required")]
    pub lastname: String,

    #[serde(
        rename = "Firstname",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub firstname: Option<String>,

    #[serde(
        rename = "Middlename",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub middlename: Option<String>,

    /// 生年月日（表記はまちまち。表示時は `date::normalize_date` を通す）
    #[serde(
        rename = "DOB",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub dob: Option<String>,

    /// 没年月日
    #[serde(
        rename = "DOD",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub dod: Option<String>,

    #[serde(
        rename = "Section",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub section: Option<String>,

    #[serde(
        rename = "Block",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub block: Option<String>,

    #[serde(
        rename = "Plot",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub plot: Option<String>,

    #[serde(
        rename = "Place of birth",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub place_of_birth: Option<String>,

    #[serde(
        rename = "Place of death",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub place_of_death: Option<String>,

    #[serde(
        rename = "Notes",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,

    /// 退役軍人フラグ（JSONの真偽値のみ有効）
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub veteran: Option<bool>,

    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub widow: Option<bool>,

    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub divorced: Option<bool>,

    /// 検索では参照しない付随データ
    #[serde(flatten)]
    pub extra: ExtraData,
}

/// 解釈せずに保持する構造化データ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtraData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_all: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriages: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sons: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brothers: Option<Value>,
}

impl ExtraData {
    pub fn is_empty(&self) -> bool {
        self.extracted_all.is_none()
            && self.marriages.is_none()
            && self.sons.is_none()
            && self.brothers.is_none()
    }
}

impl CemeteryRecord {
    /// 表示名（名・ミドルネーム・姓の順、欠落部分は詰める）
    pub fn display_name(&self) -> String {
        [
            self.firstname.as_deref(),
            self.middlename.as_deref(),
            Some(self.lastname.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// 欠落フィールドを空文字として扱う
pub fn text_or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// JSON値を表示用テキストに変換（nullは欠落扱い）
pub fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

fn lenient_required<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(Some(b)),
        _ => Ok(None),
    }
}
