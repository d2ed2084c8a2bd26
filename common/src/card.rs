//! 簡易検索の結果カード
//!
//! 1件の記録を、名前・日付・区画・出生地/死亡地・備考の行にまとめる。
//! 日付は正規化せず元の表記のまま表示する。

use crate::types::CemeteryRecord;

/// カード内の欠落値表示
pub const CARD_PLACEHOLDER: &str = "—";

/// 簡易検索で結果が無い場合の表示
pub const NO_RESULTS: &str = "No results found.";

/// ラベルと値の組
pub type Detail = (&'static str, String);

#[derive(Debug, Clone, PartialEq)]
pub struct RecordCard {
    pub name: String,
    /// DOB / DOD
    pub dates: Vec<Detail>,
    /// Section / Block / Plot
    pub location: Vec<Detail>,
    /// Birth / Death（どちらも無ければ None）
    pub places: Option<Vec<Detail>>,
    pub notes: Option<String>,
}

impl RecordCard {
    pub fn from_record(record: &CemeteryRecord) -> Self {
        let places = if present(&record.place_of_birth) || present(&record.place_of_death) {
            Some(vec![
                ("Birth", or_placeholder(&record.place_of_birth)),
                ("Death", or_placeholder(&record.place_of_death)),
            ])
        } else {
            None
        };

        Self {
            name: record.display_name(),
            dates: vec![
                ("DOB", or_placeholder(&record.dob)),
                ("DOD", or_placeholder(&record.dod)),
            ],
            location: vec![
                ("Section", or_placeholder(&record.section)),
                ("Block", or_placeholder(&record.block)),
                ("Plot", or_placeholder(&record.plot)),
            ],
            places,
            notes: record.notes.clone().filter(|n| !n.is_empty()),
        }
    }

    /// 表示行に展開
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.name.clone(), detail_line(&self.dates), detail_line(&self.location)];
        if let Some(places) = &self.places {
            lines.push(detail_line(places));
        }
        if let Some(notes) = &self.notes {
            lines.push(notes.clone());
        }
        lines
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn or_placeholder(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => CARD_PLACEHOLDER.to_string(),
    }
}

fn detail_line(details: &[Detail]) -> String {
    details
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("   ")
}
