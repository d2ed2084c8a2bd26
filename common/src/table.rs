//! テーブル表示モデル
//!
//! 列の表示/非表示、並び替え、ページ分割をまとめる。
//! 検索フィルタとは独立しており、抽出済みの記録列を受け取って表示順と
//! 表示範囲だけを決める。

use crate::date::{date_sort_key, normalize_date, EMPTY_PLACEHOLDER};
use crate::types::CemeteryRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 1ページあたりの行数
pub const PAGE_SIZE: usize = 20;

/// ページ番号ボタンの最大数
pub const MAX_PAGE_BUTTONS: usize = 10;

/// 表示列（並びは画面の列順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Lastname,
    Firstname,
    Middlename,
    Dob,
    Dod,
    Section,
    Block,
    Plot,
    PlaceOfBirth,
    PlaceOfDeath,
    Veteran,
    Notes,
}

impl Column {
    pub const ALL: [Column; 12] = [
        Column::Lastname,
        Column::Firstname,
        Column::Middlename,
        Column::Dob,
        Column::Dod,
        Column::Section,
        Column::Block,
        Column::Plot,
        Column::PlaceOfBirth,
        Column::PlaceOfDeath,
        Column::Veteran,
        Column::Notes,
    ];

    /// 見出し
    pub fn label(&self) -> &'static str {
        match self {
            Column::Lastname => "Last Name",
            Column::Firstname => "First Name",
            Column::Middlename => "Middle Name",
            Column::Dob => "Date of Birth",
            Column::Dod => "Date of Death",
            Column::Section => "Section",
            Column::Block => "Block",
            Column::Plot => "Plot",
            Column::PlaceOfBirth => "Place of Birth",
            Column::PlaceOfDeath => "Place of Death",
            Column::Veteran => "Veteran",
            Column::Notes => "Notes",
        }
    }

    /// 列が参照する元の値（真偽値の列は None）
    pub fn raw<'a>(&self, record: &'a CemeteryRecord) -> Option<&'a str> {
        match self {
            Column::Lastname => Some(record.lastname.as_str()),
            Column::Firstname => record.firstname.as_deref(),
            Column::Middlename => record.middlename.as_deref(),
            Column::Dob => record.dob.as_deref(),
            Column::Dod => record.dod.as_deref(),
            Column::Section => record.section.as_deref(),
            Column::Block => record.block.as_deref(),
            Column::Plot => record.plot.as_deref(),
            Column::PlaceOfBirth => record.place_of_birth.as_deref(),
            Column::PlaceOfDeath => record.place_of_death.as_deref(),
            Column::Notes => record.notes.as_deref(),
            Column::Veteran => None,
        }
    }

    /// セルの表示値（欠落・空は `-`、日付は正規化）
    pub fn cell(&self, record: &CemeteryRecord) -> String {
        match self {
            Column::Veteran => {
                if record.veteran == Some(true) {
                    "Veteran".to_string()
                } else {
                    EMPTY_PLACEHOLDER.to_string()
                }
            }
            Column::Dob | Column::Dod => normalize_date(self.raw(record).unwrap_or("")),
            _ => match self.raw(record) {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => EMPTY_PLACEHOLDER.to_string(),
            },
        }
    }

    fn is_date(&self) -> bool {
        matches!(self, Column::Dob | Column::Dod)
    }

    /// 昇順の比較（空値の扱いは `sort_records` 側で行う）
    fn compare(&self, a: &CemeteryRecord, b: &CemeteryRecord) -> Ordering {
        if *self == Column::Veteran {
            return a.veteran.unwrap_or(false).cmp(&b.veteran.unwrap_or(false));
        }

        let left = self.raw(a).unwrap_or("");
        let right = self.raw(b).unwrap_or("");
        if self.is_date() {
            // 年を読めない表記は日付の後ろ。同じキー同士は元の文字列で決める
            let by_date = match (date_sort_key(left), date_sort_key(right)) {
                (Some(l), Some(r)) => l.cmp(&r),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            return by_date.then_with(|| natural_cmp(left, right));
        }
        natural_cmp(left, right)
    }

    fn is_blank(&self, record: &CemeteryRecord) -> bool {
        match self {
            Column::Veteran => record.veteran.is_none(),
            _ => self.raw(record).map_or(true, |v| v.trim().is_empty()),
        }
    }
}

impl std::str::FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "lastname" | "last" | "surname" => Ok(Column::Lastname),
            "firstname" | "first" => Ok(Column::Firstname),
            "middlename" | "middle" => Ok(Column::Middlename),
            "dob" | "dateofbirth" | "birth" => Ok(Column::Dob),
            "dod" | "dateofdeath" | "death" => Ok(Column::Dod),
            "section" => Ok(Column::Section),
            "block" => Ok(Column::Block),
            "plot" => Ok(Column::Plot),
            "placeofbirth" | "birthplace" => Ok(Column::PlaceOfBirth),
            "placeofdeath" | "deathplace" => Ok(Column::PlaceOfDeath),
            "veteran" => Ok(Column::Veteran),
            "notes" | "note" => Ok(Column::Notes),
            _ => Err(format!("Unknown column: {}", s)),
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 列の表示状態（初期状態は全列表示）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVisibility {
    #[serde(default)]
    hidden: Vec<Column>,
}

impl ColumnVisibility {
    pub fn with_hidden(hidden: impl IntoIterator<Item = Column>) -> Self {
        let mut visibility = Self::default();
        for column in hidden {
            visibility.hide(column);
        }
        visibility
    }

    pub fn is_visible(&self, column: Column) -> bool {
        !self.hidden.contains(&column)
    }

    pub fn hide(&mut self, column: Column) {
        if self.is_visible(column) {
            self.hidden.push(column);
        }
    }

    pub fn show(&mut self, column: Column) {
        self.hidden.retain(|c| *c != column);
    }

    pub fn toggle(&mut self, column: Column) {
        if self.is_visible(column) {
            self.hide(column);
        } else {
            self.show(column);
        }
    }

    /// 表示中の列（列順）
    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.is_visible(*c))
            .collect()
    }
}

/// 並び順
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// 並び替え状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: Column) -> Self {
        Self { column, direction: SortDirection::Ascending }
    }

    pub fn descending(column: Column) -> Self {
        Self { column, direction: SortDirection::Descending }
    }

    /// 見出しクリック時の遷移: なし → 昇順 → 降順 → なし
    ///
    /// 別の列をクリックした場合はその列の昇順から始める。
    pub fn toggle(current: Option<SortState>, column: Column) -> Option<SortState> {
        match current {
            Some(state) if state.column == column => match state.direction {
                SortDirection::Ascending => Some(Self::descending(column)),
                SortDirection::Descending => None,
            },
            _ => Some(Self::ascending(column)),
        }
    }
}

/// 記録を並び替える（安定ソート、空値は方向に関わらず末尾）
pub fn sort_records(rows: &mut [&CemeteryRecord], sort: Option<SortState>) {
    let Some(state) = sort else {
        return;
    };
    let column = state.column;

    rows.sort_by(|a, b| match (column.is_blank(a), column.is_blank(b)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = column.compare(a, b);
            match state.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    });
}

/// 数字部分を数値として比較する自然順（大文字小文字は区別しない）
///
/// `Plot 2` < `Plot 10`
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(&a.to_lowercase());
    let right = chunks(&b.to_lowercase());

    for (l, r) in left.iter().zip(right.iter()) {
        let ordering = match (l, r) {
            (Chunk::Number(l), Chunk::Number(r)) => {
                let l = l.trim_start_matches('0');
                let r = r.trim_start_matches('0');
                l.len().cmp(&r.len()).then_with(|| l.cmp(r))
            }
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
            (Chunk::Text(l), Chunk::Text(r)) => l.cmp(r),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left.len().cmp(&right.len())
}

enum Chunk {
    Number(String),
    Text(String),
}

fn chunks(s: &str) -> Vec<Chunk> {
    let mut result: Vec<Chunk> = Vec::new();
    for c in s.chars() {
        let digit = c.is_ascii_digit();
        match result.last_mut() {
            Some(Chunk::Number(n)) if digit => {
                n.push(c);
                continue;
            }
            Some(Chunk::Text(t)) if !digit => {
                t.push(c);
                continue;
            }
            _ => {}
        }
        result.push(if digit {
            Chunk::Number(c.to_string())
        } else {
            Chunk::Text(c.to_string())
        });
    }
    result
}

/// ページ分割の結果
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    /// 表示する行
    pub rows: &'a [T],
    /// 現在のページ（1始まり）
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// 分割前の行数
    pub total: usize,
}

impl<'a, T> Page<'a, T> {
    /// 指定ページを切り出す（範囲外のページ番号は丸める）
    pub fn slice(rows: &'a [T], page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total = rows.len();
        let page_count = total.div_ceil(page_size);
        let page = page.clamp(1, page_count.max(1));

        let start = std::cmp::min((page - 1) * page_size, total);
        let end = std::cmp::min(start + page_size, total);

        Self {
            rows: &rows[start..end],
            page,
            page_count,
            page_size,
            total,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    /// ページ送りが必要か（1ページに収まらない）
    pub fn needs_pagination(&self) -> bool {
        self.total > self.page_size
    }

    /// 表示するページ番号（先頭から最大10個）
    pub fn page_buttons(&self) -> Vec<usize> {
        (1..=self.page_count.min(MAX_PAGE_BUTTONS)).collect()
    }
}

/// 表示モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// ページ分割
    #[default]
    Paginated,
    /// 全行を一度に流す
    Virtualized,
}

/// テーブル表示の設定
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub visibility: ColumnVisibility,
    pub sort: Option<SortState>,
    pub mode: ViewMode,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            visibility: ColumnVisibility::default(),
            sort: None,
            mode: ViewMode::Paginated,
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

/// 表示用に組み立てたテーブル
#[derive(Debug, Clone)]
pub struct TableData<'a> {
    pub columns: Vec<Column>,
    /// 表示範囲の行
    pub rows: Vec<&'a CemeteryRecord>,
    /// 検索に一致した行数
    pub matched: usize,
    pub page: usize,
    pub page_count: usize,
    /// ページ番号ボタン（ページ分割時のみ）
    pub page_buttons: Vec<usize>,
}

impl TableView {
    /// 抽出済みの記録を並び替え、表示範囲を切り出す
    pub fn build<'a>(&self, mut matched: Vec<&'a CemeteryRecord>) -> TableData<'a> {
        sort_records(&mut matched, self.sort);
        let columns = self.visibility.visible_columns();
        let total = matched.len();

        match self.mode {
            ViewMode::Virtualized => TableData {
                columns,
                rows: matched,
                matched: total,
                page: 1,
                page_count: 1,
                page_buttons: Vec::new(),
            },
            ViewMode::Paginated => {
                let page = Page::slice(&matched, self.page, self.page_size);
                let page_buttons = if page.needs_pagination() {
                    page.page_buttons()
                } else {
                    Vec::new()
                };
                TableData {
                    columns,
                    rows: page.rows.to_vec(),
                    matched: total,
                    page: page.page,
                    page_count: page.page_count,
                    page_buttons,
                }
            }
        }
    }
}

impl TableData<'_> {
    pub fn header_labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.label()).collect()
    }

    /// 行ごとのセル表示値
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| self.columns.iter().map(|c| c.cell(r)).collect())
            .collect()
    }
}

/// 件数表示（`Showing X of Y records (Z total)`）
pub fn summary(shown: usize, matched: usize, total: usize) -> String {
    let mut text = format!("Showing {} of {} records", shown, matched);
    if total != matched {
        text.push_str(&format!(" ({} total)", total));
    }
    text
}

/// 検索中の件数表示（`Found N record(s)`）
pub fn found_label(count: usize) -> String {
    format!("Found {} record{}", count, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(lastname: &str, plot: Option<&str>, dob: Option<&str>) -> CemeteryRecord {
        CemeteryRecord {
            lastname: lastname.to_string(),
            plot: plot.map(str::to_string),
            dob: dob.map(str::to_string),
            ..Default::default()
        }
    }

    fn lastnames(rows: &[&CemeteryRecord]) -> Vec<String> {
        rows.iter().map(|r| r.lastname.clone()).collect()
    }

    #[test]
    fn test_cell_placeholders() {
        let record = CemeteryRecord {
            lastname: "Smith".to_string(),
            section: Some("".to_string()),
            dob: Some("1965-07-01 00:00:00".to_string()),
            veteran: Some(true),
            ..Default::default()
        };

        assert_eq!(Column::Lastname.cell(&record), "Smith");
        assert_eq!(Column::Firstname.cell(&record), "-");
        assert_eq!(Column::Section.cell(&record), "-");
        assert_eq!(Column::Dob.cell(&record), "07/01/1965");
        assert_eq!(Column::Dod.cell(&record), "-");
        assert_eq!(Column::Veteran.cell(&record), "Veteran");
        assert_eq!(Column::Veteran.cell(&CemeteryRecord::default()), "-");
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!("Lastname".parse::<Column>(), Ok(Column::Lastname));
        assert_eq!("Place of birth".parse::<Column>(), Ok(Column::PlaceOfBirth));
        assert_eq!("death-place".parse::<Column>(), Ok(Column::PlaceOfDeath));
        assert_eq!("DOB".parse::<Column>(), Ok(Column::Dob));
        assert!("height".parse::<Column>().is_err());
    }

    #[test]
    fn test_column_visibility() {
        let mut visibility = ColumnVisibility::default();
        assert_eq!(visibility.visible_columns().len(), 12);

        visibility.hide(Column::Notes);
        visibility.hide(Column::Notes);
        assert!(!visibility.is_visible(Column::Notes));
        assert_eq!(visibility.visible_columns().len(), 11);

        visibility.toggle(Column::Notes);
        assert!(visibility.is_visible(Column::Notes));

        let visibility = ColumnVisibility::with_hidden([Column::Middlename, Column::Veteran]);
        assert_eq!(visibility.visible_columns()[2], Column::Dob);
    }

    #[test]
    fn test_sort_toggle_cycle() {
        let state = SortState::toggle(None, Column::Lastname);
        assert_eq!(state, Some(SortState::ascending(Column::Lastname)));
        let state = SortState::toggle(state, Column::Lastname);
        assert_eq!(state, Some(SortState::descending(Column::Lastname)));
        let state = SortState::toggle(state, Column::Lastname);
        assert_eq!(state, None);

        let state = SortState::toggle(Some(SortState::descending(Column::Lastname)), Column::Plot);
        assert_eq!(state, Some(SortState::ascending(Column::Plot)));
    }

    #[test]
    fn test_sort_natural_and_blank_last() {
        let records = vec![
            person("A", Some("10"), None),
            person("B", None, None),
            person("C", Some("2"), None),
            person("D", Some(""), None),
            person("E", Some("2b"), None),
        ];
        let mut rows: Vec<&CemeteryRecord> = records.iter().collect();

        sort_records(&mut rows, Some(SortState::ascending(Column::Plot)));
        assert_eq!(lastnames(&rows), vec!["C", "E", "A", "B", "D"]);

        sort_records(&mut rows, Some(SortState::descending(Column::Plot)));
        assert_eq!(lastnames(&rows), vec!["A", "E", "C", "B", "D"]);
    }

    #[test]
    fn test_sort_dates_chronologically() {
        let records = vec![
            person("A", None, Some("12/01/1901")),
            person("B", None, Some("1899-05-02")),
            person("C", None, Some("1900-01-01 00:00:00")),
        ];
        let mut rows: Vec<&CemeteryRecord> = records.iter().collect();
        sort_records(&mut rows, Some(SortState::ascending(Column::Dob)));
        assert_eq!(lastnames(&rows), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_mixed_date_precisions() {
        let records = vec![
            person("A", None, Some("1/1/2000")),
            person("B", None, Some("1999-01-01")),
            person("C", None, Some("1500")),
            person("D", None, Some("1909-10")),
            person("E", None, Some("1909")),
            person("F", None, Some("1863?")),
            person("G", None, Some("about 1880")),
        ];
        let by_key = |a: &CemeteryRecord, b: &CemeteryRecord| Column::Dob.compare(a, b);
        assert_eq!(by_key(&records[1], &records[0]), Ordering::Less);
        assert_eq!(by_key(&records[2], &records[1]), Ordering::Less);
        assert_eq!(by_key(&records[2], &records[0]), Ordering::Less);

        let mut rows: Vec<&CemeteryRecord> = records.iter().collect();
        sort_records(&mut rows, Some(SortState::ascending(Column::Dob)));
        assert_eq!(lastnames(&rows), vec!["C", "F", "E", "D", "B", "A", "G"]);
    }

    #[test]
    fn test_sort_many_mixed_dates_in_order() {
        let records: Vec<CemeteryRecord> = (0..400u32)
            .map(|i| {
                let year = 1820 + (i * 37) % 180;
                let month = 1 + i % 12;
                let day = 1 + (i * 7) % 28;
                let dob = match i % 6 {
                    0 => format!("{}/{}/{}", month, day, year),
                    1 => format!("{}-{:02}-{:02}", year, month, day),
                    2 => format!("{}", year),
                    3 => format!("{}-{:02}", year, month),
                    4 => format!("{}?", year),
                    _ => format!("{}-{:02}-{:02} 00:00:00", year, month, day),
                };
                person(&i.to_string(), None, Some(dob.as_str()))
            })
            .collect();

        let mut rows: Vec<&CemeteryRecord> = records.iter().collect();
        sort_records(&mut rows, Some(SortState::ascending(Column::Dob)));
        let keys: Vec<_> = rows.iter().map(|r| date_sort_key(r.dob.as_deref().unwrap_or(""))).collect();
        assert!(keys.iter().all(|k| k.is_some()));
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));

        sort_records(&mut rows, Some(SortState::descending(Column::Dod)));
        sort_records(&mut rows, Some(SortState::descending(Column::Dob)));
        let keys: Vec<_> = rows.iter().map(|r| date_sort_key(r.dob.as_deref().unwrap_or(""))).collect();
        assert!(keys.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_none_keeps_order() {
        let records = vec![person("B", None, None), person("A", None, None)];
        let mut rows: Vec<&CemeteryRecord> = records.iter().collect();
        sort_records(&mut rows, None);
        assert_eq!(lastnames(&rows), vec!["B", "A"]);
    }

    #[test]
    fn test_natural_cmp() {
        assert_eq!(natural_cmp("Plot 2", "plot 10"), Ordering::Less);
        assert_eq!(natural_cmp("smith", "Smith"), Ordering::Equal);
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("a", "ab"), Ordering::Less);
    }

    #[test]
    fn test_page_slice() {
        let rows: Vec<usize> = (0..45).collect();

        let page = Page::slice(&rows, 1, 20);
        assert_eq!(page.rows.len(), 20);
        assert_eq!(page.page_count, 3);
        assert!(!page.has_prev());
        assert!(page.has_next());
        assert!(page.needs_pagination());

        let page = Page::slice(&rows, 3, 20);
        assert_eq!(page.rows, &rows[40..45]);
        assert!(!page.has_next());

        // 範囲外は最終ページに丸める
        let page = Page::slice(&rows, 99, 20);
        assert_eq!(page.page, 3);

        let page = Page::slice(&rows, 0, 20);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_page_slice_empty() {
        let rows: Vec<usize> = Vec::new();
        let page = Page::slice(&rows, 2, 20);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 0);
        assert!(page.rows.is_empty());
        assert!(page.page_buttons().is_empty());
    }

    #[test]
    fn test_page_buttons_capped() {
        let rows: Vec<usize> = (0..500).collect();
        let page = Page::slice(&rows, 1, 20);
        assert_eq!(page.page_count, 25);
        assert_eq!(page.page_buttons(), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_table_view_paginated_and_virtualized() {
        let records: Vec<CemeteryRecord> = (0..25)
            .map(|i| person(&format!("P{}", i), None, None))
            .collect();
        let matched: Vec<&CemeteryRecord> = records.iter().collect();

        let view = TableView {
            page: 2,
            sort: Some(SortState::descending(Column::Lastname)),
            ..Default::default()
        };
        let data = view.build(matched.clone());
        assert_eq!(data.rows.len(), 5);
        assert_eq!(data.matched, 25);
        assert_eq!(data.page, 2);
        assert_eq!(data.page_buttons, vec![1, 2]);
        assert_eq!(data.rows[0].lastname, "P4");

        let view = TableView {
            mode: ViewMode::Virtualized,
            ..Default::default()
        };
        let data = view.build(matched);
        assert_eq!(data.rows.len(), 25);
        assert!(data.page_buttons.is_empty());
    }

    #[test]
    fn test_table_data_cells() {
        let records = vec![person("Smith", Some("4"), Some("1909-10"))];
        let view = TableView {
            visibility: ColumnVisibility::with_hidden(
                Column::ALL.into_iter().filter(|c| !matches!(c, Column::Lastname | Column::Dob)),
            ),
            ..Default::default()
        };
        let data = view.build(records.iter().collect());
        assert_eq!(data.header_labels(), vec!["Last Name", "Date of Birth"]);
        assert_eq!(data.cells(), vec![vec!["Smith".to_string(), "1909-10-??".to_string()]]);
    }

    #[test]
    fn test_summary_and_found_label() {
        assert_eq!(summary(20, 45, 45), "Showing 20 of 45 records");
        assert_eq!(summary(20, 45, 1200), "Showing 20 of 45 records (1200 total)");
        assert_eq!(found_label(1), "Found 1 record");
        assert_eq!(found_label(0), "Found 0 records");
    }
}
