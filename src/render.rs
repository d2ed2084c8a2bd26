//! 端末向けの表示
//!
//! テーブル検索は列揃えのテキスト表、簡易検索はカードとして出力する。

use cemetery_search_common::card::NO_RESULTS;
use cemetery_search_common::table::{found_label, summary, TableData};
use cemetery_search_common::{CemeteryRecord, Column, RecordCard, MIN_QUICK_QUERY_LEN};

/// 備考列の最大表示幅（文字数）
const NOTES_MAX_WIDTH: usize = 40;

const COLUMN_GAP: &str = "  ";

/// テーブル検索の結果を表示用テキストにする
///
/// # Arguments
/// * `data` - 表示範囲を切り出したテーブル
/// * `query_active` - 検索語が入力されているか（件数表示の有無）
/// * `total` - データセット全体の件数
pub fn render_table(data: &TableData<'_>, query_active: bool, total: usize) -> String {
    let mut out = Vec::new();

    if query_active {
        out.push(found_label(data.matched));
        out.push(String::new());
    }

    let cells: Vec<Vec<String>> = data
        .cells()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(data.columns.iter())
                .map(|(value, column)| fit_cell(&value, *column))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = data
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(column.label().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    out.push(join_padded(data.header_labels().iter().map(|s| s.to_string()), &widths));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );
    for row in cells {
        out.push(join_padded(row.into_iter(), &widths));
    }

    if !data.page_buttons.is_empty() {
        out.push(String::new());
        out.push(page_line(data));
    }

    out.push(String::new());
    out.push(summary(data.rows.len(), data.matched, total));

    out.join("\n")
}

/// ページ送り表示（現在ページは角括弧）
fn page_line(data: &TableData<'_>) -> String {
    let prev = if data.page > 1 { "<" } else { " " };
    let next = if data.page < data.page_count { ">" } else { " " };
    let buttons = data
        .page_buttons
        .iter()
        .map(|&n| {
            if n == data.page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("{} {} {}  (page {}/{})", prev, buttons, next, data.page, data.page_count)
}

fn fit_cell(value: &str, column: Column) -> String {
    let value = value.replace(['\n', '\r'], " ");
    if column == Column::Notes && value.chars().count() > NOTES_MAX_WIDTH {
        let truncated: String = value.chars().take(NOTES_MAX_WIDTH - 1).collect();
        format!("{}…", truncated)
    } else {
        value
    }
}

fn join_padded(values: impl Iterator<Item = String>, widths: &[usize]) -> String {
    values
        .zip(widths.iter())
        .map(|(value, &width)| {
            let pad = width.saturating_sub(value.chars().count());
            format!("{}{}", value, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

/// 簡易検索の結果をカードとして表示用テキストにする
pub fn render_cards(results: &[&CemeteryRecord], query: &str) -> String {
    if results.is_empty() {
        // 最小長未満の入力では何も出さない
        return if query.chars().count() >= MIN_QUICK_QUERY_LEN {
            NO_RESULTS.to_string()
        } else {
            String::new()
        };
    }

    results
        .iter()
        .map(|r| {
            let lines = RecordCard::from_record(r).lines();
            let mut card = vec![lines[0].clone()];
            card.extend(lines[1..].iter().map(|l| format!("  {}", l)));
            card.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cemetery_search_common::{ColumnVisibility, TableView, ViewMode};

    fn records() -> Vec<CemeteryRecord> {
        vec![
            CemeteryRecord {
                lastname: "Smith".to_string(),
                firstname: Some("John".to_string()),
                dob: Some("1965-07-01 00:00:00".to_string()),
                ..Default::default()
            },
            CemeteryRecord {
                lastname: "Li".to_string(),
                notes: Some("x".repeat(60)),
                ..Default::default()
            },
        ]
    }

    fn view(columns: &[Column]) -> TableView {
        TableView {
            visibility: ColumnVisibility::with_hidden(
                Column::ALL.into_iter().filter(|c| !columns.contains(c)),
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_table_layout() {
        let records = records();
        let data = view(&[Column::Lastname, Column::Dob]).build(records.iter().collect());
        let text = render_table(&data, false, 2);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Last Name  Date of Birth");
        assert_eq!(lines[1], "---------  -------------");
        assert_eq!(lines[2], "Smith      07/01/1965");
        assert_eq!(lines[3], "Li         -");
        assert_eq!(lines.last().copied(), Some("Showing 2 of 2 records"));
    }

    #[test]
    fn test_render_table_found_label_and_total() {
        let records = records();
        let data = view(&[Column::Lastname]).build(vec![&records[0]]);
        let text = render_table(&data, true, 2);
        assert!(text.starts_with("Found 1 record\n"));
        assert!(text.ends_with("Showing 1 of 1 records (2 total)"));
    }

    #[test]
    fn test_render_table_truncates_notes() {
        let records = records();
        let data = view(&[Column::Notes]).build(vec![&records[1]]);
        let text = render_table(&data, false, 2);
        let row = text.lines().nth(2).unwrap();
        assert_eq!(row.chars().count(), NOTES_MAX_WIDTH);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn test_render_table_page_line() {
        let many: Vec<CemeteryRecord> = (0..45)
            .map(|i| CemeteryRecord { lastname: format!("P{}", i), ..Default::default() })
            .collect();
        let mut table = view(&[Column::Lastname]);
        table.page = 2;
        let data = table.build(many.iter().collect());
        let text = render_table(&data, false, 45);
        assert!(text.contains("< 1 [2] 3 >  (page 2/3)"));

        table.mode = ViewMode::Virtualized;
        let data = table.build(many.iter().collect());
        let text = render_table(&data, false, 45);
        assert!(!text.contains("page"));
        assert!(text.ends_with("Showing 45 of 45 records"));
    }

    #[test]
    fn test_render_cards() {
        let records = records();
        let text = render_cards(&[&records[0]], "sm");
        assert!(text.starts_with("John Smith\n  DOB: 1965-07-01 00:00:00"));

        assert_eq!(render_cards(&[], "zz"), "No results found.");
        assert_eq!(render_cards(&[], "z"), "");
    }
}
