//! Excel出力（共通ライブラリ）
//!
//! 表示中の列だけを1シートの表として書き出す。

use crate::table::Column;
use crate::types::CemeteryRecord;
use rust_xlsxwriter::*;

/// 列幅（文字数換算）
fn column_width(column: Column) -> f64 {
    match column {
        Column::Notes => 60.0,
        Column::PlaceOfBirth | Column::PlaceOfDeath => 24.0,
        Column::Lastname | Column::Firstname | Column::Middlename => 16.0,
        Column::Dob | Column::Dod => 14.0,
        Column::Section | Column::Block | Column::Plot | Column::Veteran => 10.0,
    }
}

/// 表をバッファに生成
///
/// # Arguments
/// * `rows` - 出力する記録（表示順）
/// * `columns` - 出力する列（列順）
/// * `title` - シート名
pub fn generate_table_buffer(
    rows: &[&CemeteryRecord],
    columns: &[Column],
    title: &str,
) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x333333))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let notes_format = value_format.clone().set_text_wrap();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(title))
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, column) in columns.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, column_width(*column))
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        worksheet.write_string_with_format(0, col, column.label(), &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
    }
    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("見出し固定エラー: {}", e))?;

    for (row, record) in rows.iter().enumerate() {
        let row = row as u32 + 1;
        for (col, column) in columns.iter().enumerate() {
            let format = if *column == Column::Notes { &notes_format } else { &value_format };
            worksheet.write_string_with_format(row, col as u16, column.cell(record), format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

/// Excelのシート名制約（31文字、`[]:*?/\` 不可）に合わせる
fn sheet_name(title: &str) -> String {
    let name: String = title
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(31)
        .collect();
    if name.trim().is_empty() {
        "Records".to_string()
    } else {
        name
    }
}
