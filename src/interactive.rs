//! 対話式の簡易検索
//!
//! 入力のたびに姓・名で検索し、結果をカードで表示する。

use crate::error::{CemeteryError, Result};
use crate::render::render_cards;
use cemetery_search_common::{quick_filter, CemeteryRecord};
use dialoguer::Input;

/// 対話アクション
#[derive(Debug, PartialEq, Eq)]
pub enum PromptAction {
    /// 検索を実行
    Search(String),
    /// 終了
    Quit,
}

/// 入力を対話アクションに変換（空入力と `q` は終了）
pub fn parse_action(input: &str) -> PromptAction {
    match input.trim() {
        "" | "q" | "Q" => PromptAction::Quit,
        query => PromptAction::Search(query.to_string()),
    }
}

/// 対話式で簡易検索を繰り返す
pub fn run_interactive_search(records: &[CemeteryRecord]) -> Result<()> {
    println!("🔍 {}件の記録を検索できます", records.len());
    println!("---");
    println!("姓または名を2文字以上入力 [Enter/q]終了");
    println!("---\n");

    loop {
        let input: String = Input::new()
            .with_prompt("検索")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CemeteryError::Prompt(e.to_string()))?;

        match parse_action(&input) {
            PromptAction::Quit => {
                println!("終了します");
                break;
            }
            PromptAction::Search(query) => {
                let results = quick_filter(records, &query);
                log::debug!("簡易検索 {:?}: {}件", query, results.len());

                let text = render_cards(&results, &query);
                if text.is_empty() {
                    println!("  → 2文字以上入力してください\n");
                } else {
                    println!("{}\n", text);
                }
            }
        }
    }

    Ok(())
}
