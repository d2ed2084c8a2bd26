//! テーブル検索の組み立て
//!
//! CLI引数と設定から検索条件・表示設定を作り、フィルタ → 並び替え → ページ分割を行う。

use crate::config::Config;
use cemetery_search_common::table::TableData;
use cemetery_search_common::{
    filter_records, Category, CemeteryRecord, Column, SearchCategories, SearchRequest, SortState,
    TableView, ViewMode,
};
use std::time::Instant;

/// テーブル検索のオプション
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub query: String,
    /// 指定が無ければ設定の既定カテゴリ
    pub categories: Vec<Category>,
    pub all_categories: bool,
    pub sort: Option<Column>,
    pub desc: bool,
    /// 設定の非表示列に追加する列
    pub hide: Vec<Column>,
    pub page: usize,
    pub virtualized: bool,
}

impl SearchOptions {
    pub fn request(&self, config: &Config) -> SearchRequest {
        let categories = if self.all_categories {
            SearchCategories::all()
        } else if self.categories.is_empty() {
            config.default_categories
        } else {
            self.categories.iter().copied().collect()
        };
        SearchRequest::new(self.query.clone(), categories)
    }

    pub fn table_view(&self, config: &Config) -> TableView {
        let mut visibility = config.column_visibility();
        for column in &self.hide {
            visibility.hide(*column);
        }

        let sort = self.sort.map(|column| {
            if self.desc {
                SortState::descending(column)
            } else {
                SortState::ascending(column)
            }
        });

        TableView {
            visibility,
            sort,
            mode: if self.virtualized { ViewMode::Virtualized } else { ViewMode::Paginated },
            page: self.page.max(1),
            page_size: config.page_size,
        }
    }
}

/// 検索を実行して表示用テーブルを返す
pub fn run_search<'a>(
    records: &'a [CemeteryRecord],
    options: &SearchOptions,
    config: &Config,
) -> TableData<'a> {
    let request = options.request(config);
    let started = Instant::now();
    let matched = filter_records(records, &request.categories, &request.query);
    log::debug!(
        "検索 {:?} (カテゴリ: {:?}): {}/{}件 {:?}",
        request.query,
        request.categories.enabled(),
        matched.len(),
        records.len(),
        started.elapsed()
    );

    options.table_view(config).build(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_config_defaults() {
        let mut config = Config::default();
        config.default_categories = [Category::Notes].into_iter().collect();

        let options = SearchOptions { query: "smith".into(), ..Default::default() };
        assert_eq!(options.request(&config).categories.enabled(), vec![Category::Notes]);

        let options = SearchOptions {
            categories: vec![Category::Places, Category::Dates],
            ..Default::default()
        };
        assert_eq!(
            options.request(&config).categories.enabled(),
            vec![Category::Dates, Category::Places]
        );

        let options = SearchOptions { all_categories: true, ..Default::default() };
        assert_eq!(options.request(&config).categories, SearchCategories::all());
    }

    #[test]
    fn test_table_view_merges_hidden_columns() {
        let config = Config { hidden_columns: vec![Column::Notes], ..Default::default() };
        let options = SearchOptions {
            hide: vec![Column::Veteran],
            sort: Some(Column::Plot),
            desc: true,
            page: 0,
            ..Default::default()
        };

        let view = options.table_view(&config);
        assert!(!view.visibility.is_visible(Column::Notes));
        assert!(!view.visibility.is_visible(Column::Veteran));
        assert_eq!(view.sort, Some(SortState::descending(Column::Plot)));
        assert_eq!(view.page, 1);
        assert_eq!(view.page_size, 20);
    }
}
