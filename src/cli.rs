use cemetery_search_common::{Category, Column};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cemetery-search")]
#[command(about = "墓地埋葬記録の検索ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データセット（JSON配列）のパス
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カテゴリ指定で検索してテーブル表示
    Search {
        /// 検索語（省略時は全件）
        query: Option<String>,

        /// 検索対象カテゴリ（names,dates,location,places,notes,special）
        #[arg(short = 'i', long = "in", value_delimiter = ',')]
        categories: Vec<Category>,

        /// すべてのカテゴリを対象にする
        #[arg(short = 'a', long, conflicts_with = "categories")]
        all_categories: bool,

        /// 並び替える列
        #[arg(short, long)]
        sort: Option<Column>,

        /// 降順で並び替え
        #[arg(long, requires = "sort")]
        desc: bool,

        /// 非表示にする列（カンマ区切り）
        #[arg(long, value_delimiter = ',')]
        hide: Vec<Column>,

        /// 表示するページ（1始まり）
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// ページ分割せず全件を表示
        #[arg(long)]
        virtualized: bool,

        /// 検索結果をExcelに出力
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// 姓・名で簡易検索してカード表示（2文字以上）
    Quick {
        /// 検索語
        #[arg(required = true)]
        query: String,
    },

    /// 対話的に簡易検索を繰り返す
    Interactive,

    /// 壊れたデータセットJSONを修復
    Repair {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力先（省略時は cemetery_records_fixed.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// データセットのパスを設定
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
