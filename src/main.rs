use cemetery_search::{cli, config, dataset, error, export, interactive, render, search};
use cemetery_search_common::quick_filter;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use search::SearchOptions;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` が無ければ --verbose で debug、通常は warn
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Search { query, categories, all_categories, sort, desc, hide, page, virtualized, export: export_path } => {
            let config = Config::load()?;
            let data_path = dataset::resolve_data_path(cli.data.as_deref(), &config, &cwd)?;
            let records = dataset::load_records(&data_path)?;

            let options = SearchOptions {
                query: query.unwrap_or_default(),
                categories,
                all_categories,
                sort,
                desc,
                hide,
                page,
                virtualized,
            };
            let table = search::run_search(&records, &options, &config);

            println!("{}", render::render_table(&table, !options.query.is_empty(), records.len()));

            if let Some(output) = export_path {
                // ページ分割に関係なく一致した全行を出力
                let all_rows = SearchOptions { virtualized: true, ..options };
                let full = search::run_search(&records, &all_rows, &config);
                println!("\n- Excelを生成中...");
                let path = export::export_table(&full.rows, &full.columns, &output)?;
                println!("✔ Excel出力: {}", path.display());
            }
        }

        Commands::Quick { query } => {
            let config = Config::load()?;
            let data_path = dataset::resolve_data_path(cli.data.as_deref(), &config, &cwd)?;
            let records = dataset::load_records(&data_path)?;

            let results = quick_filter(&records, &query);
            log::debug!("簡易検索 {:?}: {}件", query, results.len());

            let text = render::render_cards(&results, &query);
            if text.is_empty() {
                println!("2文字以上入力してください");
            } else {
                println!("{}", text);
            }
        }

        Commands::Interactive => {
            let config = Config::load()?;
            let data_path = dataset::resolve_data_path(cli.data.as_deref(), &config, &cwd)?;
            let records = dataset::load_records(&data_path)?;
            interactive::run_interactive_search(&records)?;
        }

        Commands::Repair { input, output } => {
            println!("🔧 cemetery-search - データセット修復\n");

            let output = output.unwrap_or_else(|| dataset::default_repaired_path(&input));
            println!("- 読み込み・修復中: {}", input.display());
            let report = dataset::repair_file(&input, &output)?;

            println!("✔ {}件の記録を修復", report.len());
            println!("  三重引用符: {}件", report.triple_quotes_fixed);
            println!("  NaN: {}件", report.nan_replaced);
            println!("\n✅ 出力: {}", output.display());
        }

        Commands::Config { set_data, show } => {
            // 書き換え時は壊れた設定ファイルでも作り直せるようにする
            let mut config = if set_data.is_some() { Config::load_for_update()? } else { Config::load()? };

            if let Some(path) = set_data {
                config.set_data_path(path)?;
                println!("✔ データセットのパスを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!(
                    "  データセット: {}",
                    config
                        .configured_data_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定（カレントディレクトリから探索）".to_string())
                );
                println!("  ページサイズ: {}", config.page_size);
                println!(
                    "  既定カテゴリ: {}",
                    config
                        .default_categories
                        .enabled()
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                println!(
                    "  非表示列: {}",
                    config
                        .hidden_columns
                        .iter()
                        .map(|c| c.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }
    }

    Ok(())
}
