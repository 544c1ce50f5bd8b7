use std::path::{Path, PathBuf};
use std::sync::Arc;

use esgboard::{
    EsgBoard, EsgBoardBuilder, EsgConnector, EsgError, MissingDataPolicy, NewsReport,
    NewsRequest, ScoreReport, SentimentMode,
};
use esgboard_core::{ScoreTable, parse_ticker_list, write_scores};
use esgboard_file::{CsvConnector, NewsArchiveConnector};

use crate::cli::{Cli, Commands};
use crate::render;

struct Output {
    json: bool,
}

impl Output {
    fn print_json<T: serde::Serialize>(value: &T) -> Result<(), EsgError> {
        let text =
            serde_json::to_string_pretty(value).map_err(|e| EsgError::Other(e.to_string()))?;
        println!("{text}");
        Ok(())
    }

    fn scores(&self, report: &ScoreReport, company: Option<&str>) -> Result<(), EsgError> {
        let detail = company
            .map(|name| {
                report
                    .company(name)
                    .ok_or_else(|| EsgError::not_found(format!("company {}", name.trim())))
            })
            .transpose()?;
        render::warnings(&report.warnings);
        if self.json {
            return match detail {
                Some(c) => Self::print_json(c),
                None => Self::print_json(report),
            };
        }
        println!("{}", render::scores(report));
        println!();
        print!("{}", render::bar_chart(report));
        println!();
        println!("{}", render::summary(report));
        if let Some(c) = detail {
            println!();
            println!("{}", render::drill_down(c));
        }
        Ok(())
    }

    fn news(&self, report: &NewsReport) -> Result<(), EsgError> {
        render::warnings(&report.warnings);
        if self.json {
            return Self::print_json(report);
        }
        println!("{}", render::news(report));
        if let Some(avg) = report.average_score() {
            println!();
            println!(
                "{} articles for {:?}, average score {avg:.2}",
                report.articles.len(),
                report.query
            );
        }
        Ok(())
    }
}

fn saved(rows: usize, path: &Path) {
    eprintln!("wrote {rows} rows to {}", path.display());
}

fn board_for(connector: Arc<dyn EsgConnector>, skip_partial: bool) -> EsgBoardBuilder {
    EsgBoard::builder()
        .with_connector(connector)
        .fill_missing_pillars(!skip_partial)
}

fn score_table(
    table: &ScoreTable,
    out: &Output,
    skip_partial: bool,
    output: Option<PathBuf>,
    company: Option<&str>,
) -> Result<(), EsgError> {
    let report = esgboard::score_table(&table.records(), !skip_partial)?;
    out.scores(&report, company)?;
    if let Some(path) = output {
        table.write_scored_path(&report.companies, &path)?;
        saved(report.companies.len(), &path);
    }
    Ok(())
}

/// Dispatch one parsed command line.
///
/// # Errors
/// Any load, scoring, or routing failure; the caller reports it and exits non-zero.
pub async fn run(cli: Cli) -> Result<(), EsgError> {
    let out = Output { json: cli.json };
    match cli.command {
        Commands::Score {
            csv,
            output,
            company,
        } => {
            let table = ScoreTable::from_path(&csv)?;
            score_table(&table, &out, cli.skip_partial, output, company.as_deref())
        }
        Commands::Sample { output, company } => {
            let table = ScoreTable::from_records(esgboard_mock::sample_records());
            score_table(&table, &out, cli.skip_partial, output, company.as_deref())
        }
        Commands::Tickers {
            list,
            source,
            placeholder,
            seed,
            output,
        } => {
            let tickers = parse_ticker_list(&list);
            if tickers.is_empty() {
                return Err(EsgError::InvalidArg(format!("no tickers in {list:?}")));
            }
            let connector = CsvConnector::from_path(&source)?;
            let mut builder = board_for(Arc::new(connector), cli.skip_partial);
            if placeholder {
                builder = builder.missing_data(MissingDataPolicy::Placeholder);
            }
            if let Some(seed) = seed {
                builder = builder.placeholder_seed(seed);
            }
            let report = builder.build()?.leaderboard(&tickers).await?;
            out.scores(&report, None)?;
            if let Some(path) = output {
                let file = std::fs::File::create(&path)
                    .map_err(|e| EsgError::Io(format!("{}: {e}", path.display())))?;
                write_scores(&report.companies, std::io::BufWriter::new(file))?;
                saved(report.companies.len(), &path);
            }
            Ok(())
        }
        Commands::News {
            archive,
            query,
            heuristic,
            max,
        } => {
            let connector = NewsArchiveConnector::from_path(&archive)?;
            let mode = if heuristic {
                SentimentMode::Heuristic
            } else {
                SentimentMode::Tone
            };
            let board = EsgBoard::builder()
                .with_connector(Arc::new(connector))
                .sentiment(mode)
                .build()?;
            let req = NewsRequest::new(query)?.max_records(max);
            let report = board.news_report(&req).await?;
            out.news(&report)
        }
    }
}
