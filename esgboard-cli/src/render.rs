//! Terminal rendering of reports.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use esgboard::{EsgError, NewsReport, ScoreReport, ScoreSource, ScoredCompany};

const BAR_WIDTH: usize = 40;

fn source_label(source: &ScoreSource) -> &str {
    match source {
        ScoreSource::Table => "table",
        ScoreSource::Provider(name) => name,
        ScoreSource::Placeholder => "placeholder",
    }
}

fn num(v: f64) -> Cell {
    Cell::new(format!("{v:.2}")).set_alignment(CellAlignment::Right)
}

fn table_with(header: &[&str]) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL).set_header(header.to_vec());
    t
}

/// Ranked score table, best first.
pub fn scores(report: &ScoreReport) -> Table {
    let mut t = table_with(&[
        "Rank",
        "Company",
        "Environmental",
        "Social",
        "Governance",
        "Overall",
        "Grade",
        "Source",
    ]);
    for c in report.ranked() {
        t.add_row(vec![
            Cell::new(c.rank).set_alignment(CellAlignment::Right),
            Cell::new(&c.company),
            num(c.environmental),
            num(c.social),
            num(c.governance),
            num(c.overall_score),
            Cell::new(c.grade),
            Cell::new(source_label(&c.source)),
        ]);
    }
    t
}

/// Horizontal bar per company, scaled to a 0-100 axis.
pub fn bar_chart(report: &ScoreReport) -> String {
    let ranked = report.ranked();
    let label_w = ranked.iter().map(|c| c.company.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for c in ranked {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let filled = ((c.overall_score.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
        out.push_str(&format!(
            "{:<label_w$} │{}{} {:.2}\n",
            c.company,
            "█".repeat(filled),
            " ".repeat(BAR_WIDTH - filled),
            c.overall_score,
        ));
    }
    out
}

/// One-line summary: count, mean, and leader.
pub fn summary(report: &ScoreReport) -> String {
    let n = report.companies.len();
    match (report.average_overall(), report.leader()) {
        (Some(avg), Some(top)) => format!(
            "{n} companies, average overall {avg:.2}, leader {} ({:.2}, {})",
            top.company, top.overall_score, top.grade
        ),
        _ => format!("{n} companies"),
    }
}

/// Pillar breakdown for one company.
pub fn drill_down(c: &ScoredCompany) -> Table {
    let mut t = table_with(&[c.company.as_str(), "Score"]);
    t.add_row(vec![Cell::new("Environmental"), num(c.environmental)]);
    t.add_row(vec![Cell::new("Social"), num(c.social)]);
    t.add_row(vec![Cell::new("Governance"), num(c.governance)]);
    t.add_row(vec![Cell::new("Overall"), num(c.overall_score)]);
    t.add_row(vec![
        Cell::new("Rank"),
        Cell::new(c.rank).set_alignment(CellAlignment::Right),
    ]);
    t.add_row(vec![
        Cell::new("Grade"),
        Cell::new(c.grade).set_alignment(CellAlignment::Right),
    ]);
    t
}

/// Scored articles, highest score first.
pub fn news(report: &NewsReport) -> Table {
    let mut t = table_with(&["Title", "Date", "Source", "Sentiment", "ESG", "Score"]);
    for a in report.by_score() {
        t.add_row(vec![
            Cell::new(&a.article.title),
            Cell::new(
                a.article
                    .date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(a.article.source.as_deref().unwrap_or_default()),
            num(a.sentiment),
            Cell::new(a.esg_strength).set_alignment(CellAlignment::Right),
            num(a.score),
        ]);
    }
    t
}

/// Warnings go to stderr so stdout stays a clean report.
pub fn warnings(warnings: &[EsgError]) {
    for w in warnings {
        eprintln!("warning: {w}");
    }
}
