use esgboard_types::{EsgError, EsgRecord, Grade, ScoreSource, ScoredCompany};

use super::rank::rank;

/// Lower bound (inclusive) of the AAA bucket.
pub const AAA_MIN: f64 = 85.0;
/// Lower bound (inclusive) of the AA bucket.
pub const AA_MIN: f64 = 75.0;
/// Lower bound (inclusive) of the A bucket.
pub const A_MIN: f64 = 65.0;

/// Arithmetic mean of `[environmental, social, governance]`.
///
/// ```
/// assert_eq!(esgboard_core::overall([80.0, 84.0, 82.0]), 82.0);
/// ```
#[must_use]
pub fn overall(pillars: [f64; 3]) -> f64 {
    (pillars[0] + pillars[1] + pillars[2]) / 3.0
}

/// Grade bucket for an overall score, evaluated top-down with inclusive
/// lower bounds. NaN falls through to `BBB`.
///
/// ```
/// use esgboard_core::{grade, Grade};
/// assert_eq!(grade(85.0), Grade::Aaa);
/// assert_eq!(grade(84.9), Grade::Aa);
/// assert_eq!(grade(65.0), Grade::A);
/// assert_eq!(grade(64.9), Grade::Bbb);
/// ```
#[must_use]
pub fn grade(score: f64) -> Grade {
    if score >= AAA_MIN {
        Grade::Aaa
    } else if score >= AA_MIN {
        Grade::Aa
    } else if score >= A_MIN {
        Grade::A
    } else {
        Grade::Bbb
    }
}

/// Score a whole table: overall score, rank, and grade for every record.
///
/// Output keeps input order. Records with absent pillars are zero-filled when
/// `fill_missing` is true; otherwise they are left out and reported in the
/// returned warnings.
#[must_use]
pub fn score_records(
    records: &[EsgRecord],
    source: &ScoreSource,
    fill_missing: bool,
) -> (Vec<ScoredCompany>, Vec<EsgError>) {
    score_sourced(
        records.iter().map(|r| (r.clone(), source.clone())),
        fill_missing,
    )
}

/// Like [`score_records`], with a source per record.
///
/// Used where rows come from mixed origins, e.g. a leaderboard with
/// placeholder substitutes.
#[must_use]
pub fn score_sourced(
    entries: impl IntoIterator<Item = (EsgRecord, ScoreSource)>,
    fill_missing: bool,
) -> (Vec<ScoredCompany>, Vec<EsgError>) {
    let mut warnings = Vec::new();
    let mut kept: Vec<(usize, EsgRecord, ScoreSource, [f64; 3])> = Vec::new();
    for (row, (r, source)) in entries.into_iter().enumerate() {
        match r.scores.complete() {
            Some(p) => kept.push((row, r, source, p)),
            None if fill_missing => {
                let p = r.scores.filled();
                kept.push((row, r, source, p));
            }
            None => warnings.push(EsgError::Data(format!(
                "{}: missing {} score",
                r.company,
                r.scores.missing().join("/")
            ))),
        }
    }

    let overalls: Vec<f64> = kept.iter().map(|(_, _, _, p)| overall(*p)).collect();
    let ranks = rank(&overalls);

    let scored = kept
        .into_iter()
        .zip(overalls)
        .zip(ranks)
        .map(|(((row, r, source, p), overall_score), rank)| ScoredCompany {
            company: r.company,
            environmental: p[0],
            social: p[1],
            governance: p[2],
            overall_score,
            rank,
            grade: grade(overall_score),
            source,
            row,
        })
        .collect();
    (scored, warnings)
}
