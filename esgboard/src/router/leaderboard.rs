use esgboard_core::{
    EsgError, EsgRecord, MissingDataPolicy, PillarScores, PlaceholderRange, ScoreReport,
    ScoreSource, score_sourced,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::EsgBoard;
use crate::router::util::join_with_deadline;

/// Draw one placeholder: each pillar uniform over the inclusive integer range.
pub fn placeholder_scores<R: Rng>(range: PlaceholderRange, rng: &mut R) -> PillarScores {
    let r = range.normalized();
    let mut draw = || f64::from(rng.random_range(r.min..=r.max));
    let environmental = draw();
    let social = draw();
    let governance = draw();
    PillarScores::new(environmental, social, governance)
}

impl EsgBoard {
    fn placeholder_rng(&self) -> StdRng {
        match self.cfg.placeholder_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Build a leaderboard by fetching scores for each company concurrently.
    ///
    /// Behavior:
    /// - A failed lookup is recorded in `warnings` as a `Data` error prefixed
    ///   with the company name, and the company is either skipped or, under
    ///   `MissingDataPolicy::Placeholder`, replaced by random pillar scores
    ///   flagged `ScoreSource::Placeholder`.
    /// - Placeholders are drawn in input order, so a fixed seed reproduces them.
    /// - The optional request timeout bounds the whole fan-out.
    ///
    /// # Errors
    /// - `InvalidArg` for an empty company list.
    /// - `RequestTimeout` when the request deadline elapses.
    /// - `NotFound` when no company could be scored.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "esgboard::router", skip(self, companies), fields(companies = companies.len()))
    )]
    pub async fn leaderboard(&self, companies: &[String]) -> Result<ScoreReport, EsgError> {
        if companies.is_empty() {
            return Err(EsgError::InvalidArg("no companies given".into()));
        }

        let tasks = companies.iter().map(|company| async move {
            (
                company.clone(),
                self.sustainability_with_attribution(company).await,
            )
        });
        let joined = join_with_deadline(tasks, self.cfg.request_timeout)
            .await
            .map_err(|_| EsgError::request_timeout("leaderboard"))?;

        let mut rng = self.placeholder_rng();
        let mut warnings = Vec::new();
        let mut entries = Vec::with_capacity(joined.len());
        for (company, res) in joined {
            match res {
                Ok((scores, connector)) => entries.push((
                    EsgRecord::new(company, scores),
                    ScoreSource::Provider(connector.to_string()),
                )),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(company = %company, error = %e, policy = ?self.cfg.missing_data, "esg lookup failed");
                    warnings.push(EsgError::Data(format!("{company}: {e}")));
                    if self.cfg.missing_data == MissingDataPolicy::Placeholder {
                        let scores = placeholder_scores(self.cfg.placeholder_range, &mut rng);
                        entries.push((EsgRecord::new(company, scores), ScoreSource::Placeholder));
                    }
                }
            }
        }

        let (scored, skipped) = score_sourced(entries, self.cfg.fill_missing_pillars);
        warnings.extend(skipped);
        if scored.is_empty() {
            return Err(EsgError::not_found(format!(
                "esg scores for any of: {}",
                companies.join(", ")
            )));
        }
        Ok(ScoreReport {
            companies: scored,
            warnings,
        })
    }
}
