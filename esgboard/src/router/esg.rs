use esgboard_core::{Capability, EsgError, PillarScores};

use crate::EsgBoard;
use crate::esgboard_router_method;

impl EsgBoard {
    esgboard_router_method! {
        /// Fetch environmental, social, and governance scores for a company or ticker.
        ///
        /// Scoring methodologies vary by provider; values are surfaced as-is
        /// without cross-provider normalization.
        method: sustainability(company: &str) -> PillarScores,
        accessor: as_esg_provider,
        capability: Capability::Esg,
        not_found: "esg",
        route_key: company,
        call: sustainability
    }

    /// Like [`sustainability`](Self::sustainability), also naming the connector
    /// that answered.
    ///
    /// # Errors
    /// Same as [`sustainability`](Self::sustainability).
    pub async fn sustainability_with_attribution(
        &self,
        company: &str,
    ) -> Result<(PillarScores, &'static str), EsgError> {
        self.fetch_single(company, Capability::Esg, "esg", move |c| {
            c.as_esg_provider()?;
            let owned = company.to_string();
            Some(async move {
                match c.as_esg_provider() {
                    Some(p) => p.sustainability(&owned).await,
                    None => Err(EsgError::connector(
                        c.name(),
                        "missing esg capability during call",
                    )),
                }
            })
        })
        .await
    }
}
