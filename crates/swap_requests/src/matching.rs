use std::sync::Arc;

use crate::store::SwapRequestStore;
use crate::types::{MatchesResponse, RequestError, SwapRequest};

/// A camp only restricts matching when both sides name one.
pub fn camps_compatible(left: Option<&str>, right: Option<&str>) -> bool {
    match (specific_camp(left), specific_camp(right)) {
        (Some(left), Some(right)) => left == right,
        _ => true,
    }
}

fn specific_camp(camp: Option<&str>) -> Option<&str> {
    camp.filter(|c| !c.is_empty() && *c != catalog::ANY_CAMP)
}

/// Whether `candidate` is a swap counterpart for `reference`: same item, each
/// side holds the size the other wants, different requests, compatible camps.
///
/// The relation is symmetric.
pub fn is_match(reference: &SwapRequest, candidate: &SwapRequest) -> bool {
    reference.id != candidate.id
        && reference.item_type == candidate.item_type
        && candidate.have_size == reference.want_size
        && candidate.want_size == reference.have_size
        && camps_compatible(reference.camp.as_deref(), candidate.camp.as_deref())
}

/// Computes matches on demand from the current store contents. Nothing is cached.
#[derive(Clone)]
pub struct MatchingEngine {
    store: Arc<dyn SwapRequestStore>,
}

impl MatchingEngine {
    /// Creates a new matching engine reading from `store`.
    pub fn new(store: Arc<dyn SwapRequestStore>) -> Self {
        Self { store }
    }

    /// Every other request compatible with `reference`, unordered.
    pub async fn find_matches(
        &self,
        reference: &SwapRequest,
    ) -> Result<Vec<SwapRequest>, RequestError> {
        let candidates = self
            .store
            .find_mirror_candidates(
                &reference.item_type,
                &reference.want_size,
                &reference.have_size,
                &reference.id,
            )
            .await?;

        let matches: Vec<SwapRequest> = candidates
            .into_iter()
            .filter(|candidate| is_match(reference, candidate))
            .collect();

        log::info!(
            "🔍 {} match(es) for swap request {}",
            matches.len(),
            reference.id
        );

        Ok(matches)
    }

    /// Runs [`MatchingEngine::find_matches`] and shapes the result for display.
    pub async fn matches_response(
        &self,
        reference: &SwapRequest,
    ) -> Result<MatchesResponse, RequestError> {
        let matches = self.find_matches(reference).await?;
        let count = matches.len();

        let message = if count == 0 {
            "No matches currently. Check back later!".to_string()
        } else {
            format!("Found {} match{}", count, if count == 1 { "" } else { "es" })
        };

        Ok(MatchesResponse {
            request_id: reference.id,
            matches: matches.iter().map(SwapRequest::to_match_view).collect(),
            count,
            message,
        })
    }
}
