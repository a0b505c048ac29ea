pub mod filter;
pub mod rank;
pub mod score;
pub mod topk;

mod error;

pub use error::{Error, Result};
pub use filter::{Filters, Predicate};
pub use rank::{RankRequest, RankedResult};
pub use score::{BoostParams, Candidate, TieBreak, confidence_boost};
pub use topk::select_top_k;

use reelmood_catalog::SharedCatalog;

/// The ranking service: a stateless request-to-response transform over the
/// shared catalog snapshot. Holds no per-request state, so one instance
/// serves any number of concurrent callers.
pub struct Ranker {
	pub catalog: SharedCatalog,
	boost: BoostParams,
	tie_break: TieBreak,
}
impl Ranker {
	pub fn new(catalog: SharedCatalog, ranking: &reelmood_config::Ranking) -> Result<Self> {
		let tie_break =
			TieBreak::parse(&ranking.tie_breaker).ok_or_else(|| Error::InvalidConfig {
				message: format!(
					"ranking.tie_breaker must be one of vote_count or title. Got {}.",
					ranking.tie_breaker
				),
			})?;

		Ok(Self {
			catalog,
			boost: BoostParams { cap: ranking.boost_cap, ref_count: ranking.boost_ref_count },
			tie_break,
		})
	}
}
