use std::{cmp::Ordering, collections::BinaryHeap};

use crate::score::{Candidate, TieBreak};

// Heap entries order with the WORST-ranked candidate as the maximum, so the
// bounded heap evicts from the bottom of the current top-k.
struct Entry<'a> {
	candidate: Candidate<'a>,
	tie_break: TieBreak,
}
impl PartialEq for Entry<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}
impl Eq for Entry<'_> {}
impl PartialOrd for Entry<'_> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
impl Ord for Entry<'_> {
	fn cmp(&self, other: &Self) -> Ordering {
		// rank_cmp is best-first (Less = better), so it already places the
		// worst-ranked entry greatest.
		self.candidate.rank_cmp(&other.candidate, self.tie_break)
	}
}

/// Extracts the `k` best-ranked candidates, best first.
///
/// Partial selection through a bounded heap when `k` is small relative to
/// the candidate count; the output is always identical to sorting every
/// candidate by the full rank key and truncating to `k`.
pub fn select_top_k<'a>(
	candidates: Vec<Candidate<'a>>,
	k: usize,
	tie_break: TieBreak,
) -> Vec<Candidate<'a>> {
	if k == 0 {
		return Vec::new();
	}
	if k >= candidates.len() {
		let mut out = candidates;

		out.sort_by(|a, b| a.rank_cmp(b, tie_break));

		return out;
	}

	let mut heap: BinaryHeap<Entry<'a>> = BinaryHeap::with_capacity(k);

	for candidate in candidates {
		let entry = Entry { candidate, tie_break };

		if heap.len() < k {
			heap.push(entry);
		} else if let Some(worst) = heap.peek()
			&& entry.cmp(worst) == Ordering::Less
		{
			heap.pop();
			heap.push(entry);
		}
	}

	let mut out: Vec<Candidate<'a>> = heap.into_iter().map(|entry| entry.candidate).collect();

	out.sort_by(|a, b| a.rank_cmp(b, tie_break));

	out
}
