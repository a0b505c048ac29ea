use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The six canonical emotion categories produced by the review classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
	Joy,
	Sadness,
	Anger,
	Fear,
	Love,
	Surprise,
}

/// Loose synonyms accepted on input. Exact lookup only, no fuzzy matching.
pub const SYNONYMS: &[(&str, Emotion)] = &[
	("afraid", Emotion::Fear),
	("angry", Emotion::Anger),
	("blue", Emotion::Sadness),
	("delight", Emotion::Joy),
	("depressing", Emotion::Sadness),
	("fun", Emotion::Joy),
	("happiness", Emotion::Joy),
	("happy", Emotion::Joy),
	("mad", Emotion::Anger),
	("romance", Emotion::Love),
	("romantic", Emotion::Love),
	("scary", Emotion::Fear),
	("shock", Emotion::Surprise),
	("shocking", Emotion::Surprise),
];

impl Emotion {
	pub const ALL: [Self; 6] =
		[Self::Joy, Self::Sadness, Self::Anger, Self::Fear, Self::Love, Self::Surprise];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Joy => "joy",
			Self::Sadness => "sadness",
			Self::Anger => "anger",
			Self::Fear => "fear",
			Self::Love => "love",
			Self::Surprise => "surprise",
		}
	}

	/// Maps a free-form label to a canonical category.
	///
	/// Trims and lower-cases, then accepts either a canonical label or an
	/// entry from [`SYNONYMS`]. Returns `None` for anything else.
	pub fn resolve(input: &str) -> Option<Self> {
		let normalized = input.trim().to_lowercase();

		for emotion in Self::ALL {
			if normalized == emotion.as_str() {
				return Some(emotion);
			}
		}

		SYNONYMS
			.iter()
			.find(|(label, _)| *label == normalized)
			.map(|(_, emotion)| *emotion)
	}
}
impl Display for Emotion {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The full accepted input vocabulary: canonical labels plus synonyms, sorted.
pub fn vocabulary() -> Vec<&'static str> {
	let mut out: Vec<&'static str> = Emotion::ALL.iter().map(|emotion| emotion.as_str()).collect();

	out.extend(SYNONYMS.iter().map(|(label, _)| *label));
	out.sort_unstable();

	out
}

#[cfg(test)]
mod tests {
	use super::{Emotion, SYNONYMS, vocabulary};

	#[test]
	fn resolves_canonical_labels() {
		for emotion in Emotion::ALL {
			assert_eq!(Emotion::resolve(emotion.as_str()), Some(emotion));
		}
	}

	#[test]
	fn resolves_every_synonym() {
		for (label, emotion) in SYNONYMS {
			assert_eq!(Emotion::resolve(label), Some(*emotion));
		}
	}

	#[test]
	fn trims_and_lowercases_input() {
		assert_eq!(Emotion::resolve("  Happy "), Some(Emotion::Joy));
		assert_eq!(Emotion::resolve("SURPRISE"), Some(Emotion::Surprise));
	}

	#[test]
	fn rejects_unknown_and_near_miss_labels() {
		assert_eq!(Emotion::resolve("joyful"), None);
		assert_eq!(Emotion::resolve("happ"), None);
		assert_eq!(Emotion::resolve(""), None);
	}

	#[test]
	fn vocabulary_is_sorted_and_complete() {
		let vocab = vocabulary();

		assert_eq!(vocab.len(), Emotion::ALL.len() + SYNONYMS.len());
		assert!(vocab.windows(2).all(|pair| pair[0] < pair[1]));
		assert!(vocab.contains(&"joy"));
		assert!(vocab.contains(&"romantic"));
	}

	#[test]
	fn serde_uses_lowercase_labels() {
		assert_eq!(serde_json::to_string(&Emotion::Fear).unwrap(), "\"fear\"");
		assert_eq!(serde_json::from_str::<Emotion>("\"love\"").unwrap(), Emotion::Love);
	}
}
