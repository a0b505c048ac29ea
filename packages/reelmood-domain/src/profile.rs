use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;

/// Per-movie emotion affinity: mean classifier confidence per category.
///
/// Multi-label; scores are independent values in [0, 1] and need not sum
/// to 1. Every field is required and unknown keys are rejected, so a
/// deserialized profile always carries exactly the six canonical categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmotionProfile {
	pub joy: f64,
	pub sadness: f64,
	pub anger: f64,
	pub fear: f64,
	pub love: f64,
	pub surprise: f64,
}
impl EmotionProfile {
	pub fn score(&self, emotion: Emotion) -> f64 {
		match emotion {
			Emotion::Joy => self.joy,
			Emotion::Sadness => self.sadness,
			Emotion::Anger => self.anger,
			Emotion::Fear => self.fear,
			Emotion::Love => self.love,
			Emotion::Surprise => self.surprise,
		}
	}
}
