pub mod emotion;
pub mod profile;

pub use emotion::{Emotion, SYNONYMS, vocabulary};
pub use profile::EmotionProfile;
