pub mod classifier;
pub mod rules;

pub use classifier::GenreClassifier;
pub use rules::{GenreRule, GenreRules, matches_whole_word};
