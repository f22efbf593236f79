pub mod highlighter;
pub mod zones;
