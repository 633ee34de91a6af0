/// Letter-cost difficulty scoring
pub mod scoring;
/// Composition of resolved words into a phrase
pub mod sentence;
