/// Textual notation for nested clues
pub mod notation;
/// Literal and resolved rebus inputs
pub mod operand;
/// Resolution results and the strategies that produce them
pub mod resolved;
