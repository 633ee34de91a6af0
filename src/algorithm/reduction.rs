use crate::puzzle::operand::Operand;

/// Remove the first remaining occurrence of each letter in `strip`, in order
///
/// Removals are sequential: each one sees the word left by the previous
/// one. A letter listed twice removes two occurrences when present, and a
/// letter not present is skipped without affecting later removals.
pub fn reduce(word: &str, strip: &str) -> String {
    let mut remaining = word.to_string();
    for letter in strip.chars() {
        if let Some(position) = remaining.find(letter) {
            remaining.remove(position);
        }
    }
    remaining
}

/// [`reduce`] over operands, unwrapping markers and resolved values first
pub fn reduce_operand(operand: &Operand, strip: &Operand) -> String {
    reduce(operand.letters(), strip.letters())
}
