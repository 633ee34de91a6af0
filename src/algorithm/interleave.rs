/// Alternate characters across fragments until all are exhausted
///
/// Takes one character from each fragment in turn. Exhausted fragments
/// drop out of the rotation while the longer ones carry on, so
/// `("ABC", "D", "EF")` gives `"ADEBFC"`.
pub fn round_robin(fragments: &[&str]) -> String {
    let capacity = fragments.iter().map(|fragment| fragment.len()).sum();
    let mut result = String::with_capacity(capacity);
    let mut streams: Vec<_> = fragments.iter().map(|fragment| fragment.chars()).collect();

    while !streams.is_empty() {
        streams.retain_mut(|stream| {
            stream.next().is_some_and(|ch| {
                result.push(ch);
                true
            })
        });
    }

    result
}
