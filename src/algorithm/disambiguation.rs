use crate::io::error::{RebusError, Result};
use std::collections::BTreeSet;

/// Choose which word a multi-meaning image stands for
///
/// Some images depict several words, e.g. a dove symbol is both "dove" and
/// "peace". A candidate survives only if it contains every distinct letter
/// being subtracted; the first survivor in listed order wins. A single
/// candidate is returned without filtering.
///
/// # Errors
///
/// Returns [`RebusError::AmbiguousImageUnresolved`] if there are no
/// candidates or every candidate is filtered out
pub fn select_candidate<'c>(image: &str, candidates: &'c [String], subtract: &str) -> Result<&'c str> {
    let letters: BTreeSet<char> = subtract.chars().collect();

    let selected = match candidates {
        [only] => Some(only),
        _ => candidates.iter().find(|candidate| {
            let keeps = letters.iter().all(|&letter| candidate.contains(letter));
            if !keeps {
                tracing::trace!(image, candidate = candidate.as_str(), "candidate rejected");
            }
            keeps
        }),
    };

    selected.map(String::as_str).ok_or_else(|| RebusError::AmbiguousImageUnresolved {
        image: image.to_string(),
        letters: letters.into_iter().collect(),
        candidates: candidates.to_vec(),
    })
}
