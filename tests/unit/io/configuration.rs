//! Tests for notation, scoring and loading constants

#[cfg(test)]
mod tests {
    use rebus::io::configuration::{
        BATCH_COMMENT_PREFIX, CANDIDATE_DELIMITERS, CONSONANT_COST, DEFAULT_MAX_PERMUTATION_LENGTH,
        IMAGE_MARKER, PERMUTATION_LENGTH_CEILING, VOWEL_COST, VOWELS,
    };

    // Tests scoring weights
    // Verified by changing vowel cost
    #[test]
    fn test_letter_costs() {
        assert_eq!(VOWEL_COST, 1);
        assert_eq!(CONSONANT_COST, 5);
        assert_eq!(VOWELS, ['a', 'e', 'i', 'o', 'u']);
    }

    #[test]
    fn test_permutation_limits() {
        assert!(DEFAULT_MAX_PERMUTATION_LENGTH > 0);
        assert!(DEFAULT_MAX_PERMUTATION_LENGTH <= PERMUTATION_LENGTH_CEILING);
    }

    // Tests that delimiters never collide with notation or lexicon values
    #[test]
    fn test_delimiters_are_distinct_from_markers() {
        for delimiter in CANDIDATE_DELIMITERS {
            assert_ne!(delimiter, IMAGE_MARKER);
            assert_ne!(delimiter, ' ');
            assert_ne!(delimiter, BATCH_COMMENT_PREFIX);
        }
    }
}
