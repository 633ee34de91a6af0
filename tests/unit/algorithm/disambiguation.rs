//! Tests for choosing between the meanings of a multi-word image

#[cfg(test)]
mod tests {
    use rebus::RebusError;
    use rebus::algorithm::disambiguation::select_candidate;

    fn dove_symbol() -> Vec<String> {
        vec!["dove".to_string(), "peace".to_string()]
    }

    // Tests that the subtracted letters pick the matching meaning
    // Verified by always returning the first candidate
    #[test]
    fn test_select_by_subtracted_letters() {
        let candidates = dove_symbol();
        assert_eq!(select_candidate("dove_symbol.png", &candidates, "d").ok(), Some("dove"));
        assert_eq!(select_candidate("dove_symbol.png", &candidates, "pe").ok(), Some("peace"));
    }

    // Tests that listed order breaks ties between surviving candidates
    #[test]
    fn test_first_survivor_wins() {
        let candidates = dove_symbol();
        assert_eq!(select_candidate("dove_symbol.png", &candidates, "e").ok(), Some("dove"));
        assert_eq!(select_candidate("dove_symbol.png", &candidates, "").ok(), Some("dove"));
    }

    // Tests that repeated subtract letters are de-duplicated before filtering
    #[test]
    fn test_letters_are_deduplicated() {
        let candidates = dove_symbol();
        assert_eq!(select_candidate("dove_symbol.png", &candidates, "aa").ok(), Some("peace"));
    }

    // Tests that a single candidate is not filtered
    #[test]
    fn test_single_candidate_is_kept() {
        let candidates = vec!["castle".to_string()];
        assert_eq!(select_candidate("castle.png", &candidates, "xyz").ok(), Some("castle"));
    }

    // Tests the explicit outcome when nothing survives
    // Verified by falling back to the first candidate
    #[test]
    fn test_no_survivor_is_an_error() {
        let candidates = dove_symbol();
        let err = select_candidate("dove_symbol.png", &candidates, "zz").unwrap_err();
        match err {
            RebusError::AmbiguousImageUnresolved {
                image,
                letters,
                candidates,
            } => {
                assert_eq!(image, "dove_symbol.png");
                assert_eq!(letters, "z");
                assert_eq!(candidates, dove_symbol());
            }
            _ => unreachable!("Expected AmbiguousImageUnresolved error type"),
        }
    }
}
