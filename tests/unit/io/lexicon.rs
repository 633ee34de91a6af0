//! Tests for image lexicon parsing and delimiter detection

#[cfg(test)]
mod tests {
    use rebus::io::lexicon::sniff_delimiter;
    use rebus::{ImageLexicon, Lexicon, RebusError};
    use std::collections::HashMap;
    use std::io::Write;

    // Tests comma separated rows with multi-word values
    #[test]
    fn test_parse_comma_separated() {
        let lexicon =
            ImageLexicon::parse_from_str("dove_symbol.png,dove peace\ntie.png,tie\n").unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(
            lexicon.lookup("dove_symbol.png"),
            Some(&["dove".to_string(), "peace".to_string()][..])
        );
        assert_eq!(lexicon.lookup("tie.png"), Some(&["tie".to_string()][..]));
        assert_eq!(lexicon.lookup("tie"), None);
    }

    // Tests that other delimiters are detected
    // Verified by hard-coding the comma delimiter
    #[test]
    fn test_parse_detects_delimiter() {
        let tabbed = ImageLexicon::parse_from_str(":dove\tdove\n:bee\tbee\n").unwrap();
        assert!(tabbed.lookup(":dove").is_some());

        let piped = ImageLexicon::parse_from_str("book.png|book\n").unwrap();
        assert!(piped.lookup("book.png").is_some());
    }

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("a;b c\nd;e\n").ok(), Some(';'));
        assert_eq!(sniff_delimiter("a,b;c\nd;e\n").ok(), Some(';'));
        assert!(sniff_delimiter("no delimiter here\n").is_err());
    }

    // Tests that a truncated final sample line is ignored
    #[test]
    fn test_sniff_ignores_truncated_line() {
        let mut contents = String::new();
        for index in 0..30 {
            contents.push_str(&format!("image{index}.png,word{index}\n"));
        }
        assert!(contents.len() > 200);
        assert_eq!(sniff_delimiter(&contents).ok(), Some(','));
    }

    // Tests line numbers in format errors
    #[test]
    fn test_malformed_rows() {
        match ImageLexicon::parse_from_str("a.png,a\n\nb.png\n") {
            Err(RebusError::LexiconFormat { line, .. }) => assert_eq!(line, 3),
            _ => unreachable!("Expected LexiconFormat error type"),
        }

        match ImageLexicon::parse_from_str("a.png,a\nb.png,\n") {
            Err(RebusError::LexiconFormat { line, .. }) => assert_eq!(line, 2),
            _ => unreachable!("Expected LexiconFormat error type"),
        }
    }

    // Tests that quotes delimit fields rather than becoming part of them
    // Verified by splitting rows on the raw delimiter
    #[test]
    fn test_parse_quoted_rows() {
        let lexicon =
            ImageLexicon::parse_from_str("\":dove\",\"dove peace\"\n\":tie\",tie\n\"a,b.png\",ab\n")
                .unwrap();
        assert_eq!(
            lexicon.lookup(":dove"),
            Some(&["dove".to_string(), "peace".to_string()][..])
        );
        assert_eq!(lexicon.lookup(":tie"), Some(&["tie".to_string()][..]));
        assert_eq!(lexicon.lookup("a,b.png"), Some(&["ab".to_string()][..]));
        assert_eq!(lexicon.lookup("\":dove\""), None);
    }

    // Tests that rows with more than two columns are rejected
    // Verified by merging extra columns into the value
    #[test]
    fn test_extra_columns_rejected() {
        match ImageLexicon::parse_from_str("tie.png,tie\nk.png,dove,peace\n") {
            Err(RebusError::LexiconFormat { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 3"));
            }
            _ => unreachable!("Expected LexiconFormat error type"),
        }
    }

    #[test]
    fn test_empty_source() {
        let lexicon = ImageLexicon::parse_from_str("\n\n").unwrap();
        assert!(lexicon.is_empty());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dove_symbol.png,dove peace").unwrap();

        let lexicon = ImageLexicon::load_from_path(file.path()).unwrap();
        assert_eq!(lexicon.lookup("dove_symbol.png").map(<[String]>::len), Some(2));
    }

    // Tests that a plain map serves as a lexicon
    #[test]
    fn test_map_lexicon() {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        map.insert(":dove".to_string(), vec!["dove".to_string()]);
        assert!(map.lookup(":dove").is_some());
        assert!(map.lookup("dove").is_none());
    }
}
