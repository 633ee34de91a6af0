//! Puzzle constants and runtime configuration defaults

// Operand notation
/// Prefix marking an operand as an image reference rather than letters
pub const IMAGE_MARKER: char = ':';

// Difficulty scoring
/// Letters that cost the vowel rate when scored
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
/// Cost of a vowel in an added or subtracted fragment
pub const VOWEL_COST: u32 = 1;
/// Cost of any non-vowel character in an added or subtracted fragment
pub const CONSONANT_COST: u32 = 5;

// Permutation fallback is factorial in fragment length
/// Default longest combined fragment the permutation search will accept
pub const DEFAULT_MAX_PERMUTATION_LENGTH: usize = 10;
/// Hard ceiling for the configurable permutation limit
pub const PERMUTATION_LENGTH_CEILING: usize = 12;

// Data files
/// Default newline-delimited word list
pub const DEFAULT_WORD_LIST_PATH: &str = "files/word_list.txt";
/// Default image name to word mapping
pub const DEFAULT_IMAGE_LIST_PATH: &str = "files/images.txt";

// Lexicon delimiter detection
/// Number of leading bytes inspected when detecting the lexicon delimiter
pub const DELIMITER_SNIFF_BYTES: usize = 200;
/// Delimiters tried, in order of preference
pub const CANDIDATE_DELIMITERS: [char; 4] = [',', '\t', ';', '|'];

// Batch input
/// Lines starting with this character are ignored in batch files
pub const BATCH_COMMENT_PREFIX: char = '#';

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
