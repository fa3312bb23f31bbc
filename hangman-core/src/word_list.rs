use std::collections::BTreeSet;

/// Parse a newline-separated word list for seeding the store.
///
/// Entries are trimmed and lowercased; blank lines, `#` comments and
/// anything that is not purely alphabetic are skipped. Duplicates collapse.
pub fn parse_word_list(word_list: &str) -> Vec<String> {
    word_list
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .filter(|word| is_alphabetic(word))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Check if word contains only alphabetic characters
pub fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Fallback list used when the store has no words and no file is configured.
pub const BUILTIN_WORDS: &str = "\
# animals
badger
elephant
giraffe
penguin
rabbit
# things
anchor
blanket
candle
hammer
lantern
pencil
umbrella
# places
castle
harbour
island
meadow
village
";
