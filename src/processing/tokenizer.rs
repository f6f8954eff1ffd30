//! Word tokenization for overlap comparison

/// Minimum token length (exclusive) kept by the tokenizer.
const MIN_TOKEN_LEN: usize = 2;

/// Lowercase the text, blank out everything that is not an ASCII word character or
/// whitespace, and keep the words longer than two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|word| word.len() > MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}
