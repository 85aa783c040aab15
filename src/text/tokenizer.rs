//! Tokenization for text analysis.

use crate::config::TextConfig;

/// Accented letters of the Portuguese locale that survive normalization.
/// Input is lowercased before filtering, so only lowercase forms appear here.
const ACCENTED_LETTERS: &str = "àáâãäéèêëíìîïóòôõöúùûü";

/// Tokenizer that normalizes raw text into lowercase word tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    config: TextConfig,
}

impl Tokenizer {
    /// Creates a new tokenizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Creates a tokenizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Tokenizes text into a sequence of normalized tokens.
    ///
    /// Lowercases the input, replaces every character that is not a word
    /// character, whitespace, or a Portuguese accented letter with a single
    /// space, splits on whitespace runs, and drops tokens shorter than the
    /// configured minimum. Each non-matching character becomes its own
    /// space, so runs of punctuation never fuse adjacent words together.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned: String = lowered
            .chars()
            .map(|c| {
                if c.is_whitespace() || is_word_char(c) {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        cleaned
            .split_whitespace()
            .filter(|word| word.chars().count() >= self.config.min_token_chars)
            .map(str::to_string)
            .collect()
    }
}

/// Returns true if the character survives tokenization.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ACCENTED_LETTERS.contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("Hello, wonderful world!");
        assert_eq!(tokens, vec!["hello", "wonderful", "world"]);
    }

    #[test]
    fn test_lowercases() {
        let tokenizer = Tokenizer::default_config();
        assert_eq!(tokenizer.tokenize("RUST Rust rust"), vec!["rust", "rust", "rust"]);
    }

    #[test]
    fn test_preserves_accented_letters() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("Análise de código é ótima");
        assert_eq!(tokens, vec!["análise", "código", "ótima"]);
    }

    #[test]
    fn test_short_tokens_dropped() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("a ab abc abcd");
        assert_eq!(tokens, vec!["abc", "abcd"]);
    }

    #[test]
    fn test_punctuation_does_not_fuse_words() {
        let tokenizer = Tokenizer::default_config();
        // Each punctuation mark becomes its own space, so adjacent words
        // separated only by punctuation stay separate.
        let tokens = tokenizer.tokenize("foo!!!bar...baz");
        assert_eq!(tokens, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn test_all_punctuation_yields_empty() {
        let tokenizer = Tokenizer::default_config();
        assert!(tokenizer.tokenize("!?.,;:---()[]").is_empty());
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::default_config();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \t\n  ").is_empty());
    }

    #[test]
    fn test_no_punctuation_in_output() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("bem-vindo ao (melhor) serviço; sério!");
        for token in &tokens {
            assert!(
                token.chars().all(is_word_char),
                "token {token:?} contains a filtered character"
            );
            assert!(token.chars().count() > 2);
        }
    }

    #[test]
    fn test_digits_and_underscore_kept() {
        let tokenizer = Tokenizer::default_config();
        let tokens = tokenizer.tokenize("abc123 snake_case");
        assert_eq!(tokens, vec!["abc123", "snake_case"]);
    }
}
