//! Text processing: tokenization and stopword filtering.

mod stopwords;
mod tokenizer;

pub use stopwords::{is_stopword, remove_stopwords};
pub use tokenizer::Tokenizer;
