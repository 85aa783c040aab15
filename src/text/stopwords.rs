//! Stopword filtering for the Portuguese locale.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Fixed Portuguese stopword set, built once at first use.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ainda", "algum", "alguma", "algumas", "alguns", "ano", "anos", "antes",
        "aos", "apenas", "apoio", "após", "aquela", "aquelas", "aquele",
        "aqueles", "aqui", "aquilo", "assim", "até", "bem", "cada", "com",
        "como", "contra", "coisa", "dela", "delas", "dele", "deles", "depois",
        "dessa", "dessas", "desse", "desses", "desta", "destas", "deste",
        "destes", "dia", "dias", "dos", "das", "ela", "elas", "ele", "eles",
        "entre", "era", "eram", "essa", "essas", "esse", "esses", "esta",
        "estas", "estava", "este", "estes", "estou", "está", "estão", "fazer",
        "foi", "for", "foram", "isso", "isto", "lhe", "lhes", "mais", "mas",
        "mesma", "mesmo", "meu", "meus", "minha", "minhas", "muito", "muitos",
        "nas", "nem", "nos", "nossa", "nossas", "nosso", "nossos", "num",
        "numa", "não", "onde", "para", "pela", "pelas", "pelo", "pelos", "por",
        "porque", "pouco", "quais", "qual", "quando", "que", "quem", "ser",
        "sem", "seu", "seus", "sobre", "sua", "suas", "são", "também", "tem",
        "tinha", "todas", "todo", "todos", "tua", "tuas", "tudo", "têm", "uma",
        "umas", "uns", "você", "vocês", "vos", "já",
    ]
    .into_iter()
    .collect()
});

/// Returns true if the word is in the stopword set.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Removes stopwords from a token sequence, preserving relative order.
pub fn remove_stopwords(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !is_stopword(token.as_str()))
        .collect()
}
