use questions_core::normalizer::{normalize, Lexicon, Normalizer};

#[test]
fn it_lowercases_and_filters() {
    let words = normalize("The Quick brown fox, and THE lazy dog!");
    assert_eq!(words, vec!["quick", "brown", "fox", "lazy", "dog"]);
}

#[test]
fn it_is_idempotent() {
    let text = "Neural networks \u{2014} loosely inspired by biology \u{2014} learn weights.";
    assert_eq!(normalize(text), normalize(text));
}

#[test]
fn it_keeps_unicode_words() {
    let words = normalize("Caf\u{e9} M\u{fc}nchen na\u{ef}ve");
    assert_eq!(words, vec!["caf\u{e9}", "m\u{fc}nchen", "na\u{ef}ve"]);
}

#[test]
fn shared_lexicon_is_read_only() {
    let lexicon = Lexicon::english().with_extra_stopwords(["fox"]);
    let a = Normalizer::new(&lexicon);
    let b = Normalizer::new(&lexicon);
    assert_eq!(a.normalize("the fox ran"), b.normalize("the fox ran"));
    assert_eq!(a.normalize("the fox ran"), vec!["ran"]);
    assert!(lexicon.stopword_count() > Lexicon::english().stopword_count());
}
