//! Domain-specific lexicon scorer for supplement flavor feedback.

/// Domain-specific word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("best", 0.5),
    ("favorite", 0.5),
    ("favourite", 0.5),
    ("delicious", 0.5),
    ("tasty", 0.4),
    ("yummy", 0.4),
    ("smooth", 0.3),
    ("creamy", 0.3),
    ("refreshing", 0.4),
    ("recommend", 0.4),
    ("perfect", 0.5),
    ("want", 0.2),
    ("wish", 0.2),
    ("need", 0.2),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("worst", -0.6),
    ("disgusting", -0.7),
    ("gross", -0.6),
    ("chalky", -0.5),
    ("artificial", -0.4),
    ("bitter", -0.4),
    ("bland", -0.3),
    ("sickly", -0.4),
    ("overpowering", -0.3),
    ("aftertaste", -0.3),
    ("hate", -0.6),
    ("hated", -0.6),
    ("clumpy", -0.4),
    ("fake", -0.4),
    ("nasty", -0.6),
];

/// Net taste/texture sentiment of a comment, in `[-1.0, 1.0]`.
///
/// Each word is stripped of surrounding punctuation and lowercased, then
/// looked up in `LEXICON`; the weights of known words are summed and the
/// sum is clamped. Texture complaints like "chalky" or "clumpy" pull the
/// score down as hard as plain dislike. [`LexiconAnnotator`] labels scores
/// within 0.1 of zero as neutral. Request words ("want", "wish", "need")
/// weigh 0.2, just enough to clear that band: asking for a flavor counts
/// as demand for it.
///
/// [`LexiconAnnotator`]: crate::annotate::LexiconAnnotator
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let total: f32 = text
        .split_whitespace()
        .filter_map(|word| {
            let word = word
                .trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase();
            LEXICON
                .iter()
                .find(|(entry, _)| *entry == word)
                .map(|&(_, weight)| weight)
        })
        .sum();
    total.clamp(-1.0, 1.0)
}
