use std::collections::BTreeMap;

use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;

use super::severity::ToxicityBand;

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+|\S+").expect("valid token regex"));
static NON_WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w]").expect("valid word regex"));

pub fn normalize_word(word: &str) -> String {
    NON_WORD_REGEX.replace_all(&word.to_lowercase(), "").into_owned()
}

/// Re-emits `text` with every word found in `toxicity_map` (keyed by
/// normalised word, valued 0-100) coloured by its band. Whitespace is kept
/// as-is.
pub fn colored_text(text: &str, toxicity_map: &BTreeMap<String, f64>) -> String {
    if text.is_empty() || toxicity_map.is_empty() {
        return text.to_string();
    }

    TOKEN_REGEX
        .find_iter(text)
        .map(|token| {
            let token = token.as_str();
            let score = toxicity_map
                .get(&normalize_word(token))
                .copied()
                .unwrap_or(0.0);
            if score > 0.0 {
                let band = ToxicityBand::from_percentage(score);
                token.color(band.color()).bold().underline().to_string()
            } else {
                token.to_string()
            }
        })
        .collect()
}

/// Words of `text` that the map scores, in order of appearance.
pub fn flagged_words<'a>(text: &'a str, toxicity_map: &BTreeMap<String, f64>) -> Vec<(&'a str, f64)> {
    TOKEN_REGEX
        .find_iter(text)
        .filter_map(|token| {
            let score = toxicity_map.get(&normalize_word(token.as_str()))?;
            (*score > 0.0).then_some((token.as_str(), *score))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> BTreeMap<String, f64> {
        BTreeMap::from([("idiota".to_string(), 85.0), ("tonto".to_string(), 25.0)])
    }

    #[test]
    fn normalization_strips_punctuation_and_case() {
        assert_eq!(normalize_word("¡IDIOTA!"), "idiota");
        assert_eq!(normalize_word("tóxico,"), "tóxico");
    }

    #[test]
    fn plain_output_preserves_text_exactly() {
        crate::render::plain();
        let text = "eres  un\tidiota, tonto";
        assert_eq!(colored_text(text, &map()), text);
        assert_eq!(colored_text(text, &BTreeMap::new()), text);
    }

    #[test]
    fn flags_scored_words_in_order() {
        let flagged = flagged_words("Tonto y más tonto, IDIOTA.", &map());
        assert_eq!(
            flagged,
            vec![("Tonto", 25.0), ("tonto,", 25.0), ("IDIOTA.", 85.0)]
        );
    }
}
