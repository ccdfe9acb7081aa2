use regex::Regex;

use super::engine::OcrLine;
use crate::counting::CardSymbol;

/// A card rank optionally followed by suit glyphs or punctuation:
/// `10`, `K`, `A♠`, `7.` all qualify; `JACK`, `12`, `K7` do not.
const CARD_PATTERN: &str = r"^(10|[2-9]|[AJQKT])[^\p{L}\p{N}]*$";

/// Characters OCR tends to emit between adjacent cards.
const SEPARATORS: &[char] = &[',', ';', '/', '|'];

/// Extracts card symbols from OCR output, left to right.
///
/// Words below `min_confidence` are dropped, as is anything that does not
/// look like a single card rank.
pub fn extract_cards(lines: &[OcrLine], min_confidence: f32) -> Result<Vec<CardSymbol>, regex::Error> {
    let regex = Regex::new(CARD_PATTERN)?;
    let mut cards = Vec::new();

    for word in lines.iter().flat_map(|line| line.words.iter()) {
        if word.confidence < min_confidence {
            tracing::debug!(
                text = %word.text,
                confidence = word.confidence,
                "skipping low-confidence word"
            );
            continue;
        }

        for piece in word.text.split(SEPARATORS) {
            let Some(captures) = regex.captures(piece.trim()) else {
                continue;
            };
            if let Some(card) = CardSymbol::parse(&captures[1]) {
                cards.push(card);
            }
        }
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::engine::OcrWord;
    use CardSymbol::*;

    fn line(words: &[(&str, f32)]) -> OcrLine {
        OcrLine {
            text: words.iter().map(|(t, _)| *t).collect::<Vec<_>>().join(" "),
            words: words
                .iter()
                .map(|(t, c)| OcrWord {
                    text: t.to_string(),
                    confidence: *c,
                })
                .collect(),
            confidence: 90.0,
        }
    }

    #[test]
    fn test_extracts_plain_ranks() {
        let lines = [line(&[("K", 92.0), ("10", 88.0)]), line(&[("A", 75.0)])];
        assert_eq!(extract_cards(&lines, 60.0).unwrap(), vec![King, Ten, Ace]);
    }

    #[test]
    fn test_accepts_suit_glyphs_and_separators() {
        let lines = [line(&[("8♠,8♥", 90.0), ("T", 90.0), ("Q.", 90.0)])];
        assert_eq!(extract_cards(&lines, 60.0).unwrap(), vec![Eight, Eight, Ten, Queen]);
    }

    #[test]
    fn test_rejects_words_that_are_not_cards() {
        let lines = [line(&[("JACK", 95.0), ("12", 95.0), ("K7", 95.0), ("Bet", 95.0)])];
        assert!(extract_cards(&lines, 60.0).unwrap().is_empty());
    }

    #[test]
    fn test_drops_low_confidence_words() {
        let lines = [line(&[("9", 40.0), ("5", 61.0)])];
        assert_eq!(extract_cards(&lines, 60.0).unwrap(), vec![Five]);
    }
}
