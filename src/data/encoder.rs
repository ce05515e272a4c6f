// ============================================================
// Layer 4 — Corpus Encoder
// ============================================================
// Replaces every token of a parsed split with its vocabulary
// id, keeping the nesting intact:
//
//   story    → sentence → token    becomes  story → sentence → id
//   question → token               becomes  question → id
//   answer (raw string)            becomes  one id
//
// Unknown tokens become 0. Nothing else can fail here.

use crate::data::parser::ParsedSplit;
use crate::data::vocab::{Vocabulary, UNK_TOKEN};
use crate::domain::story::{EncodedSentence, EncodedStory, Sentence, Story, TokenId};

/// The id-level form of a [`ParsedSplit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedSplit {
    pub stories:   Vec<EncodedStory>,
    pub questions: Vec<EncodedSentence>,
    pub answers:   Vec<TokenId>,
}

pub fn encode_sentence(vocab: &Vocabulary, sentence: &Sentence) -> EncodedSentence {
    sentence.iter().map(|token| vocab.id(token)).collect()
}

pub fn encode_story(vocab: &Vocabulary, story: &Story) -> EncodedStory {
    story.iter().map(|s| encode_sentence(vocab, s)).collect()
}

/// Encode all three sequences of a split
pub fn encode_split(vocab: &Vocabulary, split: &ParsedSplit) -> EncodedSplit {
    EncodedSplit {
        stories:   split.stories.iter().map(|s| encode_story(vocab, s)).collect(),
        questions: split.questions.iter().map(|q| encode_sentence(vocab, q)).collect(),
        answers:   split.answers.iter().map(|a| vocab.id(a)).collect(),
    }
}

/// Map ids back to tokens. Ids outside the vocabulary decode to "UNK".
pub fn decode_sentence(vocab: &Vocabulary, ids: &[TokenId]) -> Sentence {
    ids.iter()
        .map(|&id| vocab.token(id).unwrap_or(UNK_TOKEN).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use crate::data::parser::parse_lines;
    use crate::data::tokenizer::tokenize;

    fn parsed(lines: &[&str]) -> ParsedSplit {
        let mut split = ParsedSplit::default();
        parse_lines("test", lines.iter().copied(), &mut split);
        split
    }

    #[test]
    fn test_preserves_nesting() {
        let split = parsed(&[
            "1 Mary moved to the bathroom.",
            "2 John went to the hallway.",
            "3 Where is Mary? \tbathroom\t1",
        ]);
        let vocab = Vocabulary::from_tokens(&split.vocab);
        let enc = encode_split(&vocab, &split);

        assert_eq!(enc.stories.len(), 1);
        assert_eq!(enc.stories[0].len(), 2);
        assert_eq!(enc.stories[0][0].len(), 6);
        assert_eq!(enc.questions[0].len(), 4);
        assert_eq!(enc.answers, vec![vocab.id("bathroom")]);
    }

    #[test]
    fn test_decode_recovers_training_tokens() {
        let split = parsed(&[
            "1 Daniel journeyed to the office.",
            "2 Where is Daniel? \toffice\t1",
        ]);
        let vocab = Vocabulary::from_tokens(&split.vocab);
        let enc = encode_split(&vocab, &split);

        assert!(enc.questions[0].iter().all(|&id| id != 0));
        assert_eq!(decode_sentence(&vocab, &enc.questions[0]), split.questions[0]);
        assert_eq!(decode_sentence(&vocab, &enc.stories[0][0]), split.stories[0][0]);
    }

    #[test]
    fn test_tokens_outside_training_vocab_encode_to_zero() {
        let train = parsed(&["1 a b c", "2 a b\tc\t1"]);
        let test  = parsed(&["1 d d", "2 d\td\t1"]);
        let vocab = Vocabulary::from_tokens(&train.vocab);
        let enc = encode_split(&vocab, &test);

        assert_eq!(enc.stories[0], vec![vec![0, 0]]);
        assert_eq!(enc.questions[0], vec![0]);
        assert_eq!(enc.answers, vec![0]);
        assert_eq!(vocab.token(0), Some("UNK"));
    }

    #[test]
    fn test_unknown_ids_decode_to_unk() {
        let tokens: BTreeSet<_> = tokenize("a").into_iter().collect();
        let vocab = Vocabulary::from_tokens(&tokens);
        assert_eq!(decode_sentence(&vocab, &[1, 0, 99]), vec!["a", "UNK", "UNK"]);
    }
}
