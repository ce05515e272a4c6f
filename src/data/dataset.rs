// ============================================================
// Layer 4 — bAbI Dataset
// ============================================================
// Holds one encoded split (train or test) and serves it in
// fixed-size, strictly sequential mini-batches.
//
// Three parallel sequences of equal length N:
//   stories[i]    — Vec of sentences, each a Vec of ids
//   questions[i]  — Vec of ids
//   answers[i]    — one id
//
// Shape metadata is computed once at construction so model
// code can size its padded inputs:
//   max_story_len     — most sentences in any story
//   max_sentence_len  — most ids in any story sentence
//   max_question_len  — most ids in any question
//
// Batch retrieval mutates the EpochCursor and therefore takes
// &mut self. A dataset shared between callers must be wrapped
// in a lock by whoever shares it.
//
// The dataset also implements burn's Dataset trait, giving
// random access to single examples for a burn DataLoader.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §4 (Slices)

use std::sync::Arc;

use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::cursor::EpochCursor;
use crate::data::encoder::EncodedSplit;
use crate::data::vocab::Vocabulary;
use crate::domain::error::DataError;
use crate::domain::story::{EncodedSentence, EncodedStory, TokenId};

/// One encoded (story, question, answer) example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedExample {
    pub story:    EncodedStory,
    pub question: EncodedSentence,
    pub answer:   TokenId,
}

// ─── StoryBatch ───────────────────────────────────────────────────────────────
/// A contiguous slice of a dataset, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryBatch<'a> {
    pub stories:   &'a [EncodedStory],
    pub questions: &'a [EncodedSentence],
    pub answers:   &'a [TokenId],
}

impl<'a> StoryBatch<'a> {
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Split into the (stories, questions, answers) triple
    pub fn into_parts(self) -> (&'a [EncodedStory], &'a [EncodedSentence], &'a [TokenId]) {
        (self.stories, self.questions, self.answers)
    }
}

// ─── BabiDataset ──────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct BabiDataset {
    stories:   Vec<EncodedStory>,
    questions: Vec<EncodedSentence>,
    answers:   Vec<TokenId>,

    /// Shared with the other splits built from the same corpus
    vocab: Arc<Vocabulary>,

    vocab_size:       usize,
    max_story_len:    usize,
    max_sentence_len: usize,
    max_question_len: usize,

    cursor: EpochCursor,
}

impl BabiDataset {
    /// Wrap three parallel sequences.
    ///
    /// # Errors
    /// [`DataError::SizeMismatch`] unless all three have the same length.
    pub fn new(
        stories:   Vec<EncodedStory>,
        questions: Vec<EncodedSentence>,
        answers:   Vec<TokenId>,
        vocab:     Arc<Vocabulary>,
    ) -> Result<Self, DataError> {
        if stories.len() != questions.len() || stories.len() != answers.len() {
            return Err(DataError::SizeMismatch {
                stories:   stories.len(),
                questions: questions.len(),
                answers:   answers.len(),
            });
        }

        // Empty inputs give 0 rather than an error
        let max_story_len = stories.iter().map(Vec::len).max().unwrap_or(0);
        let max_sentence_len = stories
            .iter()
            .flatten()
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        let max_question_len = questions.iter().map(Vec::len).max().unwrap_or(0);

        tracing::debug!(
            "Dataset: {} examples, max story {} sentences, max sentence {} tokens, max question {} tokens",
            answers.len(),
            max_story_len,
            max_sentence_len,
            max_question_len,
        );

        Ok(Self {
            stories,
            questions,
            answers,
            vocab_size: vocab.size(),
            vocab,
            max_story_len,
            max_sentence_len,
            max_question_len,
            cursor: EpochCursor::new(),
        })
    }

    /// Build from the output of the encoder
    pub fn from_encoded(split: EncodedSplit, vocab: Arc<Vocabulary>) -> Result<Self, DataError> {
        Self::new(split.stories, split.questions, split.answers, vocab)
    }

    /// Return the next sequential batch and move the cursor past it.
    ///
    /// If the batch would overrun the split, the cursor first resets
    /// to 0 and the epoch count goes up; unserved tail examples are
    /// skipped for that epoch.
    ///
    /// # Errors
    /// [`DataError::BatchTooLarge`] if `batch_size > self.len()`.
    /// The cursor is left untouched in that case.
    pub fn next_batch(&mut self, batch_size: usize) -> Result<StoryBatch<'_>, DataError> {
        let (cursor, range) = self.cursor.advance(batch_size, self.len())?;
        self.cursor = cursor;

        Ok(StoryBatch {
            stories:   &self.stories[range.clone()],
            questions: &self.questions[range.clone()],
            answers:   &self.answers[range],
        })
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Vocabulary entries including the UNK slot
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn max_story_len(&self) -> usize {
        self.max_story_len
    }

    pub fn max_sentence_len(&self) -> usize {
        self.max_sentence_len
    }

    pub fn max_question_len(&self) -> usize {
        self.max_question_len
    }

    pub fn vocab(&self) -> &Arc<Vocabulary> {
        &self.vocab
    }

    pub fn epochs_completed(&self) -> usize {
        self.cursor.epochs_completed
    }

    pub fn index_in_epoch(&self) -> usize {
        self.cursor.index_in_epoch
    }

    pub fn cursor(&self) -> EpochCursor {
        self.cursor
    }

    pub fn stories(&self) -> &[EncodedStory] {
        &self.stories
    }

    pub fn questions(&self) -> &[EncodedSentence] {
        &self.questions
    }

    pub fn answers(&self) -> &[TokenId] {
        &self.answers
    }
}

// ─── Burn Dataset Trait Implementation ────────────────────────────────────────
// Random access does not touch the batch cursor.
impl Dataset<EncodedExample> for BabiDataset {
    fn get(&self, index: usize) -> Option<EncodedExample> {
        Some(EncodedExample {
            story:    self.stories.get(index)?.clone(),
            question: self.questions.get(index)?.clone(),
            answer:   *self.answers.get(index)?,
        })
    }

    fn len(&self) -> usize {
        self.answers.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn empty_vocab() -> Arc<Vocabulary> {
        Arc::new(Vocabulary::from_tokens(&BTreeSet::new()))
    }

    /// N examples where example i has i+1 one-token sentences,
    /// a question of length i+1 and answer id i.
    fn numbered(n: usize) -> BabiDataset {
        let stories = (0..n)
            .map(|i| vec![vec![i as TokenId]; i + 1])
            .collect();
        let questions = (0..n).map(|i| vec![7; i + 1]).collect();
        let answers = (0..n as TokenId).collect();
        BabiDataset::new(stories, questions, answers, empty_vocab()).unwrap()
    }

    #[test]
    fn test_size_mismatch_fails() {
        let err = BabiDataset::new(vec![vec![]; 2], vec![vec![]; 2], vec![0], empty_vocab())
            .unwrap_err();
        assert!(matches!(
            err,
            DataError::SizeMismatch { stories: 2, questions: 2, answers: 1 }
        ));
    }

    #[test]
    fn test_question_count_is_checked_too() {
        let err = BabiDataset::new(vec![vec![]; 2], vec![vec![]; 3], vec![0, 0], empty_vocab())
            .unwrap_err();
        assert!(matches!(err, DataError::SizeMismatch { questions: 3, .. }));
    }

    #[test]
    fn test_shape_metadata() {
        let stories = vec![
            vec![vec![1, 2, 3], vec![4]],
            vec![vec![1], vec![2], vec![3, 4, 5, 6, 7]],
        ];
        let questions = vec![vec![1, 2], vec![1, 2, 3, 4]];
        let ds = BabiDataset::new(stories, questions, vec![1, 2], empty_vocab()).unwrap();

        assert_eq!(ds.max_story_len(), 3);
        assert_eq!(ds.max_sentence_len(), 5);
        assert_eq!(ds.max_question_len(), 4);
        assert_eq!(ds.vocab_size(), 1);
    }

    #[test]
    fn test_empty_split_has_zero_metadata() {
        let mut ds = BabiDataset::new(vec![], vec![], vec![], empty_vocab()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.max_story_len(), 0);
        assert_eq!(ds.max_sentence_len(), 0);
        assert_eq!(ds.max_question_len(), 0);
        assert!(ds.next_batch(0).unwrap().is_empty());
    }

    #[test]
    fn test_batches_are_sequential_slices() {
        let mut ds = numbered(10);

        let batch = ds.next_batch(3).unwrap();
        assert_eq!(batch.answers, &[0, 1, 2]);
        assert_eq!(batch.stories.len(), 3);
        assert_eq!(batch.questions[2].len(), 3);

        let (stories, _, answers) = ds.next_batch(3).unwrap().into_parts();
        assert_eq!(answers, &[3, 4, 5]);
        assert_eq!(stories[0].len(), 4);
        assert_eq!(ds.index_in_epoch(), 6);
    }

    #[test]
    fn test_epoch_rollover_skips_tail() {
        let mut ds = numbered(10);
        for _ in 0..3 {
            ds.next_batch(3).unwrap();
        }
        assert_eq!(ds.epochs_completed(), 0);

        // Example 9 is dropped; the fourth batch restarts at 0
        let batch = ds.next_batch(3).unwrap();
        assert_eq!(batch.answers, &[0, 1, 2]);
        assert_eq!(ds.epochs_completed(), 1);
        assert_eq!(ds.index_in_epoch(), 3);
    }

    #[test]
    fn test_oversized_batch_fails_without_moving_cursor() {
        let mut ds = numbered(4);
        ds.next_batch(2).unwrap();

        let err = ds.next_batch(5).unwrap_err();
        assert!(matches!(err, DataError::BatchTooLarge { batch_size: 5, len: 4 }));
        assert_eq!(ds.index_in_epoch(), 2);
        assert_eq!(ds.epochs_completed(), 0);
    }

    #[test]
    fn test_burn_dataset_random_access() {
        let ds = numbered(3);
        assert_eq!(Dataset::len(&ds), 3);

        let example = Dataset::get(&ds, 2).unwrap();
        assert_eq!(example.answer, 2);
        assert_eq!(example.story.len(), 3);
        assert_eq!(example.question, vec![7, 7, 7]);
        assert!(Dataset::get(&ds, 3).is_none());

        // Random access leaves the batch cursor alone
        assert_eq!(ds.cursor(), EpochCursor::new());
    }
}
