// ============================================================
// Layer 4 — bAbI Record Parser
// ============================================================
// Turns the lines of one or more task files into parallel
// (story, question, answer) sequences plus the set of every
// token seen.
//
// Line classification (question pattern is tried FIRST, since
// every question line also has a valid sentence prefix):
//
//   question:  ^(\d+) ([\w\s?]+)\t([\w,]+)\t(\d+)
//   sentence:  ^(\d+) ([\w\s.]+)
//   anything else → logged and skipped
//
// Story tracking, per file:
//
//   "1 Mary moved to the bathroom."      story = [s1]        (reset)
//   "2 John went to the hallway."        story = [s1, s2]
//   "3 Where is Mary? \tbathroom\t1"     emit ([s1, s2], q, "bathroom")
//   "4 Daniel went back to the hallway." story = [s1, s2, s4]
//   "6 Where is Daniel? \thallway\t4"    emit ([s1, s2, s4], q, "hallway")
//   "1 John moved to the kitchen."       story = [s1']       (reset)
//
// Every question receives its own copy of the story as it was
// at that moment, so later sentences never leak backwards.
//
// Each file starts with an empty story buffer. The file is read
// in full and released before any line is parsed.
//
// Reference: regex crate documentation (captures)
//            Rust Book §8 (Collections), §9 (Error Handling)

use std::{
    collections::BTreeSet,
    fs,
    path::Path,
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;

use crate::data::tokenizer::tokenize;
use crate::domain::{
    error::DataError,
    record::Record,
    story::{Sentence, Story, Token},
};

static QUESTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?-u)(\d+) ([\w\s?]+)\t([\w,]+)\t(\d+)").expect("question pattern is valid")
});

static SENTENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?-u)(\d+) ([\w\s.]+)").expect("sentence pattern is valid")
});

/// Classify a single line. Returns None for a malformed line.
///
/// Both patterns are anchored at the start only, so trailing
/// text after a valid prefix is ignored.
pub fn classify_line(line: &str) -> Option<Record<'_>> {
    if let Some(caps) = QUESTION_RE.captures(line) {
        // All four groups are mandatory in the pattern
        let (_, [line_id, text, answer, support]) = caps.extract();
        return Some(Record::Question { line_id, text, answer, support });
    }

    SENTENCE_RE.captures(line).map(|caps| {
        let (_, [line_id, text]) = caps.extract();
        Record::Sentence { line_id, text }
    })
}

// ─── ParsedSplit ──────────────────────────────────────────────────────────────
/// Everything parsed from the files of one split.
///
/// `stories`, `questions` and `answers` are parallel: entry i of
/// each belongs to the i-th question in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedSplit {
    pub stories:   Vec<Story>,
    pub questions: Vec<Sentence>,
    /// Raw answer strings, e.g. "bathroom" or "apple,football"
    pub answers:   Vec<String>,
    /// Every sentence token, question token and raw answer seen
    pub vocab:     BTreeSet<Token>,
    /// Lines that matched neither record pattern
    pub skipped_lines: usize,
}

impl ParsedSplit {
    /// Number of (story, question, answer) examples
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

// ─── StoryBuffer ──────────────────────────────────────────────────────────────
/// The "current story" of one file while its lines are scanned.
#[derive(Debug, Default)]
pub struct StoryBuffer {
    story: Story,
}

impl StoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one record, appending any emitted example to `split`.
    pub fn feed(&mut self, record: Record<'_>, split: &mut ParsedSplit) {
        match record {
            Record::Question { text, answer, .. } => {
                let question = tokenize(text);
                split.vocab.extend(question.iter().cloned());
                split.vocab.insert(answer.to_string());

                split.stories.push(self.story.clone());
                split.questions.push(question);
                split.answers.push(answer.to_string());
            }
            Record::Sentence { text, .. } => {
                if record.starts_story() {
                    self.story.clear();
                }
                let sentence = tokenize(text);
                split.vocab.extend(sentence.iter().cloned());
                self.story.push(sentence);
            }
        }
    }

    /// Sentences accumulated since the last story reset
    pub fn story(&self) -> &Story {
        &self.story
    }
}

/// Parse the lines of one source into `split`.
///
/// `source` only labels log messages. Malformed lines are
/// reported with their 1-based line number and skipped.
pub fn parse_lines<I, S>(source: &str, lines: I, split: &mut ParsedSplit)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buffer = StoryBuffer::new();

    for (line_num, line) in lines.into_iter().enumerate() {
        match classify_line(line.as_ref()) {
            Some(record) => buffer.feed(record, split),
            None => {
                tracing::error!("Invalid line encountered: line {} in {}", line_num + 1, source);
                split.skipped_lines += 1;
            }
        }
    }
}

/// Read one task file and parse it into `split`.
pub fn read_babi_file(path: &Path, split: &mut ParsedSplit) -> Result<(), DataError> {
    // The handle is closed as soon as fs::read returns
    let bytes = fs::read(path).map_err(|e| DataError::io(path, e))?;
    let text  = String::from_utf8_lossy(&bytes);

    parse_lines(&path.display().to_string(), text.lines(), split);
    Ok(())
}

/// Parse a list of task files, in order, into a single split.
pub fn read_babi_files<P: AsRef<Path>>(paths: &[P]) -> Result<ParsedSplit, DataError> {
    let mut split = ParsedSplit::default();

    for path in paths {
        let path = path.as_ref();
        read_babi_file(path, &mut split)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!("Loaded {} examples from: {}", split.len(), name);
    }

    if split.skipped_lines > 0 {
        tracing::warn!("Skipped {} invalid lines", split.skipped_lines);
    }

    Ok(split)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn parse(lines: &[&str]) -> ParsedSplit {
        let mut split = ParsedSplit::default();
        parse_lines("test", lines.iter().copied(), &mut split);
        split
    }

    #[test]
    fn test_classifies_sentence() {
        assert_eq!(
            classify_line("1 Mary moved to the bathroom."),
            Some(Record::Sentence { line_id: "1", text: "Mary moved to the bathroom." })
        );
    }

    #[test]
    fn test_classifies_question() {
        assert_eq!(
            classify_line("3 Where is Mary? \tbathroom\t1"),
            Some(Record::Question {
                line_id: "3",
                text:    "Where is Mary? ",
                answer:  "bathroom",
                support: "1",
            })
        );
    }

    #[test]
    fn test_question_takes_precedence_over_sentence() {
        // Matches the sentence pattern too; must still be a question
        let record = classify_line("2 John went to the kitchen\tJohn\t1");
        assert!(matches!(record, Some(Record::Question { answer: "John", .. })));
    }

    #[test]
    fn test_period_in_question_text_makes_it_a_sentence() {
        // '.' is not allowed in question text, while the sentence
        // pattern accepts tabs as whitespace
        let record = classify_line("2 John went to the kitchen.\tJohn\t1");
        assert!(matches!(record, Some(Record::Sentence { line_id: "2", .. })));
    }

    #[test]
    fn test_comma_separated_answer() {
        let record = classify_line("5 What is Sandra carrying?\tapple,football\t2 4");
        assert!(matches!(
            record,
            Some(Record::Question { answer: "apple,football", support: "2", .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_lines() {
        assert_eq!(classify_line("not a valid line"), None);
        assert_eq!(classify_line(""), None);
        assert_eq!(classify_line("12"), None);
    }

    #[test]
    fn test_single_story_single_question() {
        let split = parse(&[
            "1 Mary moved to the bathroom.",
            "2 John went to the kitchen\tJohn\t1",
        ]);

        assert_eq!(split.len(), 1);
        assert_eq!(
            split.stories[0],
            vec![vec!["Mary", "moved", "to", "the", "bathroom", "."]]
        );
        assert_eq!(split.questions[0], vec!["John", "went", "to", "the", "kitchen"]);
        assert_eq!(split.answers[0], "John");

        let expected: BTreeSet<Token> =
            ["Mary", "moved", "to", "the", "bathroom", ".", "John", "went", "kitchen"]
                .iter()
                .map(|s| s.to_string())
                .collect();
        assert_eq!(split.vocab, expected);
    }

    #[test]
    fn test_story_snapshot_per_question() {
        let split = parse(&[
            "1 Mary moved to the bathroom.",
            "2 John went to the hallway.",
            "3 Where is Mary? \tbathroom\t1",
            "4 Daniel went back to the hallway.",
            "5 Where is Daniel? \thallway\t4",
        ]);

        assert_eq!(split.len(), 2);
        assert_eq!(split.stories[0].len(), 2);
        assert_eq!(split.stories[1].len(), 3);
        // The first snapshot was not touched by sentence 4
        assert_eq!(split.stories[1][..2], split.stories[0][..]);
        assert_eq!(split.stories[1][2][0], "Daniel");
    }

    #[test]
    fn test_line_id_one_resets_story() {
        let split = parse(&[
            "1 Mary moved to the bathroom.",
            "2 Where is Mary? \tbathroom\t1",
            "1 John went to the kitchen.",
            "2 Sandra went to the garden.",
            "3 Where is John? \tkitchen\t1",
        ]);

        assert_eq!(split.stories[0], vec![tokenize("Mary moved to the bathroom.")]);
        assert_eq!(
            split.stories[1],
            vec![
                tokenize("John went to the kitchen."),
                tokenize("Sandra went to the garden."),
            ]
        );
    }

    #[test]
    fn test_invalid_line_is_skipped_and_parsing_continues() {
        let split = parse(&[
            "1 Mary moved to the bathroom.",
            "not a valid line",
            "2 John went to the hallway.",
            "3 Where is Mary? \tbathroom\t1",
        ]);

        assert_eq!(split.skipped_lines, 1);
        assert_eq!(split.len(), 1);
        assert_eq!(split.stories[0].len(), 2);
        assert!(!split.vocab.contains("not"));
        assert!(!split.vocab.contains("valid"));
    }

    #[test]
    fn test_answer_is_a_single_vocab_entry() {
        let split = parse(&[
            "1 Sandra picked up the apple.",
            "2 What is Sandra carrying?\tapple,football\t1",
        ]);
        assert!(split.vocab.contains("apple,football"));
        assert!(!split.vocab.contains("football"));
        assert!(split.vocab.contains("?"));
    }

    #[test]
    fn test_question_before_any_sentence_gets_empty_story() {
        let split = parse(&["1 Where is Mary? \tbathroom\t1"]);
        assert_eq!(split.len(), 1);
        assert!(split.stories[0].is_empty());
    }

    #[test]
    fn test_each_file_starts_a_fresh_story() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("qa1_train.txt");
        let second = dir.path().join("qa2_train.txt");
        fs::write(&first, "1 Mary moved to the bathroom.\n").unwrap();
        // Second file opens with id 2 so only the file boundary can reset
        fs::write(&second, "2 John went to the hallway.\n3 Where is John? \thallway\t2\n").unwrap();

        let split = read_babi_files(&[first, second]).unwrap();
        assert_eq!(split.len(), 1);
        assert_eq!(split.stories[0], vec![tokenize("John went to the hallway.")]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_babi_files(&[dir.path().join("absent.txt")]).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
