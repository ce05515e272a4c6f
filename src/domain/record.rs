// ============================================================
// Layer 3 — Line Records
// ============================================================
// Every line of a bAbI task file is one of two record kinds:
//
//   Sentence:  "<id> <text>"
//              e.g. "1 Mary moved to the bathroom."
//
//   Question:  "<id> <text>\t<answer>\t<support id>"
//              e.g. "3 Where is Mary? \tbathroom\t1"
//
// The line id restarts at 1 whenever a new story begins
// inside a file, which is how story boundaries are detected.
//
// Records borrow their fields from the line they came from,
// so classifying a line allocates nothing.

/// One classified line of a task file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record<'a> {
    /// A statement that extends the current story.
    Sentence {
        line_id: &'a str,
        text:    &'a str,
    },

    /// A question about the current story.
    Question {
        line_id: &'a str,
        text:    &'a str,
        /// Raw answer, possibly comma-separated ("apple,football").
        /// Never tokenized.
        answer:  &'a str,
        /// Line id of the supporting sentence. Kept for completeness,
        /// nothing downstream reads it.
        support: &'a str,
    },
}

impl<'a> Record<'a> {
    /// The leading line id exactly as written in the file
    pub fn line_id(&self) -> &'a str {
        match *self {
            Record::Sentence { line_id, .. } | Record::Question { line_id, .. } => line_id,
        }
    }

    /// True for a sentence whose line id is literally "1".
    ///
    /// The comparison is textual: "01" does not start a story.
    pub fn starts_story(&self) -> bool {
        matches!(self, Record::Sentence { line_id: "1", .. })
    }

    /// Numeric support id of a question, if this is one
    pub fn support_id(&self) -> Option<usize> {
        match *self {
            Record::Question { support, .. } => support.parse().ok(),
            Record::Sentence { .. } => None,
        }
    }
}
