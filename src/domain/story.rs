// ============================================================
// Layer 3 — Story Domain Types
// ============================================================
// A bAbI example is a short story followed by a question about
// it. The nesting is:
//
//   Story
//     └── Sentence
//           └── Token   (a word or a single punctuation mark)
//
// Once a vocabulary exists every Token is replaced by its
// integer id, giving the same nesting over TokenId.
//
// These are type aliases rather than newtypes: the pipeline
// slices and clones them as plain vectors, and batches are
// handed to model code that expects nested Vecs.

/// A word or single punctuation mark produced by the tokenizer.
pub type Token = String;

/// Ordered sequence of tokens.
pub type Sentence = Vec<Token>;

/// Ordered sequence of sentences, reset on every sentence with line id 1.
pub type Story = Vec<Sentence>;

/// Integer id assigned to a token by the vocabulary. Id 0 means unknown.
pub type TokenId = u32;

/// A sentence after vocabulary lookup.
pub type EncodedSentence = Vec<TokenId>;

/// A story after vocabulary lookup.
pub type EncodedStory = Vec<EncodedSentence>;
