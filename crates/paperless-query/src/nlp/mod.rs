//! Linguistic annotation
//!
//! The query parser only depends on the [`Annotator`] trait: given text, produce
//! tokens (with lemma and part of speech) and named entities, and try to read a
//! date expression out of a piece of text. [`RuleBasedAnnotator`] is the
//! built-in implementation for German and English queries; other engines can be
//! plugged in behind the same trait.

pub mod dates;
pub mod lexicon;
pub mod rule_based;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use dates::DateExpressionParser;
pub use rule_based::RuleBasedAnnotator;

/// Coarse part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Adposition,
    Determiner,
    Pronoun,
    Conjunction,
    Numeral,
    Punctuation,
    Other,
}

impl PartOfSpeech {
    /// Nouns and proper nouns are tag candidates
    pub fn is_nominal(&self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }
}

/// Named-entity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLabel {
    Organization,
    Person,
    Location,
    Misc,
}

/// A single token of the annotated text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as it appears in the input
    pub text: String,
    /// Base form
    pub lemma: String,
    pub pos: PartOfSpeech,
    /// Byte offset into the input
    pub offset: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PartOfSpeech, offset: usize) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            offset,
        }
    }
}

/// A named entity spanning one or more tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Literal source text of the span
    pub text: String,
    pub label: EntityLabel,
    /// Byte range into the input
    pub start: usize,
    pub end: usize,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
        }
    }

    /// Whether a byte offset falls inside this entity
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// Annotator output for one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Tokens in text order, whitespace excluded
    pub tokens: Vec<Token>,
    /// Entities in text order
    pub entities: Vec<Entity>,
}

impl Annotation {
    /// Entities carrying the given label, in text order
    pub fn entities_labeled(&self, label: EntityLabel) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.label == label)
    }
}

/// Linguistic annotation capability
///
/// Implementations:
/// - `RuleBasedAnnotator`: lexicon and pattern rules, no model files
///
/// Implementations are built once at startup and shared read-only between
/// requests, so they must not rely on interior mutation.
pub trait Annotator: Send + Sync {
    /// Tokenise, tag and extract entities
    fn annotate(&self, text: &str) -> Annotation;

    /// Find a date expression in the text, if any
    fn parse_date(&self, text: &str) -> Option<NaiveDate>;

    /// Get annotator name for logging
    fn name(&self) -> &str;
}
