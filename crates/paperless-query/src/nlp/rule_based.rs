//! Rule-based annotator for German and English queries
//!
//! Tokenises on Unicode word boundaries, tags tokens from a small lexicon plus
//! capitalisation rules, and recognises organisations either by a trailing
//! legal form ("Acme GmbH") or from a configured list of names.

use chrono::NaiveDate;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::AnnotatorConfig;

use super::dates::DateExpressionParser;
use super::lexicon::{self, DOTTED_LEGAL_FORMS};
use super::{Annotation, Annotator, Entity, EntityLabel, PartOfSpeech, Token};

/// Longest run of name words accepted in front of a legal form
const MAX_NAME_WORDS: usize = 3;

/// Token before tagging
#[derive(Debug, Clone, Copy)]
struct Span<'a> {
    text: &'a str,
    offset: usize,
}

impl Span<'_> {
    fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

fn split_words(text: &str) -> Vec<Span<'_>> {
    text.split_word_bound_indices()
        .filter(|(_, word)| !word.trim().is_empty())
        .map(|(offset, text)| Span { text, offset })
        .collect()
}

fn is_punctuation(word: &str) -> bool {
    word.chars().all(|c| !c.is_alphanumeric())
}

fn is_numeral(word: &str) -> bool {
    word.chars().any(|c| c.is_numeric())
        && word.chars().all(|c| c.is_numeric() || c == '.' || c == ',')
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn has_inner_uppercase(word: &str) -> bool {
    word.chars().skip(1).any(char::is_uppercase)
}

/// Lexicon and pattern based [`Annotator`]
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAnnotator {
    /// Known organisation names, pre-split into words
    organizations: Vec<Vec<String>>,
    dates: DateExpressionParser,
}

impl RuleBasedAnnotator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from configuration
    pub fn from_config(config: &AnnotatorConfig) -> Self {
        Self::new().with_organizations(config.organizations.iter().cloned())
    }

    /// Add organisation names that are recognised verbatim
    pub fn with_organizations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let words: Vec<String> = split_words(name.as_ref())
                .into_iter()
                .map(|span| span.text.to_string())
                .collect();
            if !words.is_empty() {
                self.organizations.push(words);
            }
        }
        self
    }

    /// Replace the date parser (e.g. to pin the reference date)
    pub fn with_date_parser(mut self, dates: DateExpressionParser) -> Self {
        self.dates = dates;
        self
    }

    /// A capitalised word that can be part of an organisation name
    fn is_name_word(&self, word: &str) -> bool {
        starts_uppercase(word)
            && word.chars().all(|c| c.is_alphanumeric() || c == '-')
            && !lexicon::is_known_word(word)
            && !lexicon::is_legal_form(word)
            && self.dates.parse(word).is_none()
    }

    /// Organisations closed by a legal form, e.g. "Stadtwerke München GmbH"
    fn legal_form_entities(&self, text: &str, spans: &[Span<'_>]) -> Vec<Entity> {
        let mut entities = Vec::new();

        for (i, span) in spans.iter().enumerate() {
            if !lexicon::is_legal_form(span.text) {
                continue;
            }

            let mut first = i;
            while first > 0 && i - first < MAX_NAME_WORDS && self.is_name_word(spans[first - 1].text) {
                first -= 1;
            }
            if first == i {
                continue;
            }

            let mut end = span.end();
            if DOTTED_LEGAL_FORMS.contains(&span.text) {
                if let Some(next) = spans.get(i + 1) {
                    if next.text == "." && next.offset == end {
                        end = next.end();
                    }
                }
            }

            let start = spans[first].offset;
            entities.push(Entity::new(&text[start..end], EntityLabel::Organization, start, end));
        }

        entities
    }

    /// Organisations from the configured name list
    fn gazetteer_entities(&self, text: &str, spans: &[Span<'_>]) -> Vec<Entity> {
        let mut entities = Vec::new();

        for name in &self.organizations {
            if name.len() > spans.len() {
                continue;
            }
            for window_start in 0..=spans.len() - name.len() {
                let window = &spans[window_start..window_start + name.len()];
                if window.iter().zip(name).all(|(span, word)| span.text == word) {
                    let start = window[0].offset;
                    let end = window[window.len() - 1].end();
                    entities.push(Entity::new(&text[start..end], EntityLabel::Organization, start, end));
                }
            }
        }

        entities
    }

    fn find_entities(&self, text: &str, spans: &[Span<'_>]) -> Vec<Entity> {
        let mut entities = self.legal_form_entities(text, spans);

        for candidate in self.gazetteer_entities(text, spans) {
            let overlaps = entities
                .iter()
                .any(|e| candidate.start < e.end && e.start < candidate.end);
            if !overlaps {
                entities.push(candidate);
            }
        }

        entities.sort_by_key(|e| (e.start, e.end));
        entities
    }

    fn tag(&self, span: &Span<'_>, in_entity: bool) -> (PartOfSpeech, String) {
        let word = span.text;

        if is_punctuation(word) {
            return (PartOfSpeech::Punctuation, word.to_string());
        }
        if is_numeral(word) {
            return (PartOfSpeech::Numeral, word.to_string());
        }
        if in_entity {
            return (PartOfSpeech::ProperNoun, word.to_string());
        }
        if let Some(pos) = lexicon::closed_class(word) {
            return (pos, word.to_lowercase());
        }
        if let Some(lemma) = lexicon::noun_lemma(word) {
            return (PartOfSpeech::Noun, lemma.to_string());
        }
        if starts_uppercase(word) {
            if has_inner_uppercase(word) {
                return (PartOfSpeech::ProperNoun, word.to_string());
            }
            return (PartOfSpeech::Noun, lexicon::guess_noun_lemma(word));
        }

        (PartOfSpeech::Other, word.to_lowercase())
    }
}

impl Annotator for RuleBasedAnnotator {
    fn annotate(&self, text: &str) -> Annotation {
        let spans = split_words(text);
        let entities = self.find_entities(text, &spans);

        let tokens = spans
            .iter()
            .map(|span| {
                let in_entity = entities.iter().any(|e| e.contains(span.offset));
                let (pos, lemma) = self.tag(span, in_entity);
                Token::new(span.text, lemma, pos, span.offset)
            })
            .collect();

        Annotation { tokens, entities }
    }

    fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        self.dates.parse(text)
    }

    fn name(&self) -> &str {
        "rule-based"
    }
}
