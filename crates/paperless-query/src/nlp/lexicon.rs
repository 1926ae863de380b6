//! Word lists used by the rule-based annotator (German and English)

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::PartOfSpeech;

const DETERMINERS: &[&str] = &[
    "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem", "einer", "eines",
    "alle", "allen", "aller", "alles", "jede", "jeden", "jedem", "jeder", "jedes", "mein", "meine",
    "meinen", "meinem", "meiner", "unser", "unsere", "unseren", "unserem", "unserer", "diese",
    "diesem", "diesen", "dieser", "dieses", "kein", "keine", "the", "a", "an", "all", "any",
    "every", "some", "my", "our", "this", "that", "these", "those", "no",
];

const ADPOSITIONS: &[&str] = &[
    "von", "vom", "zu", "zum", "zur", "mit", "aus", "bei", "beim", "nach", "seit", "ab", "bis",
    "für", "über", "unter", "vor", "hinter", "neben", "zwischen", "im", "in", "an", "am", "auf",
    "um", "gegen", "ohne", "from", "of", "to", "with", "for", "by", "at", "on", "since", "until",
    "between", "before", "after", "about", "during", "into", "within",
];

const PRONOUNS: &[&str] = &[
    "ich", "du", "er", "sie", "es", "wir", "ihr", "mir", "mich", "dir", "dich", "uns", "euch",
    "ihm", "ihn", "ihnen", "welche", "welcher", "welches", "welchen", "was", "wer", "i", "me",
    "you", "he", "she", "it", "we", "they", "us", "them", "what", "which", "who",
];

const CONJUNCTIONS: &[&str] = &["und", "oder", "aber", "sowie", "sowohl", "and", "or", "but", "nor"];

const VERBS: &[&str] = &[
    "ist", "sind", "war", "waren", "habe", "hast", "hat", "haben", "hatte", "hatten", "gibt",
    "gib", "zeig", "zeige", "zeigen", "such", "suche", "suchen", "finde", "finden", "liste",
    "listen", "brauche", "benötige", "möchte", "will", "wollen", "hätte", "gab", "erhalten",
    "bekommen", "schicke", "schick", "show", "find", "list", "give", "get", "search", "display",
    "need", "want", "have", "has", "had", "is", "are", "was", "were", "do", "does", "did",
    "can", "could", "would", "fetch", "look",
];

const ADVERBS: &[&str] = &[
    "bitte", "auch", "noch", "nur", "mal", "alle", "hier", "dort", "wo", "wann", "wie", "please",
    "also", "only", "here", "there", "where", "when", "how", "not", "nicht",
];

const ADJECTIVES: &[&str] = &[
    "letzte", "letzten", "letzter", "letztes", "neue", "neuen", "neuer", "neues", "alte", "alten",
    "offene", "offenen", "bezahlte", "bezahlten", "vergangene", "vergangenen", "last", "recent",
    "new", "old", "open", "paid", "previous",
];

/// Inflected form (lowercase) to lemma for the domain nouns
const NOUN_FORMS: &[(&str, &[&str])] = &[
    ("Rechnung", &["rechnung", "rechnungen"]),
    ("Vertrag", &["vertrag", "vertrags", "vertrages", "verträge", "verträgen"]),
    ("Bericht", &["bericht", "berichts", "berichtes", "berichte", "berichten"]),
    ("Dokument", &["dokument", "dokuments", "dokumentes", "dokumente", "dokumenten"]),
    ("Unterlage", &["unterlage", "unterlagen"]),
    ("Beleg", &["beleg", "belegs", "beleges", "belege", "belegen"]),
    ("Brief", &["brief", "briefs", "briefes", "briefe", "briefen"]),
    ("Quittung", &["quittung", "quittungen"]),
    ("Mahnung", &["mahnung", "mahnungen"]),
    ("Gutschrift", &["gutschrift", "gutschriften"]),
    ("Angebot", &["angebot", "angebots", "angebotes", "angebote", "angeboten"]),
    ("Lieferschein", &["lieferschein", "lieferscheins", "lieferscheine", "lieferscheinen"]),
    ("Steuer", &["steuer", "steuern"]),
    ("Kündigung", &["kündigung", "kündigungen"]),
    ("Versicherung", &["versicherung", "versicherungen"]),
    ("invoice", &["invoice", "invoices"]),
    ("contract", &["contract", "contracts"]),
    ("report", &["report", "reports"]),
    ("document", &["document", "documents"]),
    ("receipt", &["receipt", "receipts"]),
    ("letter", &["letter", "letters"]),
    ("statement", &["statement", "statements"]),
    ("bill", &["bill", "bills"]),
    ("tax", &["tax", "taxes"]),
    ("insurance", &["insurance", "insurances"]),
    ("offer", &["offer", "offers"]),
    ("quote", &["quote", "quotes"]),
];

/// Legal-form suffixes that close an organisation name
pub const LEGAL_FORMS: &[&str] = &[
    "GmbH", "mbH", "AG", "KG", "KGaA", "OHG", "UG", "GbR", "SE", "e.V", "eG", "Inc", "Ltd",
    "LLC", "Corp", "PLC", "LLP",
];

/// Legal forms normally written with a closing period
pub const DOTTED_LEGAL_FORMS: &[&str] = &["e.V", "Inc", "Ltd", "Corp"];

static CLOSED_CLASS: Lazy<HashMap<&'static str, PartOfSpeech>> = Lazy::new(|| {
    let groups: &[(&[&str], PartOfSpeech)] = &[
        (ADJECTIVES, PartOfSpeech::Adjective),
        (ADVERBS, PartOfSpeech::Adverb),
        (VERBS, PartOfSpeech::Verb),
        (CONJUNCTIONS, PartOfSpeech::Conjunction),
        (PRONOUNS, PartOfSpeech::Pronoun),
        (ADPOSITIONS, PartOfSpeech::Adposition),
        (DETERMINERS, PartOfSpeech::Determiner),
    ];
    // Later groups win on overlap ("alle" is a determiner, "was" a pronoun).
    let mut map = HashMap::new();
    for (words, pos) in groups {
        for word in *words {
            map.insert(*word, *pos);
        }
    }
    map
});

static NOUN_LEMMAS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    NOUN_FORMS
        .iter()
        .flat_map(|(lemma, forms)| forms.iter().map(move |form| (*form, *lemma)))
        .collect()
});

/// Part of speech of a closed-class word
pub fn closed_class(word: &str) -> Option<PartOfSpeech> {
    CLOSED_CLASS.get(word.to_lowercase().as_str()).copied()
}

/// Lemma of a known noun form
pub fn noun_lemma(word: &str) -> Option<&'static str> {
    NOUN_LEMMAS.get(word.to_lowercase().as_str()).copied()
}

/// Whether the word appears anywhere in the lexicon
pub fn is_known_word(word: &str) -> bool {
    closed_class(word).is_some() || noun_lemma(word).is_some()
}

pub fn is_legal_form(word: &str) -> bool {
    LEGAL_FORMS.contains(&word)
}

/// Lemma for a capitalised noun missing from the lexicon (German plural rules)
pub fn guess_noun_lemma(word: &str) -> String {
    for (plural, cut) in [("ungen", 2), ("heiten", 2), ("keiten", 2), ("schaften", 2)] {
        if word.len() > plural.len() + 1 && word.ends_with(plural) {
            return word[..word.len() - cut].to_string();
        }
    }
    word.to_string()
}
