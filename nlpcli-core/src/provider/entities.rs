//! Rule-based named entity recognition
//!
//! Two passes over a sentence:
//! 1. numeric expressions (money, percentages, dates, plain numbers)
//! 2. runs of capitalized words, classified with small gazetteers
//!
//! Capitalized runs overlapping a numeric span are dropped.

use std::collections::HashSet;

use regex::{Captures, Regex};
use stop_words::{get, LANGUAGE};

use super::{EntityLabel, EntityMention};

const MONTHS: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const WEEKDAYS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "miss", "dr", "prof", "sir", "madam", "president", "senator",
];

const ORG_WORDS: &[&str] = &[
    "inc",
    "corp",
    "corporation",
    "ltd",
    "llc",
    "co",
    "company",
    "group",
    "university",
    "college",
    "bank",
    "institute",
    "association",
    "agency",
    "foundation",
    "council",
    "committee",
    "party",
    "ministry",
    "department",
    "times",
    "news",
];

const PLACES: &str = include_str!("../../data/places.txt");

const NUMERIC_PATTERN: &str = concat!(
    r"(?P<money>[$€£¥]\s?\d[\d,]*(?:\.\d+)?(?:\s(?:thousand|million|billion|trillion))?)",
    r"|(?P<percent>\d[\d,]*(?:\.\d+)?\s?(?:%|percent\b))",
    r"|(?P<date>\b(?:January|February|March|April|May|June|July|August|September|October|November|December)",
    r"(?:\s+\d{1,2}(?:st|nd|rd|th)?(?:,?\s+\d{4})?|\s+\d{4})\b",
    r"|\b\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)(?:\s+\d{4})?\b",
    r"|\b(?:1[5-9]\d{2}|20\d{2})\b)",
    r"|(?P<cardinal>\b\d[\d,]*(?:\.\d+)?\b)",
);

const PROPER_PATTERN: &str =
    r"\p{Lu}[\p{L}\p{M}'’.&-]*(?:\s+(?:(?:of|the|de|van|von|del|da|du|la)\s+)?\p{Lu}[\p{L}\p{M}'’.&-]*)*";

pub struct EntityRecognizer {
    numeric: Regex,
    proper: Regex,
    acronym: Regex,
    places: HashSet<String>,
    stopwords: HashSet<String>,
}

impl std::fmt::Debug for EntityRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityRecognizer")
            .field("places", &self.places.len())
            .finish()
    }
}

impl EntityRecognizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            numeric: Regex::new(NUMERIC_PATTERN)?,
            proper: Regex::new(PROPER_PATTERN)?,
            acronym: Regex::new(r"^(?:\p{Lu}\.){2,}$")?,
            places: PLACES
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#'))
                .map(str::to_lowercase)
                .collect(),
            stopwords: get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        })
    }

    /// Entities of one sentence, ordered by start offset
    pub fn recognize(&self, sentence: &str) -> Vec<EntityMention> {
        let mut spans: Vec<(usize, usize, EntityLabel)> = self
            .numeric
            .captures_iter(sentence)
            .filter_map(|caps| numeric_span(&caps))
            .collect();

        for m in self.proper.find_iter(sentence) {
            let Some((start, end, label)) = self.classify(sentence, m.start(), m.end()) else {
                continue;
            };
            let overlaps = spans.iter().any(|&(s, e, _)| start < e && s < end);
            if !overlaps {
                spans.push((start, end, label));
            }
        }

        spans.sort_by_key(|&(start, _, _)| start);
        spans
            .into_iter()
            .map(|(start, end, label)| EntityMention {
                text: sentence[start..end].to_string(),
                label,
                start: char_offset(sentence, start),
                end: char_offset(sentence, end),
            })
            .collect()
    }

    /// Trim and label a capitalized run; `None` when it is not an entity
    fn classify(
        &self,
        sentence: &str,
        mut start: usize,
        mut end: usize,
    ) -> Option<(usize, usize, EntityLabel)> {
        // Trailing sentence punctuation, except in dotted acronyms like "U.K."
        let last_word_start = sentence[start..end]
            .rfind(char::is_whitespace)
            .map_or(start, |p| start + p + 1);
        if !self.acronym.is_match(&sentence[last_word_start..end]) {
            end = start + sentence[start..end].trim_end_matches(['.', '\'', '’', '-', '&']).len();
        }

        let mut words: Vec<(usize, &str)> = word_positions(sentence, start, end);

        // "Yesterday Dr. Watson" -> "Watson"
        let mut titled = false;
        if let Some(k) = words.iter().rposition(|&(_, w)| is_title(w)) {
            if k + 1 < words.len() {
                titled = true;
                words.drain(..=k);
            }
        }
        start = words.first()?.0;
        // Gazetteer names may start with a stopword ("New York")
        let in_gazetteer = self.places.contains(&sentence[start..end].to_lowercase());
        if !in_gazetteer {
            while words.len() > 1 && self.stopwords.contains(&words[0].1.to_lowercase()) {
                words.remove(0);
            }
            start = words.first()?.0;
        }

        let text = &sentence[start..end];
        let lower = text.to_lowercase();
        let first_word = words.first()?.1.to_lowercase();
        let last_word = words.last()?.1.trim_end_matches('.').to_lowercase();

        if !in_gazetteer && words.len() == 1 && self.stopwords.contains(&first_word) {
            return None;
        }

        let sentence_initial = sentence[..start].trim().is_empty()
            || sentence[..start]
                .trim_end()
                .ends_with(['"', '\'', '“', '‘', '(']);

        let label = if titled {
            EntityLabel::Person
        } else if in_gazetteer || self.places.contains(&lower) {
            EntityLabel::Gpe
        } else if ORG_WORDS.contains(&last_word.as_str())
            || (words.len() > 1 && ORG_WORDS.contains(&first_word.as_str()))
        {
            EntityLabel::Org
        } else if words.len() == 1
            && (MONTHS.contains(&first_word.as_str()) || WEEKDAYS.contains(&first_word.as_str()))
        {
            EntityLabel::Date
        } else if words.len() == 1 && is_acronym(text) {
            if self.acronym.is_match(text) {
                EntityLabel::Gpe
            } else {
                EntityLabel::Org
            }
        } else if sentence_initial && words.len() == 1 {
            // A capital at the start of a sentence says nothing by itself
            return None;
        } else if (2..=3).contains(&words.len()) {
            EntityLabel::Person
        } else {
            EntityLabel::Misc
        };

        Some((start, end, label))
    }
}

fn numeric_span(caps: &Captures<'_>) -> Option<(usize, usize, EntityLabel)> {
    let (m, label) = if let Some(m) = caps.name("money") {
        (m, EntityLabel::Money)
    } else if let Some(m) = caps.name("percent") {
        (m, EntityLabel::Percent)
    } else if let Some(m) = caps.name("date") {
        (m, EntityLabel::Date)
    } else {
        (caps.name("cardinal")?, EntityLabel::Cardinal)
    };
    Some((m.start(), m.end(), label))
}

/// Byte positions and text of the whitespace-separated words in `start..end`
fn word_positions(sentence: &str, start: usize, end: usize) -> Vec<(usize, &str)> {
    let span = &sentence[start..end];
    let mut words = Vec::new();
    let mut offset = 0;
    for word in span.split_whitespace() {
        // split_whitespace yields subslices in order, so find from the last offset
        if let Some(pos) = span[offset..].find(word) {
            words.push((start + offset + pos, word));
            offset += pos + word.len();
        }
    }
    words
}

fn is_title(word: &str) -> bool {
    TITLES.contains(&word.trim_end_matches('.').to_lowercase().as_str())
}

/// All-uppercase token of 2 to 6 letters, dots allowed ("NASA", "U.S.")
fn is_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| *c != '.').collect();
    (2..=6).contains(&letters.len()) && letters.iter().all(|c| c.is_uppercase())
}

fn char_offset(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(sentence: &str) -> Vec<(String, &'static str)> {
        EntityRecognizer::new()
            .unwrap()
            .recognize(sentence)
            .into_iter()
            .map(|m| (m.text, m.label.as_str()))
            .collect()
    }

    fn has(entities: &[(String, &'static str)], text: &str, label: &str) -> bool {
        entities.iter().any(|(t, l)| t == text && *l == label)
    }

    #[test]
    fn test_person_place_and_date() {
        let entities = recognize("Barack Obama visited Paris in January 2009.");
        assert!(has(&entities, "Barack Obama", "PERSON"), "{entities:?}");
        assert!(has(&entities, "Paris", "GPE"), "{entities:?}");
        assert!(has(&entities, "January 2009", "DATE"), "{entities:?}");
        assert_eq!(entities.len(), 3);
    }

    #[test]
    fn test_money_and_dotted_acronym() {
        let entities = recognize("The startup from the U.K. raised $1 billion.");
        assert!(has(&entities, "U.K.", "GPE"), "{entities:?}");
        assert!(has(&entities, "$1 billion", "MONEY"), "{entities:?}");
    }

    #[test]
    fn test_organizations() {
        let entities = recognize("She joined Acme Corp after leaving NASA.");
        assert!(has(&entities, "Acme Corp", "ORG"), "{entities:?}");
        assert!(has(&entities, "NASA", "ORG"), "{entities:?}");

        let entities = recognize("He studied at the University of Oxford.");
        assert!(has(&entities, "University of Oxford", "ORG"), "{entities:?}");
    }

    #[test]
    fn test_title_is_stripped_from_person() {
        let entities = recognize("Yesterday Dr. Watson arrived.");
        assert!(has(&entities, "Watson", "PERSON"), "{entities:?}");
    }

    #[test]
    fn test_percent_and_cardinal() {
        let entities = recognize("Sales grew 12% across 40 stores.");
        assert!(has(&entities, "12%", "PERCENT"), "{entities:?}");
        assert!(has(&entities, "40", "CARDINAL"), "{entities:?}");
    }

    #[test]
    fn test_sentence_initial_word_is_not_an_entity() {
        assert!(recognize("This is great!").is_empty());
        assert!(recognize("Nothing happened here.").is_empty());
    }

    #[test]
    fn test_leading_stopword_is_dropped() {
        let entities = recognize("The United States signed it.");
        assert!(has(&entities, "United States", "GPE"), "{entities:?}");
    }

    #[test]
    fn test_place_starting_with_stopword() {
        let entities = recognize("We flew to New York on Monday.");
        assert!(has(&entities, "New York", "GPE"), "{entities:?}");
        assert!(has(&entities, "Monday", "DATE"), "{entities:?}");
    }

    #[test]
    fn test_offsets_are_characters() {
        let recognizer = EntityRecognizer::new().unwrap();
        let mentions = recognizer.recognize("Café owners met in Berlin.");
        let berlin = mentions.iter().find(|m| m.text == "Berlin").unwrap();
        assert_eq!(berlin.start, 19);
        assert_eq!(berlin.end, 25);
        assert_eq!(berlin.label, EntityLabel::Gpe);
    }

    #[test]
    fn test_leading_content_word_is_kept() {
        let entities = recognize("She works at the World Bank today.");
        assert_eq!(entities, vec![("World Bank".to_string(), "ORG")]);

        let entities = recognize("We listened to Good Charlotte all night.");
        assert!(has(&entities, "Good Charlotte", "PERSON"), "{entities:?}");
    }

    #[test]
    fn test_results_are_ordered() {
        let recognizer = EntityRecognizer::new().unwrap();
        let mentions = recognizer.recognize("In 2020 Angela Merkel met officials in Rome.");
        let starts: Vec<usize> = mentions.iter().map(|m| m.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
        assert!(mentions.len() >= 3);
    }
}
