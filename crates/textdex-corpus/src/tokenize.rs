//! Sentence segmentation and word tokenization
//!
//! Text is split into paragraphs on blank lines, whitespace inside a paragraph
//! is collapsed (so hard-wrapped lines don't end sentences), paragraphs are
//! segmented on UAX #29 sentence boundaries and every sentence is split into
//! `\w+` word tokens. Sentences without any word token are dropped.

use crate::document::Sentence;
use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Split text into word tokens, punctuation excluded, case preserved
pub fn words(text: &str) -> Vec<String> {
    word_re()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into sentences of word tokens
pub fn sentences(text: &str) -> Vec<Sentence> {
    paragraphs(text)
        .iter()
        .flat_map(|paragraph| {
            paragraph
                .unicode_sentences()
                .map(words)
                .filter(|tokens| !tokens.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}

fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
            continue;
        }
        current.extend(line.split_whitespace());
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}
