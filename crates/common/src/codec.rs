//! Vowel substitution encoding and decoding of text.
//!
//! **This is not cryptography.** The scheme is a fixed, keyless, deterministic
//! string rewrite: each lowercase vowel maps to a fixed multi-character
//! expansion, and decoding reverses the mapping. There is no entropy and no
//! security property; the value is reversibility, not confidentiality.
//!
//! This module is intentionally free of HTTP and IO dependencies. It provides
//! the pure encode/decode operations used by the server and file-codec
//! binaries.
//!
//! # Known limitation
//!
//! `encode` and `decode` are only reliable inverses for text over the
//! restricted alphabet (lowercase a-z and whitespace) that does not already
//! contain one of the expansion substrings. A natural occurrence of `"ai"` in
//! the input will be unsubstituted by `decode`. This is inherent to the
//! scheme and callers must not rely on round-tripping arbitrary text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Forward substitution rules, in application order.
///
/// Order is load-bearing: each rule's output feeds the next rule's input, and
/// later expansions contain characters earlier rules consume (`"ober"`
/// contains `e`, `"ufat"` contains `a`). Reordering changes the output.
pub const RULES: [(&str, &str); 5] = [
    ("e", "enter"),
    ("i", "imes"),
    ("a", "ai"),
    ("o", "ober"),
    ("u", "ufat"),
];

/// Operation hint derived from the content of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestedOperation {
    /// The text contains vowels and no expansion substrings.
    Encode,
    /// The text contains expansion substrings and no vowels.
    Decode,
    /// The text could plausibly be either.
    Either,
}

/// Substitution counts and size accounting for one encode call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecStats {
    /// Character count of the input text.
    pub input_chars: usize,
    /// Character count of the output text.
    pub output_chars: usize,
    /// `output_chars / input_chars`; `1.0` for empty input.
    pub expansion_ratio: f64,
    /// Per-vowel occurrence counts in the input text.
    pub substitutions: BTreeMap<char, usize>,
}

/// The vowel substitution codec.
///
/// Owns the forward rule table ([`RULES`]) and the reverse table derived from
/// it at construction. Stateless across calls; cheap to share behind an `Arc`
/// and safe to invoke concurrently.
#[derive(Debug, Clone)]
pub struct SubstitutionCodec {
    /// (expansion, symbol) pairs sorted descending by expansion length.
    ///
    /// The sort is stable, so equal-length expansions keep declaration order:
    /// `[enter, imes, ober, ufat, ai]`. Longest-first application prevents a
    /// short pattern (`"ai"`) from matching inside a longer one.
    reverse: Vec<(&'static str, &'static str)>,
}

impl SubstitutionCodec {
    /// Build a codec, deriving the reverse table from [`RULES`].
    pub fn new() -> Self {
        let mut reverse: Vec<(&'static str, &'static str)> = RULES
            .iter()
            .map(|(symbol, expansion)| (*expansion, *symbol))
            .collect();
        reverse.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { reverse }
    }

    /// Number of forward rules.
    pub fn rule_count(&self) -> usize {
        RULES.len()
    }

    /// Replace every vowel occurrence with its expansion.
    ///
    /// Applies the forward rules in declared order, each as a global literal
    /// replacement over the previous rule's output. Total over all inputs;
    /// empty input yields empty output.
    pub fn encode(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let mut out = text.to_owned();
        for (symbol, expansion) in RULES {
            out = out.replace(symbol, expansion);
        }
        out
    }

    /// Replace every expansion occurrence with its original vowel.
    ///
    /// Applies the reverse rules longest-expansion-first, each as a global
    /// literal replacement. Total over all inputs; empty input yields empty
    /// output.
    pub fn decode(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let mut out = text.to_owned();
        for (expansion, symbol) in &self.reverse {
            out = out.replace(expansion, symbol);
        }
        out
    }

    /// Returns `true` if `text` contains at least one expansion substring.
    pub fn contains_expansion(&self, text: &str) -> bool {
        self.reverse.iter().any(|(expansion, _)| text.contains(expansion))
    }

    /// Suggest an operation based on the content of `text`.
    ///
    /// Expansions themselves contain vowels, so text holding an expansion
    /// almost always reports [`SuggestedOperation::Either`] rather than
    /// `Decode`; the hint is a heuristic, not a classification.
    pub fn suggest(&self, text: &str) -> SuggestedOperation {
        let has_expansions = self.contains_expansion(text);
        let has_vowels = text.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));

        if has_expansions && !has_vowels {
            SuggestedOperation::Decode
        } else if !has_expansions && has_vowels {
            SuggestedOperation::Encode
        } else {
            SuggestedOperation::Either
        }
    }

    /// Size accounting and per-vowel substitution counts for one encode call.
    ///
    /// `input` is the text as given to [`SubstitutionCodec::encode`] and
    /// `output` its result; counts are taken over `input`.
    pub fn stats(&self, input: &str, output: &str) -> CodecStats {
        let mut substitutions = BTreeMap::new();
        for (symbol, _) in RULES {
            // Symbols are single ASCII chars; count occurrences in the input.
            let symbol_char = symbol.chars().next().unwrap_or_default();
            let count = input.chars().filter(|c| *c == symbol_char).count();
            substitutions.insert(symbol_char, count);
        }

        let input_chars = input.chars().count();
        let output_chars = output.chars().count();
        let expansion_ratio = if input_chars == 0 {
            1.0
        } else {
            output_chars as f64 / input_chars as f64
        };

        CodecStats {
            input_chars,
            output_chars,
            expansion_ratio,
            substitutions,
        }
    }
}

impl Default for SubstitutionCodec {
    fn default() -> Self {
        Self::new()
    }
}
