pub mod primitives;
mod words;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use primitives::{Primitives, StandardPrimitives};
pub use words::Words;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("category \"{0}\" contains an empty word")]
    EmptyWord(String),
    #[error("\"{word}\" is listed in both \"{first}\" and \"{second}\"")]
    AmbiguousWord {
        word: String,
        first: String,
        second: String,
    },
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(rename_all = "snake_case")]
pub enum HighlightKind {
    Comment,
    String,
    Number,
}

/// A composite matcher for a multi-character span. Rules with an `end`
/// pattern are ranges, rules without one match `begin` alone.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TokenRule {
    pub class_name: HighlightKind,
    pub begin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illegal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escape: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<u32>,
}

impl TokenRule {
    pub fn range(class_name: HighlightKind, begin: &str, end: &str) -> Self {
        Self {
            class_name,
            begin: begin.into(),
            end: Some(end.into()),
            illegal: None,
            escape: None,
            relevance: None,
        }
    }

    pub fn token(class_name: HighlightKind, begin: &str) -> Self {
        Self {
            class_name,
            begin: begin.into(),
            end: None,
            illegal: None,
            escape: None,
            relevance: None,
        }
    }

    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }

    pub fn with_illegal(mut self, illegal: &str) -> Self {
        self.illegal = Some(illegal.into());
        self
    }

    pub fn with_relevance(mut self, relevance: u32) -> Self {
        self.relevance = Some(relevance);
        self
    }

    pub fn is_range(&self) -> bool {
        self.end.is_some()
    }

    fn patterns(&self) -> impl Iterator<Item = &str> {
        [Some(&self.begin), self.end.as_ref(), self.illegal.as_ref()]
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

/// Lexical classification rules for one language. This is plain data, the
/// highlighting engine that consumes it lives elsewhere.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct RuleSetDescriptor {
    #[serde(default)]
    pub case_insensitive: bool,
    #[serde(rename = "lexemes")]
    pub token_pattern: String,
    #[serde(rename = "keywords", default)]
    pub categories: BTreeMap<String, Words>,
    #[serde(rename = "contains", default)]
    pub token_rules: Vec<TokenRule>,
}

impl RuleSetDescriptor {
    pub fn new(case_insensitive: bool, token_pattern: &str) -> Self {
        Self {
            case_insensitive,
            token_pattern: token_pattern.into(),
            categories: BTreeMap::new(),
            token_rules: Vec::new(),
        }
    }

    pub fn with_category(mut self, name: &str, words: &str) -> Self {
        self.categories
            .entry(name.into())
            .or_default()
            .extend(words.split_whitespace());
        self
    }

    pub fn with_rule(mut self, rule: TokenRule) -> Self {
        self.token_rules.push(rule);
        self
    }

    pub fn validate(&self) -> Result<(), SyntaxError> {
        Classifier::new(self)?;

        for rule in &self.token_rules {
            for pattern in rule.patterns() {
                compile(pattern)?;
            }
        }

        Ok(())
    }
}

fn compile(pattern: &str) -> Result<Regex, SyntaxError> {
    Regex::new(pattern).map_err(|err| SyntaxError::InvalidPattern {
        pattern: pattern.into(),
        reason: err.to_string(),
    })
}

/// Compiled word lookup for a descriptor.
pub struct Classifier<'a> {
    case_insensitive: bool,
    lexemes: Regex,
    words: HashMap<String, &'a str>,
}

impl<'a> Classifier<'a> {
    pub fn new(descriptor: &'a RuleSetDescriptor) -> Result<Self, SyntaxError> {
        let lexemes = compile(&descriptor.token_pattern)?;
        let mut words = HashMap::new();

        for (category, category_words) in &descriptor.categories {
            for word in category_words.iter() {
                if word.is_empty() {
                    return Err(SyntaxError::EmptyWord(category.clone()));
                }

                let key = Self::fold(descriptor.case_insensitive, word);

                if let Some(first) = words.insert(key, category.as_str()) {
                    if first != category.as_str() {
                        return Err(SyntaxError::AmbiguousWord {
                            word: word.into(),
                            first: first.into(),
                            second: category.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self {
            case_insensitive: descriptor.case_insensitive,
            lexemes,
            words,
        })
    }

    fn fold(case_insensitive: bool, word: &str) -> String {
        if case_insensitive {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    }

    pub fn classify(&self, word: &str) -> Option<&'a str> {
        self.words
            .get(&Self::fold(self.case_insensitive, word))
            .copied()
    }

    /// Candidate tokens in `text`, as split by the descriptor's lexeme pattern.
    pub fn words<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.lexemes.find_iter(text).map(|word| word.as_str())
    }

    pub fn classify_text<'t>(&'t self, text: &'t str) -> Vec<(&'t str, &'a str)> {
        self.words(text)
            .filter_map(|word| self.classify(word).map(|category| (word, category)))
            .collect()
    }
}
