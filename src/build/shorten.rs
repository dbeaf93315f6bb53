use std::{borrow::Cow, collections::HashMap};

use regex::{Captures, Regex};
use thiserror::Error;

/// Field and helper names used throughout language definitions, with the
/// codes they are shortened to in a compressed bundle.
pub const STANDARD_ABBREVIATIONS: &[(&str, &str)] = &[
    ("case_insensitive", "cI"),
    ("lexemes", "l"),
    ("contains", "c"),
    ("keywords", "k"),
    ("subLanguage", "sL"),
    ("className", "cN"),
    ("begin", "b"),
    ("beginKeywords", "bK"),
    ("end", "e"),
    ("endsWithParent", "eW"),
    ("illegal", "i"),
    ("excludeBegin", "eB"),
    ("excludeEnd", "eE"),
    ("returnBegin", "rB"),
    ("returnEnd", "rE"),
    ("relevance", "r"),
    ("variants", "v"),
    ("IDENT_RE", "IR"),
    ("UNDERSCORE_IDENT_RE", "UIR"),
    ("NUMBER_RE", "NR"),
    ("C_NUMBER_RE", "CNR"),
    ("BINARY_NUMBER_RE", "BNR"),
    ("RE_STARTERS_RE", "RSR"),
    ("BACKSLASH_ESCAPE", "BE"),
    ("APOS_STRING_MODE", "ASM"),
    ("QUOTE_STRING_MODE", "QSM"),
    ("PHRASAL_WORDS_MODE", "PWM"),
    ("C_LINE_COMMENT_MODE", "CLCM"),
    ("C_BLOCK_COMMENT_MODE", "CBCM"),
    ("HASH_COMMENT_MODE", "HCM"),
    ("NUMBER_MODE", "NM"),
    ("C_NUMBER_MODE", "CNM"),
    ("BINARY_NUMBER_MODE", "BNM"),
    ("CSS_NUMBER_MODE", "CSSNM"),
    ("REGEXP_MODE", "RM"),
    ("TITLE_MODE", "TM"),
    ("UNDERSCORE_TITLE_MODE", "UTM"),
    ("COMMENT", "C"),
    ("beginRe", "bR"),
    ("endRe", "eR"),
    ("illegalRe", "iR"),
    ("lexemesRe", "lR"),
    ("terminators", "t"),
    ("terminator_end", "tE"),
];

/// Objects whose properties are rewritten by `shorten_property_access` and
/// `restore_property_access`.
pub const STANDARD_PROPERTY_OWNERS: [&str; 2] = ["block", "parentNode"];

#[derive(Error, Debug)]
pub enum AbbreviationError {
    #[error("\"{0}\" is listed more than once")]
    DuplicateName(String),
    #[error("code \"{0}\" is used for more than one name")]
    DuplicateCode(String),
    #[error("code \"{code}\" for \"{name}\" is also a name in the table")]
    CodeIsName { name: String, code: String },
    #[error("empty name or code in abbreviation table")]
    Empty,
    #[error("unable to compile abbreviation pattern: {0}")]
    Pattern(#[from] regex::Error),
}

struct Patterns {
    names: Regex,
    property_access: Regex,
    shortened_access: Regex,
}

/// A fixed name to code mapping along with the patterns compiled from it.
/// Codes never appear as names, so shortening twice is the same as once.
pub struct AbbreviationTable {
    codes: HashMap<String, String>,
    names: HashMap<String, String>,
    patterns: Option<Patterns>,
}

impl AbbreviationTable {
    pub fn new<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
        property_owners: [&str; 2],
    ) -> Result<Self, AbbreviationError> {
        let mut codes = HashMap::new();
        let mut names = HashMap::new();
        let mut name_patterns = Vec::new();
        let mut code_patterns = Vec::new();

        for (name, code) in entries {
            if name.is_empty() || code.is_empty() {
                return Err(AbbreviationError::Empty);
            }

            if codes.insert(name.to_string(), code.to_string()).is_some() {
                return Err(AbbreviationError::DuplicateName(name.into()));
            }

            if names.insert(code.to_string(), name.to_string()).is_some() {
                return Err(AbbreviationError::DuplicateCode(code.into()));
            }

            name_patterns.push(regex::escape(name));
            code_patterns.push(regex::escape(code));
        }

        for (name, code) in &codes {
            if codes.contains_key(code) {
                return Err(AbbreviationError::CodeIsName {
                    name: name.clone(),
                    code: code.clone(),
                });
            }
        }

        // Word boundaries are ASCII only, so `keywordsé` still contains `keywords`.
        let patterns = if name_patterns.is_empty() {
            None
        } else {
            let long = name_patterns.join("|");
            let short = code_patterns.join("|");
            let owners = property_owners.map(regex::escape).join("|");

            Some(Patterns {
                names: Regex::new(&format!(r"(?-u:\b)({long})(?-u:\b)"))?,
                property_access: Regex::new(&format!(
                    r"(?-u:\b)({owners})\.({long})(?-u:\b)"
                ))?,
                shortened_access: Regex::new(&format!(
                    r"(?-u:\b)({owners})\.({short})(?-u:\b)"
                ))?,
            })
        };

        Ok(Self {
            codes,
            names,
            patterns,
        })
    }

    pub fn standard() -> Result<Self, AbbreviationError> {
        Self::new(
            STANDARD_ABBREVIATIONS.iter().copied(),
            STANDARD_PROPERTY_OWNERS,
        )
    }

    pub fn code(&self, name: &str) -> Option<&str> {
        self.codes.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn code_or_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.code(name).unwrap_or(name)
    }

    /// Replaces every whole-word occurrence of a long name with its code.
    pub fn shorten_identifiers<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(patterns) = &self.patterns else {
            return Cow::Borrowed(text);
        };

        patterns
            .names
            .replace_all(text, |captures: &Captures| {
                self.code_or_name(&captures[1]).to_string()
            })
    }

    /// Shortens `owner.longName` property reads, leaving the owner alone.
    pub fn shorten_property_access<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(patterns) = &self.patterns else {
            return Cow::Borrowed(text);
        };

        patterns
            .property_access
            .replace_all(text, |captures: &Captures| {
                format!("{}.{}", &captures[1], self.code_or_name(&captures[2]))
            })
    }

    /// Undoes `shorten_identifiers` for `owner.code` reads. The owners are DOM
    /// nodes, so their properties have to keep their real names.
    pub fn restore_property_access<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(patterns) = &self.patterns else {
            return Cow::Borrowed(text);
        };

        patterns
            .shortened_access
            .replace_all(text, |captures: &Captures| {
                let code = &captures[2];
                let name = self.names.get(code).map_or(code, String::as_str);

                format!("{}.{}", &captures[1], name)
            })
    }
}
