use regex::Regex;
use serde::Deserialize;

use super::{header::strip_header, shorten::AbbreviationTable};

/// A regex substitution applied to every descriptor. `replace` may refer to
/// capture groups with `$1` or `${name}`.
#[derive(Clone, Debug)]
pub struct Replacement {
    pub regex: Regex,
    pub replace: String,
}

impl Replacement {
    pub fn new(from: &str, to: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(from)?,
            replace: to.into(),
        })
    }

    pub fn apply(&self, text: &str) -> String {
        self.regex
            .replace_all(text, self.replace.as_str())
            .into_owned()
    }
}

#[derive(Deserialize, Default, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Shortening {
    None,
    /// Only `owner.longName` property reads.
    Properties,
    /// Every long name, except properties read from the DOM owners.
    #[default]
    All,
}

/// The text transforms run over each descriptor before it is bundled.
pub struct Pipeline<'a> {
    table: &'a AbbreviationTable,
    replacements: &'a [Replacement],
    strip_headers: bool,
    shortening: Shortening,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        table: &'a AbbreviationTable,
        replacements: &'a [Replacement],
        strip_headers: bool,
        shortening: Shortening,
    ) -> Self {
        Self {
            table,
            replacements,
            strip_headers,
            shortening,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        let mut text = if self.strip_headers {
            strip_header(text).to_string()
        } else {
            text.to_string()
        };

        for replacement in self.replacements {
            text = replacement.apply(&text);
        }

        match self.shortening {
            Shortening::None => text,
            Shortening::Properties => self.table.shorten_property_access(&text).into_owned(),
            Shortening::All => {
                let shortened = self.table.shorten_identifiers(&text);
                self.table.restore_property_access(&shortened).into_owned()
            }
        }
    }
}
