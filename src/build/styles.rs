use std::{
    fs::read_dir,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::debug;

use super::BuildError;

#[derive(Clone, Debug)]
pub struct StyleOptions {
    pub extension: String,
    /// Base name of the style that is always bundled and so never listed.
    pub default_style: String,
    /// Directory the listed paths are relative to.
    pub prefix: String,
}

#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct StyleEntry {
    pub path: PathBuf,
    pub name: String,
}

/// Lists the stylesheets directly inside `dir` in the order the file system
/// returns them.
pub fn list_styles(dir: &Path, options: &StyleOptions) -> Result<Vec<StyleEntry>, BuildError> {
    let entries = read_dir(dir).map_err(|source| BuildError::ReadDir {
        path: dir.into(),
        source,
    })?;

    let mut styles = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| BuildError::ReadDir {
            path: dir.into(),
            source,
        })?;

        let file_name = entry.file_name();

        let Some(file_name) = file_name.to_str() else {
            debug!("Skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };

        let path = Path::new(file_name);

        if path.extension().and_then(|extension| extension.to_str())
            != Some(options.extension.as_str())
        {
            continue;
        }

        let Some(base_name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        if base_name == options.default_style {
            continue;
        }

        styles.push(StyleEntry {
            path: Path::new(&options.prefix).join(file_name),
            name: start_case(base_name),
        });
    }

    Ok(styles)
}

pub fn sort_styles(styles: &mut [StyleEntry]) {
    styles.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Splits `text` into words at separators, lower to upper case changes and
/// letter/digit changes, then capitalizes each word.
/// "mono-dark" becomes "Mono Dark", "atelierCave" becomes "Atelier Cave".
pub fn start_case(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut word = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }

            continue;
        }

        if let Some(previous) = word.chars().last() {
            let is_case_change = previous.is_lowercase() && c.is_uppercase();
            let is_digit_change = previous.is_numeric() != c.is_numeric();
            let is_acronym_end = previous.is_uppercase()
                && c.is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());

            if is_case_change || is_digit_change || is_acronym_end {
                words.push(std::mem::take(&mut word));
            }
        }

        word.push(c);
    }

    if !word.is_empty() {
        words.push(word);
    }

    let mut result = String::new();

    for word in words {
        if !result.is_empty() {
            result.push(' ');
        }

        let mut word_chars = word.chars();

        if let Some(first) = word_chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(word_chars.as_str());
        }
    }

    result
}
