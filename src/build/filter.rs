use std::{collections::HashSet, path::Path};

use tracing::debug;

use super::{header::parse_header, DescriptorBlob};

const CATEGORY_PREFIX: char = ':';

#[derive(Clone, Debug)]
pub struct FilterOptions {
    /// Suffix stripped from a descriptor's file name to get its language.
    pub descriptor_suffix: String,
    /// File name of the engine itself, which is kept under any filter.
    pub entry_point: String,
}

/// Selects descriptors by language name or, for qualifiers starting with
/// `:`, by the categories listed in their header.
#[derive(Clone, Debug)]
pub struct Filter {
    languages: HashSet<String>,
    categories: HashSet<String>,
    options: FilterOptions,
}

impl Filter {
    pub fn new<S: AsRef<str>>(qualifiers: &[S], options: &FilterOptions) -> Self {
        let mut languages = HashSet::new();
        let mut categories = HashSet::new();

        for qualifier in qualifiers {
            let qualifier = qualifier.as_ref();

            match qualifier.strip_prefix(CATEGORY_PREFIX) {
                Some(category) => categories.insert(category.to_string()),
                None => languages.insert(qualifier.to_string()),
            };
        }

        Self {
            languages,
            categories,
            options: options.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.categories.is_empty()
    }

    pub fn accepts(&self, blob: &DescriptorBlob) -> bool {
        if self.is_empty() {
            return true;
        }

        let file_name = file_name(&blob.name);

        if file_name == self.options.entry_point {
            return true;
        }

        let Some(header) = parse_header(&blob.result) else {
            debug!("Rejecting \"{}\": no header", blob.name);
            return false;
        };

        let language = file_name
            .strip_suffix(self.options.descriptor_suffix.as_str())
            .unwrap_or(file_name);

        let is_accepted = self.languages.contains(language)
            || header
                .categories()
                .iter()
                .any(|category| self.categories.contains(category));

        if !is_accepted {
            debug!("Rejecting \"{}\": no matching language or category", blob.name);
        }

        is_accepted
    }

    pub fn predicate(self) -> impl Fn(&DescriptorBlob) -> bool {
        move |blob| self.accepts(blob)
    }
}

fn file_name(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|file_name| file_name.to_str())
        .unwrap_or(name)
}
