mod rao;

#[cfg(test)]
mod tests;

use crate::syntax::{Primitives, RuleSetDescriptor};

/// A rule-set descriptor compiled into the tool, along with the header
/// comment its source file starts with.
pub struct LanguageDef {
    pub name: &'static str,
    pub header: &'static str,
    pub build: fn(&dyn Primitives) -> RuleSetDescriptor,
}

pub const LANGUAGES: &[LanguageDef] = &[LanguageDef {
    name: "rao",
    header: rao::HEADER,
    build: rao::build,
}];

pub fn find(name: &str) -> Option<&'static LanguageDef> {
    LANGUAGES.iter().find(|language| language.name == name)
}

impl LanguageDef {
    pub fn descriptor(&self, primitives: &dyn Primitives) -> RuleSetDescriptor {
        (self.build)(primitives)
    }

    /// Renders the descriptor as a source file for the highlighting engine:
    /// the header comment followed by a definition function.
    pub fn render_source(&self, primitives: &dyn Primitives) -> Result<String, serde_json::Error> {
        let body = serde_json::to_string_pretty(&self.descriptor(primitives))?;
        let body = body.replace('\n', "\n  ");

        Ok(format!(
            "{}\n\nfunction(hljs) {{\n  return {};\n}}\n",
            self.header, body
        ))
    }
}
