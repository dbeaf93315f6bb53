use super::{HighlightKind, TokenRule};

pub const C_NUMBER_RE: &str = r"(\b0[xX][a-fA-F0-9]+|(\b\d+(\.\d*)?|\.\d+)([eE][-+]?\d+)?)";

/// Shared token rule constructors supplied by the highlighting engine.
pub trait Primitives {
    fn line_comment(&self) -> TokenRule;
    fn block_comment(&self) -> TokenRule;
    fn quote_string(&self) -> TokenRule;
    fn number(&self) -> TokenRule;
}

/// C-family comments, double quoted strings and C-style numbers.
pub struct StandardPrimitives;

impl Primitives for StandardPrimitives {
    fn line_comment(&self) -> TokenRule {
        TokenRule::range(HighlightKind::Comment, "//", "$")
    }

    fn block_comment(&self) -> TokenRule {
        TokenRule::range(HighlightKind::Comment, r"/\*", r"\*/")
    }

    fn quote_string(&self) -> TokenRule {
        TokenRule::range(HighlightKind::String, "\"", "\"")
            .with_escape('\\')
            .with_illegal(r"\n")
    }

    fn number(&self) -> TokenRule {
        TokenRule::token(HighlightKind::Number, C_NUMBER_RE).with_relevance(0)
    }
}
