use crate::syntax::{Primitives, RuleSetDescriptor};

pub const HEADER: &str = "/*
Language: rao
*/";

const LEXEMES: &str = r"[a-zA-Z_$][a-zA-Z0-9_]*";

const KEYWORDS: &str = concat!(
    "type relevantSet operation keyboard rule relevant event any ",
    "dpt set activity checks search ",
    "sequence enumerative legacy uniform exponential normal triangular histogram constant ",
    "function algorithmic table list result ",
    "frame background if else for text rectangle line circle ellipse triangle Color ",
    "enum int double boolean ",
    "String array break return resource or ",
    "and mod not exist notExist forAll except empty size left center right Alignment ",
    "BLACK BLUE CYAN DARK_BLUE DARK_CYAN DARK_GRAY DARK_GREEN DARK_MAGENTA DARK_RED ",
    "DARK_YELLOW GRAY GREEN MAGENTA RED WHITE YELLOW",
);

const CONSTANTS: &str = "true false";

const BUILT_INS: &str = concat!(
    "select first withMin withMax setValueBefore setValueAfter ",
    "setParent setCondition setPriority setTerminateCondition evaluateBy ",
    "compareTops terminateCondition init watchParameter watchState watchQuantity ",
    "watchValue getValue duration begin end execute stop plan ",
    "create erase currentTime",
);

pub fn build(primitives: &dyn Primitives) -> RuleSetDescriptor {
    RuleSetDescriptor::new(true, LEXEMES)
        .with_category("keyword", KEYWORDS)
        .with_category("constant", CONSTANTS)
        .with_category("built_in", BUILT_INS)
        .with_rule(primitives.line_comment())
        .with_rule(primitives.block_comment())
        .with_rule(primitives.quote_string())
        .with_rule(primitives.number())
}
