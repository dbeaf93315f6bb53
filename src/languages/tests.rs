use crate::{
    build::header::parse_header,
    syntax::{Classifier, HighlightKind, StandardPrimitives, SyntaxError},
};

use super::find;

#[test]
fn rao_is_valid() -> Result<(), SyntaxError> {
    let rao = find("rao").unwrap().descriptor(&StandardPrimitives);

    rao.validate()?;

    assert!(rao.case_insensitive);
    assert_eq!(rao.categories.len(), 3);
    assert!(rao.categories.values().all(|words| !words.is_empty()));

    Ok(())
}

#[test]
fn rao_classifies_words() -> Result<(), SyntaxError> {
    let rao = find("rao").unwrap().descriptor(&StandardPrimitives);
    let classifier = Classifier::new(&rao)?;

    assert_eq!(classifier.classify("relevantSet"), Some("keyword"));
    assert_eq!(classifier.classify("TYPE"), Some("keyword"));
    assert_eq!(classifier.classify("DARK_MAGENTA"), Some("keyword"));
    assert_eq!(classifier.classify("True"), Some("constant"));
    assert_eq!(classifier.classify("currentTime"), Some("built_in"));
    assert_eq!(classifier.classify("frobnicate"), None);

    assert_eq!(
        classifier.classify_text("$x = select(first) or false"),
        vec![
            ("select", "built_in"),
            ("first", "built_in"),
            ("or", "keyword"),
            ("false", "constant"),
        ]
    );

    Ok(())
}

#[test]
fn rao_rules_keep_engine_order() {
    let rao = find("rao").unwrap().descriptor(&StandardPrimitives);
    let kinds: Vec<_> = rao.token_rules.iter().map(|rule| rule.class_name).collect();

    assert_eq!(
        kinds,
        vec![
            HighlightKind::Comment,
            HighlightKind::Comment,
            HighlightKind::String,
            HighlightKind::Number,
        ]
    );
    assert_eq!(rao.token_rules[0].begin, "//");
    assert_eq!(rao.token_rules[1].begin, r"/\*");
}

#[test]
fn unknown_language_is_not_found() {
    assert!(find("cobol").is_none());
}

#[test]
fn rendered_source_starts_with_header() -> Result<(), serde_json::Error> {
    let source = find("rao").unwrap().render_source(&StandardPrimitives)?;
    let header = parse_header(&source).unwrap();

    assert_eq!(header.language(), Some("rao"));
    assert_eq!(header.len(), 1);
    assert!(source.contains("function(hljs) {\n  return {\n    \"case_insensitive\": true,"));
    assert!(source.ends_with("};\n}\n"));

    Ok(())
}
