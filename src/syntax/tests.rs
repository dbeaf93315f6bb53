use pretty_assertions::assert_eq;

use super::{
    Classifier, HighlightKind, Primitives, RuleSetDescriptor, StandardPrimitives, SyntaxError,
    TokenRule, Words,
};

fn sample() -> RuleSetDescriptor {
    RuleSetDescriptor::new(false, r"[a-zA-Z_]\w*")
        .with_category("keyword", "if else  return")
        .with_category("constant", "true false")
        .with_rule(StandardPrimitives.line_comment())
}

#[test]
fn categories_split_on_whitespace() {
    let descriptor = sample();
    let keywords = &descriptor.categories["keyword"];

    assert_eq!(keywords.len(), 3);
    assert_eq!(keywords.iter().collect::<Vec<_>>(), ["else", "if", "return"]);
}

#[test]
fn classify_is_case_sensitive_by_default() -> Result<(), SyntaxError> {
    let descriptor = sample();
    let classifier = Classifier::new(&descriptor)?;

    assert_eq!(classifier.classify("return"), Some("keyword"));
    assert_eq!(classifier.classify("Return"), None);
    assert_eq!(classifier.classify("true"), Some("constant"));

    Ok(())
}

#[test]
fn classify_ignores_case_when_insensitive() -> Result<(), SyntaxError> {
    let mut descriptor = sample();
    descriptor.case_insensitive = true;

    let classifier = Classifier::new(&descriptor)?;

    assert_eq!(classifier.classify("RETURN"), Some("keyword"));
    assert_eq!(classifier.classify("False"), Some("constant"));

    Ok(())
}

#[test]
fn classify_text_uses_lexeme_pattern() -> Result<(), SyntaxError> {
    let descriptor = sample();
    let classifier = Classifier::new(&descriptor)?;

    assert_eq!(
        classifier.words("if(x) return true;").collect::<Vec<_>>(),
        vec!["if", "x", "return", "true"]
    );
    assert_eq!(
        classifier.classify_text("if(x) return true;"),
        vec![("if", "keyword"), ("return", "keyword"), ("true", "constant")]
    );

    Ok(())
}

#[test]
fn word_in_two_categories_is_rejected() {
    let descriptor = sample().with_category("built_in", "print return");

    assert_eq!(
        descriptor.validate(),
        Err(SyntaxError::AmbiguousWord {
            word: "return".into(),
            first: "built_in".into(),
            second: "keyword".into(),
        })
    );
}

#[test]
fn case_folded_duplicates_are_rejected_when_insensitive() {
    let mut descriptor = sample().with_category("type", "Else");

    assert!(descriptor.validate().is_ok());

    descriptor.case_insensitive = true;

    assert!(matches!(
        descriptor.validate(),
        Err(SyntaxError::AmbiguousWord { .. })
    ));
}

#[test]
fn invalid_patterns_are_rejected() {
    let descriptor = RuleSetDescriptor::new(false, "[a-z");

    assert!(matches!(
        descriptor.validate(),
        Err(SyntaxError::InvalidPattern { .. })
    ));

    let descriptor = sample().with_rule(TokenRule::range(HighlightKind::String, "(", "\""));

    assert!(matches!(
        descriptor.validate(),
        Err(SyntaxError::InvalidPattern { pattern, .. }) if pattern == "("
    ));
}

#[test]
fn standard_primitives_are_valid() {
    let descriptor = RuleSetDescriptor::new(false, r"\w+")
        .with_rule(StandardPrimitives.line_comment())
        .with_rule(StandardPrimitives.block_comment())
        .with_rule(StandardPrimitives.quote_string())
        .with_rule(StandardPrimitives.number());

    assert_eq!(descriptor.validate(), Ok(()));
    assert!(descriptor.token_rules[2].is_range());
    assert!(!descriptor.token_rules[3].is_range());
}

#[test]
fn serializes_with_engine_field_names() -> Result<(), serde_json::Error> {
    let descriptor = sample();
    let value = serde_json::to_value(&descriptor)?;

    assert_eq!(value["case_insensitive"], false);
    assert_eq!(value["lexemes"], r"[a-zA-Z_]\w*");
    assert_eq!(value["keywords"]["keyword"], "else if return");
    assert_eq!(value["contains"][0]["className"], "comment");
    assert_eq!(value["contains"][0]["begin"], "//");
    assert!(value["contains"][0].get("relevance").is_none());

    Ok(())
}

#[test]
fn deserializes_word_strings_and_lists() -> Result<(), serde_json::Error> {
    let descriptor: RuleSetDescriptor = serde_json::from_str(
        r#"{
            "lexemes": "\\w+",
            "keywords": { "keyword": "a b", "built_in": ["c d", "e"] }
        }"#,
    )?;

    assert!(!descriptor.case_insensitive);
    assert_eq!(
        descriptor.categories.get("built_in"),
        Some(&["c", "d", "e"].into_iter().collect::<Words>())
    );
    assert!(descriptor.token_rules.is_empty());

    let round_trip: RuleSetDescriptor =
        serde_json::from_str(&serde_json::to_string(&descriptor)?)?;

    assert_eq!(round_trip, descriptor);

    Ok(())
}
