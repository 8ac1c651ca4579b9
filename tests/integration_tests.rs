//! Integration tests for end-to-end tokenization.
//!
//! These tests drive the analyzer the way the command-line layer does:
//! a complete source string in, an ordered token sequence out.

use lexan::lexer::{lexer::analyze, tokens::Category};

#[test]
fn test_analyze_declaration_statement() {
    let tokens = analyze("int x = 5;");

    assert_eq!(tokens.len(), 5);

    assert_eq!(tokens[0].lexeme, "int");
    assert_eq!(tokens[0].category, Category::Keyword);

    assert_eq!(tokens[1].lexeme, "x");
    assert_eq!(tokens[1].category, Category::Identifier);

    assert_eq!(tokens[2].lexeme, "=");
    assert_eq!(tokens[2].category, Category::Operator);
    assert_eq!(tokens[2].subcategory.as_deref(), Some("Assignment"));

    assert_eq!(tokens[3].lexeme, "5");
    assert_eq!(tokens[3].category, Category::Number);

    assert_eq!(tokens[4].lexeme, ";");
    assert_eq!(tokens[4].category, Category::Delimiter);
    assert_eq!(tokens[4].subcategory.as_deref(), Some("Semicolon"));
}

#[test]
fn test_analyze_increment_and_comparison() {
    let tokens = analyze("x++ >= 10");

    assert_eq!(tokens.len(), 4);

    assert_eq!(tokens[0].lexeme, "x");
    assert_eq!(tokens[0].category, Category::Identifier);

    assert_eq!(tokens[1].lexeme, "++");
    assert_eq!(tokens[1].category, Category::Operator);
    assert_eq!(tokens[1].subcategory.as_deref(), Some("Arithmetic Increment"));

    assert_eq!(tokens[2].lexeme, ">=");
    assert_eq!(tokens[2].category, Category::Operator);
    assert_eq!(
        tokens[2].subcategory.as_deref(),
        Some("Relational Greater than or equal to")
    );

    assert_eq!(tokens[3].lexeme, "10");
    assert_eq!(tokens[3].category, Category::Number);
}

#[test]
fn test_analyze_small_program() {
    let source = "int main() {\n    return 0;\n}\n";
    let tokens = analyze(source);

    let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(
        lexemes,
        vec!["int", "main", "(", ")", "{", "return", "0", ";", "}"]
    );

    // `main` sits in the keyword set, like the original classifier.
    assert_eq!(tokens[1].category, Category::Keyword);
    assert_eq!(tokens[5].category, Category::Keyword);
}

#[test]
fn test_analyze_library_call() {
    let tokens = analyze("free(ptr);");

    assert_eq!(tokens[0].category, Category::Keyword);
    assert_eq!(tokens[0].lexeme, "free");
    assert_eq!(tokens[1].category, Category::Delimiter);
    assert_eq!(tokens[2].category, Category::Identifier);
    assert_eq!(tokens[2].lexeme, "ptr");
    assert_eq!(tokens[3].category, Category::Delimiter);
    assert_eq!(tokens[4].category, Category::Delimiter);
}

#[test]
fn test_lexemes_reconstruct_input() {
    let source = "while (i < 10) { total += i; i++; }";
    let tokens = analyze(source);

    let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    let joined: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();

    assert_eq!(joined, stripped);
}

#[test]
fn test_token_count_bounded_by_input_length() {
    let source = "a+b<=c; @@ 12abc [x]";
    let tokens = analyze(source);

    assert!(tokens.len() <= source.len());
    for token in &tokens {
        assert!(!token.lexeme.is_empty());
    }
}

#[test]
fn test_reanalysis_of_lexemes_is_stable() {
    let source = "x += 2; y = x * 3;";
    let tokens = analyze(source);

    let joined = tokens
        .iter()
        .map(|t| t.lexeme.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let reanalyzed = analyze(&joined);

    assert_eq!(tokens.len(), reanalyzed.len());
    for (a, b) in tokens.iter().zip(reanalyzed.iter()) {
        assert_eq!(a.category, b.category);
        assert_eq!(a.subcategory, b.subcategory);
    }
}

#[test]
fn test_unknown_tokens_never_abort() {
    let tokens = analyze("int $value = 3 ? a : b;");

    // `$`, `?` and `:` have no table entries but still come through.
    let unknowns: Vec<&str> = tokens
        .iter()
        .filter(|t| t.category == Category::Unknown)
        .map(|t| t.lexeme.as_str())
        .collect();

    assert_eq!(unknowns, vec!["$", "?", ":"]);
    assert_eq!(tokens.len(), 10);
}
