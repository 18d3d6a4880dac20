use super::*;
use sterfmt_lexer::{lex, LexerConfig};

#[test]
fn report_names_source_and_problem() {
    let source = "<bold, teal>";
    let output = lex(source, &LexerConfig::default());
    let rendered = render_to_string("input.sf", source, &output.errors);
    assert!(rendered.contains("unknown directive"), "{rendered}");
    assert!(rendered.contains("input.sf"), "{rendered}");
    assert!(rendered.contains("`teal`"), "{rendered}");
}

#[test]
fn one_report_per_error() {
    let source = "># ";
    let output = lex(source, &LexerConfig::default());
    assert_eq!(output.errors.len(), 2);
    let rendered = render_to_string("<stdin>", source, &output.errors);
    assert_eq!(rendered.matches("Error:").count(), 2, "{rendered}");
}

#[test]
fn help_carries_suggestion() {
    let source = "<Red>";
    let output = lex(source, &LexerConfig::default());
    let rendered = render_to_string("<stdin>", source, &output.errors);
    assert!(rendered.contains("directives are lowercase: `red`"), "{rendered}");
}

#[test]
fn no_errors_renders_nothing() {
    assert_eq!(render_to_string("<stdin>", "<red>", &[]), "");
}
