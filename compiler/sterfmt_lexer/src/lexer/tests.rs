use super::*;
use crate::lex_error::LexErrorKind;
use pretty_assertions::assert_eq;

fn lex_all(source: &str, config: LexerConfig) -> Vec<Lexed> {
    let buffer = SourceBuffer::new(source);
    Lexer::new(&buffer, config).collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source, LexerConfig::default())
        .into_iter()
        .map(|l| l.token.kind)
        .collect()
}

fn errors(source: &str) -> Vec<LexErrorKind> {
    lex_all(source, LexerConfig::default())
        .into_iter()
        .filter_map(|l| l.error.map(|e| e.kind))
        .collect()
}

#[test]
fn bold_red_tag() {
    use TokenKind::*;
    assert_eq!(
        kinds("<bold, red></>"),
        vec![Open, Bold, Delim, Red, Close, Open, Reset, Close, Eof]
    );
    assert!(errors("<bold, red></>").is_empty());
}

#[test]
fn token_texts_are_canonical() {
    let texts: Vec<&str> = lex_all("<bold, red></>", LexerConfig::default())
        .iter()
        .map(|l| l.token.text)
        .collect();
    assert_eq!(
        texts,
        vec!["<", "bold", ",", "red", ">", "<", "/", ">", "EOF"]
    );
}

#[test]
fn spans_cover_source_text() {
    let lexed = lex_all("< bold >", LexerConfig::default());
    let spans: Vec<Span> = lexed.iter().map(|l| l.token.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 1),
            Span::new(2, 6),
            Span::new(7, 8),
            Span::point(8)
        ]
    );
}

#[test]
fn braces_and_colon() {
    use TokenKind::*;
    assert_eq!(
        kinds("{left:center}"),
        vec![LBrace, Left, Colon, Center, RBrace, Eof]
    );
}

#[test]
fn whitespace_runs_are_skipped_entirely() {
    use TokenKind::*;
    assert_eq!(kinds("  \t\n\r  bold \x0B\x0C "), vec![Bold, Eof]);
    assert_eq!(kinds("   "), vec![Eof]);
}

#[test]
fn empty_input_is_just_eof() {
    let lexed = lex_all("", LexerConfig::default());
    assert_eq!(lexed, vec![Lexed::ok(Token::eof(0))]);
}

#[test]
fn default_resolves_to_color() {
    assert_eq!(kinds("default"), vec![TokenKind::ColorDefault, TokenKind::Eof]);
}

#[test]
fn every_keyword_lexes_to_first_entry() {
    for kw in keywords::KEYWORDS {
        let lexed = lex_all(kw.spelling, LexerConfig::default());
        let first = keywords::lookup(kw.spelling).map(|k| k.kind);
        assert_eq!(Some(lexed[0].token.kind), first, "{:?}", kw.spelling);
        assert_eq!(lexed[0].token.text, kw.spelling);
        assert_eq!(lexed[0].error, None);
    }
}

#[test]
fn unknown_word_is_one_illegal_token() {
    let lexed = lex_all("<purple>", LexerConfig::default());
    assert_eq!(lexed[1].token, Token::illegal(Span::new(1, 7)));
    assert_eq!(
        lexed[1].error.as_ref().map(|e| e.kind.clone()),
        Some(LexErrorKind::UnknownDirective {
            word: "purple".to_owned()
        })
    );
    assert_eq!(lexed[2].token.kind, TokenKind::Close);
}

#[test]
fn capitalized_keyword_suggests_lowercase() {
    let lexed = lex_all("Bold", LexerConfig::default());
    let error = lexed[0].error.as_ref().map(|e| e.suggestions[0].clone());
    assert_eq!(
        error.and_then(|s| s.replacement).map(|r| r.text),
        Some("bold".to_owned())
    );
}

#[test]
fn lone_closer_is_reported_and_kept() {
    let lexed = lex_all(">", LexerConfig::default());
    assert_eq!(lexed.len(), 2);
    assert_eq!(lexed[0].token.kind, TokenKind::Close);
    assert_eq!(
        lexed[0].error.as_ref().map(|e| e.kind.clone()),
        Some(LexErrorKind::UnmatchedCloser { delimiter: '>' })
    );
    assert_eq!(lexed[1].token.kind, TokenKind::Eof);
}

#[test]
fn balance_tracks_nesting_and_never_underflows() {
    let buffer = SourceBuffer::new("<{}>}<");
    let mut lexer = Lexer::new(&buffer, LexerConfig::default());
    let mut seen = Vec::new();
    for _ in 0..6 {
        lexer.next_token();
        seen.push(lexer.balance());
    }
    assert_eq!(seen, vec![1, 2, 1, 0, 0, 1]);
}

#[test]
fn punctuation_leaves_balance_alone() {
    let buffer = SourceBuffer::new("<:,/");
    let mut lexer = Lexer::new(&buffer, LexerConfig::default());
    let mut seen = Vec::new();
    for _ in 0..4 {
        lexer.next_token();
        seen.push(lexer.balance());
    }
    assert_eq!(seen, vec![1, 1, 1, 1]);
}

#[test]
fn lone_brace_closer_names_the_brace() {
    assert_eq!(
        errors("}"),
        vec![LexErrorKind::UnmatchedCloser { delimiter: '}' }]
    );
}

#[test]
fn unclosed_delimiter_reported_once_on_first_eof() {
    let buffer = SourceBuffer::new("<bold{");
    let mut lexer = Lexer::new(&buffer, LexerConfig::default());
    for _ in 0..3 {
        lexer.next_token();
    }
    let first = lexer.next_token();
    assert!(first.token.is_eof());
    assert_eq!(
        first.error.map(|e| e.kind),
        Some(LexErrorKind::UnclosedDelimiter { open: 2 })
    );
    let again = lexer.next_token();
    assert_eq!(again, Lexed::ok(Token::eof(6)));
}

#[test]
fn eof_is_sticky() {
    let buffer = SourceBuffer::new("red");
    let mut lexer = Lexer::new(&buffer, LexerConfig::default());
    assert_eq!(lexer.next_token().token.kind, TokenKind::Red);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().token, Token::eof(3));
        assert_eq!(lexer.position(), 3);
    }
}

#[test]
fn iterator_stops_after_first_eof() {
    let buffer = SourceBuffer::new("<");
    let mut lexer = Lexer::new(&buffer, LexerConfig::default());
    assert_eq!(lexer.next().map(|l| l.token.kind), Some(TokenKind::Open));
    assert_eq!(lexer.next().map(|l| l.token.kind), Some(TokenKind::Eof));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

#[test]
fn invalid_characters_advance_one_code_point() {
    let lexed = lex_all("9é#", LexerConfig::default());
    let spans: Vec<Span> = lexed.iter().map(|l| l.token.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 1),
            Span::new(1, 3),
            Span::new(3, 4),
            Span::point(4)
        ]
    );
    assert_eq!(
        errors("9é#"),
        vec![
            LexErrorKind::InvalidCharacter { ch: '9' },
            LexErrorKind::InvalidCharacter { ch: 'é' },
            LexErrorKind::InvalidCharacter { ch: '#' },
        ]
    );
    assert!(lexed[..3].iter().all(|l| l.token.text == "ILLEGAL"));
}

#[test]
fn interior_null_is_not_end_of_input() {
    use TokenKind::*;
    assert_eq!(kinds("red\0blue"), vec![Red, Illegal, Blue, Eof]);
    assert_eq!(errors("red\0blue"), vec![LexErrorKind::InteriorNull]);
}

#[test]
fn leading_bom_is_reported_as_bom() {
    let lexed = lex_all("\u{FEFF}bold", LexerConfig::default());
    assert_eq!(lexed[0].token, Token::illegal(Span::new(0, 3)));
    assert_eq!(
        lexed[0].error.as_ref().map(|e| e.kind.clone()),
        Some(LexErrorKind::Utf8Bom)
    );
    assert_eq!(lexed[1].token.kind, TokenKind::Bold);
}

#[test]
fn long_unknown_run_is_rejected_whole() {
    let word = "q".repeat(40);
    let source = format!("{word}<");
    let lexed = lex_all(&source, LexerConfig::default());
    assert_eq!(lexed[0].token, Token::illegal(Span::new(0, 40)));
    assert_eq!(
        lexed[0].error.as_ref().map(|e| e.kind.clone()),
        Some(LexErrorKind::IdentifierTooLong { len: 40, max: 31 })
    );
    // The cursor resumes right after the run.
    assert_eq!(lexed[1].token.kind, TokenKind::Open);
    assert_eq!(lexed[1].token.span, Span::new(40, 41));
}

#[test]
fn truncate_policy_resolves_prefix() {
    let config = LexerConfig::default()
        .with_max_ident_len(4)
        .with_ident_overflow(IdentOverflow::Truncate);
    let lexed = lex_all("boldly", config);
    assert_eq!(lexed[0].token, Token::new(TokenKind::Bold, "bold", Span::new(0, 6)));
    assert_eq!(
        lexed[0].error.as_ref().map(|e| e.kind.clone()),
        Some(LexErrorKind::IdentifierTooLong { len: 6, max: 4 })
    );
}

#[test]
fn truncate_policy_unknown_prefix_is_illegal() {
    let config = LexerConfig::default()
        .with_max_ident_len(3)
        .with_ident_overflow(IdentOverflow::Truncate);
    let lexed = lex_all("purple", config);
    assert_eq!(lexed[0].token, Token::illegal(Span::new(0, 6)));
}

#[test]
fn word_at_limit_is_accepted() {
    let config = LexerConfig::default().with_max_ident_len(9);
    let lexed = lex_all("underline", config);
    assert_eq!(lexed[0].token.kind, TokenKind::Underline);
    assert_eq!(lexed[0].error, None);
}

#[test]
fn diagnostics_record_nesting_depth() {
    let lexed = lex_all("<{#", LexerConfig::default());
    assert_eq!(
        lexed[2].error.as_ref().map(|e| e.context),
        Some(LexErrorContext::Nested { depth: 2 })
    );
    let top = lex_all("#", LexerConfig::default());
    assert_eq!(
        top[0].error.as_ref().map(|e| e.context),
        Some(LexErrorContext::TopLevel)
    );
}
