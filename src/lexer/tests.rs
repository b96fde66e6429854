#[cfg(test)]
use super::*;
use crate::error::GcfgError;

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input.as_bytes())
        .tokenize()
        .expect("tokenize failed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_all_token_kinds() {
    let input = r#"
[]
()
{}
=,
1.23
123
"hello"
true false foo null
"#;

    let mut lexer = Lexer::new(input.as_bytes());

    let expected_tokens = vec![
        Token::new(TokenKind::LBracket, "["),
        Token::new(TokenKind::RBracket, "]"),
        Token::new(TokenKind::LParen, "("),
        Token::new(TokenKind::RParen, ")"),
        Token::new(TokenKind::LBrace, "{"),
        Token::new(TokenKind::RBrace, "}"),
        Token::new(TokenKind::Assign, "="),
        Token::new(TokenKind::Comma, ","),
        Token::new(TokenKind::Float, "1.23"),
        Token::new(TokenKind::Int, "123"),
        Token::new(TokenKind::String, "hello"),
        Token::new(TokenKind::True, "true"),
        Token::new(TokenKind::False, "false"),
        Token::new(TokenKind::Ident, "foo"),
        Token::new(TokenKind::Null, "null"),
        Token::eof(),
    ];

    for expected in expected_tokens {
        assert_eq!(lexer.next_token(), Ok(expected));
    }
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new(b"x");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Ident);
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Ok(Token::eof()));
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds(" \t\r\n "), vec![TokenKind::Eof]);
}

#[test]
fn test_identifiers() {
    let tokens = Lexer::new(b"_private snake_case a1b2 trueish nullable")
        .tokenize()
        .unwrap();
    let literals: Vec<&str> = tokens.iter().map(|t| t.literal.as_str()).collect();
    assert_eq!(literals, vec!["_private", "snake_case", "a1b2", "trueish", "nullable", ""]);
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Ident));
}

#[test]
fn test_digits_then_letters_split() {
    assert_eq!(kinds("12abc"), vec![TokenKind::Int, TokenKind::Ident, TokenKind::Eof]);
}

#[test]
fn test_string_is_verbatim() {
    let mut lexer = Lexer::new(br#""no \n escapes # here""#);
    assert_eq!(
        lexer.next_token(),
        Ok(Token::new(TokenKind::String, r"no \n escapes # here"))
    );
}

#[test]
fn test_empty_string() {
    let mut lexer = Lexer::new(br#""""#);
    assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::String, "")));
}

#[test]
fn test_utf8_string() {
    let mut lexer = Lexer::new("\"héllo\"".as_bytes());
    assert_eq!(lexer.next_token(), Ok(Token::new(TokenKind::String, "héllo")));
}

#[test]
fn test_comments_are_skipped() {
    let input = "# leading\nx = 1 # trailing\n# last";
    assert_eq!(
        kinds(input),
        vec![TokenKind::Ident, TokenKind::Assign, TokenKind::Int, TokenKind::Eof]
    );
}

#[test]
fn test_bad_input() {
    let cases = [
        ("multiple dots", "1.2.3"),
        ("end in dot", "123."),
        ("malformed string", r#""hey"#),
        ("unexpected char", "x = -1"),
    ];

    for (name, input) in cases {
        let result = Lexer::new(input.as_bytes()).tokenize();
        assert!(result.is_err(), "{} should fail", name);
        assert!(result.unwrap_err().is_lexical(), "{} should be lexical", name);
    }
}

#[test]
fn test_number_error_messages() {
    match Lexer::new(b"1.2.3").next_token() {
        Err(GcfgError::MalformedNumber { message, .. }) => {
            assert_eq!(message, "multiple dots not allowed")
        }
        other => panic!("unexpected {:?}", other),
    }

    match Lexer::new(b"7.").next_token() {
        Err(GcfgError::MalformedNumber { literal, message, .. }) => {
            assert_eq!(literal, "7.");
            assert_eq!(message, "numbers not allowed to end in dot");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_unterminated_string_code() {
    let err = Lexer::new(b"\"open").next_token().unwrap_err();
    assert!(matches!(err, GcfgError::UnterminatedString { .. }));
    assert_eq!(err.code(), Some(103));
}
