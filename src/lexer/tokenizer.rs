use super::*;
use super::scanner::{bump, is_digit, is_letter, peek_byte, skip_whitespace_and_comments};
use crate::error::GcfgError;

pub(super) fn next_token(lexer: &mut Lexer) -> Result<Token> {
    skip_whitespace_and_comments(lexer);

    let Some(ch) = peek_byte(lexer) else {
        return Ok(Token::eof());
    };

    if let Some(&kind) = SINGLE_CHAR_TOKENS.get(&ch) {
        bump(lexer);
        return Ok(Token::new(kind, char::from(ch).to_string()));
    }

    match ch {
        b'"' => tokenize_string(lexer),
        c if is_digit(c) => tokenize_number(lexer),
        c if is_letter(c) => Ok(tokenize_identifier_or_keyword(lexer)),
        c => tokenize_unexpected_char(lexer, c),
    }
}

fn tokenize_string(lexer: &mut Lexer) -> Result<Token> {
    bump(lexer); // consume opening '"'
    let start = lexer.pos;

    loop {
        match bump(lexer) {
            Some(b'"') => break,
            Some(_) => {}
            None => {
                return Err(GcfgError::UnterminatedString {
                    hint: Some("String literal not closed".into()),
                    code: Some(103),
                });
            }
        }
    }

    // closing quote already consumed
    let raw = &lexer.input[start..lexer.pos - 1];
    let content = std::str::from_utf8(raw).map_err(|_| GcfgError::InvalidUtf8 {
        hint: Some("Config text must be UTF-8".into()),
        code: Some(105),
    })?;

    Ok(Token::new(TokenKind::String, content))
}

fn tokenize_number(lexer: &mut Lexer) -> Result<Token> {
    let start = lexer.pos;
    let mut kind = TokenKind::Int;

    while let Some(ch) = peek_byte(lexer) {
        if ch == b'.' {
            if kind == TokenKind::Float {
                return Err(GcfgError::MalformedNumber {
                    literal: literal_from(lexer, start),
                    message: "multiple dots not allowed".into(),
                    hint: None,
                    code: Some(101),
                });
            }
            kind = TokenKind::Float;
        } else if !is_digit(ch) {
            break;
        }
        bump(lexer);
    }

    let literal = literal_from(lexer, start);
    if literal.ends_with('.') {
        return Err(GcfgError::MalformedNumber {
            literal,
            message: "numbers not allowed to end in dot".into(),
            hint: Some("Write a digit after the dot, e.g. 1.0".into()),
            code: Some(102),
        });
    }

    Ok(Token::new(kind, literal))
}

fn tokenize_identifier_or_keyword(lexer: &mut Lexer) -> Token {
    let start = lexer.pos;

    while let Some(ch) = peek_byte(lexer) {
        if is_letter(ch) || is_digit(ch) {
            bump(lexer);
        } else {
            break;
        }
    }

    let ident = literal_from(lexer, start);
    let kind = match ident.as_str() {
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        _ => TokenKind::Ident,
    };

    Token::new(kind, ident)
}

fn tokenize_unexpected_char(lexer: &mut Lexer, ch: u8) -> Result<Token> {
    bump(lexer);
    Err(GcfgError::UnexpectedCharacter {
        character: char::from(ch),
        hint: Some("Unexpected character in input".into()),
        code: Some(104),
    })
}

/// Text between `start` and the cursor. Only called over ASCII runs.
fn literal_from(lexer: &Lexer, start: usize) -> String {
    String::from_utf8_lossy(&lexer.input[start..lexer.pos]).into_owned()
}
