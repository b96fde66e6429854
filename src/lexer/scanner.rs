use super::*;

/// Advance past the current byte and return it.
pub(super) fn bump(lexer: &mut Lexer) -> Option<u8> {
    let curr = lexer.input.get(lexer.pos).copied();
    if curr.is_some() {
        lexer.pos += 1;
    }
    curr
}

/// Peek at the current byte without consuming it
pub(super) fn peek_byte(lexer: &Lexer) -> Option<u8> {
    lexer.input.get(lexer.pos).copied()
}

/// Skip whitespace and `#` comments
pub(super) fn skip_whitespace_and_comments(lexer: &mut Lexer) {
    while let Some(c) = peek_byte(lexer) {
        match c {
            b' ' | b'\t' | b'\n' | b'\r' => {
                bump(lexer);
            }
            b'#' => {
                while let Some(ch) = bump(lexer) {
                    if ch == b'\n' {
                        break;
                    }
                }
            }
            _ => break,
        }
    }
}

pub(super) fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

pub(super) fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}
