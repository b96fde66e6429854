use tracing::trace;

use super::*;
use crate::ast::Section;

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document> {
    let mut doc = Document::new();

    while !parser.at(TokenKind::Eof) {
        match (parser.cur().kind, parser.peek().kind) {
            (TokenKind::Ident, TokenKind::Assign) => {
                let (key, value) = parse_assignment(parser)?;
                doc.insert(key, value);
            }
            (TokenKind::Ident, TokenKind::LBrace) => {
                let name = parser.bump()?.literal;
                let section = parse_section_body(parser, &name)?;
                trace!(section = %name, fields = section.len(), "parsed section");
                doc.insert(name, Value::Section(section));
            }
            (TokenKind::LBracket, TokenKind::Ident) => {
                parser.bump()?; // consume [
                let name = parser.bump()?.literal;
                parser.expect(TokenKind::RBracket, "after array section name")?;
                let section = parse_section_body(parser, &name)?;
                trace!(section = %name, fields = section.len(), "parsed array section");
                doc.append_section(name, section);
            }
            _ => {
                // Top level tolerates stray tokens; only section bodies are strict.
                parser.bump()?;
            }
        }
    }

    Ok(doc)
}

/// `IDENT '=' Value`, with the current token on the identifier.
fn parse_assignment(parser: &mut Parser) -> Result<(String, Value)> {
    let key = parser.bump()?.literal;
    parser.expect(TokenKind::Assign, "after key")?;
    let value = value::parse_value(parser)?;
    Ok((key, value))
}

/// `'{' Assignment* '}'`, with the current token on the opening brace.
fn parse_section_body(parser: &mut Parser, name: &str) -> Result<Section> {
    parser.expect(TokenKind::LBrace, &format!("to open section '{}'", name))?;
    let mut section = Section::new();

    loop {
        match (parser.cur().kind, parser.peek().kind) {
            (TokenKind::RBrace, _) => {
                parser.bump()?;
                return Ok(section);
            }
            (TokenKind::Ident, TokenKind::Assign) => {
                let (key, value) = parse_assignment(parser)?;
                section.insert(key, value);
            }
            (TokenKind::Eof, _) => {
                return Err(GcfgError::syntax(
                    format!("Unexpected end of input in section '{}'", name),
                    Some("Close the section with '}'"),
                    203,
                ));
            }
            (kind, _) => {
                return Err(GcfgError::syntax(
                    format!(
                        "Something other than assignments found in section '{}': {}",
                        name, kind
                    ),
                    Some("Sections may only contain `key = value` lines"),
                    204,
                ));
            }
        }
    }
}
