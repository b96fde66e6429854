use super::*;

pub(super) fn parse_value(parser: &mut Parser) -> Result<Value> {
    if parser.cur().kind.is_scalar() {
        return parse_scalar(parser);
    }

    match parser.cur().kind {
        TokenKind::LParen => parse_pair(parser),
        TokenKind::LBracket => parse_array(parser),
        kind => Err(GcfgError::syntax(
            format!("Invalid value: {}", kind),
            Some("Values are numbers, strings, true/false/null, (a, b) pairs or [..] arrays"),
            205,
        )),
    }
}

fn parse_scalar(parser: &mut Parser) -> Result<Value> {
    let tok = parser.bump()?;
    let value = match tok.kind {
        TokenKind::Int => Value::Integer(tok.literal),
        TokenKind::Float => {
            let n = tok.literal.parse::<f64>().map_err(|_| GcfgError::MalformedNumber {
                literal: tok.literal.clone(),
                message: "not a valid float".into(),
                hint: None,
                code: Some(106),
            })?;
            if !n.is_finite() {
                return Err(GcfgError::MalformedNumber {
                    literal: tok.literal,
                    message: "float out of range".into(),
                    hint: Some("Floats must fit in 64 bits".into()),
                    code: Some(107),
                });
            }
            Value::Float(n)
        }
        TokenKind::String => Value::Str(tok.literal),
        TokenKind::True => Value::Bool(true),
        TokenKind::False => Value::Bool(false),
        TokenKind::Null => Value::Null,
        kind => {
            return Err(GcfgError::syntax(
                format!("Expected a scalar value, got {}", kind),
                None,
                206,
            ));
        }
    };
    Ok(value)
}

fn expect_scalar(parser: &mut Parser, context: &str) -> Result<Value> {
    if !parser.cur().kind.is_scalar() {
        return Err(GcfgError::syntax(
            format!("Expected a scalar value {}, got {}", context, parser.cur().kind),
            None,
            206,
        ));
    }
    parse_scalar(parser)
}

/// `'(' Scalar ',' Scalar ')'`
fn parse_pair(parser: &mut Parser) -> Result<Value> {
    parser.bump()?; // consume (
    let first = expect_scalar(parser, "in pair")?;
    parser.expect(TokenKind::Comma, "after first value in pair")?;
    let second = expect_scalar(parser, "in pair")?;
    parser.expect(TokenKind::RParen, "after second value in pair")?;
    Ok(Value::Pair(Box::new(first), Box::new(second)))
}

/// `'[' ']' | '[' Scalar (',' Scalar)* ']'`
fn parse_array(parser: &mut Parser) -> Result<Value> {
    parser.bump()?; // consume [
    let mut arr = Vec::new();

    if parser.at(TokenKind::RBracket) {
        parser.bump()?;
        return Ok(Value::Array(arr));
    }

    let first = parser.cur().kind;
    arr.push(expect_scalar(parser, "in array")?);

    loop {
        match parser.cur().kind {
            TokenKind::RBracket => {
                parser.bump()?;
                return Ok(Value::Array(arr));
            }
            TokenKind::Comma => {
                parser.bump()?;
                let kind = parser.cur().kind;
                if kind.is_scalar() && kind != first {
                    return Err(GcfgError::MixedArray {
                        expected: first.to_string(),
                        found: kind.to_string(),
                        hint: Some("Every element must have the type of the first one".into()),
                        code: Some(207),
                    });
                }
                arr.push(expect_scalar(parser, "after ',' in array")?);
            }
            kind => {
                return Err(GcfgError::syntax(
                    format!("Expected ',' or ']' in array, got {}", kind),
                    None,
                    208,
                ));
            }
        }
    }
}
