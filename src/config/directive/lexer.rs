use super::SyntaxError;

/// Splits one configuration line into tokens
///
/// Tokens are separated by whitespace. Double quotes group text and may start
/// in the middle of a token, so `topbar="a b"` yields the single token
/// `topbar=a b`. Inside quotes `\"` and `\\` are unescaped; any other
/// backslash is kept as is.
///
/// # Examples
/// ```rust
/// use pms::config::directive::tokenize;
///
/// let tokens = tokenize(r#"set sort="track, disc""#).unwrap();
/// assert_eq!(tokens, vec!["set", "sort=track, disc"]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<String>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote_start: Option<usize> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if quote_start.is_some() {
            match ch {
                '"' => quote_start = None,
                '\\' => match chars.peek().map(|(_, c)| *c) {
                    Some(next @ ('"' | '\\')) => {
                        chars.next();
                        current.push(next);
                    }
                    _ => current.push('\\'),
                },
                _ => current.push(ch),
            }
            continue;
        }

        match ch {
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            '"' => {
                quote_start = Some(pos);
                in_token = true;
            }
            _ => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if let Some(pos) = quote_start {
        return Err(SyntaxError::UnterminatedQuote { column: pos + 1 });
    }

    if in_token {
        tokens.push(current);
    }

    Ok(tokens)
}
