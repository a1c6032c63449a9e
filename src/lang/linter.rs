use super::{Error, COMMENT_PREFIX};

type Result<T> = std::result::Result<T, Error>;

/// Strips comments and all whitespace not required to separate two
/// alphabetic tokens, then deletes empty lines. Quote characters suspend
/// both rules until the literal closes. Running this twice produces the
/// same output as running it once.
pub fn preprocess(lines: &mut Vec<String>) {
    for line in lines.iter_mut() {
        let mut out = String::with_capacity(line.len());
        let mut quote: Option<char> = None;
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];
            match quote {
                Some(q) => {
                    out.push(ch);
                    if ch == q {
                        quote = None;
                    }
                }
                None => {
                    if ch == '"' || ch == '\'' {
                        quote = Some(ch);
                        out.push(ch);
                    } else if ch == COMMENT_PREFIX {
                        break;
                    } else if ch == '\t' {
                        // tabs never separate tokens
                    } else if ch == ' ' {
                        // a space survives only between two alphabetic chars
                        let left = out.chars().last().map_or(false, |c| c.is_ascii_alphabetic());
                        let right = chars
                            .get(i + 1)
                            .map_or(false, |c| c.is_ascii_alphabetic());
                        if left && right {
                            out.push(ch);
                        }
                    } else {
                        out.push(ch);
                    }
                }
            }
            i += 1;
        }
        *line = out;
    }
    lines.retain(|line| !line.is_empty());
}

/// Balance check over the raw source: every `{`/`}` and `[`/`]` pair must
/// match and every string literal must close on the line that opened it.
/// Runs before `preprocess` so reported line numbers refer to the file as
/// written.
pub fn lint(lines: &[String]) -> Result<()> {
    let mut opens: Vec<(char, usize)> = vec![];

    for (idx, line) in lines.iter().enumerate() {
        let line_number = idx + 1;
        let mut quote: Option<char> = None;
        for ch in line.chars() {
            match quote {
                Some(q) => {
                    if ch == q {
                        quote = None;
                    }
                }
                None => match ch {
                    '"' | '\'' => quote = Some(ch),
                    c if c == COMMENT_PREFIX => break,
                    '{' | '[' => opens.push((ch, line_number)),
                    '}' => match opens.pop() {
                        Some(('{', _)) => {}
                        _ => {
                            return Err(error!(Lint, line_number; "UNMATCHED '}'"));
                        }
                    },
                    ']' => match opens.pop() {
                        Some(('[', _)) => {}
                        _ => {
                            return Err(error!(Lint, line_number; "UNMATCHED ']'"));
                        }
                    },
                    _ => {}
                },
            }
        }
        if quote.is_some() {
            return Err(error!(Lint, line_number; "UNCLOSED STRING LITERAL"));
        }
    }

    if let Some((ch, line_number)) = opens.first() {
        return Err(error!(Lint, *line_number; format!("UNCLOSED '{}'", ch)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &str) -> Vec<String> {
        src.lines().map(|s| s.to_string()).collect()
    }

    #[test]
    fn preprocess_is_idempotent() {
        let mut one = lines(":VARS: {\n\tint score = 0 # points\n}\n\n");
        preprocess(&mut one);
        let mut two = one.clone();
        preprocess(&mut two);
        assert_eq!(one, two);
        assert_eq!(one, lines(":VARS:{\nint score=0\n}"));
    }

    #[test]
    fn preprocess_keeps_quoted_text() {
        let mut l = lines("s = \"a  # b\"");
        preprocess(&mut l);
        assert_eq!(l, lines("s=\"a  # b\""));
    }

    #[test]
    fn lint_reports_unclosed_brace_line() {
        let l = lines("if(x){\n  y=1");
        let err = lint(&l).unwrap_err();
        assert_eq!(err.line_number(), Some(1));
    }
}
