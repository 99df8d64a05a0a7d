//! Positional `{n}` substitution with apostrophe quoting.

/// Substitutes `args` into `pattern`.
///
/// - `{n}` is replaced by `args[n]`; a format type after a comma (`{0,number}`)
///   is ignored and the argument inserted as is. Out-of-range or malformed
///   placeholders are copied through unchanged.
/// - `''` produces a single apostrophe.
/// - Text between single apostrophes is copied literally, braces included.
pub fn format_message(pattern: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.char_indices().peekable();
    let mut quoted = false;
    while let Some((i, c)) = chars.next() {
        match c {
            '\'' => {
                if chars.peek().is_some_and(|&(_, next)| next == '\'') {
                    chars.next();
                    out.push('\'');
                } else {
                    quoted = !quoted;
                }
            }
            _ if quoted => out.push(c),
            '{' => match placeholder_end(pattern, i) {
                Some(end) => {
                    let body = &pattern[i + 1..end];
                    match placeholder_arg(body, args) {
                        Some(arg) => out.push_str(arg),
                        None => out.push_str(&pattern[i..=end]),
                    }
                    while chars.peek().is_some_and(|&(j, _)| j <= end) {
                        chars.next();
                    }
                }
                None => {
                    out.push_str(&pattern[i..]);
                    break;
                }
            },
            _ => out.push(c),
        }
    }
    out
}

/// Finds the `}` closing the placeholder opened at byte `open`, honoring nesting.
fn placeholder_end(pattern: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in pattern[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

fn placeholder_arg<'a>(body: &str, args: &'a [String]) -> Option<&'a str> {
    let index = body.split(',').next()?.trim().parse::<usize>().ok()?;
    args.get(index).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn positional_substitution() {
        assert_eq!(
            format_message("{1} {0} is already defined", &args(&["x", "variable"])),
            "variable x is already defined"
        );
    }

    #[test]
    fn repeated_and_typed_placeholders() {
        assert_eq!(format_message("{0}/{0,number}", &args(&["7"])), "7/7");
    }

    #[test]
    fn missing_arguments_stay_literal() {
        assert_eq!(format_message("a={0} b={1}", &args(&["1"])), "a=1 b={1}");
        assert_eq!(format_message("{x}", &[]), "{x}");
    }

    #[test]
    fn apostrophes() {
        assert_eq!(format_message("can''t find {0}", &args(&["x"])), "can't find x");
        assert_eq!(format_message("'{0}' is {0}", &args(&["x"])), "{0} is x");
    }

    #[test]
    fn unterminated_brace_copied() {
        assert_eq!(format_message("oops {0", &args(&["x"])), "oops {0");
    }

    #[test]
    fn multibyte_text_survives() {
        assert_eq!(
            format_message("シンボル{0}が見つかりません", &args(&["foo"])),
            "シンボルfooが見つかりません"
        );
    }
}
