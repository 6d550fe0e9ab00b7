//! crates/debuglog/src/template.rs
//! Positional format templates for the `*_fmt` log calls.
//!
//! Templates use indexed placeholders rather than Rust's compile-time
//! `format!` syntax, because arguments are rendered to text first and the
//! template may be built at runtime:
//!
//! - `{0}` substitutes the first argument, `{1}` the second, and so on. An
//!   index may appear any number of times, and arguments need not all be used.
//! - `{0,8}` right-aligns the argument in an 8-character field; `{0,-8}`
//!   left-aligns it. Widths of a million or more are rejected.
//! - `{0:x2}` is accepted for compatibility, but the format specifier is
//!   ignored since the argument is already text.
//! - `{{` and `}}` produce literal braces.
//!
//! Anything else is a [`FormatError`]: an index with no argument, an
//! unterminated or unparsable placeholder, or a stray `}`.

use crate::error::FormatError;

/// Alignment widths at or above this are rejected.
const MAX_ALIGNMENT: u32 = 1_000_000;

/// Substitutes `args` into `template`.
///
/// ```
/// use debuglog::template::format_template;
///
/// let text = format_template("{0} and {1}", &["a", "b"]).unwrap();
/// assert_eq!(text, "a and b");
///
/// assert!(format_template("{0} and {1}", &["a"]).is_err());
/// ```
pub fn format_template<S: AsRef<str>>(template: &str, args: &[S]) -> Result<String, FormatError> {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                out.push_str(&template[literal_start..i]);
                if bytes.get(i + 1) == Some(&b'{') {
                    out.push('{');
                    i += 2;
                } else {
                    let close = find_close(bytes, i)?;
                    let placeholder = parse_placeholder(&template[i + 1..close], i)?;
                    let arg = args.get(placeholder.index).ok_or(FormatError::MissingArgument {
                        index: placeholder.index,
                        available: args.len(),
                        position: i,
                    })?;
                    push_aligned(&mut out, arg.as_ref(), placeholder.alignment);
                    i = close + 1;
                }
                literal_start = i;
            }
            b'}' => {
                out.push_str(&template[literal_start..i]);
                if bytes.get(i + 1) == Some(&b'}') {
                    out.push('}');
                    i += 2;
                    literal_start = i;
                } else {
                    return Err(FormatError::UnmatchedClose { position: i });
                }
            }
            _ => i += 1,
        }
    }

    out.push_str(&template[literal_start..]);
    Ok(out)
}

struct Placeholder {
    index: usize,
    alignment: i32,
}

fn find_close(bytes: &[u8], open: usize) -> Result<usize, FormatError> {
    for (offset, &byte) in bytes[open + 1..].iter().enumerate() {
        match byte {
            b'}' => return Ok(open + 1 + offset),
            b'{' => break,
            _ => {}
        }
    }
    Err(FormatError::Unterminated { position: open })
}

fn parse_placeholder(body: &str, position: usize) -> Result<Placeholder, FormatError> {
    let invalid = || FormatError::InvalidPlaceholder {
        body: body.to_owned(),
        position,
    };

    let head = body.split_once(':').map_or(body, |(head, _spec)| head);
    let (index, alignment) = match head.split_once(',') {
        Some((index, alignment)) => (index, Some(alignment)),
        None => (head, None),
    };

    let index = index
        .trim_end()
        .parse::<usize>()
        .map_err(|_| invalid())?;
    let alignment = match alignment {
        Some(text) => text.trim().parse::<i32>().map_err(|_| invalid())?,
        None => 0,
    };
    if alignment.unsigned_abs() >= MAX_ALIGNMENT {
        return Err(invalid());
    }

    Ok(Placeholder { index, alignment })
}

fn push_aligned(out: &mut String, text: &str, alignment: i32) {
    let width = alignment.unsigned_abs() as usize;
    let len = text.chars().count();
    let padding = width.saturating_sub(len);

    if alignment > 0 {
        out.extend(std::iter::repeat_n(' ', padding));
        out.push_str(text);
    } else {
        out.push_str(text);
        out.extend(std::iter::repeat_n(' ', padding));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_positional_arguments() {
        assert_eq!(format_template("{0} and {1}", &["a", "b"]).unwrap(), "a and b");
        assert_eq!(format_template("{1}-{0}-{1}", &["x", "y"]).unwrap(), "y-x-y");
    }

    #[test]
    fn template_without_placeholders_is_copied() {
        assert_eq!(format_template::<&str>("plain", &[]).unwrap(), "plain");
        assert_eq!(format_template::<&str>("", &[]).unwrap(), "");
    }

    #[test]
    fn unused_arguments_are_allowed() {
        assert_eq!(format_template("{0}", &["a", "b", "c"]).unwrap(), "a");
    }

    #[test]
    fn escaped_braces() {
        assert_eq!(format_template("{{{0}}}", &["v"]).unwrap(), "{v}");
        assert_eq!(format_template::<&str>("}}{{", &[]).unwrap(), "}{");
    }

    #[test]
    fn alignment_pads_to_width() {
        assert_eq!(format_template("[{0,5}]", &["ab"]).unwrap(), "[   ab]");
        assert_eq!(format_template("[{0,-5}]", &["ab"]).unwrap(), "[ab   ]");
        assert_eq!(format_template("[{0,1}]", &["abc"]).unwrap(), "[abc]");
    }

    #[test]
    fn format_specifier_is_ignored() {
        assert_eq!(format_template("{0:N2}", &["3.14159"]).unwrap(), "3.14159");
        assert_eq!(format_template("{0,6:x}", &["ff"]).unwrap(), "    ff");
    }

    #[test]
    fn non_ascii_text_survives() {
        assert_eq!(
            format_template("héllo {0} – {1}", &["wörld", "✓"]).unwrap(),
            "héllo wörld – ✓"
        );
    }

    #[test]
    fn missing_argument_is_a_fault() {
        let err = format_template("{0} and {1}", &["a"]).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingArgument {
                index: 1,
                available: 1,
                position: 8,
            }
        );
    }

    #[test]
    fn malformed_templates_are_faults() {
        assert_eq!(
            format_template("{0", &["a"]).unwrap_err(),
            FormatError::Unterminated { position: 0 }
        );
        assert_eq!(
            format_template("a } b", &["a"]).unwrap_err(),
            FormatError::UnmatchedClose { position: 2 }
        );
        assert!(matches!(
            format_template("{x}", &["a"]).unwrap_err(),
            FormatError::InvalidPlaceholder { .. }
        ));
        assert!(matches!(
            format_template("{}", &["a"]).unwrap_err(),
            FormatError::InvalidPlaceholder { .. }
        ));
        assert!(matches!(
            format_template("{0,wide}", &["a"]).unwrap_err(),
            FormatError::InvalidPlaceholder { .. }
        ));
        assert_eq!(
            format_template("{0{1}", &["a", "b"]).unwrap_err(),
            FormatError::Unterminated { position: 0 }
        );
        assert!(matches!(
            format_template("{0,2147483647}", &["x"]).unwrap_err(),
            FormatError::InvalidPlaceholder { position: 0, .. }
        ));
        assert!(matches!(
            format_template("{0,-1000000}", &["x"]).unwrap_err(),
            FormatError::InvalidPlaceholder { .. }
        ));
        assert_eq!(format_template("{0,999999}", &["x"]).unwrap().len(), 999_999);
    }
}
