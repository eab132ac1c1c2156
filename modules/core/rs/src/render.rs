//! Minimal textual rendering shared by every container-like type.
//!
//! The default form is bracketed, `[e1, e2, ..., en]`, and an empty container renders as `[]`.
//! The joined forms carry no brackets, so an empty container joins to an empty string.

use std::fmt::{self, Display, Write};

use itertools::Itertools;

pub const DEFAULT_SEPARATOR: &str = ", ";
pub const OPEN: &str = "[";
pub const CLOSE: &str = "]";

/// Writes `start`, the items joined by `separator`, and `end` into `out`.
pub fn append_string<W, I>(
    out: &mut W,
    items: I,
    start: &str,
    separator: &str,
    end: &str,
) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    write!(out, "{start}{}{end}", items.into_iter().format(separator))
}

/// Renders the items joined by `separator` and wrapped into `start`/`end`.
pub fn make_string<I>(items: I, start: &str, separator: &str, end: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!("{start}{}{end}", items.into_iter().format(separator))
}

/// Renders the items in the default bracketed form.
pub fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    make_string(items, OPEN, DEFAULT_SEPARATOR, CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_string() {
        for (items, start, separator, end, expected) in [
            (vec![], "", ", ", "", ""),
            (vec![], "[", ", ", "]", "[]"),
            (vec![1], "", "/", "", "1"),
            (vec![1, 2, 3], "", "/", "", "1/2/3"),
            (vec![1, 2, 3], "<", "|", ">", "<1|2|3>"),
        ] {
            assert_eq!(make_string(items, start, separator, end), expected);
        }
    }

    #[test]
    fn test_bracketed() {
        assert_eq!(bracketed([true, false, false]), "[true, false, false]");
        assert_eq!(bracketed(Vec::<u8>::new()), "[]");
    }

    #[test]
    fn test_append_string() -> fmt::Result {
        let mut out = String::from(">");
        append_string(&mut out, ['a', 'b'], "", DEFAULT_SEPARATOR, "")?;
        assert_eq!(out, ">a, b");
        Ok(())
    }
}
