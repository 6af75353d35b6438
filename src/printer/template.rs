//! Runtime positional templates for [`Printer::printf`](crate::Printer::printf).
//!
//! The syntax is a subset of `std::fmt`:
//!
//! | Template | Output |
//! |----------|--------|
//! | `{}` | Next value in order |
//! | `{N}` | Value at position `N` |
//! | `{{`, `}}` | A literal brace |
//!
//! Rendering never fails. A placeholder without a value renders as
//! [`MISSING`], anything else inside braces (including `std::fmt` format
//! specs such as `{:>5}`) is copied through as written, and surplus values
//! are ignored. A `{` inside an unclosed placeholder starts a new one.

use std::fmt::Display;

/// Rendered in place of a placeholder that has no value.
pub const MISSING: &str = "{!missing}";

/// Substitutes `values` into `template`.
pub fn render(template: &str, values: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next = 0;

    while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
        out.push_str(&rest[..pos]);
        let brace = &rest[pos..pos + 1];
        let after = &rest[pos + 1..];

        if after.starts_with(brace) {
            out.push_str(brace);
            rest = &after[1..];
            continue;
        }

        if brace == "}" {
            out.push('}');
            rest = after;
            continue;
        }

        let Some(end) = after.find('}') else {
            out.push_str(&rest[pos..]);
            return out;
        };
        let spec = &after[..end];

        if let Some(inner) = spec.find('{') {
            out.push('{');
            out.push_str(&spec[..inner]);
            rest = &after[inner..];
            continue;
        }

        let index = if spec.is_empty() {
            next += 1;
            Some(next - 1)
        } else if spec.bytes().all(|b| b.is_ascii_digit()) {
            spec.parse::<usize>().ok()
        } else {
            None
        };

        match index {
            Some(i) => match values.get(i) {
                Some(value) => out.push_str(&value.to_string()),
                None => out.push_str(MISSING),
            },
            None => {
                out.push('{');
                out.push_str(spec);
                out.push('}');
            }
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}
