//! crates/blackbox/src/format.rs
//! Deterministic text assembly for a single console block.

use crate::priority::Priority;

/// Location of the call expression that issued a log statement.
///
/// The triple lives only for the duration of one emit call; nothing is
/// persisted. Captured automatically by the [`blackbox!`](crate::blackbox)
/// macro, or supplied explicitly when calling [`emit`](crate::emit)
/// directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallSite<'a> {
    /// Source-file path, as produced by `file!()`.
    pub file: &'a str,
    /// Enclosing function or member name.
    pub function: &'a str,
    /// Line number of the call expression.
    pub line: u32,
}

/// Extracts the extension-free file name from a call-site path.
///
/// Splits on `/` and keeps the last segment, then splits on `.` and keeps
/// the first, so `"/a/b/Foo.swift"` and `"Foo.bar.swift"` both become
/// `"Foo"`. Malformed or empty paths degrade to an empty stem rather than
/// failing.
#[must_use]
pub fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    if name.is_empty() {
        return "";
    }
    name.split('.').next().unwrap_or(name)
}

/// Builds the multi-line block for one log call.
///
/// The block is a leading blank line, the `[PRIORITY]` header, the
/// `stem.function:line` location, and one line per message part, each
/// newline-terminated. An empty `parts` slice yields a block with zero
/// message lines. Pure and referentially transparent: identical inputs
/// always produce an identical string.
#[must_use]
pub fn render<S>(priority: Priority, site: CallSite<'_>, parts: &[S]) -> String
where
    S: AsRef<str>,
{
    let mut block = String::from("\n[");
    block.push_str(priority.display_name());
    block.push_str("]\n");
    block.push_str(file_stem(site.file));
    block.push('.');
    block.push_str(site.function);
    block.push(':');
    block.push_str(&site.line.to_string());
    block.push('\n');
    for part in parts {
        block.push_str(part.as_ref());
        block.push('\n');
    }
    block
}
