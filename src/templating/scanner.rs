//! Reference extraction for `${NAME}` interpolation tokens.
//!
//! The scanner walks a template once, left to right, and reports the byte
//! offsets of every complete `${...}` token it finds. It never rewrites the
//! template and never looks at a byte twice.
//!
//! # Token Rules
//!
//! - `${` opens a reference, the first following `}` closes it
//! - any byte other than `}` is accepted as part of the name, including `$` and `{`
//! - `\${` is an escaped opener and is skipped without starting a reference
//! - `$NAME` (without braces) is plain text
//! - an opener with no closing `}` before end of input produces nothing
//!
//! # Examples
//!
//! ```rust
//! use envexpand::templating::scan;
//!
//! let template = "postgres://${USER}@${HOST}";
//! let names: Vec<&str> = scan(template).iter().map(|span| span.name(template)).collect();
//! assert_eq!(names, ["USER", "HOST"]);
//! ```

use std::ops::Range;

const DOLLAR: u8 = b'$';
const OPEN_BRACE: u8 = b'{';
const CLOSE_BRACE: u8 = b'}';
const BACKSLASH: u8 = b'\\';

/// Location of one `${NAME}` token inside a specific template.
///
/// All offsets are byte offsets into the template the span was scanned from.
/// A span is meaningless against any other string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceSpan {
    /// Offset of the `$` that opens the token.
    pub outer_begin: usize,
    /// Offset one past the closing `}`.
    pub outer_end: usize,
    /// Offset of the first name byte (just past `{`).
    pub name_begin: usize,
    /// Offset of the closing `}`.
    pub name_end: usize,
}

impl ReferenceSpan {
    /// The full token range, delimiters included.
    #[must_use]
    pub const fn outer_range(&self) -> Range<usize> {
        self.outer_begin..self.outer_end
    }

    /// The range of the referenced name.
    #[must_use]
    pub const fn name_range(&self) -> Range<usize> {
        self.name_begin..self.name_end
    }

    /// The referenced name as it appears in `template`.
    ///
    /// The delimiters are ASCII, so both ends always fall on character
    /// boundaries of the template the span came from.
    #[must_use]
    pub fn name<'t>(&self, template: &'t str) -> &'t str {
        &template[self.name_range()]
    }

    /// The raw token text, e.g. `${HOST}`.
    #[must_use]
    pub fn token<'t>(&self, template: &'t str) -> &'t str {
        &template[self.outer_range()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    /// Inside a name; holds the offset of the opening `$`.
    InName(usize),
}

/// Extract every reference span from `template`, in ascending order.
///
/// Runs in a single pass over the bytes of the template. Malformed syntax is
/// never an error: an unterminated `${` or a stray `}` is simply not reported.
#[must_use]
pub fn scan(template: &str) -> Vec<ReferenceSpan> {
    let bytes = template.as_bytes();
    let mut spans = Vec::new();
    let mut state = ScanState::Outside;
    let mut pos = 0;

    while pos < bytes.len() {
        match state {
            ScanState::Outside => {
                if bytes[pos] == DOLLAR && bytes.get(pos + 1) == Some(&OPEN_BRACE) {
                    if pos > 0 && bytes[pos - 1] == BACKSLASH {
                        // Escaped opener: step over `${` and keep it as text.
                        pos += 2;
                        continue;
                    }
                    state = ScanState::InName(pos);
                    pos += 2;
                    continue;
                }
            }
            ScanState::InName(outer_begin) => {
                if bytes[pos] == CLOSE_BRACE {
                    spans.push(ReferenceSpan {
                        outer_begin,
                        outer_end: pos + 1,
                        name_begin: outer_begin + 2,
                        name_end: pos,
                    });
                    state = ScanState::Outside;
                }
            }
        }
        pos += 1;
    }

    spans
}
