//! Positional format templates
//!
//! A template is literal text with `{0}` placeholders standing for the logged
//! message:
//! - `{0}` inserts the message
//! - `{0,N}` right-aligns it in a field of `N` characters, `{0,-N}` left-aligns
//! - `{0:fmt}` accepts a format string, which strings ignore
//! - `{{` and `}}` are literal braces
//!
//! Templates are parsed once, so a malformed one is caught when a logger is
//! built rather than on every call.

use std::fmt;

/// Error produced while parsing a template
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unterminated placeholder starting at byte {position}")]
    Unterminated { position: usize },

    #[error("unmatched '}}' at byte {position}")]
    UnmatchedClose { position: usize },

    #[error("placeholder index '{index}' at byte {position} is out of range (only {{0}} is available)")]
    IndexOutOfRange { index: String, position: usize },

    #[error("invalid alignment '{alignment}' at byte {position}")]
    InvalidAlignment { alignment: String, position: usize },
}

/// Field widths at or above this are rejected
pub const MAX_ALIGNMENT: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Message { alignment: i64 },
}

/// Parsed template; rendering cannot fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FormatTemplate {
    /// The template that inserts the message verbatim
    pub const IDENTITY: &'static str = "{0}";

    /// Parse `source`, rejecting anything but `{0}` placeholders
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(TemplateError::UnmatchedClose { position }),
                '{' => {
                    let mut body = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        body.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::Unterminated { position });
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Self::parse_placeholder(&body, position)?);
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Template equivalent to `{0}`
    pub fn identity() -> Self {
        Self {
            source: Self::IDENTITY.to_string(),
            segments: vec![Segment::Message { alignment: 0 }],
        }
    }

    fn parse_placeholder(body: &str, position: usize) -> Result<Segment, TemplateError> {
        // Format strings after ':' do not apply to string arguments
        let body = body.split_once(':').map_or(body, |(head, _)| head);
        let (index, alignment) = match body.split_once(',') {
            Some((index, alignment)) => (index, Some(alignment)),
            None => (body, None),
        };

        // Whitespace may follow the index but not precede it
        let digits = index.trim_end();
        if digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || digits.bytes().any(|b| b != b'0')
        {
            return Err(TemplateError::IndexOutOfRange {
                index: index.to_string(),
                position,
            });
        }

        let alignment = match alignment {
            Some(raw) => Self::parse_alignment(raw).ok_or_else(|| {
                TemplateError::InvalidAlignment {
                    alignment: raw.to_string(),
                    position,
                }
            })?,
            None => 0,
        };

        Ok(Segment::Message { alignment })
    }

    /// `[ws][-]digits[ws]`, with a magnitude below [`MAX_ALIGNMENT`]
    fn parse_alignment(raw: &str) -> Option<i64> {
        let trimmed = raw.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let width = digits.parse::<u64>().ok().filter(|w| *w < MAX_ALIGNMENT)?;
        let width = width as i64;
        Some(if negative { -width } else { width })
    }

    /// Template text as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether rendering returns the message unchanged
    pub fn is_identity(&self) -> bool {
        self.segments == [Segment::Message { alignment: 0 }]
    }

    /// Number of places the message is inserted
    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Message { .. }))
            .count()
    }

    /// Substitute `message` into every placeholder
    pub fn render(&self, message: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + message.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Message { alignment } => {
                    let width = alignment.unsigned_abs() as usize;
                    let pad = width.saturating_sub(message.chars().count());
                    if *alignment > 0 {
                        out.extend(std::iter::repeat(' ').take(pad));
                        out.push_str(message);
                    } else {
                        out.push_str(message);
                        out.extend(std::iter::repeat(' ').take(pad));
                    }
                }
            }
        }
        out
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for FormatTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
