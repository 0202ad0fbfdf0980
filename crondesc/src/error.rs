use std::fmt;

/// Byte range within the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// All errors produced by crondesc.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum DescriptionError {
    /// The expression was empty or contained only whitespace.
    #[error("{field} must not be empty")]
    MissingField { field: String },

    /// Wrong arity, illegal field syntax, out-of-range values, or a
    /// composition failure while rendering the description.
    #[error("{message}")]
    Format {
        message: String,
        span: Option<Span>,
        input: String,
        #[source]
        cause: Option<Box<DescriptionError>>,
    },

    /// Unknown option name, or a value that does not fit the option.
    #[error("{message}")]
    WrongArgument { name: String, message: String },

    /// A locale catalog exists but could not be read or decoded.
    #[error("failed to load locale catalog {path}: {message}")]
    Locale { path: String, message: String },
}

impl DescriptionError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// A format error with no location information.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
            span: None,
            input: String::new(),
            cause: None,
        }
    }

    /// A format error pointing at a span of the raw expression.
    pub fn format_at(message: impl Into<String>, span: Span, input: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
            span: Some(span),
            input: input.into(),
            cause: None,
        }
    }

    /// Replace `self` with a generic message, keeping `self` as the cause.
    pub fn wrapped(self, message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
            span: None,
            input: String::new(),
            cause: Some(Box::new(self)),
        }
    }

    pub fn wrong_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::WrongArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn locale(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Locale {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Attach a location to a format error that does not have one yet.
    pub(crate) fn with_span(self, span: Span, source_input: &str) -> Self {
        match self {
            Self::Format {
                message,
                span: None,
                cause,
                ..
            } => Self::Format {
                message,
                span: Some(span),
                input: source_input.to_string(),
                cause,
            },
            other => other,
        }
    }

    /// Format a rich error with an underline beneath the offending field.
    pub fn display_rich(&self) -> String {
        match self {
            Self::Format {
                message,
                span: Some(span),
                input,
                ..
            } => format_span_error("error", message, span, input),
            Self::Format {
                message,
                cause: Some(cause),
                ..
            } => format!("error: {message}\n  caused by: {cause}"),
            other => format!("error: {other}"),
        }
    }
}

fn format_span_error(prefix: &str, message: &str, span: &Span, input: &str) -> String {
    let mut out = format!("{prefix}: {message}\n");
    out.push_str(&format!("  {input}\n"));
    let column = input
        .get(..span.start)
        .map_or(span.start, |s| s.chars().count());
    let padding = " ".repeat(column + 2);
    let width = input
        .get(span.start..span.end)
        .map_or(1, |s| s.chars().count().max(1));
    out.push_str(&padding);
    out.push_str(&"^".repeat(width));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rich_underlines_field() {
        let err = DescriptionError::format_at("bad minute", Span::new(2, 3), "* $ * * *");
        assert_eq!(err.display_rich(), "error: bad minute\n  * $ * * *\n    ^");
    }

    #[test]
    fn test_display_rich_without_span() {
        let err = DescriptionError::format("too few parts");
        assert_eq!(err.display_rich(), "error: too few parts");
    }

    #[test]
    fn test_wrapped_keeps_cause() {
        let err = DescriptionError::format("invalid number 'x'").wrapped("generic");
        assert_eq!(err.to_string(), "generic");
        let rich = err.display_rich();
        assert!(rich.contains("caused by: invalid number 'x'"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_with_span_only_fills_missing() {
        let err = DescriptionError::format("x").with_span(Span::new(0, 1), "abc");
        match err {
            DescriptionError::Format { span, input, .. } => {
                assert_eq!(span, Some(Span::new(0, 1)));
                assert_eq!(input, "abc");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_message() {
        let err = DescriptionError::missing("expression");
        assert_eq!(err.to_string(), "expression must not be empty");
    }
}
