//! crondesc: cron expressions as plain-language sentences.
//!
//! An expression goes through three stages: it is split into seven
//! fields and normalized, optionally checked against per-field grammars,
//! and then rendered as a sentence.
//!
//! # Examples
//!
//! ```
//! let description = crondesc::describe("*/5 15 * * MON-FRI").unwrap();
//! assert_eq!(
//!     description,
//!     "Every 5 minutes, between 03:00 PM and 03:59 PM, Monday through Friday"
//! );
//! ```
//!
//! ```
//! use crondesc::{get_description, CasingType, Options};
//!
//! let options = Options::default()
//!     .with_24_hour_time(true)
//!     .with_casing(CasingType::Lower);
//! assert_eq!(get_description("30 17 * * *", &options).unwrap(), "at 17:30");
//! ```

pub mod ast;
pub mod describe;
pub mod error;
pub mod lexer;
pub mod locale;
pub mod names;
pub mod options;
pub mod parser;
mod segment;
mod strategies;
pub mod validator;

pub use ast::{CronExpression, Field, NormalizedExpression};
pub use describe::{apply_casing, DescriptionType, ExpressionDescriptor, GENERIC_ERROR};
pub use error::{DescriptionError, Span};
pub use locale::{Catalog, Locale};
pub use options::{CasingType, Options};

use std::str::FromStr;

// --- CronExpression convenience methods ---

impl CronExpression {
    /// Split a cron expression into its seven fields.
    pub fn parse(input: &str) -> Result<Self, DescriptionError> {
        parser::parse(input)
    }

    /// Canonical form of this expression under `options`.
    pub fn normalize(&self, options: &Options) -> NormalizedExpression {
        parser::normalize(self, options)
    }

    /// Check every supplied field against its grammar.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        validator::validate(self)
    }
}

impl FromStr for CronExpression {
    type Err = DescriptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Validate `expression` and describe it in full.
///
/// With `throw_exception_on_parse_error` off, any failure (including
/// parse and validation errors) comes back as `Ok` with the error's
/// message as the description.
pub fn get_description(expression: &str, options: &Options) -> Result<String, DescriptionError> {
    let result = ExpressionDescriptor::new(expression, options.clone()).and_then(|descriptor| {
        descriptor.validate()?;
        descriptor.full_description()
    });
    match result {
        Err(e) if !options.throw_exception_on_parse_error => Ok(e.to_string()),
        other => other,
    }
}

/// [`get_description`] with default options.
pub fn describe(expression: &str) -> Result<String, DescriptionError> {
    get_description(expression, &Options::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_defaults() {
        assert_eq!(describe("* * * * *").unwrap(), "Every minute");
        assert_eq!(describe("46 9 * * 1").unwrap(), "At 09:46 AM, only on Monday");
    }

    #[test]
    fn test_describe_rejects_invalid_field() {
        let err = describe("* $ * * *").unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("Illegal Expression Format"));
    }

    #[test]
    fn test_errors_as_description() {
        let options = Options::default().with_throw_on_error(false);
        let text = get_description("INVALID", &options).unwrap();
        assert!(text.contains("too few parts"));
        let text = get_description("", &options).unwrap();
        assert_eq!(text, "expression must not be empty");
    }

    #[test]
    fn test_from_str() {
        let expr: CronExpression = "0 12 * * ?".parse().unwrap();
        assert_eq!(&expr[Field::Hour], "12");
        assert!(expr.validate().is_ok());
        assert_eq!(&expr.normalize(&Options::default())[Field::DayOfWeek], "*");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_normalized_serializes_by_field_name() {
        let expr = CronExpression::parse("*/5 * * JAN *").unwrap();
        let json = serde_json::to_value(expr.normalize(&Options::default())).unwrap();
        assert_eq!(json["minute"], "*/5");
        assert_eq!(json["month"], "1");
        assert_eq!(json["second"], "");
        assert_eq!(json["day_of_week"], "*");
    }
}
