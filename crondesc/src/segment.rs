// The shared segment-description algorithm.
//
// Every field is described the same way: wildcard, single value, step,
// list or range. What differs per field is vocabulary, which each
// `SegmentStrategy` implementation supplies.

use crate::ast::{Field, NormalizedExpression};
use crate::error::DescriptionError;
use crate::locale::{fill, Locale};
use crate::options::Options;

/// Everything a description run reads: the expression, options and the
/// translation context.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context<'a> {
    pub(crate) expr: &'a NormalizedExpression,
    pub(crate) options: &'a Options,
    pub(crate) locale: &'a Locale,
}

impl<'a> Context<'a> {
    pub(crate) fn t(&self, id: &'a str) -> &'a str {
        self.locale.translate(id)
    }

    pub(crate) fn field(&self, field: Field) -> &'a str {
        self.expr.get(field)
    }

    /// `HH:MM[:SS][ AM|PM]`. `second` may be empty.
    pub(crate) fn format_time(
        &self,
        hour: &str,
        minute: &str,
        second: &str,
    ) -> Result<String, DescriptionError> {
        let mut hour = parse_number(hour)?;
        let minute = parse_number(minute)?;

        let mut period = String::new();
        if !self.options.use_24hour_time_format {
            let id = if hour >= 12 { "PM" } else { "AM" };
            period = format!(" {}", self.t(id));
            if hour > 12 {
                hour -= 12;
            }
            if hour == 0 {
                hour = 12;
            }
        }

        let second = if second.is_empty() {
            String::new()
        } else {
            format!(":{:02}", parse_number(second)?)
        };

        Ok(format!("{hour:02}:{minute:02}{second}{period}"))
    }
}

pub(crate) fn parse_number(s: &str) -> Result<u32, DescriptionError> {
    s.parse()
        .map_err(|_| DescriptionError::format(format!("invalid number '{s}'")))
}

/// Field-specific vocabulary for [`describe_segment`].
///
/// Formats are templates with `{0}`/`{1}` placeholders, already translated.
pub(crate) trait SegmentStrategy {
    /// Phrase for `*`.
    fn all_description(&self) -> String;

    /// Phrase for one concrete token, such as `5`, `MON` or `3#2`.
    fn single_item(&self, token: &str) -> Result<String, DescriptionError>;

    /// Template for `*/step`; `{0}` is the step.
    fn interval_format(&self, step: &str) -> String;

    /// Template for `a-b`; `{0}` and `{1}` are the endpoints.
    fn between_format(&self, expr: &str) -> String;

    /// Template wrapping a single value or a list; `{0}` is the content.
    fn description_format(&self, expr: &str) -> String;

    /// Template for a range inside a list.
    fn range_format(&self, expr: &str) -> String;

    /// Field-specific shapes handled before the generic algorithm.
    fn recognize(&self, _expr: &str) -> Option<Result<String, DescriptionError>> {
        None
    }
}

/// Describe one normalized field.
pub(crate) fn describe_segment(
    expr: &str,
    strategy: &impl SegmentStrategy,
    ctx: Context<'_>,
) -> Result<String, DescriptionError> {
    if let Some(result) = strategy.recognize(expr) {
        return result;
    }

    let description = if expr.is_empty() {
        String::new()
    } else if expr == "*" {
        strategy.all_description()
    } else if !expr.contains(['/', '-', ',']) {
        let item = strategy.single_item(expr)?;
        fill(&strategy.description_format(expr), &[&item])
    } else if let Some((base, step)) = expr.split_once('/') {
        let mut description = fill(&strategy.interval_format(step), &[step]);
        if base.contains('-') {
            let between = between_phrase(base, &strategy.between_format(base), strategy)?;
            if !between.starts_with(", ") {
                description.push_str(", ");
            }
            description.push_str(&between);
        } else if !base.contains(['*', ',']) {
            let item = strategy.single_item(base)?;
            let start = fill(&strategy.description_format(base), &[&item]);
            description.push_str(&fill(
                ctx.t(", starting {0}"),
                &[start.trim_start_matches(", ")],
            ));
        }
        description
    } else if expr.contains(',') {
        let content = list_content(expr, strategy, ctx)?;
        fill(&strategy.description_format(expr), &[&content])
    } else {
        between_phrase(expr, &strategy.between_format(expr), strategy)?
    };

    tracing::trace!(expr, %description, "described segment");
    Ok(description)
}

/// "A, B, and C", or "A and B" for two items.
fn list_content(
    expr: &str,
    strategy: &impl SegmentStrategy,
    ctx: Context<'_>,
) -> Result<String, DescriptionError> {
    let segments: Vec<&str> = expr.split(',').collect();
    let count = segments.len();
    let mut content = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 && count > 2 {
            content.push(',');
            if i < count - 1 {
                content.push(' ');
            }
        }
        if i > 0 && (i == count - 1 || count == 2) {
            content.push_str(ctx.t(" and "));
        }
        if segment.contains('-') {
            let range = between_phrase(segment, &strategy.range_format(segment), strategy)?;
            content.push_str(&range.replace(", ", ""));
        } else {
            content.push_str(&strategy.single_item(segment)?);
        }
    }
    Ok(content)
}

/// Fill `template` with both endpoints of `a-b`. The end of an hour range
/// covers that whole hour.
pub(crate) fn between_phrase(
    expr: &str,
    template: &str,
    strategy: &impl SegmentStrategy,
) -> Result<String, DescriptionError> {
    let (start, end) = expr
        .split_once('-')
        .ok_or_else(|| DescriptionError::format(format!("'{expr}' is not a range")))?;
    let first = strategy.single_item(start)?;
    let last = strategy.single_item(end)?.replace(":00", ":59");
    Ok(fill(template, &[&first, &last]))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    impl SegmentStrategy for Plain {
        fn all_description(&self) -> String {
            "every unit".into()
        }
        fn single_item(&self, token: &str) -> Result<String, DescriptionError> {
            parse_number(token).map(|n| format!("#{n}"))
        }
        fn interval_format(&self, _: &str) -> String {
            "every {0} units".into()
        }
        fn between_format(&self, _: &str) -> String {
            "units {0} to {1}".into()
        }
        fn description_format(&self, _: &str) -> String {
            "at {0}".into()
        }
        fn range_format(&self, _: &str) -> String {
            ", {0} to {1}".into()
        }
    }

    fn context<'a>(
        expr: &'a NormalizedExpression,
        options: &'a Options,
        locale: &'a Locale,
    ) -> Context<'a> {
        Context {
            expr,
            options,
            locale,
        }
    }

    fn describe(expr: &str) -> String {
        let (normalized, options, locale) = (
            NormalizedExpression::default(),
            Options::default(),
            Locale::english(),
        );
        describe_segment(expr, &Plain, context(&normalized, &options, &locale)).unwrap()
    }

    #[test]
    fn test_segment_shapes() {
        assert_eq!(describe(""), "");
        assert_eq!(describe("*"), "every unit");
        assert_eq!(describe("5"), "at #5");
        assert_eq!(describe("*/5"), "every 5 units");
        assert_eq!(describe("2-9/5"), "every 5 units, units #2 to #9");
        assert_eq!(describe("3/5"), "every 5 units, starting at #3");
        assert_eq!(describe("4-7"), "units #4 to #7");
    }

    #[test]
    fn test_list_joining() {
        assert_eq!(describe("1,2"), "at #1 and #2");
        assert_eq!(describe("1,2,3"), "at #1, #2, and #3");
        assert_eq!(describe("1,2-4,6,8"), "at #1, #2 to #4, #6, and #8");
    }

    #[test]
    fn test_single_item_errors_propagate() {
        let (normalized, options, locale) = (
            NormalizedExpression::default(),
            Options::default(),
            Locale::english(),
        );
        let ctx = context(&normalized, &options, &locale);
        assert!(describe_segment("x", &Plain, ctx).is_err());
        assert!(describe_segment("1,x", &Plain, ctx).is_err());
    }

    #[test]
    fn test_format_time() {
        let normalized = NormalizedExpression::default();
        let locale = Locale::english();
        let twelve = Options::default();
        let twenty_four = Options::default().with_24_hour_time(true);
        let am_pm = context(&normalized, &twelve, &locale);
        let clock = context(&normalized, &twenty_four, &locale);
        assert_eq!(am_pm.format_time("0", "0", "").unwrap(), "12:00 AM");
        assert_eq!(am_pm.format_time("12", "5", "").unwrap(), "12:05 PM");
        assert_eq!(am_pm.format_time("23", "59", "7").unwrap(), "11:59:07 PM");
        assert_eq!(clock.format_time("17", "17", "").unwrap(), "17:17");
        assert!(am_pm.format_time("L", "0", "").is_err());
    }
}
