// Arity resolution and normalization for cron expressions.
//
// Parsing maps 5, 6 or 7 whitespace-separated parts onto the seven slots
// [second, minute, hour, day-of-month, month, day-of-week, year].
// Normalization then rewrites each slot into the canonical text the
// description generator expects.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{CronExpression, Field, NormalizedExpression};
use crate::error::{DescriptionError, Span};
use crate::lexer;
use crate::names::{parse_month_name, parse_weekday};
use crate::options::Options;

static TRAILING_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}$").expect("valid year pattern"));

static WEEKDAY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)sun|mon|tue|wed|thu|fri|sat").expect("valid weekday pattern")
});

static MONTH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec")
        .expect("valid month pattern")
});

/// Split `input` into its seven slots.
pub fn parse(input: &str) -> Result<CronExpression, DescriptionError> {
    if input.trim().is_empty() {
        return Err(DescriptionError::missing("expression"));
    }

    let tokens = lexer::tokenize(input);
    let arity = tokens.len();

    // Slot index each token lands in.
    let offset = match arity {
        0..=4 => {
            return Err(DescriptionError::format_at(
                format!("too few parts: expression has {arity}, at least 5 are required"),
                Span::new(0, input.len()),
                input,
            ))
        }
        5 => 1,
        6 if has_year_layout(&tokens) => 1,
        6 | 7 => 0,
        _ => {
            let first_extra = tokens[7].span.start;
            return Err(DescriptionError::format_at(
                format!("too many parts: expression has {arity}, at most 7 are allowed"),
                Span::new(first_extra, input.len()),
                input,
            ));
        }
    };

    let mut parts: [String; 7] = Default::default();
    let mut spans: [Option<Span>; 7] = [None; 7];
    for (i, token) in tokens.iter().enumerate() {
        parts[i + offset] = token.text.to_string();
        spans[i + offset] = Some(token.span);
    }

    tracing::debug!(input, arity, seconds = offset == 0, "resolved cron arity");

    Ok(CronExpression {
        input: input.to_string(),
        parts,
        spans,
        arity,
    })
}

/// Six parts mean minute..year when the last part looks like a year or
/// `?` sits where only the day fields of that layout accept it.
fn has_year_layout(tokens: &[lexer::Token<'_>]) -> bool {
    tokens.last().is_some_and(|t| TRAILING_YEAR.is_match(t.text))
        || tokens[2].text == "?"
        || tokens[4].text == "?"
}

/// Rewrite the slots of `expr` into canonical form.
pub fn normalize(expr: &CronExpression, options: &Options) -> NormalizedExpression {
    normalize_parts(expr.parts.clone(), options)
}

/// Rewrite raw slot text into canonical form.
///
/// Never fails: malformed text passes through and surfaces later as a
/// validation or generation error.
pub fn normalize_parts(mut parts: [String; 7], options: &Options) -> NormalizedExpression {
    let dom = Field::DayOfMonth.index();
    let dow = Field::DayOfWeek.index();
    let month = Field::Month.index();

    // ? means "no specific value" in the day fields.
    for i in [dom, dow] {
        parts[i] = parts[i].replace('?', "*");
    }

    // 0/n and 1/n start at the first value anyway.
    for (i, part) in parts.iter_mut().enumerate() {
        let origin = if i <= Field::Hour.index() { "0/" } else { "1/" };
        if let Some(step) = part.strip_prefix(origin) {
            *part = format!("*/{step}");
        }
    }

    for part in parts.iter_mut() {
        if part == "*/1" {
            *part = "*".to_string();
        }
    }

    if !options.day_of_week_start_index_zero {
        parts[dow] = shift_weekdays_down(&parts[dow]);
    }

    parts[dow] = replace_names(&parts[dow], &WEEKDAY_NAME, |word| {
        parse_weekday(word).map(|d| d.number())
    });
    parts[month] = replace_names(&parts[month], &MONTH_NAME, |word| {
        parse_month_name(word).map(|m| m.number())
    });
    // L, W and L-n modifiers.
    parts[dom] = parts[dom].to_ascii_uppercase();

    if parts[Field::Second.index()] == "0" {
        parts[Field::Second.index()].clear();
    }

    for (field, upper) in [(Field::Month, 12), (Field::DayOfWeek, 6), (Field::Year, 9999)] {
        let part = &mut parts[field.index()];
        if let Some((base, step)) = part.split_once('/') {
            if base != "*" && !base.contains(['-', ',']) {
                *part = format!("{base}-{upper}/{step}");
            }
        }
    }

    tracing::debug!(?parts, "normalized cron expression");
    NormalizedExpression::from_parts(parts)
}

/// Convert one-based weekday digits to zero-based. Digits after `#` or `/`
/// are counts and steps, and 0 has no one-based meaning, so both stay.
fn shift_weekdays_down(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut prev = None;
    for c in field.chars() {
        let shifted = match c {
            '1'..='7' if !matches!(prev, Some('#' | '/')) => (c as u8 - 1) as char,
            _ => c,
        };
        out.push(shifted);
        prev = Some(c);
    }
    out
}

/// Replace three-letter names with their numbers, then upper-case the
/// remaining letters (`l` and `w` modifiers). `FRIL` becomes `5L`.
fn replace_names(field: &str, names: &Regex, lookup: impl Fn(&str) -> Option<u32>) -> String {
    names
        .replace_all(field, |caps: &regex::Captures<'_>| {
            let name = &caps[0];
            lookup(name).map_or_else(|| name.to_string(), |n| n.to_string())
        })
        .to_ascii_uppercase()
}
