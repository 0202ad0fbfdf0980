//! API surface test: verifies the public entry points exist with the
//! expected signatures.
//!
//! This is a compile-time + runtime check: if any method is missing, the code
//! won't compile. The runtime assertions verify return types.

use crondesc::{
    describe, get_description, CasingType, CronExpression, DescriptionError, DescriptionType,
    ExpressionDescriptor, Field, Locale, NormalizedExpression, Options, Span, GENERIC_ERROR,
};

#[test]
fn static_describe() {
    let result: Result<String, DescriptionError> = describe("0 9 * * *");
    assert_eq!(result.unwrap(), "At 09:00 AM");
}

#[test]
fn static_get_description() {
    let options = Options::default().with_casing(CasingType::Lower);
    let result: Result<String, DescriptionError> = get_description("0 9 * * *", &options);
    assert_eq!(result.unwrap(), "at 09:00 am");
}

#[test]
fn static_parse() {
    let expr: CronExpression = CronExpression::parse("0 9 * * *").unwrap();
    assert_eq!(expr.arity(), 5);
    assert_eq!(expr.input(), "0 9 * * *");
    assert_eq!(expr.span(Field::Hour), Some(Span::new(2, 3)));
    assert!(expr.span(Field::Second).is_none());
}

#[test]
fn instance_validate() {
    let ok: Result<(), DescriptionError> = CronExpression::parse("0 9 * * *").unwrap().validate();
    assert!(ok.is_ok());
    let err = CronExpression::parse("0 24 * * *").unwrap().validate().unwrap_err();
    assert!(err.is_format());
}

#[test]
fn instance_normalize() {
    let expr = CronExpression::parse("0 9 ? JAN MON").unwrap();
    let normalized: NormalizedExpression = expr.normalize(&Options::default());
    let fields: Vec<(Field, &str)> = normalized.iter().collect();
    assert_eq!(fields.len(), 7);
    assert_eq!(&normalized[Field::DayOfMonth], "*");
    assert_eq!(&normalized[Field::Month], "1");
    assert_eq!(&normalized[Field::DayOfWeek], "1");
}

#[test]
fn descriptor_getters() {
    let d = ExpressionDescriptor::new("*/5 * * * *", Options::default()).unwrap();
    let _: &CronExpression = d.expression();
    let _: &NormalizedExpression = d.normalized();
    let _: &Options = d.options();
    let locale: &Locale = d.locale();
    assert_eq!(locale.code(), "en_US");
    assert_eq!(d.to_string(), "Every 5 minutes");
}

#[test]
fn descriptor_description_types() {
    let d = ExpressionDescriptor::new("0 9 1 * *", Options::default()).unwrap();
    for kind in [
        DescriptionType::Full,
        DescriptionType::TimeOfDay,
        DescriptionType::Seconds,
        DescriptionType::Minutes,
        DescriptionType::Hours,
        DescriptionType::DayOfWeek,
        DescriptionType::Month,
        DescriptionType::DayOfMonth,
        DescriptionType::Year,
    ] {
        let result: Result<String, DescriptionError> = d.description(kind);
        assert!(result.is_ok(), "{kind:?}");
        assert_eq!(kind.as_str().parse::<DescriptionType>().unwrap(), kind);
    }
}

#[test]
fn options_keyed_configuration() {
    let mut options = Options::default();
    options.set("use_24hour_time_format", "true").unwrap();
    options.set("casing_type", "title").unwrap();
    assert!(options.use_24hour_time_format);
    assert_eq!(options.casing_type, CasingType::Title);
    let err = options.set("colour", "red").unwrap_err();
    assert!(matches!(err, DescriptionError::WrongArgument { .. }));
}

#[test]
fn generic_error_constant() {
    assert!(GENERIC_ERROR.starts_with("An error occurred"));
}
