//! Options walkthrough: casing, clock, weekday numbering, locales.

use crondesc::{get_description, CasingType, Catalog, ExpressionDescriptor, Locale, Options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let expr = "0 23 ? * MON-FRI";

    println!("Default:  {}", get_description(expr, &Options::default())?);

    let title = Options::default().with_casing(CasingType::Title);
    println!("Title:    {}", get_description(expr, &title)?);

    let clock = Options::default().with_24_hour_time(true);
    println!("24-hour:  {}", get_description(expr, &clock)?);

    // Sunday is 1 when weekdays are numbered from one
    let one_based = Options::default().with_day_of_week_start_index_zero(false);
    println!("One-based: {}", get_description("0 9 * * 2", &one_based)?);

    // Keyed overrides, as read from configuration files
    let mut keyed = Options::default();
    keyed.set("verbose", "true")?;
    println!("Verbose:  {}", get_description("* * * * *", &keyed)?);

    // Errors rendered as the description instead of returned
    let lenient = Options::default().with_throw_on_error(false);
    println!("Lenient:  {}", get_description("* * *", &lenient)?);

    // A catalog supplies translated text for message ids
    let catalog: Catalog = [
        ("At ", "Um "),
        (", {0} through {1}", ", {0} bis {1}"),
        ("Monday", "Montag"),
        ("Friday", "Freitag"),
    ]
    .into_iter()
    .collect();
    let descriptor = ExpressionDescriptor::new(expr, Options::for_locale("de_DE"))?
        .with_locale(Locale::new("de_DE").with_catalog(catalog));
    println!("German:   {descriptor}");

    Ok(())
}
