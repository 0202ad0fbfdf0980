//! Basic crondesc API walkthrough: parse, validate, describe.

use crondesc::{CronExpression, DescriptionType, ExpressionDescriptor, Field, Options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One call from text to sentence
    println!("{}", crondesc::describe("*/5 15 * * MON-FRI")?);

    // Parse into seven slots; five-part expressions leave seconds and year empty
    let expr: CronExpression = "0 30 10-13 ? * WED,FRI".parse()?;
    println!("\nArity: {}", expr.arity());
    for field in Field::ALL {
        println!("  {:<14} {:?}", field.as_str(), expr.get(field));
    }

    // Field grammars are checked separately from description
    expr.validate()?;
    let normalized = expr.normalize(&Options::default());
    println!("\nNormalized day of month: {}", &normalized[Field::DayOfMonth]);

    // Individual parts of the sentence
    let descriptor = ExpressionDescriptor::new("0 30 10-13 ? * WED,FRI", Options::default())?;
    println!("\nFull:        {descriptor}");
    println!(
        "Time of day: {}",
        descriptor.description(DescriptionType::TimeOfDay)?
    );
    println!(
        "Day of week: {}",
        descriptor.description(DescriptionType::DayOfWeek)?
    );

    // Invalid fields point at the offending part
    if let Err(e) = crondesc::describe("0 24 * * *") {
        println!("\n{}", e.display_rich());
    }

    Ok(())
}
