use clap::Parser;
use crondesc::{CasingType, CronExpression, DescriptionType, ExpressionDescriptor, Locale, Options};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crondesc", about = "Describe cron expressions in plain language", version)]
struct Cli {
    /// Cron expression with 5, 6 or 7 parts (e.g., "*/5 15 * * MON-FRI")
    expression: Option<String>,

    /// Keep "every minute", "every hour" and "every day" phrases
    #[arg(long)]
    verbose: bool,

    /// Capitalization of the description: sentence, title or lower
    #[arg(long, value_name = "CASING")]
    casing: Option<CasingType>,

    /// Use the 24-hour clock regardless of locale
    #[arg(long = "24h")]
    twenty_four_hour: bool,

    /// Weekday numbers start at 1 (Sunday) instead of 0
    #[arg(long)]
    dow_start_one: bool,

    /// Locale code, e.g. en_US or de_DE
    #[arg(long, value_name = "CODE")]
    locale: Option<String>,

    /// Directory containing {locale}.json message catalogs
    #[arg(long, value_name = "DIR")]
    locale_path: Option<PathBuf>,

    /// Describe only one part of the expression
    #[arg(long, value_name = "PART", default_value = "full")]
    part: DescriptionType,

    /// Validate expression without describing it
    #[arg(long)]
    check: bool,

    /// Show normalized fields as JSON
    #[arg(long)]
    parse: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Describe without checking field syntax first
    #[arg(long)]
    no_validate: bool,

    /// Set an option by name (repeatable)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    options: Vec<String>,
}

impl Cli {
    fn options(&self) -> Result<Options, crondesc::DescriptionError> {
        let mut options = match &self.locale {
            Some(code) => Options::for_locale(code.as_str()),
            None => Options::default(),
        };
        options.verbose = self.verbose;
        if let Some(casing) = self.casing {
            options.casing_type = casing;
        }
        if self.twenty_four_hour {
            options.use_24hour_time_format = true;
        }
        if self.dow_start_one {
            options.day_of_week_start_index_zero = false;
        }
        if let Some(ref dir) = self.locale_path {
            options.locale_location = Some(dir.clone());
        }
        for pair in &self.options {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                crondesc::DescriptionError::wrong_argument(
                    pair.as_str(),
                    format!("option '{pair}' must be written as key=value"),
                )
            })?;
            options.set(key.trim(), value.trim())?;
        }
        Ok(options)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let expression = match cli.expression {
        Some(ref expr) => expr.as_str(),
        None => {
            eprintln!("error: no expression provided");
            process::exit(2);
        }
    };

    let options = match cli.options() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };
    tracing::debug!(?options, part = cli.part.as_str(), "resolved options");

    let parsed = match CronExpression::parse(expression) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };

    if !cli.no_validate || cli.check {
        if let Err(e) = parsed.validate() {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    }

    if cli.check {
        println!("\u{2713} valid");
        process::exit(0);
    }

    if cli.parse {
        match serde_json::to_string_pretty(&parsed.normalize(&options)) {
            Ok(json) => {
                println!("{json}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    }

    let locale = match Locale::from_options(&options) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };

    let descriptor = ExpressionDescriptor::from_parsed(parsed, options, locale);
    let description = match descriptor.description(cli.part) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", e.display_rich());
            process::exit(1);
        }
    };

    if cli.json {
        let output = serde_json::json!({
            "expression": expression,
            "description": description,
        });
        println!("{output}");
    } else {
        println!("{description}");
    }
}
