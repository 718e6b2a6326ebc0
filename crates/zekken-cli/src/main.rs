use serde::Serialize;
use std::str::FromStr;
use zekken::layout::ComposeOptions;
use zekken::{BadgeConfig, Category, Engine};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Badge(zekken::BadgeError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Badge(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<zekken::BadgeError> for CliError {
    fn from(value: zekken::BadgeError) -> Self {
        Self::Badge(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Validate,
    Layout,
    Compose,
    Categories,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    name: Option<String>,
    number: Option<String>,
    category: Option<String>,
    race: Option<String>,
    default_category: Option<Category>,
    pretty: bool,
}

fn usage() -> &'static str {
    "zekken-cli\n\
\n\
USAGE:\n\
  zekken-cli [validate] --name <kana> --number <digits> [--type <category>] [--default-type <category>] [--pretty]\n\
  zekken-cli layout --name <kana> --number <digits> [--type <category>] [--default-type <category>] [--pretty]\n\
  zekken-cli compose --name <kana> --number <digits> [--type <category>] [--race <label>] [--default-type <category>] [--pretty]\n\
  zekken-cli categories [--pretty]\n\
\n\
NOTES:\n\
  - validate prints the validated identity as JSON.\n\
  - layout prints the resolved layout parameters as JSON.\n\
  - compose prints the declarative badge tree as JSON.\n\
  - categories prints every badge type with its theme colors.\n\
  - <category> is one of: derby, classic, g1, g2, g3, listed, tokubetsu, normal.\n\
  - Validation failures exit 1 and print the message verbatim to stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "validate" => args.command = Command::Validate,
            "layout" => args.command = Command::Layout,
            "compose" => args.command = Command::Compose,
            "categories" => args.command = Command::Categories,
            "--pretty" => args.pretty = true,
            "--name" => {
                let Some(name) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.name = Some(name.clone());
            }
            "--number" => {
                let Some(number) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.number = Some(number.clone());
            }
            "--type" => {
                let Some(category) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.category = Some(category.clone());
            }
            "--race" => {
                let Some(race) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.race = Some(race.clone());
            }
            "--default-type" => {
                let Some(category) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                // Operator configuration, not request data: a bad value is a
                // usage error rather than a validation message.
                args.default_category =
                    Some(Category::from_str(category).map_err(|_| CliError::Usage(usage()))?);
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    Ok(args)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    let mut config = BadgeConfig::default();
    if let Some(default_category) = args.default_category {
        config.default_category = default_category;
    }
    let engine = Engine::new().with_config(config);

    match args.command {
        Command::Validate => {
            let identity = engine.validate(
                args.name.as_deref(),
                args.number.as_deref(),
                args.category.as_deref(),
            )?;
            write_json(&identity, args.pretty)
        }
        Command::Layout => {
            let identity = engine.validate(
                args.name.as_deref(),
                args.number.as_deref(),
                args.category.as_deref(),
            )?;
            write_json(&engine.resolve(&identity), args.pretty)
        }
        Command::Compose => {
            let identity = engine.validate(
                args.name.as_deref(),
                args.number.as_deref(),
                args.category.as_deref(),
            )?;
            let options = ComposeOptions {
                race: args.race.clone(),
            };
            write_json(&engine.compose(&identity, &options), args.pretty)
        }
        Command::Categories => {
            let out: Vec<serde_json::Value> = Category::ALL
                .iter()
                .map(|category| {
                    serde_json::json!({
                        "category": category.as_str(),
                        "theme": category.theme(),
                    })
                })
                .collect();
            write_json(&out, args.pretty)
        }
    }
}

fn init_tracing() {
    // Log to stderr so stdout stays pure JSON for pipelines.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
