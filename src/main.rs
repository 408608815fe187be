//! taglog command line.
//!
//! Emits records through a `Logger` so shell scripts share the same format,
//! prefix tagging and `LOG_LEVEL` / `LOG_FILE` handling as the library.

use clap::{Parser, Subcommand, ValueEnum};

use taglog::{ConsoleTarget, FieldLabel, Level, Logger};

#[derive(Parser)]
#[command(name = "taglog")]
#[command(about = "Write prefix-tagged log records from the shell", long_about = None)]
struct Cli {
    /// Context tag attached to every record.
    #[arg(short, long, default_value = "taglog")]
    prefix: String,

    /// Logger threshold (trace, debug, info, warn, error, disabled).
    #[arg(short, long)]
    level: Option<Level>,

    /// Disable ANSI color on the console.
    #[arg(long)]
    no_color: bool,

    /// Write console records to stderr instead of stdout.
    #[arg(long)]
    stderr: bool,

    /// Field name the prefix is recorded under.
    #[arg(long, value_enum, default_value_t = LabelArg::Prefix)]
    label: LabelArg,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LabelArg {
    Prefix,
    Service,
}

impl From<LabelArg> for FieldLabel {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::Prefix => FieldLabel::Prefix,
            LabelArg::Service => FieldLabel::Service,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Emit one record at LEVEL
    Emit {
        level: Level,
        values: Vec<String>,
    },
    /// Emit a panic record with a stack trace and abort
    Panic { values: Vec<String> },
    /// Print the resolved logger settings as JSON
    Settings,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut builder = Logger::builder(cli.prefix)
        .color(!cli.no_color)
        .label(cli.label.into());
    if let Some(level) = cli.level {
        builder = builder.level(level);
    }
    if cli.stderr {
        builder = builder.console(ConsoleTarget::Stderr);
    }
    let logger = builder.build();

    match cli.command {
        Commands::Emit { level, values } => {
            let values: Vec<&dyn std::fmt::Display> =
                values.iter().map(|v| v as &dyn std::fmt::Display).collect();
            logger.log(level, &values);
        }
        Commands::Panic { values } => {
            let values: Vec<&dyn std::fmt::Display> =
                values.iter().map(|v| v as &dyn std::fmt::Display).collect();
            logger.panic(&values);
        }
        Commands::Settings => {
            let report = serde_json::json!({
                "settings": logger.settings(),
                "resolved_threshold": logger.resolved_threshold(),
                "file_destination": logger.file_destination(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
