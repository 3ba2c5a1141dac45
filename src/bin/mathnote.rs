//! mathnote CLI - Rewrite keyboard math notation into LaTeX or Unicode text

#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use log::LevelFilter;
#[cfg(feature = "cli")]
use mathnote::{
    convert_with_options, registry, ConversionError, ConversionResult, ConvertOptions,
    MathDelimiters, TypesetterConfig,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mathnote")]
#[command(version)]
#[command(about = "Rewrite keyboard math notation into LaTeX or Unicode text", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Encoding profile (latex, unicode); defaults to $MATHNOTE_PROFILE or latex
    #[arg(short, long)]
    profile: Option<String>,

    /// Math delimiters wrapped around LaTeX output
    #[arg(short, long, value_enum)]
    delimiters: Option<DelimiterArg>,

    /// Keep leading and trailing whitespace of each line
    #[arg(long)]
    no_trim: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List registered profiles and their rule order
    Profiles,

    /// Print the typesetter configuration as JSON
    Config {
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum DelimiterArg {
    /// Bare fragment
    None,
    /// \( ... \)
    Inline,
    /// \[ ... \]
    Display,
    /// $ ... $
    Dollar,
    /// $$ ... $$
    DoubleDollar,
}

#[cfg(feature = "cli")]
impl From<DelimiterArg> for MathDelimiters {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::None => MathDelimiters::None,
            DelimiterArg::Inline => MathDelimiters::Inline,
            DelimiterArg::Display => MathDelimiters::Display,
            DelimiterArg::Dollar => MathDelimiters::Dollar,
            DelimiterArg::DoubleDollar => MathDelimiters::DoubleDollar,
        }
    }
}

#[cfg(feature = "cli")]
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::from_default_env();
    if verbose > 0 || std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    let _ = builder.try_init();
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        std::process::exit(if err.is_configuration() { 2 } else { 1 });
    }
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> ConversionResult<()> {
    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let mut options = ConvertOptions::from_env().with_trim(!cli.no_trim);
    if let Some(profile) = cli.profile {
        options = options.with_profile(profile);
    }
    if let Some(delimiters) = cli.delimiters {
        options = options.with_delimiters(delimiters.into());
    }

    // Read input
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    // One expression per line
    let mut result = String::with_capacity(input.len());
    for line in input.lines() {
        result.push_str(&convert_with_options(line, &options)?);
        result.push('\n');
    }

    // Output
    match cli.output {
        Some(path) => {
            fs::write(&path, result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            io::stdout().write_all(result.as_bytes())?;
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> ConversionResult<()> {
    match cmd {
        Commands::Profiles => {
            for profile in registry()?.iter() {
                println!("{} ({:?})", profile.name(), profile.target());
                for (i, name) in profile.rule_names().iter().enumerate() {
                    println!("  {:>2}. {}", i + 1, name);
                }
            }
        }
        Commands::Config { compact } => {
            let config = TypesetterConfig::default();
            let json = if compact {
                config.to_json()?
            } else {
                config.to_json_pretty()?
            };
            println!("{}", json);
        }
        Commands::Info => {
            println!("mathnote - Rewrite keyboard math notation into LaTeX or Unicode text");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Profiles:");
            let names = registry()?.names();
            if names.is_empty() {
                return Err(ConversionError::internal("no profiles registered"));
            }
            for name in names {
                println!("  ✓ {}", name);
            }
            println!();
            println!("Notation:");
            println!("  - Greek letters and constants: alpha, Omega, infinity, sum, lim");
            println!("  - Functions: sin, cos, log, ln, exp, ...");
            println!("  - sqrt(x), (a)/(b), a/b");
            println!("  - x_1, x^2, sum_(i=1)^(n), lim_x->0");
            println!("  - -> <-> => <=> <= >= != ~= * +/- -+");
            println!();
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mathnote --features cli");
    eprintln!("  mathnote [OPTIONS] [INPUT_FILE]");
}
