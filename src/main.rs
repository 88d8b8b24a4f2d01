//! Secure Password Generator CLI
//!
//! Builds a policy from a config file and command-line flags, then
//! prints the generated passwords one per line.

use clap::Parser;
use secure_passgen::{
    charset::CharClass, rng::EntropySource, FileConfig, PasswordGenerator,
};
use std::path::PathBuf;
use tracing::debug;

/// Generate passwords that contain every requested character class.
#[derive(Debug, Parser)]
#[command(name = "secure-passgen", version, about)]
struct Args {
    /// Password length
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long)]
    no_upper: bool,

    /// Exclude lowercase letters
    #[arg(long)]
    no_lower: bool,

    /// Exclude digits
    #[arg(long)]
    no_digits: bool,

    /// Exclude symbols
    #[arg(long)]
    no_symbols: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Random source
    #[arg(long, value_enum)]
    source: Option<EntropySource>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    // Logs go to stderr so stdout carries only passwords
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    // File values are not validated on their own; flags may still fix them
    let mut policy = config.policy;
    if let Some(length) = args.length {
        policy = policy.with_length(length);
    }
    let exclusions = [
        (CharClass::Upper, args.no_upper),
        (CharClass::Lower, args.no_lower),
        (CharClass::Digit, args.no_digits),
        (CharClass::Symbol, args.no_symbols),
    ];
    for (class, excluded) in exclusions {
        if excluded {
            policy = policy.with_class(class, false);
        }
    }
    if let Some(count) = args.count {
        config.output.count = count;
    }
    if let Some(source) = args.source {
        config.output.source = source;
    }

    debug!(?policy, output = ?config.output, "Effective configuration");

    let generator = match PasswordGenerator::new(policy) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Invalid policy: {}", e);
            std::process::exit(2);
        }
    };

    let mut rng = config.output.source.build();
    for password in generator.generate_many_with(&mut rng, config.output.count) {
        println!("{}", password);
    }
}
