//! Movie catalogue batch checker.
//!
//! Reads an already-fetched catalogue search response and checks its
//! `results` against the catalogue's business invariants.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};

use moviecheck::core::batch::Batch;
use moviecheck::core::palindrome::is_palindrome;
use moviecheck::exit_codes;
use moviecheck::io::config::{CheckConfig, DEFAULT_CONFIG_FILE, load_config, write_config};
use moviecheck::io::input::load_results;
use moviecheck::logging;
use moviecheck::report::run_checks;

#[derive(Parser)]
#[command(
    name = "moviecheck",
    version,
    about = "Check a movie catalogue batch against its business invariants"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every check over a response body (`-` reads stdin).
    Check {
        input: PathBuf,
        /// Config file; defaults apply when it does not exist.
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Also require a record with exactly this title.
        #[arg(long)]
        expect_title: Option<String>,
        /// Also require exactly this many results.
        #[arg(long)]
        expect_count: Option<usize>,
    },
    /// Print whether a single word is a palindrome.
    Palindrome { token: String },
    /// Write the default config file if missing.
    Init {
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check {
            input,
            config,
            format,
            expect_title,
            expect_count,
        } => {
            let mut cfg = load_config(&config)?;
            if expect_title.is_some() {
                cfg.expect.title = expect_title;
            }
            if expect_count.is_some() {
                cfg.expect.count = expect_count;
            }
            cfg.validate()?;
            cmd_check(&input, &cfg, format)
        }
        Command::Palindrome { token } => cmd_palindrome(&token),
        Command::Init { config, force } => cmd_init(&config, force),
    }
}

fn cmd_check(input: &Path, cfg: &CheckConfig, format: Format) -> Result<i32> {
    let values = load_results(input)?;
    let batch = Batch::from_values(&values);
    let report = run_checks(&batch, cfg).context("run checks")?;
    let rendered = match format {
        Format::Text => report.render_text()?,
        Format::Json => report.render_json()?,
    };
    print!("{rendered}");
    Ok(if report.passed() {
        exit_codes::OK
    } else {
        exit_codes::FAILED
    })
}

fn cmd_palindrome(token: &str) -> Result<i32> {
    let answer = is_palindrome(token)?;
    println!("{answer}");
    Ok(exit_codes::OK)
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &CheckConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(exit_codes::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_check_defaults() {
        let cli = Cli::parse_from(["moviecheck", "check", "response.json"]);
        match cli.command {
            Command::Check {
                input,
                config,
                format,
                expect_title,
                expect_count,
            } => {
                assert_eq!(input, PathBuf::from("response.json"));
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_FILE));
                assert_eq!(format, Format::Text);
                assert!(expect_title.is_none());
                assert!(expect_count.is_none());
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn parse_check_with_expectations() {
        let cli = Cli::parse_from([
            "moviecheck",
            "check",
            "-",
            "--format",
            "json",
            "--expect-title",
            "spiderman",
            "--expect-count",
            "4",
        ]);
        assert!(matches!(
            cli.command,
            Command::Check {
                format: Format::Json,
                expect_count: Some(4),
                ..
            }
        ));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["moviecheck", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }
}
