use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use hexsha::errors::Result;
use hexsha::input::{read_file, read_stdin};
use hexsha::{Digest, HashOptions, Hasher};

#[derive(Parser)]
#[command(name = "hexsha", version, about = "Compute SHA-256 digests")]
struct Cli {
    /// Output results as JSON
    #[arg(short = 'j', long = "json", global = true)]
    json: bool,

    /// Print lowercase hex instead of uppercase
    #[arg(short = 'l', long = "lower", global = true)]
    lower: bool,

    /// Hash empty input instead of rejecting it
    #[arg(long, global = true, env = "HEXSHA_ALLOW_EMPTY")]
    allow_empty: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a text argument
    Text {
        /// Text to hash (its UTF-8 bytes)
        text: String,
    },

    /// Hash one or more files
    File {
        /// Files to hash
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Hash everything read from standard input
    Stdin,

    /// Verify a file against an expected digest
    Check {
        /// Expected digest, 64 hex characters in either case
        expected: String,

        /// File to verify
        path: PathBuf,
    },
}

#[derive(Serialize)]
struct DigestResponse {
    source: String,
    bytes: usize,
    digest: String,
}

#[derive(Serialize)]
struct CheckResponse {
    success: bool,
    message: String,
    expected: String,
    actual: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json = cli.json;

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            if json {
                eprintln!("{}", serde_json::json!({"error": e.to_string()}));
            } else {
                eprintln!("error: {}", e);
            }
            process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns `Ok(false)` when a check ran but did not match.
fn run(cli: Cli) -> Result<bool> {
    let options = HashOptions::new()
        .allow_empty(cli.allow_empty)
        .lowercase(cli.lower);
    let hasher = Hasher::with_options(options);
    let json = cli.json;

    match cli.command {
        Commands::Text { text } => cmd_text(&hasher, &text, json),
        Commands::File { paths } => cmd_files(&hasher, &paths, json),
        Commands::Stdin => cmd_stdin(&hasher, json),
        Commands::Check { expected, path } => cmd_check(&hasher, &expected, &path, json),
    }
}

fn cmd_text(hasher: &Hasher, text: &str, json: bool) -> Result<bool> {
    let hex = hasher.hex_digest(text)?;
    if json {
        print_json(&DigestResponse {
            source: "text".to_string(),
            bytes: text.len(),
            digest: hex,
        })?;
    } else {
        println!("{}", hex);
    }
    Ok(true)
}

fn cmd_files(hasher: &Hasher, paths: &[PathBuf], json: bool) -> Result<bool> {
    let mut responses = Vec::with_capacity(paths.len());
    for path in paths {
        let data = read_file(path)?;
        let digest = hasher.hash(&data)?;
        let response = DigestResponse {
            source: path.display().to_string(),
            bytes: data.len(),
            digest: digest.to_hex(hasher.options().lowercase),
        };
        if json {
            responses.push(response);
        } else {
            println!("{}  {}", response.digest, response.source);
        }
    }

    if json {
        print_json(&responses)?;
    }
    Ok(true)
}

fn cmd_stdin(hasher: &Hasher, json: bool) -> Result<bool> {
    let data = read_stdin()?;
    let digest = hasher.hash(&data)?;
    let hex = digest.to_hex(hasher.options().lowercase);
    if json {
        print_json(&DigestResponse {
            source: "-".to_string(),
            bytes: data.len(),
            digest: hex,
        })?;
    } else {
        println!("{}  -", hex);
    }
    Ok(true)
}

fn cmd_check(hasher: &Hasher, expected: &str, path: &Path, json: bool) -> Result<bool> {
    let expected: Digest = expected.parse()?;
    let data = read_file(path)?;
    let actual = hasher.hash(&data)?;
    let lowercase = hasher.options().lowercase;

    let success = actual == expected;
    let message = if success {
        format!("{}: OK", path.display())
    } else {
        format!("{}: FAILED", path.display())
    };

    if json {
        print_json(&CheckResponse {
            success,
            message,
            expected: expected.to_hex(lowercase),
            actual: actual.to_hex(lowercase),
        })?;
    } else {
        println!("{}", message);
    }
    Ok(success)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
