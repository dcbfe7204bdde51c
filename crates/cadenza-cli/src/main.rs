//! cadenza-cli: Chord progression generator frontend

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cadenza_core::{find_progression, IntervalTable, Note, Progression};
use cadenza_services::ScaleLibrary;

#[derive(Debug, Parser)]
#[command(name = "cadenza")]
#[command(about = "Generates a I-V-VI-IV chord progression from a major chord")]
struct Cli {
    /// Root chord, e.g. `C`, `G#` or `Db`. Prompts on stdin when omitted.
    chord: Option<String>,

    /// Scale table to use instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    scales: Option<PathBuf>,

    /// Emit the progression as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cadenza=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let raw = match cli.chord {
        Some(chord) => chord,
        None => prompt_for_chord()?,
    };

    // The validation gate: the core never sees a malformed token
    let root = match raw.trim().parse::<Note>() {
        Ok(root) => root,
        Err(err) => {
            eprintln!("Wrong input! {err}");
            print_format_help();
            return Ok(ExitCode::FAILURE);
        }
    };

    let library = match &cli.scales {
        Some(path) => ScaleLibrary::from_path(path)
            .with_context(|| format!("failed to load scale table {}", path.display()))?,
        None => ScaleLibrary::builtin(),
    };

    tracing::debug!(%root, "searching for a progression");

    let progression = library.scale(root).and_then(|scale| {
        let intervals = IntervalTable::build(scale);
        find_progression(scale, &intervals)
    });

    match progression {
        Some(progression) => {
            print_progression(&progression, cli.json);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("Couldn't create a chord progression from {root}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn prompt_for_chord() -> Result<String> {
    println!("Welcome to cadenza!");
    println!("This program generates a I-V-VI-IV chord progression from a major chord.");
    print_format_help();
    print!("Please provide a chord: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line)
}

fn print_format_help() {
    println!("Provide a chord in the following format:");
    println!("Ex: C");
    println!("Ex: G#");
    println!("Ex: Db");
}

fn print_progression(progression: &Progression, json: bool) {
    if json {
        let out = serde_json::json!({
            "root": progression.root(),
            "progression": progression,
        });
        println!("{out}");
    } else {
        println!("{progression}");
    }
}
