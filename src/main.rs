//! Interactive driver for hourlog
//!
//! Thin menu loop over the library: build the index once at startup, then
//! inspect or query until quit. Hard errors from the core abort the current
//! attempt with a message; the loop itself keeps running.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hourlog::{
    index_chunks, inspection_report, parse_date, parse_hours, query_day, query_hours,
    render_query_json, render_query_result, ChunkIndex, ChunkParser, QueryResult, Result,
};

/// Inspect and query hourly sensor chunk files
#[derive(Parser, Debug)]
#[command(name = "hourlog")]
#[command(about = "Inspect and query hourly sensor chunk files", version)]
struct Cli {
    /// Directory containing chunk_YYYY-MM-DD_HH.txt files
    #[arg(default_value = ".")]
    folder: PathBuf,

    /// Render query results as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr tracing subscriber, honoring `RUST_LOG`
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let index = index_chunks(&cli.folder)?;
    let parser = ChunkParser::new()?;

    println!("hourlog: hourly chunk inspector");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("--------------------");
        println!("Choose mode:");
        println!("  1) Inspect");
        println!("  2) Query");
        println!("  q) Quit");

        let choice = match prompt(&mut input, "> ")? {
            Some(choice) => choice,
            None => break,
        };

        match choice.to_lowercase().as_str() {
            "1" => println!("{}", inspection_report(&index)),
            "2" => {
                if let Err(e) = run_query(&index, &parser, &mut input, cli.json) {
                    println!("{}", e);
                }
            }
            "q" | "quit" | "exit" => break,
            _ => println!("Unknown choice."),
        }
    }

    Ok(())
}

/// One query round: prompt for date, hours, and fields, then print
fn run_query(
    index: &ChunkIndex,
    parser: &ChunkParser,
    input: &mut impl BufRead,
    json: bool,
) -> Result<()> {
    let date_in = match prompt(input, "Date (YYYYMMDD or YYYY-MM-DD): ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let date = parse_date(&date_in)?;

    let hours_in = match prompt(input, "Hours (e.g., '3:00, 16:00') or blank for whole day: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let fields_in = match prompt(
        input,
        "Fields (comma, case-insensitive; e.g. 'Temperature, CO2, IEQ median') or blank for ALL: ",
    )? {
        Some(line) => line,
        None => return Ok(()),
    };

    let fields: Option<Vec<String>> = if fields_in.is_empty() {
        None
    } else {
        Some(fields_in.split(',').map(|f| f.trim().to_string()).collect())
    };

    let result = if hours_in.is_empty() {
        query_day(index, parser, &date, fields.as_deref())?
    } else {
        let hours = parse_hours(&hours_in)?;
        query_hours(index, parser, &date, &hours, fields.as_deref())?
    };

    print_result(&result, fields.is_some(), json)
}

fn print_result(result: &QueryResult, with_fields: bool, json: bool) -> Result<()> {
    if json {
        println!("{}", render_query_json(result)?);
    } else {
        println!("{}", render_query_result(result, with_fields));
    }
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` means EOF
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
