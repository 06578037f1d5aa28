use crate::route::Route;
use crate::stats::TicketStats;
use crate::time::DurationMode;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing_subscriber::EnvFilter;

mod error;
mod report;
mod route;
mod stats;
mod ticket;
mod time;

#[derive(Parser)]
struct Args {
    /// Path to the JSON ticket file
    #[arg(short, long, value_name = "FILE", default_value = "data/tickets.json")]
    tickets: PathBuf,
    /// Origin airport code
    #[arg(short, long, default_value = Route::DEFAULT_ORIGIN)]
    origin: String,
    /// Destination airport code
    #[arg(short, long, default_value = Route::DEFAULT_DESTINATION)]
    destination: String,
    /// Ignore dates and compute durations from times of day only
    #[arg(short, long)]
    wall_clock: bool,
    /// Print both statistics and exit instead of starting the shell
    #[arg(short, long)]
    report: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn paginate(content: String) {
    let spawned = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match spawned {
        Ok(pager) => pager,
        Err(_) => {
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn print_durations(stats: &TicketStats) {
    match stats.min_durations_by_carrier() {
        Ok(durations) if durations.is_empty() => println!("No tickets from {}.", stats.route),
        Ok(durations) => println!("{}", report::durations_table(&durations)),
        Err(e) => println!("{}", format!("Error: {}", e).red()),
    }
}

fn print_gap(stats: &TicketStats) {
    match stats.price_mean_median_gap() {
        Ok(stat) => println!("{}", report::gap_line(&stats.route, &stat)),
        Err(e) => println!("{}", format!("Error: {}", e).red()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let path = args.tickets.to_str().ok_or("ticket path is not valid UTF-8")?;
    let tickets = ticket::load_from_file(path)?;
    let mode = if args.wall_clock {
        DurationMode::WallClock
    } else {
        DurationMode::ByFields
    };
    let mut stats = TicketStats::new(tickets, Route::new(&args.origin, &args.destination)).with_mode(mode);

    if args.report {
        print_durations(&stats);
        print_gap(&stats);
        return Ok(());
    }

    println!(
        "Loaded {} tickets from {}. Route {}.",
        stats.tickets().len(),
        args.tickets.display(),
        stats.route
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "durations".to_string(),
            "gap".to_string(),
            "mode".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => {
                        let filtered = stats.filtered();
                        if filtered.is_empty() {
                            println!("No tickets from {}.", stats.route)
                        } else {
                            let table = report::tickets_table(&filtered);
                            if filtered.len() > 20 {
                                paginate(table);
                            } else {
                                println!("{}", table);
                            }
                        }
                    },
                    "durations" | "d" => print_durations(&stats),
                    "gap" | "g" => print_gap(&stats),
                    "mode" => {
                        match parts.get(1).copied() {
                            Some("fields") => stats.mode = DurationMode::ByFields,
                            Some("wall") => stats.mode = DurationMode::WallClock,
                            Some(_) => println!("Usage: mode [fields|wall]"),
                            None => {},
                        }
                        println!("Duration mode: {:?}", stats.mode);
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                  - List tickets on the route in a table");
                        println!("  durations / d       - Shortest flight time per carrier");
                        println!("  gap / g             - Difference between mean and median price");
                        println!("  mode [fields|wall]  - Show or switch duration mode: fields - use dates when present, wall - times of day only");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Exit\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
