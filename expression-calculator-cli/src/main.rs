use anyhow::{bail, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use expression_calculator::interpreter::history::HistoryLedger;
use expression_calculator::interpreter::{
    evaluate_expression, evaluate_to_display, format_result_fixed, ERROR_DISPLAY,
};
use log::debug;
use std::io;
use std::io::{BufRead, Write};

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate
    #[clap(required_unless_present = "interactive")]
    expression: Option<String>,

    /// Format results with this fixed number of decimal places
    #[clap(short, long)]
    precision: Option<usize>,

    /// Read expressions from standard input, keeping a history
    /// (`history` prints it, `quit` exits)
    #[clap(short, long)]
    interactive: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(
            args.verbose
                .log_level()
                .map_or(log::LevelFilter::Off, |level| level.to_level_filter()),
        )
        .init();

    if args.interactive {
        return run_interactive(args.precision);
    }
    match args.expression {
        Some(expression) => {
            println!("{}", display(&expression, args.precision));
            Ok(())
        }
        None => bail!("no expression given"),
    }
}

fn display(expression: &str, precision: Option<usize>) -> String {
    match precision {
        None => evaluate_to_display(expression),
        Some(decimals) => match evaluate_expression(expression) {
            Ok(value) => format_result_fixed(value, decimals),
            Err(error) => {
                debug!("evaluation of {:?} failed: {}", expression, error);
                ERROR_DISPLAY.to_string()
            }
        },
    }
}

fn run_interactive(precision: Option<usize>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut ledger = HistoryLedger::new();

    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            "history" => {
                for item in ledger.items() {
                    writeln!(stdout, "{} = {}", item.expression, item.result)?;
                }
            }
            expression => {
                let result = display(expression, precision);
                writeln!(stdout, "{}", result)?;
                ledger = ledger.record(expression, result);
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}
