//! Line-oriented front-end for a boolean function session.
//!
//! Run with: `cargo run --example repl`
//!
//! ```text
//! > set f a*b
//! > set g $f + c
//! > table f g
//! > kmap g
//! > view g insert
//! ```

use std::io::{self, BufRead, Write};

use boolfn_rs::config::SessionConfig;
use boolfn_rs::session::Session;
use clap::Parser;

#[derive(Parser)]
#[command(name = "repl")]
#[command(about = "Define boolean functions and print their truth tables and k-maps")]
struct Args {
    /// Log level for library diagnostics
    #[arg(short, long, default_value = "warn")]
    log_level: simplelog::LevelFilter,

    /// Largest number of variables a truth table may span
    #[arg(short, long, default_value = "8")]
    max_vars: usize,

    /// Largest number of tokens a resolved statement may have
    #[arg(long, default_value = "100000")]
    max_tokens: usize,

    /// Maximum characters per output page
    #[arg(long, default_value = "2000")]
    limit: usize,

    /// Expand nested functions in `view` without `insert`
    #[arg(short, long)]
    expand: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let mut session = Session::new(SessionConfig {
        max_table_variables: args.max_vars,
        max_statement_tokens: args.max_tokens,
        message_limit: args.limit,
        expand_by_default: args.expand,
    });

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == "quit" {
            break;
        }
        if !line.trim().is_empty() {
            match session.execute_line(&line) {
                Ok(pages) if pages.is_empty() => println!("ok"),
                Ok(pages) => {
                    for page in pages {
                        println!("{}", page);
                        println!();
                    }
                }
                Err(e) => println!("{}", e),
            }
        }
        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
