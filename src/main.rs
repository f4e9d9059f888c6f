mod report;
mod scanner;
mod types;

use chrono::Local;
use clap::Parser;
use colored::Colorize;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Parent directory containing one contract folder per client
    #[arg(default_value = "./contrat")]
    parent_dir: String,

    /// Disable colored output
    #[arg(long)]
    plain: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.plain {
        colored::control::set_override(false);
    }

    println!(
        "{}",
        format!(
            "=== Quote Audit: {} ===",
            Local::now().format("%Y-%m-%d %H:%M")
        )
        .cyan()
    );
    println!("Checking parent directory: {}", args.parent_dir);
    println!("{}", "-".repeat(70));

    let problem_detected = match scanner::audit_quotes(Path::new(&args.parent_dir)) {
        Ok(audit) => {
            print!("{}", report::render(&audit, args.plain));
            audit.problem_detected()
        }
        // Fatal conditions are reported on the same stream as the report and
        // count as a problem even though no invalid file was seen.
        Err(e) => {
            println!("{}", format!("Error: {e}").red());
            true
        }
    };

    if problem_detected {
        std::process::exit(1);
    }
}
