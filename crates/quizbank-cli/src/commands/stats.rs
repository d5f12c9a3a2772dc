//! Stats command implementation.

use crate::cli::StatsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use quizbank_store::{count_by_subject, load_questions};

/// Execute the stats command.
pub fn execute_stats(args: StatsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let path = args.bank.unwrap_or_else(|| config.paths.output_file.clone());
    let questions = load_questions(&path);

    println!("{}", formatter.format_counts(&count_by_subject(&questions))?);
    Ok(())
}
