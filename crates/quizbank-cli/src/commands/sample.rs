//! Sample command implementation.

use crate::cli::SampleArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use quizbank_domain::Question;
use quizbank_store::{filter_by_subject, load_questions, pick_random, subjects};

/// Execute the sample command.
pub fn execute_sample(args: SampleArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let path = args.bank.unwrap_or_else(|| config.paths.output_file.clone());
    let questions = load_questions(&path);

    let selected = select(&questions, args.subject.as_deref(), args.count);
    if selected.is_empty() {
        if let Some(subject) = &args.subject {
            println!(
                "{}",
                formatter.warning(&format!(
                    "No questions for '{}'. Known subjects: {}",
                    subject,
                    subjects(&questions).join(", ")
                ))
            );
            return Ok(());
        }
    }

    println!("{}", formatter.format_questions(&selected)?);
    Ok(())
}

fn select(questions: &[Question], subject: Option<&str>, count: usize) -> Vec<Question> {
    match subject {
        Some(subject) => pick_random(&filter_by_subject(questions, subject), count),
        None => pick_random(questions, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, subject: &str) -> Question {
        Question {
            id: id.to_string(),
            subject: subject.to_string(),
            ..Question::default()
        }
    }

    #[test]
    fn test_select_by_subject() {
        let bank = vec![
            question("R_T_001", "Redes"),
            question("R_T_002", "Redes"),
            question("P_T_001", "Programación"),
        ];

        let picked = select(&bank, Some("Redes"), 5);
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|q| q.subject == "Redes"));

        assert_eq!(select(&bank, None, 2).len(), 2);
        assert!(select(&bank, Some("Física"), 2).is_empty());
    }
}
