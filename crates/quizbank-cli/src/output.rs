//! Output formatting for the CLI.

use crate::commands::extract::RunSummary;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use quizbank_domain::Question;
use quizbank_store::SubjectCounts;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of an extract run.
    pub fn format_summary(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Quiet => Ok(summary.questions_stored.to_string()),
            OutputFormat::Table => Ok(self.format_summary_table(summary)),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut lines = Vec::new();

        if !summary.built.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Document", "Group", "Added", "Replaced", "No answer"]);
            for doc in &summary.built {
                builder.push_record([
                    doc.document.clone(),
                    doc.group.clone(),
                    doc.added.to_string(),
                    doc.removed.to_string(),
                    doc.answers_cleared.to_string(),
                ]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            lines.push(table.to_string());
        }

        for failure in &summary.failed {
            lines.push(self.error(&format!("{}: {}", failure.document, failure.reason)));
        }

        let total = format!(
            "{} question(s) stored from {} of {} document(s) in {}",
            summary.questions_stored,
            summary.built.len(),
            summary.documents_found,
            summary.output.display()
        );
        if summary.failed.is_empty() {
            lines.push(self.success(&total));
        } else {
            lines.push(self.warning(&total));
        }

        lines.join("\n")
    }

    /// Format per-subject question counts.
    pub fn format_counts(&self, counts: &SubjectCounts) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(counts)?),
            OutputFormat::Quiet => Ok(counts.total.to_string()),
            OutputFormat::Table => {
                if counts.total == 0 {
                    return Ok(self.colorize("No questions found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Subject", "Questions"]);
                for (subject, count) in &counts.per_subject {
                    builder.push_record([subject.clone(), count.to_string()]);
                }
                builder.push_record(["Total".to_string(), counts.total.to_string()]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a list of questions.
    pub fn format_questions(&self, questions: &[Question]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(questions)?),
            OutputFormat::Quiet => Ok(questions
                .iter()
                .map(|q| q.id.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => Ok(self.format_questions_text(questions)),
        }
    }

    fn format_questions_text(&self, questions: &[Question]) -> String {
        if questions.is_empty() {
            return self.colorize("No questions found.", "yellow");
        }

        let mut blocks = Vec::with_capacity(questions.len());
        for q in questions {
            let mut block = vec![format!("{} {}", self.colorize(&q.id, "cyan"), q.stem)];
            for option in &q.options {
                let line = format!("  {}) {}", option.letter, option.text);
                if q.is_correct(&option.letter.to_string()) {
                    block.push(self.colorize(&line, "green"));
                } else {
                    block.push(line);
                }
            }
            if !q.is_scored() {
                block.push(self.colorize("  (no answer recorded)", "yellow"));
            }
            blocks.push(block.join("\n"));
        }
        blocks.join("\n\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
