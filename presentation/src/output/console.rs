//! Console output for print mode

use colored::Colorize;
use quizzly_domain::{OutputFormat, Question, QuestionRecord, QuizSettings};

/// Formats generated question sets for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a question set in the requested format
    pub fn format(questions: &[Question], settings: &QuizSettings, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format_full(questions, settings),
            OutputFormat::Json => Self::format_json(questions),
        }
    }

    /// Numbered questions with lettered options; the correct one is marked
    pub fn format_full(questions: &[Question], settings: &QuizSettings) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Quizzly Question Set"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), settings.topic));
        output.push_str(&format!(
            "{} {}\n",
            "Difficulty:".cyan().bold(),
            settings.difficulty
        ));
        output.push_str(&format!(
            "{} {} (requested {})\n",
            "Questions:".cyan().bold(),
            questions.len(),
            settings.question_count()
        ));

        for (number, question) in questions.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("{}.", number + 1).yellow().bold(),
                question.text().bold()
            ));
            output.push_str(&format!(
                "   {}\n",
                format!(
                    "[{} | {} | {}s]",
                    question.topic(),
                    question.difficulty(),
                    question.time_limit_secs()
                )
                .dimmed()
            ));
            for (index, option) in question.options().iter().enumerate() {
                let label = Question::option_label(index);
                if question.is_correct(index) {
                    output.push_str(&format!(
                        "   {} {}\n",
                        format!("{label})").green().bold(),
                        format!("{option}  <- answer").green()
                    ));
                } else {
                    output.push_str(&format!("   {label}) {option}\n"));
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// JSON array in the bank file format
    pub fn format_json(questions: &[Question]) -> String {
        let records: Vec<QuestionRecord> = questions.iter().cloned().map(Into::into).collect();
        serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string())
    }

    /// Topic listing for `--list-topics`
    pub fn format_topics(source: &str, topics: &[String]) -> String {
        let mut output = format!("{} {}\n", "Topics in".cyan().bold(), source.bold());
        if topics.is_empty() {
            output.push_str(&format!("  {}\n", "(none)".dimmed()));
        }
        for topic in topics {
            output.push_str(&format!("  * {}\n", topic));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizzly_domain::{Difficulty, DifficultySetting};

    fn questions() -> Vec<Question> {
        vec![
            Question::new(
                1,
                "Space",
                Difficulty::Easy,
                "Which planet is known as the Red Planet?",
                ["Venus", "Mars", "Jupiter", "Saturn"].map(String::from),
                1,
            )
            .unwrap(),
            Question::new(
                2,
                "Space",
                Difficulty::Hard,
                "What is the largest moon of Saturn?",
                ["Titan", "Europa", "Io", "Rhea"].map(String::from),
                0,
            )
            .unwrap(),
        ]
    }

    fn settings() -> QuizSettings {
        QuizSettings::new("Space", 5, DifficultySetting::Mixed).unwrap()
    }

    #[test]
    fn test_full_format_lists_every_option() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_full(&questions(), &settings());

        assert!(text.contains("Topic: Space"));
        assert!(text.contains("Questions: 2 (requested 5)"));
        assert!(text.contains("1. Which planet is known as the Red Planet?"));
        assert!(text.contains("A) Venus"));
        assert!(text.contains("B) Mars  <- answer"));
        assert!(text.contains("A) Titan  <- answer"));
        assert!(text.contains("[Space | hard | 60s]"));
    }

    #[test]
    fn test_json_format_uses_bank_field_names() {
        let json = ConsoleFormatter::format(&questions(), &settings(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["question"], "Which planet is known as the Red Planet?");
        assert_eq!(items[0]["correct"], 1);
        assert_eq!(items[1]["difficulty"], "hard");
        assert_eq!(items[1]["options"][0], "Titan");
    }

    #[test]
    fn test_topic_listing() {
        colored::control::set_override(false);
        let text =
            ConsoleFormatter::format_topics("local bank", &["History".into(), "Space".into()]);
        assert!(text.contains("* History"));
        assert!(text.contains("* Space"));

        let empty = ConsoleFormatter::format_topics("local bank", &[]);
        assert!(empty.contains("(none)"));
    }
}
