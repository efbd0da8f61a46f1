//! CLI command definitions

use clap::{Parser, ValueEnum};
use quizzly_application::ReplayMode;
use quizzly_domain::{DifficultySetting, OutputFormat};
use std::path::PathBuf;

/// Difficulty accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    /// Mix of easy, medium and hard questions
    Mixed,
}

impl From<DifficultyArg> for DifficultySetting {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => DifficultySetting::Easy,
            DifficultyArg::Medium => DifficultySetting::Medium,
            DifficultyArg::Hard => DifficultySetting::Hard,
            DifficultyArg::Mixed => DifficultySetting::Mixed,
        }
    }
}

/// What "play again" does on the results screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReplayArg {
    /// Replay the same question set
    Same,
    /// Generate a new question set with the same settings
    Regenerate,
}

impl From<ReplayArg> for ReplayMode {
    fn from(arg: ReplayArg) -> Self {
        match arg {
            ReplayArg::Same => ReplayMode::SameQuestions,
            ReplayArg::Regenerate => ReplayMode::Regenerate,
        }
    }
}

/// Print-mode output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Numbered questions with lettered options and the answer marked
    Full,
    /// JSON array of question records
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Full => OutputFormat::Full,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for quizzly
#[derive(Parser, Debug)]
#[command(name = "quizzly")]
#[command(author, version, about = "Terminal trivia quiz with generated or bundled questions")]
#[command(long_about = r#"
Quizzly runs a timed multiple-choice quiz in the terminal.

Questions come from one of two sources:
1. Remote: generated by Gemini for any topic (needs GEMINI_API_KEY)
2. Local:  drawn from the bundled question bank (--local)

Each question has a countdown (easy 30s, medium 45s, hard 60s) and is worth
10 points. A results screen shows your score when the quiz is over.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./quizzly.toml      Project-level config (or ./.quizzly.toml)
3. ~/.config/quizzly/config.toml   Global config
Environment variables with the QUIZZLY_ prefix override files
(e.g. QUIZZLY_PROVIDER__MODEL=gemini-2.5-pro).

Example:
  quizzly
  quizzly --local --topic Space --count 5 --difficulty easy
  quizzly --topic "Roman history" --print --output json
  quizzly --local --list-topics
"#)]
pub struct Cli {
    /// Quiz topic (pre-fills the setup screen)
    #[arg(short, long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Number of questions
    #[arg(short = 'n', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub count: Option<u32>,

    /// Question difficulty
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Use the bundled question bank instead of the remote generator
    #[arg(short, long)]
    pub local: bool,

    /// Model used for remote generation
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Seed for question selection and shuffling
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// What "play again" does on the results screen
    #[arg(long, value_enum)]
    pub replay: Option<ReplayArg>,

    /// Generate the question set and print it instead of starting the quiz
    #[arg(short, long)]
    pub print: bool,

    /// Output format for --print
    #[arg(short, long, value_enum)]
    pub output: Option<OutputArg>,

    /// List the topics of the local question bank and exit
    #[arg(long)]
    pub list_topics: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["quizzly"]);
        assert!(cli.topic.is_none());
        assert!(cli.count.is_none());
        assert!(!cli.local);
        assert!(!cli.print);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_full_invocation() {
        let cli = Cli::parse_from([
            "quizzly",
            "--topic",
            "Space",
            "--count",
            "5",
            "--difficulty",
            "easy",
            "--local",
            "--seed",
            "42",
            "--replay",
            "regenerate",
            "--print",
            "--output",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.topic.as_deref(), Some("Space"));
        assert_eq!(cli.count, Some(5));
        assert_eq!(cli.difficulty, Some(DifficultyArg::Easy));
        assert!(cli.local);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.replay, Some(ReplayArg::Regenerate));
        assert!(cli.print);
        assert_eq!(cli.output, Some(OutputArg::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(Cli::try_parse_from(["quizzly", "--count", "0"]).is_err());
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(Cli::try_parse_from(["quizzly", "--difficulty", "extreme"]).is_err());
    }

    #[test]
    fn test_arg_conversions() {
        assert_eq!(
            DifficultySetting::from(DifficultyArg::Mixed),
            DifficultySetting::Mixed
        );
        assert_eq!(ReplayMode::from(ReplayArg::Same), ReplayMode::SameQuestions);
        assert_eq!(OutputFormat::from(OutputArg::Json), OutputFormat::Json);
    }
}
