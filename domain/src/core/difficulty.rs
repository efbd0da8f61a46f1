//! Difficulty value objects

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Difficulty of a single question (Value Object)
///
/// Every question carries a concrete difficulty, which also decides how long
/// the player gets to answer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All concrete difficulties, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Seconds allowed to answer a question of this difficulty
    pub fn time_limit_secs(&self) -> u32 {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 45,
            Difficulty::Hard => 60,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DomainError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// Difficulty requested by the player
///
/// `Mixed` means "no difficulty filter" for the local bank and
/// "let the model vary it" for generated questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultySetting {
    Easy,
    Medium,
    Hard,
    #[default]
    Mixed,
}

impl DifficultySetting {
    /// All settings in the order the setup screen cycles through them
    pub const ALL: [DifficultySetting; 4] = [
        DifficultySetting::Easy,
        DifficultySetting::Medium,
        DifficultySetting::Hard,
        DifficultySetting::Mixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultySetting::Easy => "easy",
            DifficultySetting::Medium => "medium",
            DifficultySetting::Hard => "hard",
            DifficultySetting::Mixed => "mixed",
        }
    }

    /// The concrete difficulty, or `None` for mixed
    pub fn fixed(&self) -> Option<Difficulty> {
        match self {
            DifficultySetting::Easy => Some(Difficulty::Easy),
            DifficultySetting::Medium => Some(Difficulty::Medium),
            DifficultySetting::Hard => Some(Difficulty::Hard),
            DifficultySetting::Mixed => None,
        }
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, DifficultySetting::Mixed)
    }

    /// Timer length for this setting; mixed is timed like easy
    pub fn time_limit_secs(&self) -> u32 {
        self.fixed().unwrap_or(Difficulty::Easy).time_limit_secs()
    }
}

impl From<Difficulty> for DifficultySetting {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Easy => DifficultySetting::Easy,
            Difficulty::Medium => DifficultySetting::Medium,
            Difficulty::Hard => DifficultySetting::Hard,
        }
    }
}

impl std::fmt::Display for DifficultySetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DifficultySetting {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("mixed") {
            return Ok(DifficultySetting::Mixed);
        }
        s.parse::<Difficulty>().map(DifficultySetting::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_limits() {
        assert_eq!(Difficulty::Easy.time_limit_secs(), 30);
        assert_eq!(Difficulty::Medium.time_limit_secs(), 45);
        assert_eq!(Difficulty::Hard.time_limit_secs(), 60);
        assert_eq!(DifficultySetting::Mixed.time_limit_secs(), 30);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(
            " Mixed ".parse::<DifficultySetting>().unwrap(),
            DifficultySetting::Mixed
        );
        assert_eq!(
            "medium".parse::<DifficultySetting>().unwrap(),
            DifficultySetting::Medium
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "extreme".parse::<Difficulty>(),
            Err(DomainError::InvalidDifficulty(_))
        ));
        assert!("mixed".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&DifficultySetting::Mixed).unwrap();
        assert_eq!(json, "\"mixed\"");
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
    }

    #[test]
    fn test_fixed() {
        assert_eq!(DifficultySetting::Hard.fixed(), Some(Difficulty::Hard));
        assert_eq!(DifficultySetting::Mixed.fixed(), None);
    }
}
