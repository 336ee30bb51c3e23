use std::fmt::{Display, Formatter};

use crate::generator::GeneratorConfig;

/// Coarse strength rating derived from the configuration alone, never from
/// the content of a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// One point per enabled character class, plus one for length >= 12.
    /// Score <= 2 is weak, 3 or 4 is medium, 5 is strong.
    pub fn classify(config: &GeneratorConfig) -> Strength {
        let mut score = config.enabled_count();
        if config.length() >= 12 {
            score += 1;
        }
        match score {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Medium,
            _ => Strength::Strong,
        }
    }
}

impl Display for Strength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Strength::Weak => "WEAK",
            Strength::Medium => "MEDIUM",
            Strength::Strong => "STRONG",
        };
        write!(f, "{}", label)
    }
}
