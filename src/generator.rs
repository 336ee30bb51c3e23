use rand::thread_rng;
use rand::Rng;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    /// Fixed order used when concatenating alphabets.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn alphabet(&self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    fn index(&self) -> usize {
        match self {
            CharClass::Upper => 0,
            CharClass::Lower => 1,
            CharClass::Digit => 2,
            CharClass::Symbol => 3,
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CharClass::Upper => "Uppercase",
            CharClass::Lower => "Lowercase",
            CharClass::Digit => "Digits",
            CharClass::Symbol => "Symbols",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    length: usize,
    enabled: [bool; 4],
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            length: DEFAULT_LENGTH,
            enabled: [true; 4],
        }
    }
}

impl GeneratorConfig {
    pub fn new(length: usize, classes: &[CharClass]) -> GeneratorConfig {
        let mut config = GeneratorConfig {
            length: DEFAULT_LENGTH,
            enabled: [false; 4],
        };
        config.set_length(length);
        for class in classes {
            config.set_enabled(*class, true);
        }
        config
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Clamps into [MIN_LENGTH, MAX_LENGTH]. The slider in a GUI would do
    /// this for us; a CLI gets no such guarantee.
    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        self.enabled[class.index()]
    }

    pub fn set_enabled(&mut self, class: CharClass, enabled: bool) {
        self.enabled[class.index()] = enabled;
    }

    pub fn set_classes(&mut self, classes: &[CharClass]) {
        self.enabled = [false; 4];
        for class in classes {
            self.set_enabled(*class, true);
        }
    }

    pub fn enabled_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .iter()
            .filter(|class| self.is_enabled(**class))
            .copied()
            .collect()
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.iter().filter(|e| **e).count()
    }

    /// Concatenates the enabled alphabets in Upper, Lower, Digit, Symbol
    /// order. An empty selection falls back to lowercase letters.
    pub fn alphabet(&self) -> String {
        let mut alphabet = String::new();
        for class in CharClass::ALL {
            if self.is_enabled(class) {
                alphabet.push_str(class.alphabet());
            }
        }
        if alphabet.is_empty() {
            alphabet.push_str(LOWERCASE);
        }
        alphabet
    }

    /// Draws `length` characters independently and uniformly, with
    /// replacement, from the alphabet. There is no minimum-one-per-class
    /// guarantee: a password may omit an enabled class by chance.
    pub fn generate(&self) -> String {
        let alphabet: Vec<char> = self.alphabet().chars().collect();
        let mut rng = thread_rng();
        (0..self.length)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_exact_length() {
        let config = GeneratorConfig::default();
        assert_eq!(config.generate().len(), DEFAULT_LENGTH);
    }

    #[test]
    fn generates_at_boundary_lengths() {
        let mut config = GeneratorConfig::default();
        config.set_length(MIN_LENGTH);
        assert_eq!(config.generate().len(), MIN_LENGTH);
        config.set_length(MAX_LENGTH);
        assert_eq!(config.generate().len(), MAX_LENGTH);
    }

    #[test]
    fn clamps_length_into_range() {
        let mut config = GeneratorConfig::default();
        config.set_length(3);
        assert_eq!(config.length(), MIN_LENGTH);
        config.set_length(500);
        assert_eq!(config.length(), MAX_LENGTH);
        config.set_length(24);
        assert_eq!(config.length(), 24);
    }

    #[test]
    fn characters_come_from_enabled_alphabet() {
        let config = GeneratorConfig::new(30, &[CharClass::Upper, CharClass::Digit]);
        let alphabet = config.alphabet();
        let password = config.generate();
        assert!(password.chars().all(|c| alphabet.contains(c)));
        assert!(!password.chars().any(|c| LOWERCASE.contains(c)));
        assert!(!password.chars().any(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn alphabet_keeps_fixed_class_order() {
        let config = GeneratorConfig::new(10, &[CharClass::Symbol, CharClass::Upper]);
        let mut expected = String::from(UPPERCASE);
        expected.push_str(SYMBOLS);
        assert_eq!(config.alphabet(), expected);
    }

    #[test]
    fn empty_selection_falls_back_to_lowercase() {
        let config = GeneratorConfig::new(20, &[]);
        assert_eq!(config.alphabet(), LOWERCASE);
        let password = config.generate();
        assert_eq!(password.len(), 20);
        assert!(password.chars().all(|c| LOWERCASE.contains(c)));
    }

    #[test]
    fn set_classes_replaces_the_selection() {
        let mut config = GeneratorConfig::default();
        config.set_classes(&[CharClass::Digit]);
        assert!(config.is_enabled(CharClass::Digit));
        assert!(!config.is_enabled(CharClass::Upper));
        assert!(!config.is_enabled(CharClass::Lower));
        assert!(!config.is_enabled(CharClass::Symbol));
        assert_eq!(config.enabled_count(), 1);
    }

    #[test]
    fn repeated_draws_differ() {
        // Statistical, not exact: with a 62+ character alphabet and length
        // 36, ten identical draws in a row will not happen.
        let config = GeneratorConfig::default();
        let first = config.generate();
        let all_equal = (0..10).all(|_| config.generate() == first);
        assert!(!all_equal);
    }
}
