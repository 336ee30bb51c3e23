/// Two-slot ring of the most recent passwords. Pushing shifts the current
/// value into the previous slot; anything older is dropped.
#[derive(Debug, Default)]
pub struct History {
    slots: [Option<String>; 2],
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub fn push(&mut self, password: String) {
        self.slots[1] = self.slots[0].take();
        self.slots[0] = Some(password);
    }

    pub fn current(&self) -> Option<&str> {
        self.slots[0].as_deref()
    }

    pub fn previous(&self) -> Option<&str> {
        self.slots[1].as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratorConfig;

    #[test]
    fn starts_empty() {
        let history = History::new();
        assert_eq!(history.current(), None);
        assert_eq!(history.previous(), None);
    }

    #[test]
    fn first_push_fills_current_only() {
        let mut history = History::new();
        history.push("first".to_string());
        assert_eq!(history.current(), Some("first"));
        assert_eq!(history.previous(), None);
    }

    #[test]
    fn second_push_shifts_current_into_previous() {
        let mut history = History::new();
        history.push("first".to_string());
        history.push("second".to_string());
        assert_eq!(history.current(), Some("second"));
        assert_eq!(history.previous(), Some("first"));
    }

    #[test]
    fn shift_holds_for_generated_passwords() {
        let config = GeneratorConfig::default();
        let mut history = History::new();
        let first = config.generate();
        history.push(first.clone());
        let second = config.generate();
        history.push(second.clone());
        assert_eq!(history.current(), Some(second.as_str()));
        assert_eq!(history.previous(), Some(first.as_str()));
    }

    #[test]
    fn third_push_drops_the_oldest() {
        let mut history = History::new();
        history.push("first".to_string());
        history.push("second".to_string());
        history.push("third".to_string());
        assert_eq!(history.current(), Some("third"));
        assert_eq!(history.previous(), Some("second"));
    }
}
