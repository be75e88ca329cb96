use serde::Serialize;

/// Fraction of the maximum at which the counter turns to a warning
pub const WARNING_RATIO: f64 = 0.9;
/// Fraction of the maximum at which the counter turns to an error
pub const ERROR_RATIO: f64 = 0.98;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterTone {
    Normal,
    Warning,
    Error,
}

impl CounterTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            CounterTone::Normal => "text-muted",
            CounterTone::Warning => "text-warning",
            CounterTone::Error => "text-error",
        }
    }
}

/// Live character counter for a bounded text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharCounter {
    pub length: usize,
    pub max: usize,
}

impl CharCounter {
    pub fn new(text: &str, max: usize) -> Self {
        Self {
            length: text.chars().count(),
            max,
        }
    }

    pub fn tone(&self) -> CounterTone {
        if self.max == 0 {
            return CounterTone::Normal;
        }
        let ratio = self.length as f64 / self.max as f64;
        if ratio >= ERROR_RATIO {
            CounterTone::Error
        } else if ratio >= WARNING_RATIO {
            CounterTone::Warning
        } else {
            CounterTone::Normal
        }
    }

    pub fn is_over(&self) -> bool {
        self.length > self.max
    }

    pub fn label(&self) -> String {
        format!("{} / {}", self.length, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_thresholds() {
        let tone = |n: usize| CharCounter::new(&"x".repeat(n), 100).tone();
        assert_eq!(tone(0), CounterTone::Normal);
        assert_eq!(tone(89), CounterTone::Normal);
        assert_eq!(tone(90), CounterTone::Warning);
        assert_eq!(tone(95), CounterTone::Warning);
        assert_eq!(tone(98), CounterTone::Error);
        assert_eq!(tone(120), CounterTone::Error);
    }

    #[test]
    fn test_label_shows_raw_length() {
        let counter = CharCounter::new("hola mundo", 500);
        assert_eq!(counter.label(), "10 / 500");
        assert!(!counter.is_over());
        assert!(CharCounter::new("abcdef", 5).is_over());
    }
}
