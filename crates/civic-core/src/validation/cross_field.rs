use crate::field::FieldValue;

/// A constraint relating two fields. The error attaches to [`CrossRule::target`].
#[derive(Debug, Clone, PartialEq)]
pub enum CrossRule {
    /// `end` must be strictly after `start`
    DateAfter {
        start: String,
        end: String,
        message: String,
    },
    /// `upper` must be at least `lower`
    NotLess {
        lower: String,
        upper: String,
        message: String,
    },
    /// `value` must not exceed `limit`
    NotGreater {
        value: String,
        limit: String,
        message: String,
    },
}

impl CrossRule {
    pub fn date_after(start: &str, end: &str, message: impl Into<String>) -> Self {
        CrossRule::DateAfter {
            start: start.to_string(),
            end: end.to_string(),
            message: message.into(),
        }
    }

    pub fn not_less(lower: &str, upper: &str, message: impl Into<String>) -> Self {
        CrossRule::NotLess {
            lower: lower.to_string(),
            upper: upper.to_string(),
            message: message.into(),
        }
    }

    pub fn not_greater(value: &str, limit: &str, message: impl Into<String>) -> Self {
        CrossRule::NotGreater {
            value: value.to_string(),
            limit: limit.to_string(),
            message: message.into(),
        }
    }

    /// Both fields the rule reads
    pub fn fields(&self) -> [&str; 2] {
        match self {
            CrossRule::DateAfter { start, end, .. } => [start.as_str(), end.as_str()],
            CrossRule::NotLess { lower, upper, .. } => [lower.as_str(), upper.as_str()],
            CrossRule::NotGreater { value, limit, .. } => [value.as_str(), limit.as_str()],
        }
    }

    /// Field that receives the error
    pub fn target(&self) -> &str {
        match self {
            CrossRule::DateAfter { end, .. } => end,
            CrossRule::NotLess { upper, .. } => upper,
            CrossRule::NotGreater { value, .. } => value,
        }
    }

    pub fn references(&self, field: &str) -> bool {
        self.fields().contains(&field)
    }

    pub fn message(&self) -> &str {
        match self {
            CrossRule::DateAfter { message, .. }
            | CrossRule::NotLess { message, .. }
            | CrossRule::NotGreater { message, .. } => message,
        }
    }

    /// Returns the message when both values are present and the relation fails.
    /// Missing or mismatched values pass; requiredness is the field rules' job.
    pub fn check<'a>(&self, lookup: impl Fn(&str) -> Option<&'a FieldValue>) -> Option<String> {
        let [a, b] = self.fields();
        let (a, b) = (lookup(a)?, lookup(b)?);
        let failed = match (self, a, b) {
            (CrossRule::DateAfter { .. }, FieldValue::Date(Some(start)), FieldValue::Date(Some(end))) => {
                end <= start
            }
            (CrossRule::NotLess { .. }, FieldValue::Number(Some(lower)), FieldValue::Number(Some(upper))) => {
                upper < lower
            }
            (CrossRule::NotGreater { .. }, FieldValue::Number(Some(value)), FieldValue::Number(Some(limit))) => {
                value > limit
            }
            _ => false,
        };
        failed.then(|| self.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> FieldValue {
        FieldValue::date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_date_after_is_strict() {
        let rule = CrossRule::date_after(
            "start_date",
            "end_date",
            "La fecha de fin debe ser posterior a la de inicio",
        );
        let mut values = BTreeMap::new();
        values.insert("start_date".to_string(), date(2024, 12, 31));
        values.insert("end_date".to_string(), date(2024, 1, 1));
        assert!(rule.check(|k| values.get(k)).is_some());

        values.insert("end_date".to_string(), date(2024, 12, 31));
        assert!(rule.check(|k| values.get(k)).is_some());

        values.insert("end_date".to_string(), date(2025, 1, 1));
        assert!(rule.check(|k| values.get(k)).is_none());
        assert_eq!(rule.target(), "end_date");
    }

    #[test]
    fn test_numeric_relations() {
        let not_less = CrossRule::not_less("min", "max", "max < min");
        let not_greater = CrossRule::not_greater("investment", "amount", "too big");
        let mut values = BTreeMap::new();
        values.insert("min".to_string(), FieldValue::number(3.0));
        values.insert("max".to_string(), FieldValue::number(3.0));
        values.insert("investment".to_string(), FieldValue::number(600.0));
        values.insert("amount".to_string(), FieldValue::number(500.0));

        assert!(not_less.check(|k| values.get(k)).is_none());
        assert!(not_greater.check(|k| values.get(k)).is_some());

        values.insert("max".to_string(), FieldValue::number(2.0));
        assert!(not_less.check(|k| values.get(k)).is_some());
    }

    #[test]
    fn test_missing_value_passes() {
        let rule = CrossRule::date_after("a", "b", "msg");
        let mut values = BTreeMap::new();
        values.insert("a".to_string(), date(2024, 1, 1));
        values.insert("b".to_string(), FieldValue::Date(None));
        assert!(rule.check(|k| values.get(k)).is_none());
    }
}
