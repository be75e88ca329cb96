//! Display formatting shared by cards and lists

use chrono::{DateTime, Utc};

/// Smallest count that rounds to "1000.0K" at one decimal
const MILLION_CUTOFF: u64 = 999_950;

/// 234, 1.2K, 1.2M
pub fn compact_count(n: u64) -> String {
    if n >= MILLION_CUTOFF {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

fn plural(n: i64, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("hace 1 {singular}")
    } else {
        format!("hace {n} {plural}")
    }
}

/// "hace 5 minutos", "hace 2 horas"; dates older than a month are printed in full
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();
    if minutes < 1 {
        "hace un momento".to_string()
    } else if hours < 1 {
        plural(minutes, "minuto", "minutos")
    } else if days < 1 {
        plural(hours, "hora", "horas")
    } else if days < 30 {
        plural(days, "día", "días")
    } else {
        then.format("%d/%m/%Y").to_string()
    }
}

/// Whole euros with dot thousands separators: 100000.0 -> "100.000€"
pub fn euros(amount: f64) -> String {
    let rounded = amount.round();
    let digits = (rounded.abs() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}€")
}

/// Two decimals, for payment summaries
pub fn euros_cents(amount: f64) -> String {
    format!("{amount:.2}€")
}
