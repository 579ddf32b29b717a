//! Display formatting for the Brazilian advisor screens
//!
//! Currency is Real (R$) with `.` thousands and `,` decimals; dates are
//! `dd/mm/yyyy`.

use chrono::NaiveDate;

use crate::calendar::MonthKey;

/// Group the integer part with `.` every three digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format with `decimals` places using pt-BR separators, e.g. `1.234,56`
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    // Avoid "-0,00"
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// `R$ 1.234,56`; negatives as `-R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let number = format_number(value, 2);
    match number.strip_prefix('-') {
        Some(abs) => format!("-R$ {}", abs),
        None => format!("R$ {}", number),
    }
}

/// Percent with the given decimals, e.g. `12,5%`
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    format!("{}%", format_number(value, decimals))
}

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `mm/yyyy`
pub fn format_month(month: MonthKey) -> String {
    format!("{:02}/{:04}", month.month(), month.year())
}

/// Currency for an optional value, `N/A` when absent
pub fn format_optional_currency(value: Option<f64>) -> String {
    value.map(format_currency).unwrap_or_else(|| "N/A".to_string())
}
