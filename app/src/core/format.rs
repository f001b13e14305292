//! Display formatting. Values are rounded to two decimals only here, the
//! calculations keep full precision.

const NBSP: char = '\u{a0}';

pub fn format_kwh(kwh: f64) -> String {
    format!("{:.2} kWh", kwh)
}

/// Brazilian real, pt-BR style: `R$ 1.234,56`, `-R$ 0,50`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    format!(
        "{}R${}{},{:02}",
        sign,
        NBSP,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Two decimals with a decimal comma, as used inside pt-BR sentences.
pub fn format_decimal_pt_br(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!("{}{},{:02}", sign, cents / 100, cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    grouped
}
