/// Format a float as a dollar amount with thousands separators: $1,234.56
pub fn money(val: f64) -> String {
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((&cents, "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if val < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{dec_part}")
}

/// Format a percentage with one decimal: 67.3%
pub fn pct(val: f64) -> String {
    format!("{val:.1}%")
}
