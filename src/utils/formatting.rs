//! Formatting utilities used for CLI and export outputs.

/// Rupiah rendering with id-ID dot grouping: 1234567 → "Rp1.234.567".
/// Negative amounts carry a leading minus: "-Rp25.000".
pub fn rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    let lead = digits.len() % 3;
    if lead > 0 {
        grouped.push_str(&digits[..lead]);
    }
    for (i, chunk) in digits.as_bytes()[lead..].chunks(3).enumerate() {
        if lead > 0 || i > 0 {
            grouped.push('.');
        }
        grouped.push_str(std::str::from_utf8(chunk).unwrap());
    }

    if amount < 0 {
        format!("-Rp{}", grouped)
    } else {
        format!("Rp{}", grouped)
    }
}

/// Signed variant for surplus lines: "+Rp50.000" / "-Rp25.000" / "Rp0".
pub fn signed_rupiah(amount: i64) -> String {
    if amount > 0 {
        format!("+{}", rupiah(amount))
    } else {
        rupiah(amount)
    }
}

/// Compact money for narrow calendar cells: 1.2jt / 350k / 900 / -25k.
pub fn compact_money(amount: i64) -> String {
    if amount == 0 {
        return "0".to_string();
    }
    let abs = amount.abs();
    let sign = if amount < 0 { "-" } else { "" };

    if abs >= 1_000_000 {
        let jt = format!("{:.1}", abs as f64 / 1_000_000.0);
        format!("{}{}jt", sign, jt.trim_end_matches(".0"))
    } else if abs >= 1_000 {
        format!("{}{}k", sign, abs / 1_000)
    } else {
        format!("{}{}", sign, abs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupiah_grouping() {
        assert_eq!(rupiah(0), "Rp0");
        assert_eq!(rupiah(900), "Rp900");
        assert_eq!(rupiah(15_000), "Rp15.000");
        assert_eq!(rupiah(3_100_000), "Rp3.100.000");
        assert_eq!(rupiah(-25_000), "-Rp25.000");
    }

    #[test]
    fn signed_rupiah_marks_surplus_only() {
        assert_eq!(signed_rupiah(50_000), "+Rp50.000");
        assert_eq!(signed_rupiah(-25_000), "-Rp25.000");
        assert_eq!(signed_rupiah(0), "Rp0");
    }

    #[test]
    fn compact_money_tiers() {
        assert_eq!(compact_money(0), "0");
        assert_eq!(compact_money(900), "900");
        assert_eq!(compact_money(350_000), "350k");
        assert_eq!(compact_money(1_200_000), "1.2jt");
        assert_eq!(compact_money(2_000_000), "2jt");
        assert_eq!(compact_money(-25_000), "-25k");
    }
}
