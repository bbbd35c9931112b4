//! Display helpers for invoice amounts and expiry windows.

/// Strip optional `lightning:` URI prefix and whitespace.
pub fn sanitize_payment_request(input: &str) -> String {
    let trimmed = input.trim();
    let without_scheme = match trimmed.get(..10) {
        Some(scheme) if scheme.eq_ignore_ascii_case("lightning:") => &trimmed[10..],
        _ => trimmed,
    };
    without_scheme.trim().to_string()
}

/// Amount line shown on the invoice card, e.g. `2,500 sats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountLabel {
    pub value: String,
    pub unit: &'static str,
}

impl std::fmt::Display for AmountLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Any-amount invoices (zero msats) render nothing.
pub fn amount_label(amount_msats: u64) -> Option<AmountLabel> {
    (amount_msats > 0).then(|| AmountLabel {
        value: format_sats(amount_msats),
        unit: sat_unit(amount_msats),
    })
}

/// Singular only for exactly one satoshi.
fn sat_unit(amount_msats: u64) -> &'static str {
    if amount_msats == 1_000 {
        "sat"
    } else {
        "sats"
    }
}

/// Format a millisatoshi amount as satoshis with grouped thousands and up to
/// three fractional digits.
fn format_sats(amount_msats: u64) -> String {
    let whole = group_thousands(amount_msats / 1_000);
    let fraction = amount_msats % 1_000;
    if fraction == 0 {
        return whole;
    }

    let digits = format!("{fraction:03}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format seconds into a short human-readable duration (e.g. "1h 30m").
pub fn format_expiry(seconds: u64) -> String {
    if seconds == 0 {
        return "0s".to_string();
    }

    let mut remaining = seconds;
    let days = remaining / 86_400;
    remaining %= 86_400;
    let hours = remaining / 3_600;
    remaining %= 3_600;
    let minutes = remaining / 60;
    let secs = remaining % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if secs > 0 || parts.is_empty() {
        parts.push(format!("{secs}s"));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_has_no_label() {
        assert_eq!(amount_label(0), None);
    }

    fn label(amount_msats: u64) -> Option<String> {
        amount_label(amount_msats).map(|label| label.to_string())
    }

    #[test]
    fn one_sat_is_singular() {
        assert_eq!(
            amount_label(1_000),
            Some(AmountLabel {
                value: "1".to_string(),
                unit: "sat",
            })
        );
    }

    #[test]
    fn other_amounts_are_plural() {
        assert_eq!(label(2_000).as_deref(), Some("2 sats"));
        assert_eq!(label(1_500).as_deref(), Some("1.5 sats"));
        assert_eq!(label(500).as_deref(), Some("0.5 sats"));
        assert_eq!(label(1_001).as_deref(), Some("1.001 sats"));
        assert_eq!(label(2_500_000).as_deref(), Some("2,500 sats"));
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_sats(999_000), "999");
        assert_eq!(format_sats(2_500_000), "2,500");
        assert_eq!(format_sats(1_234_567_000), "1,234,567");
        assert_eq!(format_sats(100_000_000_000), "100,000,000");
    }

    #[test]
    fn keeps_millisatoshi_precision() {
        assert_eq!(format_sats(1_001), "1.001");
        assert_eq!(format_sats(12_345_670), "12,345.67");
        assert_eq!(format_sats(1), "0.001");
    }

    #[test]
    fn strips_lightning_scheme() {
        assert_eq!(sanitize_payment_request(" lightning:lnbc1abc "), "lnbc1abc");
        assert_eq!(sanitize_payment_request("LIGHTNING:LNBC1ABC"), "LNBC1ABC");
        assert_eq!(sanitize_payment_request("lnbc1abc"), "lnbc1abc");
        assert_eq!(sanitize_payment_request("   "), "");
    }

    #[test]
    fn formats_expiry_windows() {
        assert_eq!(format_expiry(0), "0s");
        assert_eq!(format_expiry(45), "45s");
        assert_eq!(format_expiry(3_600), "1h");
        assert_eq!(format_expiry(5_400), "1h 30m");
        assert_eq!(format_expiry(90_061), "1d 1h 1m 1s");
    }
}
