use rust_decimal::Decimal;

/// Normalizes raw user input into a [`Decimal`].
///
/// Strips every character that is not an ASCII digit, `.`, or `-` (so
/// currency punctuation like `$1,234.56` parses cleanly), then parses the
/// remainder. Empty or unparseable input yields [`Decimal::ZERO`] — this
/// function is total and is the single entry point for reading any numeric
/// field, whether for calculation or validation.
///
/// Idempotent on already-clean numeric strings: `normalize("1234.56")`
/// formats back to `"1234.56"`.
pub fn normalize(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    cleaned.parse().unwrap_or_else(|e| {
        tracing::debug!(input = %raw, "unparseable numeric input treated as zero: {}", e);
        Decimal::ZERO
    })
}
