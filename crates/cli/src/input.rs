//! Free-text input parsing.

use orderdesk_core::{DomainError, DomainResult};

/// Parse a decimal amount into the smallest currency unit (cents).
///
/// Accepts `999`, `499.5`, `12.99`; at most two fraction digits.
pub fn parse_price(input: &str) -> DomainResult<u64> {
    let trimmed = input.trim();
    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (trimmed, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::validation(format!(
            "not a valid price: {trimmed:?}"
        )));
    }

    let mut cents = whole
        .parse::<u64>()
        .ok()
        .and_then(|units| units.checked_mul(100))
        .ok_or_else(|| DomainError::validation(format!("price out of range: {trimmed:?}")))?;

    if let Some(frac) = frac {
        if frac.is_empty() || frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "not a valid price: {trimmed:?}"
            )));
        }
        let mut fraction: u64 = frac.parse().unwrap_or(0);
        if frac.len() == 1 {
            fraction *= 10;
        }
        cents = cents
            .checked_add(fraction)
            .ok_or_else(|| DomainError::validation(format!("price out of range: {trimmed:?}")))?;
    }

    Ok(cents)
}

/// Format cents back into a decimal amount for display.
pub fn format_price(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Parse a requested quantity. Must be a positive integer.
pub fn parse_quantity(input: &str) -> DomainResult<u32> {
    let quantity = input
        .trim()
        .parse::<u32>()
        .map_err(|e| DomainError::validation(format!("not a valid quantity: {e}")))?;
    if quantity == 0 {
        return Err(DomainError::validation("quantity must be positive"));
    }
    Ok(quantity)
}
