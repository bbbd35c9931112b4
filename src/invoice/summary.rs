use chrono::Utc;

use crate::invoice::decoder::{
    DecodeError, InvoiceDecoder, SectionValue, AMOUNT, DESCRIPTION, EXPIRY, TIMESTAMP,
};

/// What the invoice card shows, derived from the raw invoice string and the
/// time of derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceSummary {
    pub amount_msats: u64,
    /// Absolute expiry in unix seconds. `None` means the invoice never expires.
    pub expires_at: Option<u64>,
    pub description: Option<String>,
    pub is_expired: bool,
}

impl InvoiceSummary {
    /// Summary shown when nothing could be decoded: any amount, no expiry,
    /// no description.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Current wall-clock time in unix seconds.
pub fn now_unix() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

/// Derive the summary for `raw` as seen at `now`.
///
/// Every section is optional. A section that should be numeric but isn't is
/// treated as missing.
pub fn derive<D>(decoder: &D, raw: &str, now: u64) -> Result<InvoiceSummary, DecodeError>
where
    D: InvoiceDecoder + ?Sized,
{
    let decoded = decoder.decode(raw)?;

    let number = |name: &str| decoded.section(name).and_then(SectionValue::as_number);

    let amount_msats = number(AMOUNT).unwrap_or(0);
    let expires_at = match (number(TIMESTAMP), number(EXPIRY)) {
        (Some(timestamp), Some(expiry)) => Some(timestamp.saturating_add(expiry)),
        _ => None,
    };
    let description = decoded
        .section(DESCRIPTION)
        .and_then(SectionValue::as_text)
        .map(str::to_string);

    Ok(InvoiceSummary {
        amount_msats,
        expires_at,
        description,
        is_expired: expires_at.is_some_and(|at| at < now),
    })
}

/// Like [`derive`], but a malformed invoice degrades to
/// [`InvoiceSummary::empty`] instead of failing.
pub fn derive_or_empty<D>(decoder: &D, raw: &str, now: u64) -> InvoiceSummary
where
    D: InvoiceDecoder + ?Sized,
{
    match derive(decoder, raw, now) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode invoice, showing empty summary");
            InvoiceSummary::empty()
        }
    }
}
