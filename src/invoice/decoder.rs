use std::str::FromStr;

use lightning_invoice::{Bolt11Invoice, Bolt11InvoiceDescriptionRef};

use crate::invoice::format::sanitize_payment_request;

pub const AMOUNT: &str = "amount";
pub const TIMESTAMP: &str = "timestamp";
pub const EXPIRY: &str = "expiry";
pub const DESCRIPTION: &str = "description";
pub const DESCRIPTION_HASH: &str = "description_hash";
pub const PAYMENT_HASH: &str = "payment_hash";
pub const MIN_FINAL_CLTV_EXPIRY: &str = "min_final_cltv_expiry";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("empty invoice")]
    Empty,
    #[error("invalid invoice: {0}")]
    Invalid(String),
}

/// Value carried by a decoded invoice section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValue {
    Integer(u64),
    Text(String),
}

impl SectionValue {
    /// Numeric view of the value. Text that is not a plain non-negative
    /// integer yields `None`.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            SectionValue::Integer(value) => Some(*value),
            SectionValue::Text(text) => text.trim().parse().ok(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SectionValue::Text(text) => Some(text),
            SectionValue::Integer(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub value: SectionValue,
}

impl Section {
    pub fn new(name: impl Into<String>, value: SectionValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A BOLT #11 invoice broken into named sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedInvoice {
    pub sections: Vec<Section>,
}

impl DecodedInvoice {
    /// First section with the given name.
    pub fn section(&self, name: &str) -> Option<&SectionValue> {
        self.sections
            .iter()
            .find(|section| section.name == name)
            .map(|section| &section.value)
    }
}

/// Turns a raw invoice string into named sections.
pub trait InvoiceDecoder {
    fn decode(&self, raw: &str) -> Result<DecodedInvoice, DecodeError>;
}

/// Decoder backed by `lightning-invoice`. Signatures are checked as part of
/// parsing, so a tampered invoice is rejected outright.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bolt11Decoder;

impl InvoiceDecoder for Bolt11Decoder {
    fn decode(&self, raw: &str) -> Result<DecodedInvoice, DecodeError> {
        let cleaned = sanitize_payment_request(raw);
        if cleaned.is_empty() {
            return Err(DecodeError::Empty);
        }

        let invoice = Bolt11Invoice::from_str(&cleaned.to_lowercase())
            .map_err(|e| DecodeError::Invalid(e.to_string()))?;

        Ok(sections_of(&invoice))
    }
}

fn sections_of(invoice: &Bolt11Invoice) -> DecodedInvoice {
    let mut sections = Vec::new();

    // Any-amount invoices carry no amount section at all.
    if let Some(msats) = invoice.amount_milli_satoshis() {
        sections.push(Section::new(AMOUNT, SectionValue::Integer(msats)));
    }

    sections.push(Section::new(
        TIMESTAMP,
        SectionValue::Integer(invoice.duration_since_epoch().as_secs()),
    ));
    sections.push(Section::new(
        PAYMENT_HASH,
        SectionValue::Text(hex::encode(invoice.payment_hash().as_ref() as &[u8])),
    ));

    match invoice.description() {
        Bolt11InvoiceDescriptionRef::Direct(desc) => {
            sections.push(Section::new(DESCRIPTION, SectionValue::Text(desc.to_string())));
        }
        Bolt11InvoiceDescriptionRef::Hash(hash) => {
            sections.push(Section::new(
                DESCRIPTION_HASH,
                SectionValue::Text(hex::encode(hash.0.as_ref() as &[u8])),
            ));
        }
    }

    // `Bolt11Invoice::expiry_time` falls back to the default window; only a
    // tagged expiry is reported.
    if let Some(expiry) = invoice.clone().into_signed_raw().raw_invoice().expiry_time() {
        sections.push(Section::new(EXPIRY, SectionValue::Integer(expiry.as_seconds())));
    }
    sections.push(Section::new(
        MIN_FINAL_CLTV_EXPIRY,
        SectionValue::Integer(invoice.min_final_cltv_expiry_delta()),
    ));

    DecodedInvoice { sections }
}
