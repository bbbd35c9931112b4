//! Interpretation of BOLT #11 invoices for display in a note.
//!
//! Structural parsing lives behind [`InvoiceDecoder`]; this module only turns
//! the decoded sections into an [`InvoiceSummary`] and formats it.

pub mod decoder;
pub mod format;
pub mod summary;

pub use decoder::{Bolt11Decoder, DecodeError, DecodedInvoice, InvoiceDecoder, Section, SectionValue};
pub use summary::{derive, derive_or_empty, now_unix, InvoiceSummary};
