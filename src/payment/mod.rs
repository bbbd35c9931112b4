//! Paying an invoice from the card: the wallet capability seam and the
//! state machine driving the pay button.

pub mod capability;
pub mod flow;
#[cfg(feature = "hydrate")]
pub mod webln;

pub use capability::{detect_capability, ensure_enabled, PaymentCapability, PaymentError};
pub use flow::{submit, Initiation, PaymentFlow, PaymentState};
