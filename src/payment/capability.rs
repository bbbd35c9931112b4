use std::rc::Rc;

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("no payment capability available")]
    Unavailable,
    #[error("payment rejected: {0}")]
    Rejected(String),
}

/// A wallet agent able to pay BOLT #11 invoices on the user's behalf.
///
/// Futures are not `Send`: browser wallets live on the UI thread.
#[async_trait(?Send)]
pub trait PaymentCapability {
    /// Whether the agent is currently willing to pay.
    fn enabled(&self) -> bool;

    /// Ask the agent for permission to pay from this page. Agents that are
    /// always enabled need not override this.
    async fn enable(&self) -> Result<(), PaymentError> {
        Ok(())
    }

    /// Pay the invoice. Resolves once the wallet reports success.
    async fn send_payment(&self, invoice: &str) -> Result<(), PaymentError>;
}

/// Enable the agent unless it already is. Failure leaves it disabled, so the
/// card falls back to the manual dialog.
pub async fn ensure_enabled<C>(capability: &C) -> bool
where
    C: PaymentCapability + ?Sized,
{
    if capability.enabled() {
        return true;
    }

    match capability.enable().await {
        Ok(()) => capability.enabled(),
        Err(e) => {
            tracing::debug!(error = %e, "Wallet could not be enabled");
            false
        }
    }
}

/// The wallet agent available to this page, if any.
pub fn detect_capability() -> Option<Rc<dyn PaymentCapability>> {
    #[cfg(feature = "hydrate")]
    {
        crate::payment::webln::WeblnCapability::detect()
            .map(|webln| Rc::new(webln) as Rc<dyn PaymentCapability>)
    }

    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
