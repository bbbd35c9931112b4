use crate::invoice::InvoiceSummary;
use crate::payment::capability::{PaymentCapability, PaymentError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentState {
    Unpaid { dialog_open: bool },
    /// A wallet payment has been submitted and not yet resolved.
    InFlight,
    /// Terminal.
    Paid,
}

impl Default for PaymentState {
    fn default() -> Self {
        PaymentState::Unpaid { dialog_open: false }
    }
}

/// What the caller must do after [`PaymentFlow::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initiation {
    /// Nothing happened: the invoice is expired, already paid, or a payment
    /// is outstanding.
    Ignored,
    /// No usable wallet; the manual payment dialog is now open.
    OpenDialog,
    /// Submit the invoice to the wallet, then report back through
    /// [`PaymentFlow::finish`].
    Submit,
}

/// Payment state of one invoice card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentFlow {
    state: PaymentState,
}

impl PaymentFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PaymentState {
        self.state
    }

    pub fn is_paid(&self) -> bool {
        self.state == PaymentState::Paid
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == PaymentState::InFlight
    }

    pub fn is_dialog_open(&self) -> bool {
        self.state == PaymentState::Unpaid { dialog_open: true }
    }

    /// Handle a press of the pay button.
    pub fn begin(&mut self, is_expired: bool, capability_enabled: bool) -> Initiation {
        if is_expired {
            tracing::debug!("Ignoring payment request for expired invoice");
            return Initiation::Ignored;
        }

        match self.state {
            PaymentState::Paid | PaymentState::InFlight => Initiation::Ignored,
            PaymentState::Unpaid { .. } if !capability_enabled => {
                self.state = PaymentState::Unpaid { dialog_open: true };
                Initiation::OpenDialog
            }
            PaymentState::Unpaid { .. } => {
                self.state = PaymentState::InFlight;
                Initiation::Submit
            }
        }
    }

    /// Record the wallet's answer to a submitted payment.
    pub fn finish(&mut self, outcome: Result<(), PaymentError>) {
        if self.state != PaymentState::InFlight {
            tracing::debug!(state = ?self.state, "Ignoring payment result outside of a payment");
            return;
        }

        match outcome {
            Ok(()) => {
                tracing::debug!("Invoice paid through wallet");
                self.state = PaymentState::Paid;
            }
            Err(e) => {
                tracing::info!(error = %e, "Wallet payment failed, falling back to manual payment");
                self.state = PaymentState::Unpaid { dialog_open: true };
            }
        }
    }

    pub fn close_dialog(&mut self) {
        if let PaymentState::Unpaid { dialog_open: true } = self.state {
            self.state = PaymentState::Unpaid { dialog_open: false };
        }
    }

    /// Run a whole pay-button press: begin, submit to the wallet if one is
    /// usable, and record the result.
    pub async fn initiate<C>(
        &mut self,
        summary: &InvoiceSummary,
        capability: Option<&C>,
        invoice: &str,
    ) -> PaymentState
    where
        C: PaymentCapability + ?Sized,
    {
        let enabled = capability.is_some_and(|c| c.enabled());

        if let Initiation::Submit = self.begin(summary.is_expired, enabled) {
            self.finish(submit(capability, invoice).await);
        }

        self.state
    }
}

/// Hand the invoice to the wallet. A missing wallet counts as a failed
/// payment so the flow never stays in flight.
pub async fn submit<C>(capability: Option<&C>, invoice: &str) -> Result<(), PaymentError>
where
    C: PaymentCapability + ?Sized,
{
    match capability {
        Some(capability) => capability.send_payment(invoice).await,
        None => Err(PaymentError::Unavailable),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use super::*;

    const INVOICE: &str = "lnbc10n1ptest";

    struct FakeWallet {
        enabled: bool,
        outcome: Result<(), PaymentError>,
        calls: Cell<usize>,
        paid: RefCell<Vec<String>>,
    }

    impl FakeWallet {
        fn new(enabled: bool, outcome: Result<(), PaymentError>) -> Self {
            Self {
                enabled,
                outcome,
                calls: Cell::new(0),
                paid: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl PaymentCapability for FakeWallet {
        fn enabled(&self) -> bool {
            self.enabled
        }

        async fn send_payment(&self, invoice: &str) -> Result<(), PaymentError> {
            self.calls.set(self.calls.get() + 1);
            self.paid.borrow_mut().push(invoice.to_string());
            self.outcome.clone()
        }
    }

    fn live() -> InvoiceSummary {
        InvoiceSummary {
            amount_msats: 10_000,
            expires_at: Some(2_000),
            description: None,
            is_expired: false,
        }
    }

    fn expired() -> InvoiceSummary {
        InvoiceSummary {
            is_expired: true,
            ..live()
        }
    }

    #[test]
    fn starts_unpaid_with_dialog_closed() {
        let flow = PaymentFlow::new();
        assert_eq!(flow.state(), PaymentState::Unpaid { dialog_open: false });
        assert!(!flow.is_paid());
        assert!(!flow.is_dialog_open());
    }

    #[tokio::test]
    async fn successful_wallet_payment_marks_paid() {
        let wallet = FakeWallet::new(true, Ok(()));
        let mut flow = PaymentFlow::new();

        let state = flow.initiate(&live(), Some(&wallet), INVOICE).await;

        assert_eq!(state, PaymentState::Paid);
        assert!(!flow.is_dialog_open());
        assert_eq!(*wallet.paid.borrow(), vec![INVOICE.to_string()]);
    }

    #[tokio::test]
    async fn failed_wallet_payment_opens_dialog() {
        let wallet = FakeWallet::new(true, Err(PaymentError::Rejected("user declined".into())));
        let mut flow = PaymentFlow::new();

        let state = flow.initiate(&live(), Some(&wallet), INVOICE).await;

        assert_eq!(state, PaymentState::Unpaid { dialog_open: true });
        assert!(!flow.is_paid());
        assert_eq!(wallet.calls.get(), 1);
    }

    #[tokio::test]
    async fn disabled_wallet_opens_dialog_without_paying() {
        let wallet = FakeWallet::new(false, Ok(()));
        let mut flow = PaymentFlow::new();

        let state = flow.initiate(&live(), Some(&wallet), INVOICE).await;

        assert_eq!(state, PaymentState::Unpaid { dialog_open: true });
        assert_eq!(wallet.calls.get(), 0);
    }

    #[tokio::test]
    async fn missing_wallet_opens_dialog() {
        let mut flow = PaymentFlow::new();

        let state = flow.initiate::<FakeWallet>(&live(), None, INVOICE).await;

        assert_eq!(state, PaymentState::Unpaid { dialog_open: true });
    }

    #[tokio::test]
    async fn expired_invoice_is_inert() {
        for wallet in [
            Some(FakeWallet::new(true, Ok(()))),
            Some(FakeWallet::new(false, Ok(()))),
            None,
        ] {
            let mut flow = PaymentFlow::new();

            let state = flow.initiate(&expired(), wallet.as_ref(), INVOICE).await;

            assert_eq!(state, PaymentState::Unpaid { dialog_open: false });
            if let Some(wallet) = wallet {
                assert_eq!(wallet.calls.get(), 0);
            }
        }
    }

    #[test]
    fn second_press_while_in_flight_is_ignored() {
        let mut flow = PaymentFlow::new();

        assert_eq!(flow.begin(false, true), Initiation::Submit);
        assert!(flow.is_in_flight());
        assert_eq!(flow.begin(false, true), Initiation::Ignored);
        assert_eq!(flow.begin(false, false), Initiation::Ignored);

        flow.finish(Ok(()));
        assert!(flow.is_paid());
    }

    #[test]
    fn paid_is_terminal() {
        let mut flow = PaymentFlow::new();
        flow.begin(false, true);
        flow.finish(Ok(()));

        assert_eq!(flow.begin(false, true), Initiation::Ignored);
        flow.finish(Err(PaymentError::Unavailable));
        flow.close_dialog();

        assert_eq!(flow.state(), PaymentState::Paid);
    }

    #[test]
    fn stray_result_is_ignored() {
        let mut flow = PaymentFlow::new();
        flow.finish(Ok(()));
        assert_eq!(flow.state(), PaymentState::Unpaid { dialog_open: false });
    }

    #[test]
    fn dialog_can_be_closed_and_reopened() {
        let mut flow = PaymentFlow::new();

        assert_eq!(flow.begin(false, false), Initiation::OpenDialog);
        assert!(flow.is_dialog_open());

        flow.close_dialog();
        assert_eq!(flow.state(), PaymentState::Unpaid { dialog_open: false });

        flow.close_dialog();
        assert_eq!(flow.state(), PaymentState::Unpaid { dialog_open: false });

        assert_eq!(flow.begin(false, false), Initiation::OpenDialog);
        assert!(flow.is_dialog_open());
    }

    #[tokio::test]
    async fn submit_without_wallet_settles_the_payment() {
        let mut flow = PaymentFlow::new();
        assert_eq!(flow.begin(false, true), Initiation::Submit);

        let outcome = submit::<FakeWallet>(None, INVOICE).await;
        assert_eq!(outcome, Err(PaymentError::Unavailable));

        flow.finish(outcome);
        assert!(!flow.is_in_flight());
        assert!(flow.is_dialog_open());
    }

    #[tokio::test]
    async fn submit_forwards_the_invoice() {
        let wallet = FakeWallet::new(true, Ok(()));

        assert_eq!(submit(Some(&wallet), INVOICE).await, Ok(()));
        assert_eq!(*wallet.paid.borrow(), vec![INVOICE.to_string()]);
    }

    #[test]
    fn retry_from_open_dialog_submits_again() {
        let mut flow = PaymentFlow::new();
        flow.begin(false, true);
        flow.finish(Err(PaymentError::Rejected("timeout".into())));
        assert!(flow.is_dialog_open());

        assert_eq!(flow.begin(false, true), Initiation::Submit);
        flow.finish(Ok(()));
        assert!(flow.is_paid());
    }
}
