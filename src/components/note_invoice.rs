use leptos::prelude::*;

use crate::components::PayInvoiceDialog;
use crate::invoice::format::amount_label;
use crate::invoice::{derive_or_empty, now_unix, Bolt11Decoder};
use crate::payment::{detect_capability, ensure_enabled, submit, Initiation, PaymentFlow};

/// Lightning invoice card shown inline in a note.
#[component]
pub fn NoteInvoice(
    /// Raw BOLT #11 invoice
    #[prop(into)]
    invoice: Signal<String>,
) -> impl IntoView {
    // Derived once per invoice string; expiry is not re-checked on a timer.
    let summary = Memo::new(move |_| derive_or_empty(&Bolt11Decoder, &invoice.get(), now_unix()));
    let flow = RwSignal::new(PaymentFlow::new());

    // Effects only run in the browser, where the wallet lives.
    Effect::new(move |_| {
        if let Some(capability) = detect_capability() {
            leptos::task::spawn_local(async move {
                ensure_enabled(&*capability).await;
            });
        }
    });

    let is_expired = move || summary.with(|s| s.is_expired);
    let is_paid = move || flow.with(PaymentFlow::is_paid);
    let in_flight = move || flow.with(PaymentFlow::is_in_flight);

    let pay_invoice = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();

        let capability = detect_capability();
        let enabled = capability.as_ref().is_some_and(|c| c.enabled());
        let expired = summary.with_untracked(|s| s.is_expired);

        let initiation = flow.try_update(|f| f.begin(expired, enabled));
        if initiation != Some(Initiation::Submit) {
            return;
        }

        let invoice = invoice.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = submit(capability.as_deref(), &invoice).await;
            flow.update(|f| f.finish(outcome));
        });
    };

    let close_dialog = Callback::new(move |_| flow.update(PaymentFlow::close_dialog));

    let card_class = move || {
        let mut class = String::from("note-invoice flex");
        if is_expired() {
            class.push_str(" expired");
        }
        if is_paid() {
            class.push_str(" paid");
        }
        class
    };

    view! {
        <div class=card_class>
            <div class="invoice-header">
                <h4>"Lightning Invoice"</h4>
                <ZapCircle />
                <PayInvoiceDialog
                    title="Pay Invoice"
                    invoice=invoice
                    expires_at=Signal::derive(move || summary.with(|s| s.expires_at))
                    show=Signal::derive(move || flow.with(PaymentFlow::is_dialog_open))
                    on_close=close_dialog
                />
            </div>

            <p class="invoice-amount">
                {move || {
                    amount_label(summary.with(|s| s.amount_msats))
                        .map(|label| {
                            view! {
                                {label.value}
                                " "
                                <span class="sats">{label.unit}</span>
                            }
                        })
                }}
            </p>

            <div class="invoice-body">
                {move || summary.with(|s| s.description.clone()).map(|d| view! { <p>{d}</p> })}
                {move || {
                    if is_paid() {
                        view! { <div class="paid">"Paid"</div> }.into_any()
                    } else {
                        view! {
                            <button
                                type="button"
                                disabled=move || is_expired() || in_flight()
                                on:click=pay_invoice
                            >
                                {move || {
                                    if is_expired() {
                                        "Expired"
                                    } else if in_flight() {
                                        "Paying..."
                                    } else {
                                        "Pay"
                                    }
                                }}
                            </button>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ZapCircle() -> impl IntoView {
    view! {
        <svg class="zap-circle" width="32" height="32" viewBox="0 0 32 32" fill="none">
            <circle cx="16" cy="16" r="15" stroke="currentColor" stroke-width="2" />
            <path d="M17.5 6L9 18h6l-1.5 8L22 14h-6l1.5-8z" fill="currentColor" />
        </svg>
    }
}
