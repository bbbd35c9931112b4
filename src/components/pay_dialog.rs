use leptos::prelude::*;

use crate::components::QrCode;
use crate::invoice::format::format_expiry;
use crate::invoice::now_unix;

/// Manual payment surface: shows the invoice so it can be paid from any
/// wallet by scanning, copying, or following the `lightning:` link.
#[component]
pub fn PayInvoiceDialog(
    /// Dialog heading
    #[prop(into)]
    title: String,
    /// Raw BOLT #11 invoice
    #[prop(into)]
    invoice: Signal<String>,
    /// Absolute expiry in unix seconds, if the invoice has one
    #[prop(into)]
    expires_at: Signal<Option<u64>>,
    /// Whether the dialog is visible
    #[prop(into)]
    show: Signal<bool>,
    /// Called when the user dismisses the dialog
    on_close: Callback<()>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let wallet_link = move || format!("lightning:{}", invoice.get());

    let expiry_note = move || {
        expires_at.get().map(|at| {
            let remaining = at.saturating_sub(now_unix());
            format!("Expires in {}", format_expiry(remaining))
        })
    };

    let copy_invoice = move |_| {
        #[cfg(not(feature = "ssr"))]
        {
            let inv = invoice.get_untracked();
            if !inv.is_empty() {
                if let Some(window) = web_sys::window() {
                    let promise = window.navigator().clipboard().write_text(&inv);
                    leptos::task::spawn_local(async move {
                        match wasm_bindgen_futures::JsFuture::from(promise).await {
                            Ok(_) => set_copied.set(true),
                            Err(e) => tracing::debug!(error = ?e, "Clipboard write failed"),
                        }
                    });
                }
            }
        }
    };

    let close = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        set_copied.set(false);
        on_close.run(());
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal" on:click=close>
                <div class="modal-body pay-dialog" on:click=|ev| ev.stop_propagation()>
                    <h3>{title.clone()}</h3>

                    <div class="qr-container">
                        <QrCode data=invoice />
                    </div>

                    <Show when=move || expiry_note().is_some()>
                        <p class="invoice-expiry">{move || expiry_note().unwrap_or_default()}</p>
                    </Show>

                    <div class="invoice-display">
                        <code class="invoice-string">{move || invoice.get()}</code>
                        <button class="btn btn-secondary" type="button" on:click=copy_invoice>
                            {move || if copied.get() { "Copied!" } else { "Copy" }}
                        </button>
                    </div>

                    <div class="pay-dialog-actions">
                        <a class="btn btn-primary" href=wallet_link>
                            "Open Wallet"
                        </a>
                        <button class="btn btn-secondary" type="button" on:click=close>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
