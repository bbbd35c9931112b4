use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::payment::capability::{PaymentCapability, PaymentError};

/// WebLN provider injected by a browser extension at `window.webln`.
pub struct WeblnCapability {
    provider: JsValue,
}

impl WeblnCapability {
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let provider = js_sys::Reflect::get(&window, &"webln".into()).ok()?;

        if provider.is_undefined() || provider.is_null() {
            return None;
        }

        Some(Self { provider })
    }

    fn method(&self, name: &str) -> Result<js_sys::Function, PaymentError> {
        js_sys::Reflect::get(&self.provider, &name.into())
            .ok()
            .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
            .ok_or(PaymentError::Unavailable)
    }
}

#[async_trait(?Send)]
impl PaymentCapability for WeblnCapability {
    fn enabled(&self) -> bool {
        js_sys::Reflect::get(&self.provider, &"enabled".into())
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    async fn enable(&self) -> Result<(), PaymentError> {
        let promise = self
            .method("enable")?
            .call0(&self.provider)
            .map_err(rejection)
            .and_then(into_promise)?;

        JsFuture::from(promise).await.map_err(rejection)?;

        Ok(())
    }

    async fn send_payment(&self, invoice: &str) -> Result<(), PaymentError> {
        let promise = self
            .method("sendPayment")?
            .call1(&self.provider, &JsValue::from_str(invoice))
            .map_err(rejection)
            .and_then(into_promise)?;

        JsFuture::from(promise).await.map_err(rejection)?;

        Ok(())
    }
}

fn into_promise(value: JsValue) -> Result<js_sys::Promise, PaymentError> {
    value
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| PaymentError::Rejected("wallet did not return a promise".into()))
}

fn rejection(value: JsValue) -> PaymentError {
    let reason = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"));

    PaymentError::Rejected(reason)
}
