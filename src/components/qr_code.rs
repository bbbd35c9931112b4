use leptos::prelude::*;

/// Inline SVG QR code for `data`, or nothing when `data` is empty.
#[component]
pub fn QrCode(
    /// The data to encode in the QR code
    #[prop(into)]
    data: Signal<String>,
    /// Smallest edge of the rendered image, in pixels
    #[prop(default = 200)]
    size: u32,
) -> impl IntoView {
    let svg_string = move || {
        let data_val = data.get();
        if data_val.is_empty() {
            return String::new();
        }

        // Uppercase bech32 fits the denser alphanumeric QR mode.
        match qrcode::QrCode::new(data_val.to_uppercase().as_bytes()) {
            Ok(code) => code
                .render::<qrcode::render::svg::Color>()
                .min_dimensions(size, size)
                .dark_color(qrcode::render::svg::Color("#000000"))
                .light_color(qrcode::render::svg::Color("#ffffff"))
                .quiet_zone(true)
                .build(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to generate QR code");
                String::from("<p>Failed to generate QR code</p>")
            }
        }
    };

    view! {
        <div class="qr-code" inner_html=svg_string />
    }
}
