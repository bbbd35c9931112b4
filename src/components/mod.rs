pub mod note_feed;
pub mod note_invoice;
pub mod pay_dialog;
pub mod qr_code;

// Re-export components
pub use note_feed::{Feed, NoteText};
pub use note_invoice::NoteInvoice;
pub use pay_dialog::PayInvoiceDialog;
pub use qr_code::QrCode;
