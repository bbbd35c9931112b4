// Server functions module is always available (contains #[server] macros)
pub mod functions;

#[cfg(feature = "ssr")]
pub use functions::AppState;
