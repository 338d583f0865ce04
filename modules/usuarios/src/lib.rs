// === PUBLIC CONTRACT ===
// Pure models, the error type and the in-process client trait.
pub mod contract;

pub use contract::{client, error, model};

// === MODULE WIRING ===
pub mod module;
pub use module::Usuarios;

// === INTERNAL MODULES ===
// Exposed for integration tests; consumers should stick to `contract` and `Usuarios`.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;
