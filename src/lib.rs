/// idpresent library crate: verification and decryption of Wallet identity
/// presentment envelopes.
///
/// The binary is a thin layer over these modules; integration tests under
/// `tests/` use them directly via `use idpresent::envelope::*` and friends.
pub mod claims;
pub mod config;
pub mod crypto;
pub mod digest;
pub mod envelope;
pub mod error;
pub mod keys;
pub mod session;
pub mod transcript;
pub mod util;

pub use envelope::{open_presentment, parse, seal_presentment, Envelope, Presentment};
pub use error::PresentmentError;
pub use transcript::build_transcript;
