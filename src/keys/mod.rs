pub mod fingerprint;
pub mod store;
