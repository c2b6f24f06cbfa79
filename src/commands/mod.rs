pub mod nonce;
pub mod open;
pub mod seal;
pub mod transcript;
