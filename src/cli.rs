use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "idpresent",
    version,
    about = "Verify and decrypt Wallet identity presentment envelopes"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a fresh session nonce (hex)
    Nonce,
    /// Print the session transcript and its infoHash for a session
    Transcript(TranscriptArgs),
    /// Verify and decrypt a presentment envelope, printing the device response as JSON
    Open(OpenArgs),
    /// Seal a CBOR device response into a presentment envelope (device-side test tool)
    Seal(SealArgs),
}

/// Identifiers agreed with Apple out-of-band.
#[derive(Args)]
pub struct RelyingPartyArgs {
    /// Merchant identifier registered for identity verification
    #[arg(long, env = "IDPRESENT_MERCHANT_ID")]
    pub merchant_id: String,

    /// Developer team identifier
    #[arg(long, env = "IDPRESENT_TEAM_ID")]
    pub team_id: String,
}

#[derive(Parser)]
pub struct TranscriptArgs {
    #[command(flatten)]
    pub relying_party: RelyingPartyArgs,

    /// Session nonce sent to the device (hex)
    #[arg(long, value_name = "HEX")]
    pub nonce: String,

    /// Verifier public key (SPKI PEM)
    #[arg(long, value_name = "PATH")]
    pub public_key: PathBuf,
}

#[derive(Parser)]
pub struct OpenArgs {
    #[command(flatten)]
    pub relying_party: RelyingPartyArgs,

    /// Envelope file (hex text or raw CBOR)
    #[arg(long, value_name = "PATH")]
    pub envelope: PathBuf,

    /// Verifier private key (SEC1 or PKCS#8 PEM, mode 0600)
    #[arg(long, value_name = "PATH")]
    pub private_key: PathBuf,

    /// Verifier public key (SPKI PEM)
    #[arg(long, value_name = "PATH")]
    pub public_key: PathBuf,

    /// Session nonce issued for this presentment (hex)
    #[arg(long, value_name = "HEX")]
    pub nonce: String,
}

#[derive(Parser)]
pub struct SealArgs {
    #[command(flatten)]
    pub relying_party: RelyingPartyArgs,

    /// CBOR-encoded DeviceResponse (hex text or raw CBOR)
    #[arg(long, value_name = "PATH")]
    pub claims: PathBuf,

    /// Verifier public key (SPKI PEM)
    #[arg(long, value_name = "PATH")]
    pub public_key: PathBuf,

    /// Session nonce issued by the verifier (hex)
    #[arg(long, value_name = "HEX")]
    pub nonce: String,
}

impl RelyingPartyArgs {
    pub fn to_relying_party(&self) -> anyhow::Result<idpresent::config::RelyingParty> {
        Ok(idpresent::config::RelyingParty::new(
            self.merchant_id.as_str(),
            self.team_id.as_str(),
        )?)
    }
}
