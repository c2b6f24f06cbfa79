use idpresent::crypto::P256Opener;
use idpresent::envelope::open_presentment;
use idpresent::keys::store;
use idpresent::session::SessionNonce;
use idpresent::util::read_hex_or_raw;

use crate::cli::OpenArgs;

/// Verify, decrypt and print a presentment.
///
/// Library failures are logged with their cause at `warn` and reported to the
/// user only as a rejected presentment.
pub fn run_open(args: OpenArgs) -> anyhow::Result<()> {
    let relying_party = args.relying_party.to_relying_party()?;
    let nonce = SessionNonce::from_hex(&args.nonce)?;
    let private_key = store::load_private_key(&args.private_key)?;
    let public_key = store::load_public_key(&args.public_key)?;
    let envelope = read_hex_or_raw(&args.envelope)?;

    let presentment = match open_presentment(
        &envelope,
        &relying_party,
        &P256Opener,
        &private_key,
        &public_key,
        nonce.as_bytes(),
    ) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "presentment open failed");
            anyhow::bail!(e.user_message());
        }
    };

    if !presentment.response.is_supported_version() {
        tracing::warn!(
            version = %presentment.response.version,
            "device response uses an unexpected version"
        );
    }

    println!("{}", serde_json::to_string_pretty(&presentment.response)?);
    Ok(())
}
