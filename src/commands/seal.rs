use anyhow::Context;
use idpresent::claims::{DeviceResponse, PresentmentPayload};
use idpresent::envelope::seal_presentment;
use idpresent::keys::store;
use idpresent::session::SessionNonce;
use idpresent::util::read_hex_or_raw;

use crate::cli::SealArgs;

/// Seal a device response the way a presenting device would and print the
/// envelope as hex. Intended for building test fixtures.
pub fn run_seal(args: SealArgs) -> anyhow::Result<()> {
    let relying_party = args.relying_party.to_relying_party()?;
    let nonce = SessionNonce::from_hex(&args.nonce)?;
    let public_key = store::load_public_key(&args.public_key)?;

    let claims = read_hex_or_raw(&args.claims)?;
    let identity: DeviceResponse = serde_cbor::from_slice(&claims)
        .with_context(|| format!("{} is not a CBOR DeviceResponse", args.claims.display()))?;
    let plaintext = PresentmentPayload { identity }.to_cbor()?;

    let envelope = seal_presentment(&plaintext, &relying_party, &public_key, nonce.as_bytes())?;
    println!("{}", hex::encode(envelope.to_cbor()?));
    Ok(())
}
