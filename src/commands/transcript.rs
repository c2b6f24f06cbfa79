use idpresent::digest::sha256;
use idpresent::keys::{fingerprint, store};
use idpresent::session::SessionNonce;
use idpresent::transcript::build_transcript;

use crate::cli::TranscriptArgs;

/// Print the session transcript and the infoHash a device will commit to.
pub fn run_transcript(args: TranscriptArgs) -> anyhow::Result<()> {
    let relying_party = args.relying_party.to_relying_party()?;
    let nonce = SessionNonce::from_hex(&args.nonce)?;
    let public_key = store::load_public_key(&args.public_key)?;
    tracing::info!(
        key = %fingerprint::short_fingerprint(&public_key),
        "building session transcript"
    );

    let transcript = build_transcript(
        relying_party.merchant_id(),
        relying_party.team_id(),
        nonce.as_bytes(),
        &sha256(&public_key),
    )?;

    println!("Transcript: {}", hex::encode(&transcript));
    println!("InfoHash:   {}", hex::encode(sha256(&transcript)));
    println!("PkRHash:    {}", hex::encode(sha256(&public_key)));
    Ok(())
}
