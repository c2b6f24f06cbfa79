use idpresent::session::SessionNonce;

/// Print a fresh session nonce. The caller must retain it until the device
/// answers; the same bytes are required to open the presentment.
pub fn run_nonce() -> anyhow::Result<()> {
    let nonce = SessionNonce::generate();
    println!("{}", nonce.to_hex());
    Ok(())
}
