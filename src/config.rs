//! Relying-party configuration.

use crate::digest::DigestAlgorithm;
use crate::error::ConfigError;

/// Environment variable consulted for the merchant identifier.
pub const MERCHANT_ID_ENV: &str = "IDPRESENT_MERCHANT_ID";

/// Environment variable consulted for the team identifier.
pub const TEAM_ID_ENV: &str = "IDPRESENT_TEAM_ID";

/// The identifiers a verifier agreed on with Apple out-of-band. Not secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelyingParty {
    merchant_id: String,
    team_id: String,
}

impl RelyingParty {
    pub fn new(merchant_id: impl Into<String>, team_id: impl Into<String>) -> Result<Self, ConfigError> {
        let merchant_id = merchant_id.into();
        let team_id = team_id.into();
        if merchant_id.trim().is_empty() {
            return Err(ConfigError::EmptyMerchantId);
        }
        if team_id.trim().is_empty() {
            return Err(ConfigError::EmptyTeamId);
        }
        Ok(RelyingParty {
            merchant_id,
            team_id,
        })
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    /// Hash used for both binding commitments. Fixed by the handover version.
    pub fn digest_algorithm(&self) -> DigestAlgorithm {
        DigestAlgorithm::Sha256
    }
}
