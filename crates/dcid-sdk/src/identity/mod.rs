//! Identity operations: encryption key custody, credential issuance,
//! IPFS-backed storage, and proof-based verification.
//!
//! Every operation here acts in a user context and takes the bearer token
//! explicitly. `None` sends the request authenticated by API key alone.

pub mod encryption;
pub mod ipfs;
pub mod issuer;
pub mod verification;

use crate::http::Transport;
use std::sync::Arc;

/// Facade over the identity sub-modules.
#[derive(Clone)]
pub struct IdentityClient {
    pub encryption: encryption::EncryptionClient,
    pub issuer: issuer::IssuerClient,
    pub ipfs: ipfs::IpfsClient,
    pub verification: verification::VerificationClient,
}

impl IdentityClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            encryption: encryption::EncryptionClient::new(Arc::clone(&transport)),
            issuer: issuer::IssuerClient::new(Arc::clone(&transport)),
            ipfs: ipfs::IpfsClient::new(Arc::clone(&transport)),
            verification: verification::VerificationClient::new(transport),
        }
    }
}
