use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Salted SHA-256 digest of a secret, stored instead of the secret itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedCredential {
    pub hash: String,
    pub salt: String,
}

impl HashedCredential {
    pub fn new(secret: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let hash = digest(&salt, secret);
        Self { hash, salt }
    }

    pub fn verify(hash: &str, salt: &str, secret: &str) -> bool {
        digest(salt, secret) == hash
    }
}

fn digest(salt: &str, secret: &str) -> String {
    let output = Sha256::new()
        .chain_update(salt.as_bytes())
        .chain_update(secret.as_bytes())
        .finalize();
    format!("{:x}", output)
}
