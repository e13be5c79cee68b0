//! Request signing.
//!
//! The header names and the signed message layout
//! (`timestamp + METHOD + path + payload`, EIP-191) are defined by this
//! client, not taken from a published exchange document. A server expecting
//! another scheme will reject the requests as unauthenticated.

use alloy::{
    primitives::Address,
    signers::{local::PrivateKeySigner, SignerSync},
};

use crate::error::{AppError, Result};

/// Header carrying the signer's address.
pub const ADDRESS_HEADER: &str = "x-ln-address";
/// Header carrying the request timestamp in milliseconds.
pub const TIMESTAMP_HEADER: &str = "x-ln-timestamp";
/// Header carrying the hex signature.
pub const SIGNATURE_HEADER: &str = "x-ln-signature";

/// Headers produced for one signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub address: String,
    pub timestamp: u64,
    pub signature: String,
}

/// Signs exchange requests with a local private key.
#[derive(Clone)]
pub struct RequestSigner {
    signer: PrivateKeySigner,
    address: Address,
}

impl RequestSigner {
    /// Create a signer from a private key string.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        // Remove 0x prefix if present
        let key = private_key.trim();
        let key = key.strip_prefix("0x").unwrap_or(key);

        let signer: PrivateKeySigner =
            key.parse().map_err(|e: alloy::signers::local::LocalSignerError| {
                AppError::Wallet(e.to_string())
            })?;

        let address = signer.address();

        tracing::info!(address = %address, "Request signer initialized");

        Ok(Self { signer, address })
    }

    /// Get the signer address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The exact bytes that get signed for a request.
    ///
    /// `payload` is the query string for GET requests and the JSON body for
    /// POST requests.
    pub fn message(timestamp: u64, method: &str, path: &str, payload: &str) -> String {
        format!("{}{}{}{}", timestamp, method.to_uppercase(), path, payload)
    }

    /// Sign a request as an EIP-191 personal message.
    pub fn sign(
        &self,
        timestamp: u64,
        method: &str,
        path: &str,
        payload: &str,
    ) -> Result<SignedHeaders> {
        let message = Self::message(timestamp, method, path, payload);
        let signature = self.signer.sign_message_sync(message.as_bytes())?;

        Ok(SignedHeaders {
            address: format!("{:?}", self.address),
            timestamp,
            signature: alloy::hex::encode_prefixed(signature.as_bytes()),
        })
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner").field("address", &self.address).finish()
    }
}
