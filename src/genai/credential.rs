//! Host-provided credential selection.
//!
//! Some hosts let the visitor pick an API key for premium features (image
//! generation). Hosts without that capability use [`Unsupported`].

use std::future::Future;

use crate::error::CredentialError;

pub trait CredentialPort: Send + Sync {
    /// Whether the host offers credential selection at all.
    fn is_available(&self) -> bool;

    /// Whether a credential has already been selected.
    fn has_credential(&self) -> impl Future<Output = Result<bool, CredentialError>> + Send;

    /// Ask the host to let the visitor select a credential.
    fn request_credential(&self) -> impl Future<Output = Result<(), CredentialError>> + Send;
}

/// A host without credential selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl CredentialPort for Unsupported {
    fn is_available(&self) -> bool {
        false
    }

    async fn has_credential(&self) -> Result<bool, CredentialError> {
        Ok(false)
    }

    async fn request_credential(&self) -> Result<(), CredentialError> {
        Err(CredentialError::Unsupported)
    }
}

/// A credential supplied up front (e.g. from the `API_KEY` environment
/// variable). Requesting one succeeds once a key is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCredential {
    present: bool,
}

impl StaticCredential {
    pub fn new(api_key: Option<&str>) -> Self {
        Self {
            present: api_key.is_some_and(|key| !key.is_empty()),
        }
    }
}

impl CredentialPort for StaticCredential {
    fn is_available(&self) -> bool {
        true
    }

    async fn has_credential(&self) -> Result<bool, CredentialError> {
        Ok(self.present)
    }

    async fn request_credential(&self) -> Result<(), CredentialError> {
        if self.present {
            Ok(())
        } else {
            Err(CredentialError::Rejected("no API key configured".to_string()))
        }
    }
}
