//! ImageStudio - state of the "visualize the unseen" image panel.
//!
//! Couples a [`CredentialPort`] with an [`ImageService`]: the panel only
//! generates once a credential is selected, and drops back to the connect
//! step when the service reports the credential expired.

use crate::error::{GenAiError, StudioError};

use super::credential::CredentialPort;
use super::image::{ImageService, ImageSize};

pub struct ImageStudio<P, S> {
    port: P,
    service: S,
    has_key: bool,
    image: Option<String>,
    error: Option<StudioError>,
}

impl<P: CredentialPort, S: ImageService> ImageStudio<P, S> {
    pub fn new(port: P, service: S) -> Self {
        Self {
            port,
            service,
            has_key: false,
            image: None,
            error: None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.port.is_available()
    }

    pub fn has_key(&self) -> bool {
        self.has_key
    }

    /// Last generated image, as a data URI.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Message for the last failure, cleared by the next successful step.
    pub fn error(&self) -> Option<&StudioError> {
        self.error.as_ref()
    }

    /// Refresh whether a credential is already selected.
    pub async fn check(&mut self) -> bool {
        self.has_key = if self.port.is_available() {
            match self.port.has_credential().await {
                Ok(present) => present,
                Err(e) => {
                    tracing::error!(error = %e, "error checking credential");
                    false
                }
            }
        } else {
            false
        };
        self.has_key
    }

    /// Ask the host for a credential.
    pub async fn connect(&mut self) -> Result<(), StudioError> {
        if !self.port.is_available() {
            return Err(self.fail(StudioError::Unsupported));
        }

        match self.port.request_credential().await {
            Ok(()) => {
                self.has_key = true;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "error selecting credential");
                Err(self.fail(StudioError::CredentialRejected))
            }
        }
    }

    /// Generate an image. Blank prompts do nothing and return `Ok(None)`.
    pub async fn generate(
        &mut self,
        prompt: &str,
        size: ImageSize,
    ) -> Result<Option<&str>, StudioError> {
        if prompt.trim().is_empty() {
            return Ok(None);
        }
        if !self.has_key {
            return Err(self.fail(StudioError::NotConnected));
        }

        self.error = None;
        match self.service.generate_image(prompt, size).await {
            Ok(Some(uri)) => {
                self.image = Some(uri);
                Ok(self.image.as_deref())
            }
            Ok(None) => Err(self.fail(StudioError::NoImage)),
            Err(GenAiError::EntityNotFound) => {
                self.has_key = false;
                Err(self.fail(StudioError::SessionExpired))
            }
            Err(_) => Err(self.fail(StudioError::GenerationFailed)),
        }
    }

    fn fail(&mut self, error: StudioError) -> StudioError {
        self.error = Some(error.clone());
        error
    }
}
