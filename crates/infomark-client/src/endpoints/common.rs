//! Unauthenticated service information

use tracing::instrument;

use crate::error::Result;
use crate::response::{decode, ApiResponse};
use crate::transport::Transport;
use crate::types::{PrivacyStatement, VersionResponse};

/// `ping`, `version` and `privacy_statement`
#[derive(Debug, Clone, Copy)]
pub struct Common<'a> {
    transport: &'a Transport,
}

impl<'a> Common<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Liveness check. The service answers with the plain text `pong`,
    /// which is returned untouched.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<String> {
        self.transport.get(&route!("ping"), None).await
    }

    /// Server version and commit
    #[instrument(skip(self))]
    pub async fn version(&self) -> Result<ApiResponse<VersionResponse>> {
        let body = self.transport.get(&route!("version"), None).await?;
        decode(&body)
    }

    #[instrument(skip(self))]
    pub async fn privacy_statement(&self) -> Result<ApiResponse<PrivacyStatement>> {
        let body = self.transport.get(&route!("privacy_statement"), None).await?;
        decode(&body)
    }
}
