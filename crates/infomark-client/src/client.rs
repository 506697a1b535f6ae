//! InfoMark client entry point

use tracing::info;

use crate::config::ClientConfig;
use crate::endpoints::{
    Account, Auth, Common, Courses, Email, Enrollments, Exams, Grades, Groups, Internal,
    Materials, Sheets, Submissions, Tasks, Users,
};
use crate::error::Result;
use crate::transport::{ConnectionTarget, Transport};

/// InfoMark REST API client
///
/// Owns one [`Transport`] and hands out per-resource facades that borrow it.
///
/// ```rust,no_run
/// # async fn run() -> infomark_client::Result<()> {
/// use infomark_client::InfomarkClient;
///
/// let client = InfomarkClient::new("infomark.example.org", 443, true)?;
/// let pong = client.common().ping().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InfomarkClient {
    transport: Transport,
}

impl InfomarkClient {
    /// Create a client for `host:port`, using HTTPS when `ssl` is set
    pub fn new(host: &str, port: u16, ssl: bool) -> Result<Self> {
        let transport = Transport::new(ConnectionTarget::new(host, port, ssl))?;
        Ok(Self::with_transport(transport))
    }

    /// Create a client from a loaded configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Transport::from_config(config)?))
    }

    /// Wrap an already configured transport
    pub fn with_transport(transport: Transport) -> Self {
        info!("InfoMark client targeting {}", transport.target());
        Self { transport }
    }

    /// The underlying transport, for requests no facade covers
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Ping, version and privacy statement
    pub fn common(&self) -> Common<'_> {
        Common::new(&self.transport)
    }

    /// Tokens, sessions and password handling
    pub fn auth(&self) -> Auth<'_> {
        Auth::new(&self.transport)
    }

    pub fn account(&self) -> Account<'_> {
        Account::new(&self.transport)
    }

    pub fn email(&self) -> Email<'_> {
        Email::new(&self.transport)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.transport)
    }

    pub fn courses(&self) -> Courses<'_> {
        Courses::new(&self.transport)
    }

    pub fn sheets(&self) -> Sheets<'_> {
        Sheets::new(&self.transport)
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(&self.transport)
    }

    pub fn submissions(&self) -> Submissions<'_> {
        Submissions::new(&self.transport)
    }

    pub fn grades(&self) -> Grades<'_> {
        Grades::new(&self.transport)
    }

    pub fn groups(&self) -> Groups<'_> {
        Groups::new(&self.transport)
    }

    pub fn enrollments(&self) -> Enrollments<'_> {
        Enrollments::new(&self.transport)
    }

    pub fn materials(&self) -> Materials<'_> {
        Materials::new(&self.transport)
    }

    /// Result callbacks for grading workers
    pub fn internal(&self) -> Internal<'_> {
        Internal::new(&self.transport)
    }

    pub fn exams(&self) -> Exams<'_> {
        Exams::new(&self.transport)
    }
}
