//! Archive client implementation

use exoview_core::{PlanetRecord, SessionState, parse_records};

use crate::{ArchiveConfig, ArchiveQuery, Error, Result};

/// NASA Exoplanet Archive client.
///
/// Issues a single GET per [`fetch_records`](Self::fetch_records) call. No
/// retries and no client-side timeout; transport defaults apply.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http: reqwest::Client,
    endpoint: String,
    query: ArchiveQuery,
}

impl ArchiveClient {
    /// Create a client from configuration.
    pub fn new(config: &ArchiveConfig) -> Result<Self> {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client on top of an existing HTTP client.
    pub fn with_http_client(http: reqwest::Client, config: &ArchiveConfig) -> Result<Self> {
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            query: ArchiveQuery::from_config(config)?,
        })
    }

    /// The endpoint this client queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The query this client sends.
    pub fn query(&self) -> &ArchiveQuery {
        &self.query
    }

    /// Fetch and decode every record, preserving archive order.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] on transport failure
    /// - [`Error::Status`] on any non-2xx response
    /// - [`Error::Core`] if the body is not a JSON array of records
    pub async fn fetch_records(&self) -> Result<Vec<PlanetRecord>> {
        log::info!("Querying archive at {}", self.endpoint);
        log::debug!("ADQL: {}", self.query.adql());

        let response = self
            .http
            .get(&self.endpoint)
            .query(&self.query.params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("Archive responded with {status}");
            return Err(Error::Status { status });
        }

        let body = response.text().await?;
        let records = parse_records(&body)?;
        log::info!("Decoded {} planet records", records.len());
        Ok(records)
    }
}

/// Fetch records and store them in `session`.
///
/// The session is only touched on success; on failure it is marked failed
/// and stays empty. Returns the number of records loaded.
pub async fn load_session(client: &ArchiveClient, session: &mut SessionState) -> Result<usize> {
    match client.fetch_records().await {
        Ok(records) => Ok(session.populate(records)?),
        Err(e) => {
            session.fail(e.to_string());
            Err(e)
        }
    }
}
