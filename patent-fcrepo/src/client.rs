//! HTTP client for the Fedora 4 REST API
//!
//! Wraps the handful of LDP calls the loader makes: create a container,
//! upload a binary, apply a SPARQL update, and the transaction endpoints.
//! Every call is a single attempt with HTTP basic auth and the configured
//! timeout; there is no retry.

use crate::checksum::Checksum;
use crate::config::RepositoryConfig;
use crate::error::{FcrepoError, Result};
use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE, LOCATION};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Media type of SPARQL Update bodies
pub const SPARQL_UPDATE: &str = "application/sparql-update";

/// Media type of create payloads
pub const TURTLE: &str = "text/turtle";

/// HTTP client bound to one repository and one set of credentials.
#[derive(Clone)]
pub struct FcrepoClient {
    client: Client,
    base_url: String,
    container: Option<String>,
    user: String,
    password: String,
}

impl fmt::Debug for FcrepoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FcrepoClient")
            .field("base_url", &self.base_url)
            .field("container", &self.container)
            .field("user", &self.user)
            .field("has_password", &!self.password.is_empty())
            .finish()
    }
}

/// Why a single request did not succeed.
///
/// Callers turn this into the step-specific [`FcrepoError`] variant.
#[derive(Debug)]
pub enum RequestFailure {
    /// Network error or timeout
    Network(String),
    /// Server answered with a status the step does not accept
    Status { status: StatusCode, body: String },
    /// Success status but no URI for the new resource
    MissingLocation,
    /// Local file could not be opened for upload
    LocalFile(String),
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::Network(msg) => write!(f, "network error: {msg}"),
            RequestFailure::Status { status, body } if body.is_empty() => {
                write!(f, "unexpected status {status}")
            }
            RequestFailure::Status { status, body } => {
                write!(f, "unexpected status {status}: {body}")
            }
            RequestFailure::MissingLocation => {
                write!(f, "server did not report the new resource URI")
            }
            RequestFailure::LocalFile(msg) => write!(f, "cannot read local file: {msg}"),
        }
    }
}

type RequestResult<T> = std::result::Result<T, RequestFailure>;

impl FcrepoClient {
    /// Create a client for the repository described by `config`.
    pub fn new(config: &RepositoryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FcrepoError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            container: config
                .container
                .as_deref()
                .map(|c| c.trim_matches('/').to_string())
                .filter(|c| !c.is_empty()),
            user: config.credentials.user.clone(),
            password: config.credentials.password.clone(),
        })
    }

    /// REST root without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Container path below the root that items are created in
    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    fn add_auth(&self, req: RequestBuilder) -> RequestBuilder {
        req.basic_auth(&self.user, Some(&self.password))
    }

    /// Map a reqwest error (network/timeout) to a `RequestFailure`.
    fn map_network_error(e: reqwest::Error) -> RequestFailure {
        if e.is_timeout() {
            RequestFailure::Network(format!("request timed out: {e}"))
        } else if e.is_connect() {
            RequestFailure::Network(format!("connection failed: {e}"))
        } else {
            RequestFailure::Network(e.to_string())
        }
    }

    /// Map a rejected response, keeping the body for diagnostics.
    async fn map_error(resp: Response) -> RequestFailure {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        RequestFailure::Status {
            status,
            body: body.trim().to_string(),
        }
    }

    /// URI of a newly created resource: `Location` header, else the body.
    async fn assigned_uri(resp: Response) -> RequestResult<String> {
        if let Some(location) = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return resp
                .url()
                .join(location)
                .map(|u| u.to_string())
                .map_err(|_| RequestFailure::MissingLocation);
        }

        let body = resp.text().await.map_err(Self::map_network_error)?;
        let body = body.trim();
        if body.starts_with("http://") || body.starts_with("https://") {
            Ok(body.to_string())
        } else {
            Err(RequestFailure::MissingLocation)
        }
    }

    /// `GET` the REST root with the configured credentials.
    pub async fn check_connection(&self) -> RequestResult<()> {
        let resp = self
            .add_auth(self.client.get(&self.base_url))
            .send()
            .await
            .map_err(Self::map_network_error)?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::map_error(resp).await)
        }
    }

    /// `POST {base}/fcr:tx`; returns the transaction location.
    pub async fn start_transaction(&self) -> RequestResult<String> {
        let url = format!("{}/fcr:tx", self.base_url);
        let resp = self
            .add_auth(self.client.post(&url))
            .send()
            .await
            .map_err(Self::map_network_error)?;

        if resp.status() == StatusCode::CREATED {
            Self::assigned_uri(resp).await
        } else {
            Err(Self::map_error(resp).await)
        }
    }

    /// Bodiless `POST`, used for commit and rollback.
    pub async fn post_action(&self, uri: &str) -> RequestResult<()> {
        let resp = self
            .add_auth(self.client.post(uri))
            .send()
            .await
            .map_err(Self::map_network_error)?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::map_error(resp).await)
        }
    }

    /// `POST` a Turtle document to `parent`; returns the new container URI.
    pub async fn create_container(&self, parent: &str, turtle: String) -> RequestResult<String> {
        debug!(parent, payload = %turtle, "creating container");
        let resp = self
            .add_auth(self.client.post(parent))
            .header(CONTENT_TYPE, TURTLE)
            .body(turtle)
            .send()
            .await
            .map_err(Self::map_network_error)?;

        if resp.status() == StatusCode::CREATED {
            Self::assigned_uri(resp).await
        } else {
            Err(Self::map_error(resp).await)
        }
    }

    /// Stream the file at `path` to `parent` as a binary; returns its URI.
    pub async fn upload_binary(
        &self,
        parent: &str,
        path: &Path,
        content_type: &str,
        checksum: &Checksum,
    ) -> RequestResult<String> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| RequestFailure::LocalFile(format!("{}: {e}", path.display())))?;

        debug!(parent, %filename, digest = %checksum, "uploading binary");
        let resp = self
            .add_auth(self.client.post(parent))
            .header(CONTENT_TYPE, content_type)
            .header("Digest", checksum.digest_header())
            .header(CONTENT_DISPOSITION, content_disposition(&filename))
            .body(reqwest::Body::from(file))
            .send()
            .await
            .map_err(Self::map_network_error)?;

        if resp.status() == StatusCode::CREATED {
            Self::assigned_uri(resp).await
        } else {
            Err(Self::map_error(resp).await)
        }
    }

    /// `PATCH` `uri` with a SPARQL Update.
    pub async fn patch_sparql(&self, uri: &str, update: String) -> RequestResult<()> {
        debug!(uri, payload = %update, "applying sparql update");
        let resp = self
            .add_auth(self.client.patch(uri))
            .header(CONTENT_TYPE, SPARQL_UPDATE)
            .body(update)
            .send()
            .await
            .map_err(Self::map_network_error)?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::map_error(resp).await)
        }
    }
}

/// `attachment; filename="..."` with embedded quotes escaped
fn content_disposition(filename: &str) -> String {
    let escaped = filename.replace('\\', "\\\\").replace('"', "\\\"");
    format!("attachment; filename=\"{escaped}\"")
}
