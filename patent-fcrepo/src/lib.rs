//! Transactional Fedora 4 synchronization for plant-patent items
//!
//! This crate moves one item (a patent container plus its scanned binary)
//! into a Fedora 4 repository inside its own transaction.
//!
//! # Architecture
//!
//! - [`checksum`]: streaming SHA-1 of local assets
//! - [`config`]: explicit connection settings (endpoint, credentials, timeout)
//! - [`client`]: HTTP client for the LDP and transaction endpoints
//! - [`transaction`]: open / commit / rollback state machine
//! - [`sync`]: create, upload, link and describe steps within a transaction
//! - [`error`]: error taxonomy for all of the above
//!
//! # Example
//!
//! ```no_run
//! use patent_fcrepo::{sha1_file, Credentials, FcrepoClient, RepositoryConfig, Transaction};
//! # async fn demo() -> patent_fcrepo::Result<()> {
//! let config = RepositoryConfig::new("http://localhost:8080/fcrepo/rest", Credentials::default());
//! let client = FcrepoClient::new(&config)?;
//! let checksum = sha1_file(std::path::Path::new("pp0012.pdf"))?;
//! let mut tx = Transaction::begin(&client).await?;
//! // ... RepositorySync::new(&tx).run(&item, &file, path, &checksum) ...
//! tx.commit().await?;
//! # let _ = checksum;
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod client;
pub mod config;
pub mod error;
pub mod sync;
pub mod transaction;

pub use checksum::{sha1_file, Checksum};
pub use client::{FcrepoClient, RequestFailure};
pub use config::{Credentials, RepositoryConfig, DEFAULT_TIMEOUT_SECS};
pub use error::{FcrepoError, Result};
pub use sync::{content_type_for, BoundResource, RepositorySync, SyncedItem};
pub use transaction::{Transaction, TxState};
