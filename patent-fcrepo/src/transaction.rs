//! Fedora 4 transactions
//!
//! One transaction wraps all writes for one item:
//!
//! ```text
//! unopened --begin--> Open --commit--> Committed
//!                       \--rollback--> RolledBack
//! ```
//!
//! URI convention: `POST {base}/fcr:tx` answers with a location such as
//! `{base}/tx:83e34464`. Writes go beneath that location, and the
//! transaction is finished with `POST {location}/fcr:tx/fcr:commit` or
//! `POST {location}/fcr:tx/fcr:rollback`.

use crate::client::FcrepoClient;
use crate::error::{FcrepoError, Result};
use std::fmt;
use tracing::{info, warn};

/// Lifecycle state of an opened transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxState {
    Open,
    Committed,
    RolledBack,
}

impl fmt::Display for TxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxState::Open => f.write_str("open"),
            TxState::Committed => f.write_str("committed"),
            TxState::RolledBack => f.write_str("rolled-back"),
        }
    }
}

/// A server-side transaction scope.
///
/// Only [`Transaction::begin`] creates one, so an unopened transaction has
/// no value to commit or roll back.
#[derive(Debug)]
pub struct Transaction<'c> {
    client: &'c FcrepoClient,
    location: String,
    act_uri: String,
    commit_uri: String,
    rollback_uri: String,
    state: TxState,
}

impl<'c> Transaction<'c> {
    /// Start a transaction on the client's repository.
    pub async fn begin(client: &'c FcrepoClient) -> Result<Self> {
        let location = client
            .start_transaction()
            .await
            .map_err(|e| FcrepoError::TransactionOpen(e.to_string()))?;
        let tx = Self::from_location(client, &location);
        info!(location = %tx.location, "transaction open");
        Ok(tx)
    }

    fn from_location(client: &'c FcrepoClient, location: &str) -> Self {
        let location = location.trim_end_matches('/').to_string();
        let act_uri = match client.container() {
            Some(container) => format!("{location}/{container}"),
            None => location.clone(),
        };
        Self {
            client,
            commit_uri: format!("{location}/fcr:tx/fcr:commit"),
            rollback_uri: format!("{location}/fcr:tx/fcr:rollback"),
            act_uri,
            location,
            state: TxState::Open,
        }
    }

    /// Server-issued scope URI
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Parent URI for writes inside this transaction
    pub fn act_uri(&self) -> &str {
        &self.act_uri
    }

    pub fn commit_uri(&self) -> &str {
        &self.commit_uri
    }

    pub fn rollback_uri(&self) -> &str {
        &self.rollback_uri
    }

    pub fn state(&self) -> TxState {
        self.state
    }

    /// Client this transaction was opened on
    pub fn client(&self) -> &'c FcrepoClient {
        self.client
    }

    /// Commit all writes.
    ///
    /// On failure the transaction stays open; the caller decides whether to
    /// [`rollback`](Self::rollback).
    pub async fn commit(&mut self) -> Result<()> {
        if self.state != TxState::Open {
            return Err(FcrepoError::InvalidTransactionState {
                state: self.state,
                action: "commit",
            });
        }
        self.client
            .post_action(&self.commit_uri)
            .await
            .map_err(|e| FcrepoError::CommitFailed(e.to_string()))?;
        self.state = TxState::Committed;
        info!(location = %self.location, "transaction committed");
        Ok(())
    }

    /// Best-effort rollback; never fails and never retries.
    ///
    /// A no-op once the transaction is committed or rolled back.
    pub async fn rollback(&mut self) {
        if self.state != TxState::Open {
            return;
        }
        match self.client.post_action(&self.rollback_uri).await {
            Ok(()) => info!(location = %self.location, "transaction rolled back"),
            Err(e) => warn!(location = %self.location, error = %e, "rollback failed"),
        }
        self.state = TxState::RolledBack;
    }

    /// Permanent form of a URI issued inside this transaction.
    ///
    /// `{base}/tx:abc/12/34` becomes `{base}/12/34`; URIs outside the
    /// transaction scope are returned unchanged.
    pub fn resolve(&self, uri: &str) -> String {
        match uri.strip_prefix(&self.location) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                format!("{}{}", self.client.base_url(), rest)
            }
            _ => uri.to_string(),
        }
    }
}
