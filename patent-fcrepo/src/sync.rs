//! Repository synchronization for one item inside one transaction
//!
//! Steps, each a single request:
//!
//! 1. create the item container from its Turtle payload
//! 2. upload the binary with its SHA-1 digest
//! 3. link the file to the item (`pcdm:fileOf`)
//! 4. describe the file (page count, scan date, filename, type)
//!
//! Steps 3 and 4 `PATCH` the binary's `fcr:metadata` description; a binary's
//! own URI addresses its bytes, not its RDF. A failed step stops the
//! sequence; rolling back is the caller's job.

use crate::checksum::Checksum;
use crate::error::{FcrepoError, Result};
use crate::transaction::Transaction;
use patent_graph_format::{format_sparql_insert, GraphBuildable};
use patent_graph_ir::{Graph, Term};
use std::path::Path;
use tracing::info;

/// A resource whose URI the repository has assigned, with its graph rebound
#[derive(Clone, Debug, PartialEq)]
pub struct BoundResource {
    /// Transaction-scoped URI
    pub uri: String,
    pub graph: Graph,
}

impl BoundResource {
    fn new(uri: String, resource: &dyn GraphBuildable) -> Self {
        let graph = resource.bound_graph(&uri);
        Self { uri, graph }
    }

    /// URI of this resource's RDF description
    pub fn metadata_uri(&self) -> String {
        format!("{}/fcr:metadata", self.uri)
    }

    /// Graph holding only the `pcdm:fileOf` back-reference to `item_uri`
    pub fn file_of(&self, item_uri: &str) -> Graph {
        let mut graph = Graph::with_prefixes(patent_vocab::bindings::NAMESPACE_BINDINGS);
        graph.add_triple(
            Term::iri(&self.uri),
            Term::iri(patent_vocab::pcdm::FILE_OF),
            Term::iri(item_uri),
        );
        graph
    }
}

/// Outcome of a successful four-step sync, before commit
#[derive(Clone, Debug, PartialEq)]
pub struct SyncedItem {
    pub item: BoundResource,
    /// File graph including its back-reference to the item
    pub file: BoundResource,
}

/// Media type sent with an uploaded binary, guessed from its extension
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "tif" | "tiff" => "image/tiff",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
}

/// Runs the sync steps against one open transaction.
#[derive(Debug)]
pub struct RepositorySync<'t, 'c> {
    tx: &'t Transaction<'c>,
}

impl<'t, 'c> RepositorySync<'t, 'c> {
    pub fn new(tx: &'t Transaction<'c>) -> Self {
        Self { tx }
    }

    /// Step 1: `POST` the item's Turtle payload beneath the transaction.
    pub async fn create_container(&self, item: &dyn GraphBuildable) -> Result<BoundResource> {
        let uri = self
            .tx
            .client()
            .create_container(self.tx.act_uri(), item.to_create_payload())
            .await
            .map_err(|e| FcrepoError::ItemCreateFailed(e.to_string()))?;
        info!(%uri, "item container created");
        Ok(BoundResource::new(uri, item))
    }

    /// Step 2: stream the binary with its digest and filename.
    pub async fn upload_binary(
        &self,
        path: &Path,
        checksum: &Checksum,
        file: &dyn GraphBuildable,
    ) -> Result<BoundResource> {
        let uri = self
            .tx
            .client()
            .upload_binary(self.tx.act_uri(), path, content_type_for(path), checksum)
            .await
            .map_err(|e| FcrepoError::BinaryUploadFailed(e.to_string()))?;
        info!(%uri, "binary uploaded");
        Ok(BoundResource::new(uri, file))
    }

    /// Step 3: assert `<file> pcdm:fileOf <item>`.
    ///
    /// Returns the file resource with the back-reference added to its graph.
    pub async fn link_file_to_item(
        &self,
        file: &BoundResource,
        item: &BoundResource,
    ) -> Result<BoundResource> {
        let link = file.file_of(&item.uri);
        let update = format_sparql_insert(&link)?;
        self.tx
            .client()
            .patch_sparql(&file.metadata_uri(), update)
            .await
            .map_err(|e| FcrepoError::LinkFailed(e.to_string()))?;
        info!(file = %file.uri, item = %item.uri, "file linked to item");

        let mut graph = file.graph.clone();
        graph.extend(link.into_triples());
        Ok(BoundResource {
            uri: file.uri.clone(),
            graph,
        })
    }

    /// Step 4: insert the file's descriptive statements.
    pub async fn describe_file(&self, file: &BoundResource) -> Result<()> {
        let update = format_sparql_insert(&file.graph)?;
        self.tx
            .client()
            .patch_sparql(&file.metadata_uri(), update)
            .await
            .map_err(|e| FcrepoError::MetadataPatchFailed(e.to_string()))?;
        info!(file = %file.uri, "file metadata updated");
        Ok(())
    }

    /// Run steps 1-4 in order, stopping at the first failure.
    pub async fn run(
        &self,
        item: &dyn GraphBuildable,
        file: &dyn GraphBuildable,
        path: &Path,
        checksum: &Checksum,
    ) -> Result<SyncedItem> {
        let item = self.create_container(item).await?;
        let uploaded = self.upload_binary(path, checksum, file).await?;
        let file = self.link_file_to_item(&uploaded, &item).await?;
        self.describe_file(&uploaded).await?;
        Ok(SyncedItem { item, file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(Path::new("pp0012.pdf")), "application/pdf");
        assert_eq!(content_type_for(Path::new("PP0012.PDF")), "application/pdf");
        assert_eq!(content_type_for(Path::new("scan.tif")), "image/tiff");
        assert_eq!(content_type_for(Path::new("scan")), "application/octet-stream");
    }

    #[test]
    fn test_file_of_statement() {
        let file = BoundResource {
            uri: "http://x/rest/tx:1/f".to_string(),
            graph: Graph::new(),
        };
        let link = file.file_of("http://x/rest/tx:1/i");
        assert_eq!(link.len(), 1);
        let t = &link.triples()[0];
        assert_eq!(t.s, Term::iri("http://x/rest/tx:1/f"));
        assert_eq!(t.o, Term::iri("http://x/rest/tx:1/i"));
        assert_eq!(file.metadata_uri(), "http://x/rest/tx:1/f/fcr:metadata");
    }
}
