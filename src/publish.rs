//! Output sinks: a local file writer and an S3 uploader behind the
//! [`ObjectStore`] seam.
//!
//! The trait keeps the upload entry point testable with deterministic mocks;
//! the real implementation owns transport and auth. Failures from the SDK
//! are surfaced unchanged — there is no retry, backoff, or cleanup here.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::Client;
use mockall::automock;
use tracing::{error, info};

use crate::inputs::AwsSettings;

/// Name of the locally written document.
const LOCAL_FILENAME: &str = "vpat.html";

/// The fixed local output path: the parent of the current working directory,
/// so a sibling checkout can pick the file up in the CI runtime environment.
pub fn local_output_path() -> anyhow::Result<PathBuf> {
    let cwd = env::current_dir()?;
    let parent = cwd
        .parent()
        .ok_or_else(|| anyhow::anyhow!("working directory '{}' has no parent", cwd.display()))?;
    Ok(parent.join(LOCAL_FILENAME))
}

/// Write the rendered document to the fixed local path, overwriting any
/// previous artifact. Returns the path written.
pub fn write_local(html: &str) -> anyhow::Result<PathBuf> {
    let path = local_output_path()?;
    fs::write(&path, html)?;
    Ok(path)
}

/// Storage abstraction for the upload entry point.
///
/// Implementors are responsible for scoping the client to a bucket and for
/// converting transport errors into boxed errors. The trait is annotated for
/// `mockall` so tests can assert on the exact key and body uploaded.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store one object under `key`, overwriting any existing object.
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// S3-backed [`ObjectStore`] scoped to a single bucket.
pub struct S3Publisher {
    client: Client,
    bucket: String,
}

impl S3Publisher {
    /// Build a client for the configured region and static credentials.
    ///
    /// Callers must have validated the settings already; construction itself
    /// performs no network I/O.
    pub async fn connect(settings: &AwsSettings) -> Self {
        let credentials = Credentials::new(
            settings.access_key_id.clone(),
            settings.secret_access_key.clone(),
            None,
            None,
            "vpat-publish",
        );
        let conf = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;
        info!(
            region = %settings.region,
            bucket = %settings.bucket,
            "Initialised S3 client"
        );
        Self {
            client: Client::new(&conf),
            bucket: settings.bucket.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Publisher {
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body.into())
            .send()
            .await;
        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                error!(error = ?e, key, "S3 put_object failed");
                Err(Box::new(e))
            }
        }
    }
}

/// Upload a rendered document through the given store.
pub async fn upload<S: ObjectStore>(
    store: &S,
    source: &Path,
    bucket: &str,
    key: &str,
    html: &str,
) -> anyhow::Result<()> {
    info!(
        "Uploading '{}' to S3 bucket '{}' as '{}'",
        source.display(),
        bucket,
        key
    );
    store
        .put_object(key, html.as_bytes().to_vec())
        .await
        .map_err(|e| anyhow::anyhow!(e))?;
    info!("File uploaded successfully");
    Ok(())
}
