//! Input resolution for CI runs.
//!
//! Every configurable value arrives as an environment variable (the
//! pipeline's named inputs). Resolution happens exactly once at the start of
//! a run; the resulting structs are immutable and passed down by parameter,
//! so no component below the CLI reads the environment on its own.

use std::env;
use std::path::PathBuf;

use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum InputError {
    /// A required input is absent from the environment or empty.
    #[error("input {0} is required")]
    Missing(&'static str),
}

/// Read a required input. The empty string counts as missing.
pub fn required_input(name: &'static str) -> Result<String, InputError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => {
            error!(input = name, "Required input missing from environment");
            Err(InputError::Missing(name))
        }
    }
}

/// Read an optional input. Absent and empty both collapse to `None`.
pub fn optional_input(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Inputs for the local-write entry point.
#[derive(Debug)]
pub struct ConvertInputs {
    /// Directory scanned for report files.
    pub report_dir: PathBuf,
    /// Product name, used in the page title.
    pub product_name: String,
    /// Optional stylesheet file replacing the embedded default.
    pub stylesheet: Option<PathBuf>,
}

impl ConvertInputs {
    pub fn from_env() -> Result<Self, InputError> {
        Ok(Self {
            report_dir: PathBuf::from(required_input("VPAT_LOCATION")?),
            product_name: required_input("PRODUCT_NAME")?,
            stylesheet: optional_input("VPAT_STYLESHEET").map(PathBuf::from),
        })
    }
}

/// Inputs for the S3 upload entry point.
pub struct UploadInputs {
    pub report_dir: PathBuf,
    pub product_name: String,
    /// Product identifier, used to compute the object key.
    pub product_id: String,
    pub stylesheet: Option<PathBuf>,
    pub aws: AwsSettings,
}

impl UploadInputs {
    pub fn from_env() -> Result<Self, InputError> {
        Ok(Self {
            report_dir: PathBuf::from(required_input("VPAT_LOCATION")?),
            product_name: required_input("PRODUCT_NAME")?,
            product_id: required_input("PRODUCT_ID")?,
            stylesheet: optional_input("VPAT_STYLESHEET").map(PathBuf::from),
            aws: AwsSettings::from_env()?,
        })
    }

    /// Object key for the uploaded document: `<product-id>.html`.
    pub fn object_key(&self) -> String {
        format!("{}.html", self.product_id)
    }
}

/// S3 destination and credentials. Each field is resolved independently so a
/// failure names the exact variable that is missing, before any client is
/// constructed.
pub struct AwsSettings {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub bucket: String,
}

impl AwsSettings {
    pub fn from_env() -> Result<Self, InputError> {
        Ok(Self {
            access_key_id: required_input("AWS_ACCESS_KEY_ID")?,
            secret_access_key: required_input("AWS_SECRET_ACCESS_KEY")?,
            region: required_input("AWS_REGION")?,
            bucket: required_input("AWS_BUCKET")?,
        })
    }
}
