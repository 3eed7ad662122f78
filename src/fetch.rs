//! Loading the raw census text.

use std::fs;
use std::time::Duration;

use log::{debug, info};

use crate::config::DataSource;
use crate::error::{ClassifierError, Result};

/// Fetches `url` with a blocking GET. Any non-2xx status is an error.
pub fn fetch_text(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    info!("Fetching dataset from {url}");
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(ClassifierError::BadStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    if let Some(content_type) = response.headers().get(reqwest::header::CONTENT_TYPE) {
        debug!("Content-Type: {content_type:?}");
    }

    let text = response.text()?;
    debug!("Received {} bytes", text.len());
    Ok(text)
}

/// Reads the raw text from whichever source is configured.
pub fn load(source: &DataSource, timeout: Duration) -> Result<String> {
    match source {
        DataSource::Url(url) => fetch_text(url, timeout),
        DataSource::File(path) => {
            info!("Reading dataset from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
    }
}
