/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Multipart body for publishing datasources
//!
//! The publish endpoint takes a `multipart/mixed` body with two parts: the
//! XML metadata (`request_payload`) and the datasource file itself
//! (`tableau_datasource`). Parts are separated by CRLF and the body ends
//! with the closing delimiter.

use crate::constants::{DATASOURCE_PART, REQUEST_PAYLOAD_PART};
use crate::error::AppError;
use crate::model::requests::DatasourceCreateRequest;
use crate::presentation::{Datasource, DatasourceFileType};

/// `Content-Type` header value for a body delimited by `boundary`
pub fn content_type(boundary: &str) -> String {
    format!("multipart/mixed; boundary={boundary}")
}

/// Builds the publish body
///
/// # Arguments
/// * `boundary` - Part delimiter, without the leading dashes
/// * `metadata` - Datasource metadata; its name becomes the file name
/// * `file_type` - Format of `content`, decides the file extension
/// * `content` - The datasource file
///
/// # Returns
/// * `Ok(Vec<u8>)` - The complete body
/// * `Err(AppError)` - If the metadata could not be serialized
pub fn publish_body(
    boundary: &str,
    metadata: &Datasource,
    file_type: DatasourceFileType,
    content: &[u8],
) -> Result<Vec<u8>, AppError> {
    let metadata_xml = DatasourceCreateRequest::new(metadata.clone()).to_xml()?;

    let mut body = Vec::with_capacity(metadata_xml.len() + content.len() + 256);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(format!("Content-Disposition: name=\"{REQUEST_PAYLOAD_PART}\"\r\n").as_bytes());
    body.extend_from_slice(b"Content-Type: text/xml\r\n\r\n");
    body.extend_from_slice(metadata_xml.as_bytes());
    body.extend_from_slice(format!("\r\n--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: name=\"{DATASOURCE_PART}\"; filename=\"{}.{}\"\r\n",
            metadata.name,
            file_type.extension()
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    Ok(body)
}
