/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! CSV data exported from a view
//!
//! The server returns the underlying data of a view as CSV. `ViewData` keeps
//! the raw bytes and hands out `csv` readers over them, so callers can read
//! plain records or deserialize rows into their own types.

use crate::error::AppError;
use serde::de::DeserializeOwned;

/// Raw CSV export of a view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewData {
    bytes: Vec<u8>,
}

impl ViewData {
    /// Wraps a CSV body
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Row reader over the data; the first row is treated as headers
    pub fn reader(&self) -> csv::Reader<&[u8]> {
        csv::Reader::from_reader(self.bytes.as_slice())
    }

    /// Column names
    pub fn headers(&self) -> Result<Vec<String>, AppError> {
        let mut reader = self.reader();
        Ok(reader.headers()?.iter().map(String::from).collect())
    }

    /// All data rows as string records
    pub fn records(&self) -> Result<Vec<csv::StringRecord>, AppError> {
        let mut reader = self.reader();
        let mut records = Vec::new();
        for record in reader.records() {
            records.push(record?);
        }
        Ok(records)
    }

    /// All data rows deserialized by header name
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Vec<T>, AppError> {
        let mut reader = self.reader();
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// Raw CSV bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the export is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consumes the value and returns the raw bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }
}
