use crate::error::AppError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serializes a payload to an XML document
///
/// The root element takes the name of the serialized type (see the `rename`
/// on the `tsRequest` payloads).
pub fn to_xml<T: Serialize>(value: &T) -> Result<String, AppError> {
    quick_xml::se::to_string(value).map_err(|e| AppError::SerializationError(e.to_string()))
}

/// Deserializes an XML document; the root element name is not checked
pub fn from_xml<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let text = std::str::from_utf8(body).map_err(|e| AppError::Deserialization(e.to_string()))?;
    quick_xml::de::from_str(text).map_err(|e| AppError::Deserialization(e.to_string()))
}
