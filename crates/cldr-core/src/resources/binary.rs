//! Pre-serialized binary resources (MessagePack).

use rmp_serde::encode;

use crate::resources::{ResourceError, ResourceValue};

/// Decode a trusted binary resource. The payload is taken as final authored
/// data: no allow-list pass and no custom merge.
pub(crate) fn decode_binary(key: &str, bytes: &[u8]) -> Result<ResourceValue, ResourceError> {
    rmp_serde::from_slice(bytes).map_err(|e| ResourceError::Binary {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// Encode a value in the binary resource format.
///
/// Used by tools that precompile structured resources into `.dump` files.
pub fn encode_binary(value: &ResourceValue) -> Result<Vec<u8>, encode::Error> {
    rmp_serde::to_vec_named(value)
}
