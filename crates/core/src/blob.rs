//! Version-tagged binary blobs
//!
//! Every pair type declares a fixed format version via [`SerialVersion`].
//! A blob is the bincode encoding of `(version, value)`. Decoding rejects a
//! blob whose tag differs from the target type's version.
//!
//! All pair types also derive serde's traits, so any serde format works
//! without the tag; the blob is for callers that want one.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::family::AnyPair;
use crate::numeric::{DoublesPair, IntDoublePair, LongDoublePair};
use crate::pair::ObjectsPair;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Fixed format version of a serializable type
pub trait SerialVersion {
    /// Version written into every blob of this type
    const SERIAL_VERSION: u32;
}

impl<A, B> SerialVersion for ObjectsPair<A, B> {
    const SERIAL_VERSION: u32 = 1;
}

impl SerialVersion for DoublesPair {
    const SERIAL_VERSION: u32 = 1;
}

impl SerialVersion for IntDoublePair {
    const SERIAL_VERSION: u32 = 1;
}

impl SerialVersion for LongDoublePair {
    const SERIAL_VERSION: u32 = 1;
}

impl SerialVersion for AnyPair {
    const SERIAL_VERSION: u32 = 1;
}

impl SerialVersion for Element {
    const SERIAL_VERSION: u32 = 1;
}

/// Encode a value with its version tag
pub fn to_blob<T: Serialize + SerialVersion>(value: &T) -> Result<Vec<u8>> {
    let bytes = bincode::serialize(&(T::SERIAL_VERSION, value))?;
    debug!(target: "lambdava::blob", version = T::SERIAL_VERSION, len = bytes.len(), "Encoded blob");
    Ok(bytes)
}

/// Decode a value, checking its version tag
///
/// # Errors
///
/// `VersionMismatch` if the tag is not `T::SERIAL_VERSION`,
/// `SerializationError` if the bytes are not a valid blob.
pub fn from_blob<T: DeserializeOwned + SerialVersion>(bytes: &[u8]) -> Result<T> {
    let (version, value): (u32, T) = bincode::deserialize(bytes)?;
    if version != T::SERIAL_VERSION {
        warn!(
            target: "lambdava::blob",
            expected = T::SERIAL_VERSION,
            actual = version,
            "Rejected blob with foreign version tag"
        );
        return Err(Error::VersionMismatch {
            expected: T::SERIAL_VERSION,
            actual: version,
        });
    }
    Ok(value)
}
