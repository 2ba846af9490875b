//! Saved view state.
//!
//! The host owns an opaque byte blob per widget and hands it back after the
//! widget is torn down and recreated (for example across a configuration
//! change). Widgets with persistent state wrap the host's blob in their own
//! record, so the host's layer survives untouched underneath.
//!
//! # Examples
//!
//! ```
//! use segswitch_core::ViewState;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Saved {
//!     base: ViewState,
//!     count: i32,
//! }
//!
//! let blob = ViewState::encode(&Saved { base: ViewState::EMPTY, count: 3 }).unwrap();
//! let back: Saved = blob.decode().unwrap();
//! assert_eq!(back.count, 3);
//! assert!(back.base.is_empty());
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque saved-state blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewState(Vec<u8>);

impl ViewState {
    /// A blob with nothing in it.
    pub const EMPTY: Self = Self(Vec::new());

    /// Wrap raw bytes handed over by the host.
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrow the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True when nothing was saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode a saved-state record.
    pub fn encode<T: Serialize>(record: &T) -> Result<Self, StateError> {
        serde_json::to_vec(record)
            .map(Self)
            .map_err(StateError::Encode)
    }

    /// Decode a saved-state record.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StateError> {
        if self.0.is_empty() {
            return Err(StateError::Empty);
        }
        serde_json::from_slice(&self.0).map_err(StateError::Decode)
    }
}

/// Errors raised while saving or restoring view state.
#[derive(Debug, Error)]
pub enum StateError {
    /// The blob was empty where a record was expected.
    #[error("saved state is empty")]
    Empty,
    /// The record could not be serialized.
    #[error("failed to encode saved state: {0}")]
    Encode(#[source] serde_json::Error),
    /// The blob does not hold a record of the expected shape.
    #[error("failed to decode saved state: {0}")]
    Decode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        base: ViewState,
        flag: u8,
    }

    #[test]
    fn test_empty_view_state() {
        assert!(ViewState::EMPTY.is_empty());
        assert_eq!(ViewState::default(), ViewState::EMPTY);
    }

    #[test]
    fn test_encode_nests_base_blob() {
        let base = ViewState::from_bytes(vec![1, 2, 3]);
        let blob = ViewState::encode(&Record {
            base: base.clone(),
            flag: 1,
        })
        .unwrap();
        let back: Record = blob.decode().unwrap();
        assert_eq!(back.base, base);
        assert_eq!(back.flag, 1);
    }

    #[test]
    fn test_decode_empty_fails() {
        let err = ViewState::EMPTY.decode::<Record>().unwrap_err();
        assert!(matches!(err, StateError::Empty));
        assert_eq!(err.to_string(), "saved state is empty");
    }

    #[test]
    fn test_decode_garbage_fails() {
        let blob = ViewState::from_bytes(b"not json".to_vec());
        let err = blob.decode::<Record>().unwrap_err();
        assert!(matches!(err, StateError::Decode(_)));
        assert!(err.to_string().starts_with("failed to decode saved state"));
    }

    #[test]
    fn test_bytes_accessors() {
        let blob = ViewState::from_bytes(vec![9, 8]);
        assert_eq!(blob.as_bytes(), &[9, 8]);
        assert!(!blob.is_empty());
        assert!(ViewState::EMPTY.is_empty());
    }
}
