use crate::entry::{Entry, RecordCollection};
use crate::error::{RecordError, RecordResult};

/// JSON codec for record collections.
///
/// The stored form is a JSON array of `{"placeid", "temperature",
/// "timestamp"}` objects so other tools can read a product's history straight
/// out of the state substrate.
pub struct RecordCodec;

impl RecordCodec {
    /// Encode a collection to its stored bytes.
    pub fn encode(collection: &RecordCollection) -> RecordResult<Vec<u8>> {
        serde_json::to_vec(collection).map_err(|e| RecordError::Serialization(e.to_string()))
    }

    /// Decode stored bytes into a collection.
    ///
    /// A JSON `null` is read as an empty collection. Anything else that is
    /// not an array of complete entries fails.
    pub fn decode(data: &[u8]) -> RecordResult<RecordCollection> {
        let entries: Option<Vec<Entry>> = serde_json::from_slice(data)
            .map_err(|e| RecordError::Serialization(e.to_string()))?;
        Ok(entries.map(RecordCollection::from).unwrap_or_default())
    }
}
