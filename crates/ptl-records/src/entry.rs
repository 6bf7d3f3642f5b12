use serde::{Deserialize, Serialize};

/// One observation of a product at a place.
///
/// All fields are opaque strings. Nothing here parses the temperature or the
/// timestamp; callers get back exactly what they wrote. The serialized field
/// names and their order are part of the persisted format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "placeid")]
    pub place_id: String,
    pub temperature: String,
    pub timestamp: String,
}

impl Entry {
    pub fn new(
        place_id: impl Into<String>,
        temperature: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            place_id: place_id.into(),
            temperature: temperature.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Ordered append history for one product key.
///
/// Lives only for the span of a single call: decoded from the stored value,
/// extended by one entry, and encoded straight back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection {
    entries: Vec<Entry>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry after every existing one.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

impl From<Vec<Entry>> for RecordCollection {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Entry> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
