use serde::{Deserialize, Serialize};

/// One (type identifier, payload) pair exactly as the producing application
/// placed it on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representation {
    /// Platform type identifier (e.g. public.utf8-plain-text)
    pub type_id: String,

    /// Raw payload. Zero length means "marker present, no payload".
    pub bytes: Vec<u8>,
}

impl Representation {
    pub fn new(type_id: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            type_id: type_id.into(),
            bytes: bytes.into(),
        }
    }

    pub fn marker(type_id: impl Into<String>) -> Self {
        Self::new(type_id, Vec::new())
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RepresentationSetError {
    #[error("representation set must contain at least one entry")]
    Empty,

    #[error("duplicate type identifier in representation set: {0}")]
    DuplicateType(String),
}

/// Every representation attached to one clipboard item.
///
/// Order is significant: it is the order representations are written back
/// to the clipboard. Type identifiers are unique within a set and the set is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepresentationSet {
    representations: Vec<Representation>,
}

impl RepresentationSet {
    pub fn new(representations: Vec<Representation>) -> Result<Self, RepresentationSetError> {
        if representations.is_empty() {
            return Err(RepresentationSetError::Empty);
        }

        for (idx, rep) in representations.iter().enumerate() {
            if representations[..idx]
                .iter()
                .any(|earlier| earlier.type_id == rep.type_id)
            {
                return Err(RepresentationSetError::DuplicateType(rep.type_id.clone()));
            }
        }

        Ok(Self { representations })
    }

    pub fn from_pairs<I, T, B>(pairs: I) -> Result<Self, RepresentationSetError>
    where
        I: IntoIterator<Item = (T, B)>,
        T: Into<String>,
        B: Into<Vec<u8>>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(type_id, bytes)| Representation::new(type_id, bytes))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &Representation> {
        self.representations.iter()
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.representations.iter().map(|r| r.type_id.as_str())
    }

    pub fn contains_type(&self, type_id: &str) -> bool {
        self.types().any(|t| t == type_id)
    }

    pub fn get(&self, type_id: &str) -> Option<&[u8]> {
        self.representations
            .iter()
            .find(|r| r.type_id == type_id)
            .map(|r| r.bytes.as_slice())
    }

    pub fn len(&self) -> usize {
        self.representations.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.representations.is_empty()
    }

    pub fn total_size_bytes(&self) -> usize {
        self.representations.iter().map(Representation::size_bytes).sum()
    }

    pub fn into_representations(self) -> Vec<Representation> {
        self.representations
    }
}

impl<'a> IntoIterator for &'a RepresentationSet {
    type Item = &'a Representation;
    type IntoIter = std::slice::Iter<'a, Representation>;

    fn into_iter(self) -> Self::IntoIter {
        self.representations.iter()
    }
}
