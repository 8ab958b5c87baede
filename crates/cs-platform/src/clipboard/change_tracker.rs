use cs_core::clipboard::RepresentationSet;

/// Emulates a monotonically increasing change counter on platforms that do
/// not expose one, by digesting the clipboard contents on every observation.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    last_digest: Option<blake3::Hash>,
    count: i64,
}

impl ChangeTracker {
    pub fn digest(items: &[RepresentationSet]) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(items.len() as u64).to_le_bytes());
        for item in items {
            hasher.update(&(item.len() as u64).to_le_bytes());
            for rep in item {
                hasher.update(&(rep.type_id.len() as u64).to_le_bytes());
                hasher.update(rep.type_id.as_bytes());
                hasher.update(&(rep.bytes.len() as u64).to_le_bytes());
                hasher.update(&rep.bytes);
            }
        }
        hasher.finalize()
    }

    /// Records an observation and returns the current counter value.
    pub fn observe(&mut self, items: &[RepresentationSet]) -> i64 {
        let digest = Self::digest(items);
        if self.last_digest != Some(digest) {
            if self.last_digest.is_some() {
                self.count += 1;
            }
            self.last_digest = Some(digest);
        }
        self.count
    }
}
