/// Serialized entries accumulated by dump passes for one format.
///
/// The harness owns one buffer per format. Dump passes append, load passes
/// read every entry in order, and the buffer is cleared once a repetition
/// count has been reported.
#[derive(Debug, Default, Clone)]
pub struct ResultBuffer {
    entries: Vec<Vec<u8>>,
}

impl ResultBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Vec<u8>) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(Vec::as_slice)
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of all entries joined end to end.
    pub fn total_len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
