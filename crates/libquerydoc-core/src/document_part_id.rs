/// Index of a [`DocumentPart`](crate::DocumentPart) within the arena of the
/// [`QueryDocument`](crate::QueryDocument) that owns it.
///
/// Ids are only meaningful for the document that produced them.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct DocumentPartId(pub(crate) u32);

impl DocumentPartId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for DocumentPartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
