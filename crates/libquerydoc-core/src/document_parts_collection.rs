use indexmap::IndexMap;

use crate::DocumentBuildError;
use crate::DocumentPartId;
use crate::DocumentPartType;

/// The ordered children of one [`DocumentPart`](crate::DocumentPart).
///
/// Alongside insertion order the collection keeps an index from
/// [`DocumentPartType`] to the children of that type, so questions like "all
/// `Field` parts under this node" are a single lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentPartsCollection {
    owner: DocumentPartId,
    parts: Vec<DocumentPartId>,
    by_type: IndexMap<DocumentPartType, Vec<DocumentPartId>>,
}

impl DocumentPartsCollection {
    pub(crate) fn new(owner: DocumentPartId) -> Self {
        Self {
            owner,
            parts: Vec::new(),
            by_type: IndexMap::new(),
        }
    }

    /// Records `part` as the next child.
    ///
    /// `declared_parent` is the parent the part was built for. It must be
    /// this collection's owner; anything else means the assembly walk lost
    /// track of where it is.
    pub(crate) fn add(
        &mut self,
        part: DocumentPartId,
        declared_parent: DocumentPartId,
        part_type: DocumentPartType,
    ) -> Result<(), DocumentBuildError> {
        if declared_parent != self.owner {
            return Err(DocumentBuildError::ParentMismatch {
                part_type,
                declared_parent,
                collection_owner: self.owner,
            });
        }
        self.parts.push(part);
        self.by_type.entry(part_type).or_default().push(part);
        Ok(())
    }

    /// The part these children belong to.
    pub fn owner(&self) -> DocumentPartId {
        self.owner
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn as_slice(&self) -> &[DocumentPartId] {
        &self.parts
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, DocumentPartId>> {
        self.parts.iter().copied()
    }

    pub fn first(&self) -> Option<DocumentPartId> {
        self.parts.first().copied()
    }

    pub fn contains(&self, part: DocumentPartId) -> bool {
        self.parts.contains(&part)
    }

    /// Children of the given type, in insertion order.
    pub fn of_type(&self, part_type: DocumentPartType) -> &[DocumentPartId] {
        self.by_type
            .get(&part_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn first_of_type(&self, part_type: DocumentPartType) -> Option<DocumentPartId> {
        self.of_type(part_type).first().copied()
    }

    /// The distinct child types present, in the order each first appeared.
    pub fn part_types(&self) -> impl Iterator<Item = DocumentPartType> + '_ {
        self.by_type.keys().copied()
    }
}

impl<'a> IntoIterator for &'a DocumentPartsCollection {
    type Item = DocumentPartId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, DocumentPartId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
