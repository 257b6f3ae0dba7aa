//! Tests for [`DocumentPartsCollection`] and the parent bookkeeping in
//! [`QueryDocument::attach`].

use libquerydoc_parser::SourcePosition;

use crate::DocumentBuildError;
use crate::DocumentPartData;
use crate::DocumentPartId;
use crate::DocumentPartType;
use crate::DocumentPartsCollection;
use crate::OperationType;
use crate::QueryDocument;

fn operation_data() -> DocumentPartData {
    DocumentPartData::Operation {
        operation_type: OperationType::Query,
        name: None,
    }
}

/// Verifies that adding a part records it in order and in the type index.
#[test]
fn add_records_order_and_type_index() {
    let owner = DocumentPartId::from_index(0);
    let mut collection = DocumentPartsCollection::new(owner);
    let parts: Vec<_> = (1..=4).map(DocumentPartId::from_index).collect();

    collection.add(parts[0], owner, DocumentPartType::Argument).unwrap();
    collection.add(parts[1], owner, DocumentPartType::Directive).unwrap();
    collection.add(parts[2], owner, DocumentPartType::Field).unwrap();
    collection.add(parts[3], owner, DocumentPartType::Field).unwrap();

    assert_eq!(collection.owner(), owner);
    assert_eq!(collection.len(), 4);
    assert_eq!(collection.as_slice(), parts.as_slice());
    assert_eq!(collection.first(), Some(parts[0]));
    assert!(collection.contains(parts[3]));
    assert_eq!(collection.of_type(DocumentPartType::Field), &parts[2..]);
    assert_eq!(
        collection.first_of_type(DocumentPartType::Directive),
        Some(parts[1]),
    );
    assert!(collection.of_type(DocumentPartType::Variable).is_empty());
    assert_eq!(
        (&collection).into_iter().collect::<Vec<_>>(),
        parts,
    );
}

/// Verifies that a part built for one parent cannot be filed under another.
#[test]
fn add_rejects_foreign_parent() {
    let owner = DocumentPartId::from_index(3);
    let other = DocumentPartId::from_index(7);
    let mut collection = DocumentPartsCollection::new(owner);

    let result = collection.add(
        DocumentPartId::from_index(8),
        other,
        DocumentPartType::Field,
    );

    assert_eq!(
        result,
        Err(DocumentBuildError::ParentMismatch {
            part_type: DocumentPartType::Field,
            declared_parent: other,
            collection_owner: owner,
        }),
    );
    assert!(collection.is_empty());
    assert_eq!(collection.part_types().count(), 0);
}

/// Verifies that a rejected attach leaves the document exactly as it was.
#[test]
fn attach_mismatch_leaves_document_unchanged() {
    let mut document = QueryDocument::new(SourcePosition::default());
    let root = document.root();
    let operation = document
        .attach(root, root, SourcePosition::default(), operation_data())
        .unwrap();
    let before = document.clone();

    let result = document.attach(
        root,
        operation,
        SourcePosition::default(),
        DocumentPartData::Field {
            name: "a".to_string(),
            alias: None,
        },
    );

    assert!(matches!(
        result,
        Err(DocumentBuildError::ParentMismatch {
            part_type: DocumentPartType::Field,
            ..
        })
    ));
    assert_eq!(document, before);
    assert_eq!(document.part_count(), 2);
}

/// Verifies that attaching under a part that does not exist fails.
#[test]
fn attach_to_unknown_part() {
    let mut document = QueryDocument::new(SourcePosition::default());
    let missing = DocumentPartId::from_index(42);

    let result = document.attach(missing, missing, SourcePosition::default(), operation_data());

    assert_eq!(result, Err(DocumentBuildError::UnknownPart(missing)));
    assert_eq!(document.part_count(), 1);
    assert!(document.get(missing).is_none());
}

/// Verifies that operations attached by hand are tracked like parsed ones.
#[test]
fn attach_tracks_operations() {
    let mut document = QueryDocument::new(SourcePosition::default());
    let root = document.root();
    let first = document
        .attach(root, root, SourcePosition::default(), operation_data())
        .unwrap();
    let second = document
        .attach(root, root, SourcePosition::default(), operation_data())
        .unwrap();

    assert_eq!(document.operations(), &[first, second]);
    assert_eq!(document.children(root).as_slice(), &[first, second]);
    assert_eq!(document.parent(second), Some(root));
    assert_eq!(document.part(root).parent(), None);
    assert_eq!(first.to_string(), "#1");
}
