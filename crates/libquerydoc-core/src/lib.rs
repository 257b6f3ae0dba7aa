//! Assembly of parsed GraphQL query documents into typed document parts.
//!
//! [`libquerydoc_parser`] turns text into a syntax tree. This crate walks
//! that tree and produces a [`QueryDocument`]: an arena of
//! [`DocumentPart`]s (operations, fields, fragments, directives, variables,
//! arguments and [supplied values](supplied_value)) that downstream
//! validators and planners consume.
//!
//! The document is not validated against any schema.

mod document_build_error;
mod document_part;
mod document_part_id;
mod document_part_type;
mod document_parts_collection;
mod operation_type;
mod parse_query_document;
mod part_added_observer;
mod query_document;
mod query_document_builder;
mod query_document_error;
pub mod supplied_value;
mod type_expression;
mod variable_resolution_error;

pub use document_build_error::DocumentBuildError;
pub use document_part::DocumentPart;
pub use document_part::DocumentPartData;
pub use document_part_id::DocumentPartId;
pub use document_part_type::DocumentPartType;
pub use document_parts_collection::DocumentPartsCollection;
pub use operation_type::OperationType;
pub use parse_query_document::parse_query_document;
pub use parse_query_document::parse_query_document_with_observer;
pub use part_added_observer::PartAddedEvent;
pub use part_added_observer::PartAddedObserver;
pub use query_document::QueryDocument;
pub use query_document_builder::QueryDocumentBuilder;
pub use query_document_error::QueryDocumentError;
pub use type_expression::TypeExpression;
pub use type_expression::TypeExpressionError;
pub use variable_resolution_error::VariableResolutionError;

#[cfg(test)]
mod tests;
