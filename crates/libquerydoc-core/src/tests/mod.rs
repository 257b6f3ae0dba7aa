mod document_parts_collection_tests;
mod supplied_value_resolution_tests;
pub(crate) mod utils;
