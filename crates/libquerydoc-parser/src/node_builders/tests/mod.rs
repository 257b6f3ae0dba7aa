mod selection_builder_tests;
mod value_builder_tests;
