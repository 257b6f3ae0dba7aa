#![no_main]

use libfuzzer_sys::fuzz_target;
use libquerydoc_core::QueryDocument;
use libquerydoc_core::supplied_value::VariableValues;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = QueryDocument::parse(s) else {
        return;
    };
    let variables = VariableValues::new();
    for (id, _) in document.parts() {
        if let Some(value) = document.value(id) {
            let _ = value.resolve(&variables);
            assert!(value.is_equal_to(&value));
        }
        if document.part(id).supplied_value().is_some() {
            let _ = document.resolve_variable_usage(id);
        }
    }
});
