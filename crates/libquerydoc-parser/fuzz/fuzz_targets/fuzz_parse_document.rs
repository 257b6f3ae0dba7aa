#![no_main]

use libfuzzer_sys::fuzz_target;
use libquerydoc_parser::GraphQLParser;
use libquerydoc_parser::SourceText;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = SourceText::new(s);
    match GraphQLParser::new(&source).parse() {
        Ok(tree) => {
            for id in tree.descendants(tree.root()) {
                if let Some(span) = tree.node(id).primary_text() {
                    let _ = source.slice(span);
                }
            }
        },
        Err(err) => {
            let _ = err.format_detailed(Some(s));
        },
    }
});
