//! Various test utils.

use std::fmt::Write;

use crate::DocumentPartData;
use crate::DocumentPartId;
use crate::DocumentPartType;
use crate::QueryDocument;
use crate::QueryDocumentError;
use crate::supplied_value::SuppliedValue;
use crate::supplied_value::SuppliedValueRef;

pub fn document(source: &str) -> QueryDocument {
    match QueryDocument::parse(source) {
        Ok(document) => document,
        Err(QueryDocumentError::Syntax(err)) => {
            panic!("unexpected parse error:\n{}", err.format_detailed(Some(source)))
        },
        Err(err) => panic!("unexpected assembly error: {err}"),
    }
}

/// One line per part: type plus the details that identify it.
pub fn describe(document: &QueryDocument, id: DocumentPartId) -> String {
    let part = document.part(id);
    let mut line = part.part_type().to_string();
    match part.data() {
        DocumentPartData::Document => {},
        DocumentPartData::Operation {
            operation_type,
            name,
        } => {
            write!(line, " {operation_type}").unwrap();
            if let Some(name) = name {
                write!(line, " {name}").unwrap();
            }
        },
        DocumentPartData::Variable {
            name,
            type_expression,
        } => write!(line, " ${name}: {type_expression}").unwrap(),
        DocumentPartData::Directive { name } => write!(line, " @{name}").unwrap(),
        DocumentPartData::Field { name, alias } => {
            if let Some(alias) = alias {
                write!(line, " {alias}:").unwrap();
            }
            write!(line, " {name}").unwrap();
        },
        DocumentPartData::FragmentSpread { fragment_name } => {
            write!(line, " ...{fragment_name}").unwrap()
        },
        DocumentPartData::InlineFragment { type_condition } => {
            if let Some(type_condition) = type_condition {
                write!(line, " on {type_condition}").unwrap();
            }
        },
        DocumentPartData::NamedFragment {
            name,
            type_condition,
        } => write!(line, " {name} on {type_condition}").unwrap(),
        DocumentPartData::Argument { name } | DocumentPartData::InputObjectField { name } => {
            write!(line, " {name}").unwrap()
        },
        DocumentPartData::SuppliedValue(value) => match value {
            SuppliedValue::Scalar { text, .. } => write!(line, " {text}").unwrap(),
            SuppliedValue::Enum { value } => write!(line, " {value}").unwrap(),
            SuppliedValue::VariableUsage { variable_name } => {
                write!(line, " ${variable_name}").unwrap()
            },
            SuppliedValue::Null | SuppliedValue::List | SuppliedValue::Complex { .. } => {},
        },
    }
    line
}

/// Every part below the root, indented two spaces per level.
pub fn outline(document: &QueryDocument) -> Vec<String> {
    document
        .descendants(document.root())
        .skip(1)
        .map(|id| {
            let indent = "  ".repeat(document.depth(id) - 1);
            format!("{indent}{}", describe(document, id))
        })
        .collect()
}

/// The first argument called `name`, anywhere in the document.
pub fn argument(document: &QueryDocument, name: &str) -> DocumentPartId {
    document
        .parts()
        .find(|(_, part)| {
            part.part_type() == DocumentPartType::Argument && part.name() == Some(name)
        })
        .map(|(id, _)| id)
        .unwrap_or_else(|| panic!("no argument named {name}"))
}

/// The value of the first argument called `name`.
pub fn argument_value<'doc>(document: &'doc QueryDocument, name: &str) -> SuppliedValueRef<'doc> {
    let argument = argument(document, name);
    document
        .value(argument)
        .unwrap_or_else(|| panic!("argument {name} has no value"))
}
