use indexmap::IndexMap;
use libquerydoc_parser::SourcePosition;
use libquerydoc_parser::SourceText;

use crate::DocumentBuildError;
use crate::DocumentPart;
use crate::DocumentPartData;
use crate::DocumentPartId;
use crate::DocumentPartType;
use crate::DocumentPartsCollection;
use crate::QueryDocumentError;
use crate::VariableResolutionError;
use crate::supplied_value::SuppliedValue;
use crate::supplied_value::SuppliedValueRef;

/// An assembled, unvalidated GraphQL query document.
///
/// Parts live in one arena and refer to each other by [`DocumentPartId`].
/// The root is always a [`DocumentPartType::Document`] part; its children
/// are the operations and named fragments in source order.
///
/// Nothing here consults a schema. Field names, argument names and type
/// conditions are recorded as written.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryDocument {
    parts: Vec<DocumentPart>,
    operations: Vec<DocumentPartId>,
    named_fragments: IndexMap<String, DocumentPartId>,
}

impl QueryDocument {
    pub(crate) fn new(location: SourcePosition) -> Self {
        let root_id = DocumentPartId::from_index(0);
        Self {
            parts: vec![DocumentPart {
                parent: None,
                children: DocumentPartsCollection::new(root_id),
                location,
                data: DocumentPartData::Document,
            }],
            operations: Vec::new(),
            named_fragments: IndexMap::new(),
        }
    }

    /// Parses and assembles `text` in one step.
    pub fn parse(text: &str) -> Result<Self, QueryDocumentError> {
        crate::parse_query_document(&SourceText::new(text))
    }

    /// Appends a part to the children of `collection_owner`.
    ///
    /// Fails without modifying the document if `declared_parent` is not
    /// `collection_owner`.
    pub(crate) fn attach(
        &mut self,
        collection_owner: DocumentPartId,
        declared_parent: DocumentPartId,
        location: SourcePosition,
        data: DocumentPartData,
    ) -> Result<DocumentPartId, DocumentBuildError> {
        let id = DocumentPartId::from_index(self.parts.len());
        let part_type = data.part_type();
        self.parts
            .get_mut(collection_owner.index())
            .ok_or(DocumentBuildError::UnknownPart(collection_owner))?
            .children
            .add(id, declared_parent, part_type)?;

        self.parts.push(DocumentPart {
            parent: Some(declared_parent),
            children: DocumentPartsCollection::new(id),
            location,
            data,
        });
        match part_type {
            DocumentPartType::Operation => self.operations.push(id),
            DocumentPartType::NamedFragment => {
                if let Some(name) = self.parts[id.index()].name() {
                    self.named_fragments.entry(name.to_string()).or_insert(id);
                }
            },
            _ => {},
        }
        Ok(id)
    }

    /// Records `field` under `name` in the field map of the complex value
    /// `complex`. The first field registered under a name wins.
    pub(crate) fn register_complex_field(
        &mut self,
        complex: DocumentPartId,
        name: &str,
        field: DocumentPartId,
    ) -> Result<(), DocumentBuildError> {
        let part = self
            .parts
            .get_mut(complex.index())
            .ok_or(DocumentBuildError::UnknownPart(complex))?;
        if let DocumentPartData::SuppliedValue(SuppliedValue::Complex { fields }) = &mut part.data {
            fields.entry(name.to_string()).or_insert(field);
        }
        Ok(())
    }

    pub fn root(&self) -> DocumentPartId {
        DocumentPartId::from_index(0)
    }

    /// Number of parts, including the root.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// # Panics
    ///
    /// If `id` did not come from this document.
    pub fn part(&self, id: DocumentPartId) -> &DocumentPart {
        match self.parts.get(id.index()) {
            Some(part) => part,
            None => panic!(
                "document part {id} does not belong to this document ({} parts)",
                self.parts.len(),
            ),
        }
    }

    pub fn get(&self, id: DocumentPartId) -> Option<&DocumentPart> {
        self.parts.get(id.index())
    }

    /// Every part with its id, in the order parts were added.
    pub fn parts(&self) -> impl Iterator<Item = (DocumentPartId, &DocumentPart)> {
        self.parts
            .iter()
            .enumerate()
            .map(|(index, part)| (DocumentPartId::from_index(index), part))
    }

    pub fn children(&self, id: DocumentPartId) -> &DocumentPartsCollection {
        self.part(id).children()
    }

    pub fn parent(&self, id: DocumentPartId) -> Option<DocumentPartId> {
        self.part(id).parent()
    }

    /// Operations in source order.
    pub fn operations(&self) -> &[DocumentPartId] {
        &self.operations
    }

    /// The first operation called `name`.
    pub fn operation_named(&self, name: &str) -> Option<DocumentPartId> {
        self.operations
            .iter()
            .copied()
            .find(|id| self.part(*id).name() == Some(name))
    }

    /// Named fragments by name, in source order. When a name is defined more
    /// than once only the first definition is indexed here.
    pub fn named_fragments(&self) -> &IndexMap<String, DocumentPartId> {
        &self.named_fragments
    }

    pub fn named_fragment(&self, name: &str) -> Option<DocumentPartId> {
        self.named_fragments.get(name).copied()
    }

    pub fn variables(&self, id: DocumentPartId) -> &[DocumentPartId] {
        self.children(id).of_type(DocumentPartType::Variable)
    }

    pub fn directives(&self, id: DocumentPartId) -> &[DocumentPartId] {
        self.children(id).of_type(DocumentPartType::Directive)
    }

    pub fn arguments(&self, id: DocumentPartId) -> &[DocumentPartId] {
        self.children(id).of_type(DocumentPartType::Argument)
    }

    pub fn fields(&self, id: DocumentPartId) -> &[DocumentPartId] {
        self.children(id).of_type(DocumentPartType::Field)
    }

    /// Fields, fragment spreads and inline fragments directly under `id`, in
    /// source order.
    pub fn selections(&self, id: DocumentPartId) -> impl Iterator<Item = DocumentPartId> + '_ {
        self.children(id)
            .iter()
            .filter(|child| self.part(*child).part_type().is_selection())
    }

    /// The argument of `id` called `name`.
    pub fn argument(&self, id: DocumentPartId, name: &str) -> Option<DocumentPartId> {
        self.arguments(id)
            .iter()
            .copied()
            .find(|argument| self.part(*argument).name() == Some(name))
    }

    /// The supplied value at or directly under `id`.
    ///
    /// For a supplied-value part this is the part itself. For an argument or
    /// input-object field it is the value child, and for a variable it is the
    /// default value, if one was given.
    pub fn value(&self, id: DocumentPartId) -> Option<SuppliedValueRef<'_>> {
        let part = self.get(id)?;
        if let Some(value) = part.supplied_value() {
            return Some(SuppliedValueRef {
                document: self,
                id,
                value,
            });
        }
        match part.part_type() {
            DocumentPartType::Argument
            | DocumentPartType::InputObjectField
            | DocumentPartType::Variable => {
                let child = part
                    .children()
                    .iter()
                    .find(|child| self.part(*child).part_type().is_supplied_value())?;
                self.value(child)
            },
            _ => None,
        }
    }

    /// Parents of `id`, nearest first.
    pub fn ancestors(&self, id: DocumentPartId) -> impl Iterator<Item = DocumentPartId> + '_ {
        std::iter::successors(self.parent(id), |ancestor| self.parent(*ancestor))
    }

    /// Pre-order walk of `id` and everything below it.
    pub fn descendants(&self, id: DocumentPartId) -> impl Iterator<Item = DocumentPartId> + '_ {
        let mut stack = vec![id];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).as_slice().iter().rev().copied());
            Some(next)
        })
    }

    /// Distance from the root; the root itself is at depth `0`.
    pub fn depth(&self, id: DocumentPartId) -> usize {
        self.ancestors(id).count()
    }

    /// How far below `ancestor` the part `id` sits, or `None` if `ancestor`
    /// is not one of its ancestors.
    pub fn relative_depth(&self, ancestor: DocumentPartId, id: DocumentPartId) -> Option<usize> {
        self.ancestors(id)
            .position(|candidate| candidate == ancestor)
            .map(|position| position + 1)
    }

    /// The nearest operation or named fragment containing `id`.
    pub fn enclosing_scope(&self, id: DocumentPartId) -> Option<DocumentPartId> {
        self.ancestors(id)
            .find(|ancestor| self.part(*ancestor).part_type().is_variable_scope())
    }

    /// Every variable usage at or below `id`, in source order.
    pub fn variable_usages(&self, id: DocumentPartId) -> impl Iterator<Item = DocumentPartId> + '_ {
        self.descendants(id)
            .filter(|part| self.part(*part).part_type() == DocumentPartType::VariableUsage)
    }

    /// Finds the `Variable` part declaring the variable a usage refers to.
    ///
    /// The declaration must be unique within the nearest enclosing operation
    /// or named fragment.
    pub fn resolve_variable_usage(
        &self,
        usage: DocumentPartId,
    ) -> Result<DocumentPartId, VariableResolutionError> {
        let part = self.part(usage);
        let Some(SuppliedValue::VariableUsage { variable_name }) = part.supplied_value() else {
            return Err(VariableResolutionError::NotAVariableUsage {
                part: usage,
                part_type: part.part_type(),
            });
        };
        let Some(scope) = self.enclosing_scope(usage) else {
            return Err(VariableResolutionError::NoEnclosingScope {
                variable_name: variable_name.clone(),
            });
        };

        let mut declarations = self
            .variables(scope)
            .iter()
            .copied()
            .filter(|variable| self.part(*variable).name() == Some(variable_name.as_str()));
        match (declarations.next(), declarations.count()) {
            (Some(variable), 0) => Ok(variable),
            (Some(_), extra) => Err(VariableResolutionError::AmbiguousVariable {
                variable_name: variable_name.clone(),
                declarations: extra + 1,
            }),
            (None, _) => Err(VariableResolutionError::UndeclaredVariable {
                variable_name: variable_name.clone(),
                scope,
                scope_type: self.part(scope).part_type(),
            }),
        }
    }
}
