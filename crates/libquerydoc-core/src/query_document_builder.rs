use indexmap::IndexMap;
use libquerydoc_parser::ByteSpan;
use libquerydoc_parser::SourceText;
use libquerydoc_parser::syntax_tree::SyntaxNodeId;
use libquerydoc_parser::syntax_tree::SyntaxNodeType;
use libquerydoc_parser::syntax_tree::SyntaxTree;

use crate::DocumentBuildError;
use crate::DocumentPartData;
use crate::DocumentPartId;
use crate::OperationType;
use crate::PartAddedEvent;
use crate::PartAddedObserver;
use crate::QueryDocument;
use crate::TypeExpression;
use crate::supplied_value::SuppliedValue;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// Walks a parsed [`SyntaxTree`] and assembles the [`QueryDocument`] it
/// describes.
///
/// The walk is pre-order and follows source order, so parts are numbered in
/// the order their text appears. Text is copied out of `source`, leaving the
/// finished document independent of both the tree and the source.
///
/// ```rust
/// use libquerydoc_core::QueryDocumentBuilder;
/// use libquerydoc_parser::GraphQLParser;
/// use libquerydoc_parser::SourceText;
///
/// let source = SourceText::new("{ hero(episode: JEDI) { name } }");
/// let tree = GraphQLParser::new(&source).parse().unwrap();
/// let document = QueryDocumentBuilder::new(&tree, &source).build().unwrap();
///
/// let operation = document.operations()[0];
/// let hero = document.fields(operation)[0];
/// assert_eq!(document.part(hero).name(), Some("hero"));
/// ```
pub struct QueryDocumentBuilder<'a, 'src> {
    tree: &'a SyntaxTree,
    source: &'a SourceText<'src>,
}

impl<'a, 'src> QueryDocumentBuilder<'a, 'src> {
    pub fn new(tree: &'a SyntaxTree, source: &'a SourceText<'src>) -> Self {
        Self { tree, source }
    }

    pub fn build(&self) -> Result<QueryDocument> {
        self.build_with_observer(&mut ())
    }

    /// Like [`build()`](Self::build), reporting every added part to
    /// `observer` as it is added.
    pub fn build_with_observer(
        &self,
        observer: &mut dyn PartAddedObserver,
    ) -> Result<QueryDocument> {
        let document_node =
            self.tree
                .document()
                .ok_or(DocumentBuildError::MissingSyntaxChild {
                    node_type: SyntaxNodeType::Empty,
                    expected: "Document",
                })?;

        let mut walk = AssemblyWalk {
            tree: self.tree,
            source: self.source,
            document: QueryDocument::new(self.tree.node(document_node).location().clone()),
            observer,
        };
        let root = walk.document.root();
        for &definition in self.tree.children(document_node) {
            match self.tree.node(definition).node_type() {
                SyntaxNodeType::Operation => walk.operation(definition, root)?,
                SyntaxNodeType::NamedFragment => walk.named_fragment(definition, root)?,
                other => return Err(unexpected(other, "a document")),
            }
        }

        let document = walk.document;
        log::debug!(
            "assembled {} document parts ({} operations, {} named fragments)",
            document.part_count(),
            document.operations().len(),
            document.named_fragments().len(),
        );
        Ok(document)
    }
}

fn unexpected(node_type: SyntaxNodeType, context: &'static str) -> DocumentBuildError {
    DocumentBuildError::UnexpectedSyntaxNode { node_type, context }
}

struct AssemblyWalk<'a, 'src, 'obs> {
    tree: &'a SyntaxTree,
    source: &'a SourceText<'src>,
    document: QueryDocument,
    observer: &'obs mut dyn PartAddedObserver,
}

impl<'a, 'src> AssemblyWalk<'a, 'src, '_> {
    /// Children of a syntax node, borrowed from the tree rather than `self`.
    fn children(&self, node: SyntaxNodeId) -> &'a [SyntaxNodeId] {
        self.tree.children(node)
    }

    fn add_part(
        &mut self,
        parent: DocumentPartId,
        node: SyntaxNodeId,
        data: DocumentPartData,
    ) -> Result<DocumentPartId> {
        let location = self.tree.node(node).location().clone();
        let part_type = data.part_type();
        let part = self.document.attach(parent, parent, location, data)?;
        self.observer.part_added(&PartAddedEvent {
            part,
            parent,
            part_type,
            depth: self.document.depth(part),
        });
        Ok(part)
    }

    fn slice(&self, span: Option<ByteSpan>) -> Option<&'src str> {
        span.map(|span| self.source.slice(span))
    }

    fn primary_text(&self, node: SyntaxNodeId) -> Result<&'src str> {
        let syntax_node = self.tree.node(node);
        self.slice(syntax_node.primary_text())
            .ok_or(DocumentBuildError::MissingSyntaxText {
                node_type: syntax_node.node_type(),
                which: "primary",
            })
    }

    fn secondary_text(&self, node: SyntaxNodeId) -> Result<&'src str> {
        let syntax_node = self.tree.node(node);
        self.slice(syntax_node.secondary_text())
            .ok_or(DocumentBuildError::MissingSyntaxText {
                node_type: syntax_node.node_type(),
                which: "secondary",
            })
    }

    fn operation(&mut self, node: SyntaxNodeId, parent: DocumentPartId) -> Result<()> {
        let syntax_node = self.tree.node(node);
        let operation_type = match self.slice(syntax_node.primary_text()) {
            None => OperationType::Query,
            Some(keyword) => OperationType::from_keyword(keyword).ok_or_else(|| {
                DocumentBuildError::UnrecognizedOperationType {
                    keyword: keyword.to_string(),
                }
            })?,
        };
        let name = self.slice(syntax_node.secondary_text()).map(str::to_string);
        log::trace!(
            "assembling {operation_type} operation {}",
            name.as_deref().unwrap_or("<anonymous>"),
        );

        let operation = self.add_part(
            parent,
            node,
            DocumentPartData::Operation {
                operation_type,
                name,
            },
        )?;
        for &child in self.children(node) {
            match self.tree.node(child).node_type() {
                SyntaxNodeType::VariableCollection => {
                    for &variable in self.children(child) {
                        self.variable(variable, operation)?;
                    }
                },
                SyntaxNodeType::Directive => self.directive(child, operation)?,
                SyntaxNodeType::FieldCollection => self.selections(child, operation)?,
                other => return Err(unexpected(other, "an operation")),
            }
        }
        Ok(())
    }

    fn variable(&mut self, node: SyntaxNodeId, parent: DocumentPartId) -> Result<()> {
        let node_type = self.tree.node(node).node_type();
        if node_type != SyntaxNodeType::Variable {
            return Err(unexpected(node_type, "a variable collection"));
        }
        let name = self.primary_text(node)?.to_string();
        let type_text = self.secondary_text(node)?;
        let type_expression = TypeExpression::parse(type_text).map_err(|reason| {
            DocumentBuildError::InvalidTypeExpression {
                text: type_text.to_string(),
                reason,
            }
        })?;

        let variable = self.add_part(
            parent,
            node,
            DocumentPartData::Variable {
                name,
                type_expression,
            },
        )?;
        for &child in self.children(node) {
            let child_type = self.tree.node(child).node_type();
            if child_type == SyntaxNodeType::Directive {
                self.directive(child, variable)?;
            } else if child_type.is_value() {
                self.value(child, variable)?;
            } else {
                return Err(unexpected(child_type, "a variable definition"));
            }
        }
        Ok(())
    }

    fn directive(&mut self, node: SyntaxNodeId, parent: DocumentPartId) -> Result<()> {
        let name = self.primary_text(node)?.to_string();
        let directive = self.add_part(parent, node, DocumentPartData::Directive { name })?;
        for &child in self.children(node) {
            match self.tree.node(child).node_type() {
                SyntaxNodeType::InputItemCollection => self.arguments(child, directive)?,
                other => return Err(unexpected(other, "a directive")),
            }
        }
        Ok(())
    }

    fn arguments(&mut self, collection: SyntaxNodeId, parent: DocumentPartId) -> Result<()> {
        for &item in self.children(collection) {
            let node_type = self.tree.node(item).node_type();
            if node_type != SyntaxNodeType::InputItem {
                return Err(unexpected(node_type, "an argument list"));
            }
            let name = self.primary_text(item)?.to_string();
            let argument = self.add_part(parent, item, DocumentPartData::Argument { name })?;
            self.input_item_value(item, argument)?;
        }
        Ok(())
    }

    /// Assembles the single value child of an `InputItem` node.
    fn input_item_value(&mut self, item: SyntaxNodeId, parent: DocumentPartId) -> Result<()> {
        let value = self.children(item).first().copied().ok_or(
            DocumentBuildError::MissingSyntaxChild {
                node_type: SyntaxNodeType::InputItem,
                expected: "value",
            },
        )?;
        self.value(value, parent)
    }

    fn selections(&mut self, collection: SyntaxNodeId, parent: DocumentPartId) -> Result<()> {
        for &selection in self.children(collection) {
            match self.tree.node(selection).node_type() {
                SyntaxNodeType::Field => self.field(selection, parent)?,
                SyntaxNodeType::FragmentSpread => self.fragment_spread(selection, parent)?,
                SyntaxNodeType::InlineFragment => self.inline_fragment(selection, parent)?,
                other => return Err(unexpected(other, "a selection set")),
            }
        }
        Ok(())
    }

    fn field(&mut self, node: SyntaxNodeId, parent: DocumentPartId) -> Result<()> {
        let name = self.primary_text(node)?.to_string();
        let alias = self
            .slice(self.tree.node(node).secondary_text())
            .map(str::to_string);
        let field = self.add_part(parent, node, DocumentPartData::Field { name, alias })?;
        for &child in self.children(node) {
            match self.tree.node(child).node_type() {
                SyntaxNodeType::InputItemCollection => self.arguments(child, field)?,
                SyntaxNodeType::Directive => self.directive(child, field)?,
                SyntaxNodeType::FieldCollection => self.selections(child, field)?,
                other => return Err(unexpected(other, "a field")),
            }
        }
        Ok(())
    }

    fn fragment_spread(&mut self, node: SyntaxNodeId, parent: DocumentPartId) -> Result<()> {
        let fragment_name = self.primary_text(node)?.to_string();
        let spread = self.add_part(
            parent,
            node,
            DocumentPartData::FragmentSpread { fragment_name },
        )?;
        self.directives_only(node, spread, "a fragment spread")
    }

    fn inline_fragment(&mut self, node: SyntaxNodeId, parent: DocumentPartId) -> Result<()> {
        let type_condition = self
            .slice(self.tree.node(node).primary_text())
            .map(str::to_string);
        let fragment = self.add_part(
            parent,
            node,
            DocumentPartData::InlineFragment { type_condition },
        )?;
        self.fragment_body(node, fragment, "an inline fragment")
    }

    fn named_fragment(&mut self, node: SyntaxNodeId, parent: DocumentPartId) -> Result<()> {
        let name = self.primary_text(node)?.to_string();
        let type_condition = self.secondary_text(node)?.to_string();
        log::trace!("assembling fragment {name} on {type_condition}");
        let fragment = self.add_part(
            parent,
            node,
            DocumentPartData::NamedFragment {
                name,
                type_condition,
            },
        )?;
        self.fragment_body(node, fragment, "a named fragment")
    }

    fn directives_only(
        &mut self,
        node: SyntaxNodeId,
        part: DocumentPartId,
        context: &'static str,
    ) -> Result<()> {
        for &child in self.children(node) {
            match self.tree.node(child).node_type() {
                SyntaxNodeType::Directive => self.directive(child, part)?,
                other => return Err(unexpected(other, context)),
            }
        }
        Ok(())
    }

    /// `Directive*` followed by a selection set.
    fn fragment_body(
        &mut self,
        node: SyntaxNodeId,
        part: DocumentPartId,
        context: &'static str,
    ) -> Result<()> {
        for &child in self.children(node) {
            match self.tree.node(child).node_type() {
                SyntaxNodeType::Directive => self.directive(child, part)?,
                SyntaxNodeType::FieldCollection => self.selections(child, part)?,
                other => return Err(unexpected(other, context)),
            }
        }
        Ok(())
    }

    /// Maps a value node's type tag to its [`SuppliedValue`] variant.
    fn supplied_value(&self, node: SyntaxNodeId) -> Result<SuppliedValue> {
        let syntax_node = self.tree.node(node);
        Ok(match syntax_node.node_type() {
            SyntaxNodeType::ScalarValue => SuppliedValue::Scalar {
                kind: syntax_node.primary_value_kind().ok_or(
                    DocumentBuildError::MissingSyntaxText {
                        node_type: SyntaxNodeType::ScalarValue,
                        which: "value kind",
                    },
                )?,
                text: self.primary_text(node)?.to_string(),
            },
            SyntaxNodeType::EnumValue => SuppliedValue::Enum {
                value: self.primary_text(node)?.to_string(),
            },
            SyntaxNodeType::NullValue => SuppliedValue::Null,
            SyntaxNodeType::ListValue => SuppliedValue::List,
            SyntaxNodeType::ComplexValue => SuppliedValue::Complex {
                fields: IndexMap::new(),
            },
            SyntaxNodeType::VariableValue => SuppliedValue::VariableUsage {
                variable_name: self.primary_text(node)?.to_string(),
            },
            other => return Err(unexpected(other, "a value position")),
        })
    }

    fn value(&mut self, node: SyntaxNodeId, parent: DocumentPartId) -> Result<()> {
        let supplied_value = self.supplied_value(node)?;
        let value = self.add_part(parent, node, DocumentPartData::SuppliedValue(supplied_value))?;

        match self.tree.node(node).node_type() {
            SyntaxNodeType::ListValue => {
                for &item in self.children(node) {
                    self.value(item, value)?;
                }
            },
            SyntaxNodeType::ComplexValue => {
                for &item in self.children(node) {
                    let node_type = self.tree.node(item).node_type();
                    if node_type != SyntaxNodeType::InputItem {
                        return Err(unexpected(node_type, "a complex value"));
                    }
                    let name = self.primary_text(item)?;
                    let field = self.add_part(
                        value,
                        item,
                        DocumentPartData::InputObjectField {
                            name: name.to_string(),
                        },
                    )?;
                    self.document.register_complex_field(value, name, field)?;
                    self.input_item_value(item, field)?;
                }
            },
            _ => {},
        }
        Ok(())
    }
}
