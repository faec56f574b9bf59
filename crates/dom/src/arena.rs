use crate::{DomError, Id, NodeKind};
use std::cmp::Ordering;

/// Where to insert a node relative to a reference sibling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

#[derive(Debug, Clone)]
struct NodeRecord {
    kind: NodeKind,
    parent: Option<Id>,
    children: Vec<Id>,
}

/// Arena-backed content tree.
///
/// Invariants:
/// - every `Id` handed out indexes a live record
/// - a node appears in at most one parent's child list, and that parent is
///   recorded in the node's `parent` field
/// - only documents and elements have children
#[derive(Debug, Clone)]
pub struct Dom {
    nodes: Vec<NodeRecord>,
    document: Id,
}

impl Dom {
    pub fn new() -> Self {
        let mut dom = Self {
            nodes: Vec::new(),
            document: Id(0),
        };
        dom.document = dom.push(NodeKind::Document);
        dom
    }

    pub fn document(&self) -> Id {
        self.document
    }

    fn push(&mut self, kind: NodeKind) -> Id {
        let id = Id(self.nodes.len() as u32);
        self.nodes.push(NodeRecord {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn record(&self, id: Id) -> Option<&NodeRecord> {
        self.nodes.get(id.index())
    }

    fn record_mut(&mut self, id: Id) -> Result<&mut NodeRecord, DomError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(DomError::UnknownNode(id))
    }

    // ===== creation =====

    pub fn create_element(&mut self, name: &str, attributes: Vec<(String, Option<String>)>) -> Id {
        self.push(NodeKind::Element {
            name: name.to_ascii_lowercase(),
            attributes,
        })
    }

    pub fn create_text(&mut self, text: &str) -> Id {
        self.push(NodeKind::Text(text.to_string()))
    }

    pub fn create_comment(&mut self, text: &str) -> Id {
        self.push(NodeKind::Comment(text.to_string()))
    }

    // ===== queries =====

    pub fn kind(&self, id: Id) -> Option<&NodeKind> {
        self.record(id).map(|r| &r.kind)
    }

    pub fn is_element(&self, id: Id) -> bool {
        matches!(self.kind(id), Some(NodeKind::Element { .. }))
    }

    pub fn is_text(&self, id: Id) -> bool {
        matches!(self.kind(id), Some(NodeKind::Text(_)))
    }

    /// Lowercase tag name for elements.
    pub fn name(&self, id: Id) -> Option<&str> {
        match self.kind(id) {
            Some(NodeKind::Element { name, .. }) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Attribute value; valueless attributes read as `""`.
    pub fn attr(&self, id: Id, attr: &str) -> Option<&str> {
        match self.kind(id) {
            Some(NodeKind::Element { attributes, .. }) => attributes
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(attr))
                .map(|(_, v)| v.as_deref().unwrap_or("")),
            _ => None,
        }
    }

    pub fn has_attr(&self, id: Id, attr: &str) -> bool {
        self.attr(id, attr).is_some()
    }

    pub fn attributes(&self, id: Id) -> &[(String, Option<String>)] {
        match self.kind(id) {
            Some(NodeKind::Element { attributes, .. }) => attributes,
            _ => &[],
        }
    }

    pub fn set_attr(&mut self, id: Id, attr: &str, value: &str) -> Result<(), DomError> {
        match &mut self.record_mut(id)?.kind {
            NodeKind::Element { attributes, .. } => {
                match attributes.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(attr)) {
                    Some((_, v)) => *v = Some(value.to_string()),
                    None => attributes.push((attr.to_ascii_lowercase(), Some(value.to_string()))),
                }
                Ok(())
            }
            _ => Err(DomError::NotAContainer(id)),
        }
    }

    pub fn text(&self, id: Id) -> Option<&str> {
        match self.kind(id) {
            Some(NodeKind::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Length of a text node in characters. Zero for anything else.
    pub fn text_len(&self, id: Id) -> usize {
        self.text(id).map_or(0, |t| t.chars().count())
    }

    /// Number of boundary offsets past the first one: characters for text,
    /// children for containers.
    pub fn node_length(&self, id: Id) -> usize {
        match self.kind(id) {
            Some(NodeKind::Text(text)) => text.chars().count(),
            Some(NodeKind::Comment(_)) | None => 0,
            Some(_) => self.child_count(id),
        }
    }

    pub fn parent(&self, id: Id) -> Option<Id> {
        self.record(id).and_then(|r| r.parent)
    }

    pub fn children(&self, id: Id) -> &[Id] {
        self.record(id).map_or(&[], |r| r.children.as_slice())
    }

    pub fn child(&self, id: Id, index: usize) -> Option<Id> {
        self.children(id).get(index).copied()
    }

    pub fn child_count(&self, id: Id) -> usize {
        self.children(id).len()
    }

    pub fn first_child(&self, id: Id) -> Option<Id> {
        self.children(id).first().copied()
    }

    pub fn last_child(&self, id: Id) -> Option<Id> {
        self.children(id).last().copied()
    }

    pub fn index_in_parent(&self, id: Id) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    pub fn next_sibling(&self, id: Id) -> Option<Id> {
        let parent = self.parent(id)?;
        let index = self.index_in_parent(id)?;
        self.child(parent, index + 1)
    }

    pub fn previous_sibling(&self, id: Id) -> Option<Id> {
        let parent = self.parent(id)?;
        let index = self.index_in_parent(id)?;
        index.checked_sub(1).and_then(|i| self.child(parent, i))
    }

    /// Strict ancestors, nearest first.
    pub fn ancestors(&self, id: Id) -> Ancestors<'_> {
        Ancestors {
            dom: self,
            next: self.parent(id),
        }
    }

    /// Inclusive containment: a node contains itself.
    pub fn contains(&self, ancestor: Id, node: Id) -> bool {
        ancestor == node || self.ancestors(node).any(|a| a == ancestor)
    }

    // ===== mutation =====

    pub fn append_child(&mut self, parent: Id, child: Id) -> Result<(), DomError> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` into `parent` before `reference`, or at the end when
    /// `reference` is `None`.
    pub fn insert_before(
        &mut self,
        parent: Id,
        child: Id,
        reference: Option<Id>,
    ) -> Result<(), DomError> {
        self.check_insertable(parent, child)?;
        let index = match reference {
            Some(reference) => self
                .children(parent)
                .iter()
                .position(|&c| c == reference)
                .ok_or(DomError::InvalidSibling { parent, reference })?,
            None => self.child_count(parent),
        };
        self.record_mut(parent)?.children.insert(index, child);
        self.record_mut(child)?.parent = Some(parent);
        log::trace!(target: "dom", "insert {child:?} under {parent:?} at {index}");
        Ok(())
    }

    pub fn insert_adjacent(
        &mut self,
        reference: Id,
        node: Id,
        placement: Placement,
    ) -> Result<(), DomError> {
        let parent = self.parent(reference).ok_or(DomError::Detached(reference))?;
        let anchor = match placement {
            Placement::Before => Some(reference),
            Placement::After => self.next_sibling(reference),
        };
        self.insert_before(parent, node, anchor)
    }

    /// Detach `node` from its parent. The subtree stays addressable.
    pub fn remove(&mut self, node: Id) -> Result<(), DomError> {
        let parent = self.parent(node).ok_or(DomError::Detached(node))?;
        self.record_mut(parent)?.children.retain(|&c| c != node);
        self.record_mut(node)?.parent = None;
        Ok(())
    }

    fn check_insertable(&self, parent: Id, child: Id) -> Result<(), DomError> {
        let parent_record = self.record(parent).ok_or(DomError::UnknownNode(parent))?;
        let child_record = self.record(child).ok_or(DomError::UnknownNode(child))?;
        if !parent_record.kind.can_have_children() {
            return Err(DomError::NotAContainer(parent));
        }
        if let Some(existing) = child_record.parent {
            return Err(DomError::AlreadyAttached {
                child,
                parent: existing,
            });
        }
        if self.contains(child, parent) {
            debug_assert!(false, "insert would create a cycle");
            return Err(DomError::CycleDetected { parent, child });
        }
        Ok(())
    }

    // ===== ordering =====

    /// Child indices from the topmost ancestor down to `id`.
    fn index_path(&self, id: Id) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = id;
        while let Some(index) = self.index_in_parent(current) {
            path.push(index);
            match self.parent(current) {
                Some(parent) => current = parent,
                None => break,
            }
        }
        path.reverse();
        path
    }

    /// Pre-order comparison of two nodes. An ancestor sorts before its
    /// descendants.
    pub fn compare_tree_order(&self, a: Id, b: Id) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        self.index_path(a).cmp(&self.index_path(b))
    }

    /// Compare two boundary points `(container, offset)` in document order.
    pub fn compare_boundary_points(&self, a: (Id, usize), b: (Id, usize)) -> Ordering {
        let (a_node, a_offset) = a;
        let (b_node, b_offset) = b;
        if a_node == b_node {
            return a_offset.cmp(&b_offset);
        }
        if self.contains(a_node, b_node) {
            let index = self.child_index_towards(a_node, b_node);
            return if index < a_offset {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        if self.contains(b_node, a_node) {
            return self.compare_boundary_points(b, a).reverse();
        }
        self.compare_tree_order(a_node, b_node)
    }

    /// Index, within `ancestor`, of the child that contains `node`.
    fn child_index_towards(&self, ancestor: Id, node: Id) -> usize {
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            if parent == ancestor {
                return self.index_in_parent(current).unwrap_or(0);
            }
            current = parent;
        }
        0
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Ancestors<'a> {
    dom: &'a Dom,
    next: Option<Id>,
}

impl Iterator for Ancestors<'_> {
    type Item = Id;

    fn next(&mut self) -> Option<Id> {
        let current = self.next?;
        self.next = self.dom.parent(current);
        Some(current)
    }
}
