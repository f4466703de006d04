//! Mutable arena document.
//!
//! Nodes are addressed by [`Id`] and never reuse an id after removal, so a
//! stale id held by a caller resolves to [`DomError::UnknownNode`] instead of
//! silently aliasing a newer node.

use crate::types::{DomError, Id, NodeId, NodeKind};
use std::collections::HashMap;

const DOCUMENT_ID: Id = Id(0);

#[derive(Clone, Debug)]
struct NodeRecord {
    kind: NodeKind,
    parent: Option<Id>,
    children: Vec<Id>,
}

/// Arena-backed document tree with focus tracking.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: HashMap<Id, NodeRecord>,
    next_id: NodeId,
    active: Option<Id>,
}

impl Document {
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(
            DOCUMENT_ID,
            NodeRecord {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            next_id: DOCUMENT_ID.0 + 1,
            active: None,
        }
    }

    pub fn root(&self) -> Id {
        DOCUMENT_ID
    }

    pub fn contains(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of live nodes, including the document node.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn kind(&self, id: Id) -> Option<&NodeKind> {
        self.nodes.get(&id).map(|n| &n.kind)
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a detached element. Attribute names are stored as given.
    pub fn create_element(&mut self, name: &str, attributes: &[(&str, &str)]) -> Id {
        let attributes = attributes
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect();
        self.insert_record(NodeKind::Element {
            name: name.to_string(),
            attributes,
            style: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: &str) -> Id {
        self.insert_record(NodeKind::Text {
            text: text.to_string(),
        })
    }

    /// Shallow clone of an element: name, attributes and inline style are
    /// copied, children are not. The clone is detached.
    pub fn clone_element(&mut self, id: Id) -> Result<Id, DomError> {
        let kind = self.node(id)?.kind.clone();
        if !matches!(kind, NodeKind::Element { .. }) {
            return Err(DomError::WrongNodeKind(id));
        }
        Ok(self.insert_record(kind))
    }

    fn insert_record(&mut self, kind: NodeKind) -> Id {
        let id = Id(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            NodeRecord {
                kind,
                parent: None,
                children: Vec::new(),
            },
        );
        id
    }

    // =========================================================================
    // Tree structure
    // =========================================================================

    pub fn parent(&self, id: Id) -> Option<Id> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: Id) -> &[Id] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn append_child(&mut self, parent: Id, child: Id) -> Result<(), DomError> {
        self.check_attach(parent, child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Insert `child` as the next sibling of `reference`.
    pub fn insert_after(&mut self, reference: Id, child: Id) -> Result<(), DomError> {
        let parent = self
            .node(reference)?
            .parent
            .ok_or(DomError::InvalidParent(reference))?;
        self.check_attach(parent, child)?;
        let siblings = &mut self.node_mut(parent)?.children;
        let pos = siblings
            .iter()
            .position(|k| *k == reference)
            .ok_or(DomError::InvalidParent(reference))?;
        siblings.insert(pos + 1, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Remove a node and its whole subtree. Focus inside the subtree is lost.
    pub fn remove(&mut self, id: Id) -> Result<(), DomError> {
        if id == DOCUMENT_ID {
            return Err(DomError::InvalidParent(id));
        }
        let parent = self.node(id)?.parent;
        if let Some(parent) = parent
            && let Some(record) = self.nodes.get_mut(&parent)
        {
            record.children.retain(|k| *k != id);
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(record) = self.nodes.remove(&current) {
                stack.extend(record.children);
            }
            if self.active == Some(current) {
                log::trace!(target: "dom", "focused node {current} removed");
                self.active = None;
            }
        }
        Ok(())
    }

    fn check_attach(&self, parent: Id, child: Id) -> Result<(), DomError> {
        if parent == child || self.is_ancestor(child, parent) {
            return Err(DomError::CycleDetected { parent, child });
        }
        if !self.node(parent)?.kind.allows_children() {
            return Err(DomError::InvalidParent(parent));
        }
        if self.node(child)?.parent.is_some() || child == DOCUMENT_ID {
            return Err(DomError::InvalidParent(child));
        }
        Ok(())
    }

    /// Returns `true` if `ancestor` is a strict ancestor of `node`.
    pub fn is_ancestor(&self, ancestor: Id, node: Id) -> bool {
        let mut current = self.parent(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Returns `true` if the node is reachable from the document root.
    pub fn is_connected(&self, id: Id) -> bool {
        id == DOCUMENT_ID || (self.contains(id) && self.is_ancestor(DOCUMENT_ID, id))
    }

    /// Nearest strict ancestor element with the given tag name.
    pub fn closest_ancestor(&self, id: Id, name: &str) -> Option<Id> {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if self.is_element(ancestor, name) {
                return Some(ancestor);
            }
            current = self.parent(ancestor);
        }
        None
    }

    /// Descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: Id) -> Vec<Id> {
        let mut out = Vec::new();
        let mut stack: Vec<Id> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// Concatenated text of the node's descendant text nodes.
    pub fn text_content(&self, id: Id) -> String {
        let mut out = String::new();
        for child in self.descendants(id) {
            if let Some(NodeKind::Text { text }) = self.kind(child) {
                out.push_str(text);
            }
        }
        out
    }

    // =========================================================================
    // Element data
    // =========================================================================

    pub fn name(&self, id: Id) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_element(&self, id: Id, name: &str) -> bool {
        self.name(id).is_some_and(|n| n.eq_ignore_ascii_case(name))
    }

    /// Attribute value. A present attribute without a value reads as `""`.
    pub fn attr(&self, id: Id, name: &str) -> Option<&str> {
        let NodeKind::Element { attributes, .. } = self.kind(id)? else {
            return None;
        };
        attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn has_attr(&self, id: Id, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    pub fn set_attr(&mut self, id: Id, name: &str, value: Option<&str>) -> Result<(), DomError> {
        let attributes = self.attributes_mut(id)?;
        let value = value.map(str::to_string);
        match attributes.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
            Some((_, v)) => *v = value,
            None => attributes.push((name.to_string(), value)),
        }
        Ok(())
    }

    pub fn remove_attr(&mut self, id: Id, name: &str) -> Result<(), DomError> {
        self.attributes_mut(id)?
            .retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        Ok(())
    }

    pub fn has_class(&self, id: Id, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
    }

    pub fn add_class(&mut self, id: Id, class: &str) -> Result<(), DomError> {
        if class.is_empty() || self.has_class(id, class) {
            return self.node(id).map(|_| ());
        }
        let joined = match self.attr(id, "class").map(str::trim) {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr(id, "class", Some(&joined))
    }

    pub fn remove_class(&mut self, id: Id, class: &str) -> Result<(), DomError> {
        let Some(existing) = self.attr(id, "class") else {
            return self.node(id).map(|_| ());
        };
        let kept: Vec<&str> = existing
            .split_ascii_whitespace()
            .filter(|c| *c != class)
            .collect();
        let kept = kept.join(" ");
        self.set_attr(id, "class", Some(&kept))
    }

    /// Inline style property value.
    pub fn style(&self, id: Id, prop: &str) -> Option<&str> {
        let NodeKind::Element { style, .. } = self.kind(id)? else {
            return None;
        };
        style
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(prop))
            .map(|(_, v)| v.as_str())
    }

    pub fn set_style(&mut self, id: Id, prop: &str, value: &str) -> Result<(), DomError> {
        let style = self.style_mut(id)?;
        match style.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(prop)) {
            Some((_, v)) => *v = value.to_string(),
            None => style.push((prop.to_string(), value.to_string())),
        }
        Ok(())
    }

    pub fn remove_style(&mut self, id: Id, prop: &str) -> Result<(), DomError> {
        self.style_mut(id)?
            .retain(|(k, _)| !k.eq_ignore_ascii_case(prop));
        Ok(())
    }

    pub fn is_hidden(&self, id: Id) -> bool {
        self.style(id, "display").is_some_and(|v| v == "none")
    }

    pub fn set_hidden(&mut self, id: Id, hidden: bool) -> Result<(), DomError> {
        if hidden {
            self.set_style(id, "display", "none")
        } else {
            self.remove_style(id, "display")
        }
    }

    pub fn is_disabled(&self, id: Id) -> bool {
        self.has_attr(id, "disabled")
    }

    pub fn set_disabled(&mut self, id: Id, disabled: bool) -> Result<(), DomError> {
        if disabled {
            self.set_attr(id, "disabled", Some("disabled"))
        } else {
            self.remove_attr(id, "disabled")
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    pub fn active_element(&self) -> Option<Id> {
        self.active
    }

    /// Elements that are connected, visible and enabled can take focus.
    pub fn is_focusable(&self, id: Id) -> bool {
        self.name(id).is_some()
            && self.is_connected(id)
            && !self.is_hidden(id)
            && !self.is_disabled(id)
    }

    /// Record the active element. Does not dispatch any event.
    pub fn set_active_element(&mut self, id: Option<Id>) {
        self.active = id.filter(|id| self.contains(*id));
    }

    fn node(&self, id: Id) -> Result<&NodeRecord, DomError> {
        self.nodes.get(&id).ok_or(DomError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: Id) -> Result<&mut NodeRecord, DomError> {
        self.nodes.get_mut(&id).ok_or(DomError::UnknownNode(id))
    }

    fn attributes_mut(&mut self, id: Id) -> Result<&mut Vec<(String, Option<String>)>, DomError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Element { attributes, .. } => Ok(attributes),
            _ => Err(DomError::WrongNodeKind(id)),
        }
    }

    fn style_mut(&mut self, id: Id) -> Result<&mut Vec<(String, String)>, DomError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Element { style, .. } => Ok(style),
            _ => Err(DomError::WrongNodeKind(id)),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
