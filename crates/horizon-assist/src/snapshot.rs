//! The per-frame widget-tree snapshot and its index queries.
//!
//! The host hands the adapter a flat vector of [`AccessNode`] records each
//! update cycle. Hierarchy is expressed through each record's parent index;
//! the application root is a synthetic sentinel ([`ObjectTarget::Root`])
//! with no record of its own. All structural queries are linear scans in
//! ascending record order — snapshots are small UI trees and queries are
//! rare relative to the frame rate, so an index cache would buy nothing.
//! Callers go through [`TreeSnapshot`] only, so the representation can
//! change without touching them.

use crate::node::AccessNode;

/// Address of one object in the accessibility tree: either the synthetic
/// application root or a record in the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectTarget {
    /// The application root. Never backed by a record; root queries are
    /// answered with fixed application semantics.
    Root,
    /// The record at this index in the current snapshot.
    Node(usize),
}

impl ObjectTarget {
    /// The record index, or `None` for the root.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Root => None,
            Self::Node(idx) => Some(idx),
        }
    }
}

/// An immutable-during-query snapshot of the widget tree.
///
/// Replaced wholesale on every [`crate::AtspiAdapter::sync`]; record
/// indices are stable only between two sync calls.
#[derive(Debug, Clone, Default)]
pub struct TreeSnapshot {
    nodes: Vec<AccessNode>,
}

impl TreeSnapshot {
    /// An empty snapshot (the state before the first sync).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a node vector produced by the host.
    pub fn new(nodes: Vec<AccessNode>) -> Self {
        Self { nodes }
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The record at `idx`, or `None` when out of range.
    pub fn node(&self, idx: usize) -> Option<&AccessNode> {
        self.nodes.get(idx)
    }

    /// Resolve a target to its record; the root resolves to `None`.
    pub fn resolve(&self, target: ObjectTarget) -> Option<&AccessNode> {
        self.node(target.index()?)
    }

    /// The parent target of the record at `idx`, or `None` when `idx` is
    /// out of range.
    pub fn parent_of(&self, idx: usize) -> Option<ObjectTarget> {
        let node = self.node(idx)?;
        Some(match node.parent {
            Some(parent) => ObjectTarget::Node(parent),
            None => ObjectTarget::Root,
        })
    }

    /// Indices of `parent`'s children, in ascending record order.
    pub fn children(&self, parent: ObjectTarget) -> impl Iterator<Item = usize> + '_ {
        let parent = parent.index();
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.parent == parent)
            .map(|(idx, _)| idx)
    }

    /// Number of records whose parent is `parent`.
    pub fn child_count(&self, parent: ObjectTarget) -> usize {
        self.children(parent).count()
    }

    /// The `n`-th (0-based) child of `parent` in ascending record order.
    pub fn nth_child(&self, parent: ObjectTarget, n: usize) -> Option<usize> {
        self.children(parent).nth(n)
    }

    /// Position of the record at `idx` among its siblings, or `None` when
    /// `idx` is out of range.
    pub fn index_in_parent(&self, idx: usize) -> Option<usize> {
        let parent = self.parent_of(idx)?;
        self.children(parent).position(|child| child == idx)
    }
}
