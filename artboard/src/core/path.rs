//! Navigation paths through the menu tree.

use std::fmt;

use crate::core::menu::NodeId;

/// Ordered node ids from the root to the active node.
///
/// A path is only meaningful once `MenuTree::resolve` accepts it; constructing
/// one does not check it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuPath(Vec<NodeId>);

impl MenuPath {
    /// `[main]`, where every session starts.
    pub fn root() -> Self {
        Self(vec![NodeId::Main])
    }

    pub fn logged_in() -> Self {
        Self(vec![NodeId::Main, NodeId::LoggedIn])
    }

    pub fn logged_out() -> Self {
        Self(vec![NodeId::Main, NodeId::LoggedOut])
    }

    pub fn in_thread() -> Self {
        Self(vec![NodeId::Main, NodeId::LoggedIn, NodeId::OpenThread])
    }

    pub fn in_profile() -> Self {
        Self(vec![NodeId::Main, NodeId::LoggedIn, NodeId::ViewUser])
    }

    pub fn from_nodes(nodes: &[NodeId]) -> Self {
        Self(nodes.to_vec())
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// This path extended by one segment.
    pub fn child(&self, node: NodeId) -> Self {
        let mut nodes = self.0.clone();
        nodes.push(node);
        Self(nodes)
    }

    pub fn starts_with(&self, prefix: &MenuPath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains(&node)
    }
}

/// Renders as the `/`-separated display names, e.g. `main/logged in`.
impl fmt::Display for MenuPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.0.iter().map(|node| node.label()).collect();
        write!(f, "{}", labels.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_labels() {
        assert_eq!(MenuPath::in_thread().to_string(), "main/logged in/open thread");
    }

    #[test]
    fn child_extends_without_touching_parent() {
        let parent = MenuPath::logged_in();
        let child = parent.child(NodeId::ViewUser);
        assert_eq!(child, MenuPath::in_profile());
        assert_eq!(parent, MenuPath::logged_in());
        assert!(child.starts_with(&parent));
    }
}
