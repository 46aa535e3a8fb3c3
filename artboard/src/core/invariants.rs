//! Startup checks for the menu table.
//!
//! The table is static, so any violation here is a programming defect.
//! Checks:
//! - No two siblings share a display name
//! - Every node hangs under exactly one parent and is reachable from the root
//! - The root carries no action
//! - Every action is bound to exactly one node
//! - Every path an action declares resolves in the tree
//! - A node with both an action and children has an action that returns into it

use std::collections::{HashMap, HashSet};

use crate::core::menu::{Action, NodeId, NodeSpec, resolve_with};

/// A menu table to validate. The board's own table is `NodeId::spec`; tests
/// substitute broken ones.
pub struct MenuTable<'a> {
    pub root: NodeId,
    pub nodes: &'a [NodeId],
    pub actions: &'a [Action],
    pub spec: &'a dyn Fn(NodeId) -> NodeSpec,
    pub targets: &'a dyn Fn(Action) -> &'static [&'static [NodeId]],
}

/// Return every violation found in `table` (empty on success).
pub fn validate_menu(table: &MenuTable<'_>) -> Vec<String> {
    let mut errors = Vec::new();
    let mut paths: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    let root_spec = (table.spec)(table.root);

    if root_spec.action.is_some() {
        errors.push(format!("{}: root must not carry an action", root_spec.label));
    }

    validate_node(table, table.root, vec![table.root], &mut paths, &mut errors);

    for node in table.nodes {
        if !paths.contains_key(node) {
            errors.push(format!(
                "node '{}' is unreachable from '{}'",
                (table.spec)(*node).label,
                root_spec.label
            ));
        }
    }

    validate_bindings(table, &paths, &mut errors);
    errors
}

fn validate_node(
    table: &MenuTable<'_>,
    node: NodeId,
    path: Vec<NodeId>,
    paths: &mut HashMap<NodeId, Vec<NodeId>>,
    errors: &mut Vec<String>,
) {
    let spec = (table.spec)(node);
    let rendered = render(table, &path);
    if paths.insert(node, path.clone()).is_some() {
        errors.push(format!(
            "{}: node '{}' appears under more than one parent",
            rendered, spec.label
        ));
        return;
    }

    let mut seen = HashSet::new();
    for child in spec.children {
        let label = (table.spec)(*child).label;
        if !seen.insert(label) {
            errors.push(format!("{}: duplicate sibling name '{}'", rendered, label));
        }
    }

    for child in spec.children {
        let mut child_path = path.clone();
        child_path.push(*child);
        validate_node(table, *child, child_path, paths, errors);
    }
}

fn validate_bindings(
    table: &MenuTable<'_>,
    paths: &HashMap<NodeId, Vec<NodeId>>,
    errors: &mut Vec<String>,
) {
    for action in table.actions {
        let bound: Vec<NodeId> = table
            .nodes
            .iter()
            .copied()
            .filter(|node| paths.contains_key(node) && (table.spec)(*node).action == Some(*action))
            .collect();
        if bound.len() != 1 {
            errors.push(format!(
                "action {:?} must be bound to exactly one node (found {})",
                action,
                bound.len()
            ));
        }

        for target in (table.targets)(*action) {
            if let Err(reason) = resolve_with(table.root, table.spec, target) {
                errors.push(format!(
                    "action {:?} declares unresolved path {}: {}",
                    action,
                    render(table, target),
                    reason
                ));
            }
        }

        for node in bound {
            if (table.spec)(node).children.is_empty() {
                continue;
            }
            let Some(node_path) = paths.get(&node) else {
                continue;
            };
            let enters = (table.targets)(*action)
                .iter()
                .any(|target| *target == node_path.as_slice());
            if !enters {
                errors.push(format!(
                    "{}: node has children but action {:?} never returns into it",
                    render(table, node_path),
                    action
                ));
            }
        }
    }
}

fn render(table: &MenuTable<'_>, path: &[NodeId]) -> String {
    path.iter()
        .map(|node| (table.spec)(*node).label)
        .collect::<Vec<_>>()
        .join("/")
}
