//! Static menu table and path resolution.
//!
//! The menu is a fixed tree of [`NodeId`]s. Each node's label, optional
//! [`Action`] and children come from [`NodeId::spec`]; the table is checked
//! once at startup by [`MenuTree::load`] and never changes afterwards.

use crate::core::error::NavigationError;
use crate::core::invariants::{MenuTable, validate_menu};
use crate::core::path::MenuPath;

/// Every node of the board menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    Main,
    LoggedIn,
    LoggedOut,
    ShowTopThreads,
    ShowThreadsWithArtist,
    ShowNewestThreads,
    MakeThread,
    Logout,
    OpenThread,
    ShowArt,
    ShowArtist,
    ShowTopComments,
    UpvoteThread,
    DownvoteThread,
    LeaveThread,
    ViewUser,
    ShowCommentsByUser,
    ShowPostsByUser,
    LeaveUser,
    Login,
    CreateAccount,
}

/// Operations bound to menu nodes. Dispatched by `crate::actions::invoke`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Login,
    CreateAccount,
    Logout,
    ShowTopThreads,
    ShowThreadsWithArtist,
    ShowNewestThreads,
    MakeThread,
    OpenThread,
    ShowThreadArt,
    ShowThreadArtist,
    ShowTopComments,
    UpvoteThread,
    DownvoteThread,
    LeaveThread,
    ViewUser,
    ShowCommentsByUser,
    ShowPostsByUser,
    LeaveUser,
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    /// Display name; unique among siblings.
    pub label: &'static str,
    pub action: Option<Action>,
    pub children: &'static [NodeId],
}

const LOGGED_IN_CHILDREN: &[NodeId] = &[
    NodeId::ShowTopThreads,
    NodeId::ShowThreadsWithArtist,
    NodeId::ShowNewestThreads,
    NodeId::MakeThread,
    NodeId::Logout,
    NodeId::OpenThread,
    NodeId::ViewUser,
];

const OPEN_THREAD_CHILDREN: &[NodeId] = &[
    NodeId::ShowArt,
    NodeId::ShowArtist,
    NodeId::ShowTopComments,
    NodeId::UpvoteThread,
    NodeId::DownvoteThread,
    NodeId::LeaveThread,
];

const VIEW_USER_CHILDREN: &[NodeId] = &[
    NodeId::ShowCommentsByUser,
    NodeId::ShowPostsByUser,
    NodeId::LeaveUser,
];

impl NodeId {
    pub const ALL: &'static [NodeId] = &[
        NodeId::Main,
        NodeId::LoggedIn,
        NodeId::LoggedOut,
        NodeId::ShowTopThreads,
        NodeId::ShowThreadsWithArtist,
        NodeId::ShowNewestThreads,
        NodeId::MakeThread,
        NodeId::Logout,
        NodeId::OpenThread,
        NodeId::ShowArt,
        NodeId::ShowArtist,
        NodeId::ShowTopComments,
        NodeId::UpvoteThread,
        NodeId::DownvoteThread,
        NodeId::LeaveThread,
        NodeId::ViewUser,
        NodeId::ShowCommentsByUser,
        NodeId::ShowPostsByUser,
        NodeId::LeaveUser,
        NodeId::Login,
        NodeId::CreateAccount,
    ];

    /// The transition table entry for this node.
    pub const fn spec(self) -> NodeSpec {
        const fn leaf(label: &'static str, action: Action) -> NodeSpec {
            NodeSpec {
                label,
                action: Some(action),
                children: &[],
            }
        }

        match self {
            NodeId::Main => NodeSpec {
                label: "main",
                action: None,
                children: &[NodeId::LoggedIn, NodeId::LoggedOut],
            },
            NodeId::LoggedIn => NodeSpec {
                label: "logged in",
                action: None,
                children: LOGGED_IN_CHILDREN,
            },
            NodeId::LoggedOut => NodeSpec {
                label: "logged out",
                action: None,
                children: &[NodeId::Login, NodeId::CreateAccount],
            },
            NodeId::ShowTopThreads => leaf("Show Top Threads", Action::ShowTopThreads),
            NodeId::ShowThreadsWithArtist => {
                leaf("Show Threads With Artist", Action::ShowThreadsWithArtist)
            }
            NodeId::ShowNewestThreads => leaf("Show Newest Threads", Action::ShowNewestThreads),
            NodeId::MakeThread => leaf("make thread", Action::MakeThread),
            NodeId::Logout => leaf("logout", Action::Logout),
            NodeId::OpenThread => NodeSpec {
                label: "open thread",
                action: Some(Action::OpenThread),
                children: OPEN_THREAD_CHILDREN,
            },
            NodeId::ShowArt => leaf("Show Art", Action::ShowThreadArt),
            NodeId::ShowArtist => leaf("Show Artist", Action::ShowThreadArtist),
            NodeId::ShowTopComments => leaf("Show Top Comments", Action::ShowTopComments),
            NodeId::UpvoteThread => leaf("upvote thread", Action::UpvoteThread),
            NodeId::DownvoteThread => leaf("downvote thread", Action::DownvoteThread),
            NodeId::LeaveThread => leaf("leave thread", Action::LeaveThread),
            NodeId::ViewUser => NodeSpec {
                label: "view user",
                action: Some(Action::ViewUser),
                children: VIEW_USER_CHILDREN,
            },
            NodeId::ShowCommentsByUser => {
                leaf("show comments by user", Action::ShowCommentsByUser)
            }
            NodeId::ShowPostsByUser => leaf("show posts by this user", Action::ShowPostsByUser),
            NodeId::LeaveUser => leaf("leave user", Action::LeaveUser),
            NodeId::Login => leaf("login", Action::Login),
            NodeId::CreateAccount => leaf("create account", Action::CreateAccount),
        }
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn action(self) -> Option<Action> {
        self.spec().action
    }

    pub fn children(self) -> &'static [NodeId] {
        self.spec().children
    }
}

const PATH_LOGGED_IN: &[NodeId] = &[NodeId::Main, NodeId::LoggedIn];
const PATH_LOGGED_OUT: &[NodeId] = &[NodeId::Main, NodeId::LoggedOut];
const PATH_IN_THREAD: &[NodeId] = &[NodeId::Main, NodeId::LoggedIn, NodeId::OpenThread];
const PATH_IN_PROFILE: &[NodeId] = &[NodeId::Main, NodeId::LoggedIn, NodeId::ViewUser];

impl Action {
    pub const ALL: &'static [Action] = &[
        Action::Login,
        Action::CreateAccount,
        Action::Logout,
        Action::ShowTopThreads,
        Action::ShowThreadsWithArtist,
        Action::ShowNewestThreads,
        Action::MakeThread,
        Action::OpenThread,
        Action::ShowThreadArt,
        Action::ShowThreadArtist,
        Action::ShowTopComments,
        Action::UpvoteThread,
        Action::DownvoteThread,
        Action::LeaveThread,
        Action::ViewUser,
        Action::ShowCommentsByUser,
        Action::ShowPostsByUser,
        Action::LeaveUser,
    ];

    /// Every path this action may return. Checked against the tree at startup.
    pub const fn targets(self) -> &'static [&'static [NodeId]] {
        match self {
            Action::Login | Action::CreateAccount => &[PATH_LOGGED_IN, PATH_LOGGED_OUT],
            Action::Logout => &[PATH_LOGGED_OUT],
            Action::ShowTopThreads
            | Action::ShowThreadsWithArtist
            | Action::ShowNewestThreads
            | Action::MakeThread
            | Action::LeaveThread
            | Action::LeaveUser => &[PATH_LOGGED_IN],
            Action::OpenThread => &[PATH_IN_THREAD, PATH_LOGGED_IN],
            Action::ShowThreadArt
            | Action::ShowThreadArtist
            | Action::ShowTopComments
            | Action::UpvoteThread
            | Action::DownvoteThread => &[PATH_IN_THREAD],
            Action::ViewUser => &[PATH_IN_PROFILE, PATH_LOGGED_IN],
            Action::ShowCommentsByUser | Action::ShowPostsByUser => &[PATH_IN_PROFILE],
        }
    }
}

/// Validated handle on the static menu table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTree {
    root: NodeId,
}

impl MenuTree {
    /// Check the table invariants and return the tree, or every violation found.
    pub fn load() -> Result<Self, NavigationError> {
        let violations = validate_menu(&MenuTable {
            root: NodeId::Main,
            nodes: NodeId::ALL,
            actions: Action::ALL,
            spec: &NodeId::spec,
            targets: &Action::targets,
        });
        if !violations.is_empty() {
            return Err(NavigationError::InvalidTree { violations });
        }
        Ok(Self {
            root: NodeId::Main,
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Follow `path` from the root and return the node it ends at.
    pub fn resolve(&self, path: &MenuPath) -> Result<NodeId, NavigationError> {
        resolve_with(self.root, NodeId::spec, path.nodes()).map_err(|reason| {
            NavigationError::UnresolvedPath {
                path: path.to_string(),
                reason,
            }
        })
    }

    /// Children of the node at `path`, sorted by display name.
    pub fn sorted_children(&self, path: &MenuPath) -> Result<Vec<NodeId>, NavigationError> {
        let node = self.resolve(path)?;
        let mut children = node.children().to_vec();
        children.sort_by(|a, b| a.label().cmp(b.label()));
        Ok(children)
    }
}

/// Walk `nodes` through the table given by `spec`, starting at `root`.
pub(crate) fn resolve_with(
    root: NodeId,
    spec: impl Fn(NodeId) -> NodeSpec,
    nodes: &[NodeId],
) -> Result<NodeId, String> {
    let Some((first, rest)) = nodes.split_first() else {
        return Err("path is empty".to_string());
    };
    if *first != root {
        return Err(format!("path must start at '{}'", spec(root).label));
    }
    let mut current = root;
    for segment in rest {
        if !spec(current).children.contains(segment) {
            return Err(format!(
                "'{}' is not a child of '{}'",
                spec(*segment).label,
                spec(current).label
            ));
        }
        current = *segment;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(nodes: &[NodeId]) -> Vec<&'static str> {
        nodes.iter().map(|node| node.label()).collect()
    }

    #[test]
    fn board_menu_passes_startup_checks() {
        let tree = MenuTree::load().expect("menu tree");
        assert_eq!(tree.root(), NodeId::Main);
    }

    #[test]
    fn resolve_follows_nested_path() {
        let tree = MenuTree::load().expect("menu tree");
        let path = MenuPath::in_thread();
        assert_eq!(tree.resolve(&path), Ok(NodeId::OpenThread));
    }

    #[test]
    fn resolve_rejects_segment_under_wrong_parent() {
        let tree = MenuTree::load().expect("menu tree");
        let path = MenuPath::from_nodes(&[NodeId::Main, NodeId::LoggedIn, NodeId::Login]);
        let err = tree.resolve(&path).unwrap_err();
        assert!(err.to_string().contains("'login' is not a child of 'logged in'"));
    }

    #[test]
    fn resolve_rejects_path_not_starting_at_root() {
        let tree = MenuTree::load().expect("menu tree");
        let path = MenuPath::from_nodes(&[NodeId::LoggedOut]);
        assert!(matches!(
            tree.resolve(&path),
            Err(NavigationError::UnresolvedPath { .. })
        ));
    }

    #[test]
    fn sorted_children_are_byte_ordered() {
        let tree = MenuTree::load().expect("menu tree");
        let children = tree.sorted_children(&MenuPath::logged_in()).expect("children");
        assert_eq!(
            labels(&children),
            vec![
                "Show Newest Threads",
                "Show Threads With Artist",
                "Show Top Threads",
                "logout",
                "make thread",
                "open thread",
                "view user",
            ]
        );
    }

    #[test]
    fn every_node_is_listed_once() {
        let mut all = NodeId::ALL.to_vec();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), NodeId::ALL.len());
    }
}
