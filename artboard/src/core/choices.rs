//! Choice enumeration and selection parsing for one menu screen.

use crate::core::error::NavigationError;
use crate::core::menu::{MenuTree, NodeId};
use crate::core::path::MenuPath;

/// Label of the synthetic trailing choice. Never a tree node.
pub const QUIT_LABEL: &str = "quit";

/// The legal choices at one path, in display order.
///
/// Real choices occupy indices `0..n`; index `n` is quit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceList {
    entries: Vec<NodeId>,
}

impl ChoiceList {
    pub fn quit_index(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.entries.get(index).copied()
    }

    pub fn entries(&self) -> &[NodeId] {
        &self.entries
    }

    /// Display labels including the trailing quit choice.
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .map(|node| node.label())
            .chain(std::iter::once(QUIT_LABEL))
            .collect()
    }

    /// Screen lines: `(i) name` per choice, a blank line, `(n) quit`, a blank line.
    pub fn render(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, node)| choice_line(index, node.label()))
            .collect();
        lines.push(String::new());
        lines.push(choice_line(self.quit_index(), QUIT_LABEL));
        lines.push(String::new());
        lines
    }
}

/// Parsed answer to a menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Node(NodeId),
    Quit,
    /// Unparsable or out of range; the screen is shown again.
    Invalid,
}

/// Resolve `path` and list its children sorted by display name.
pub fn enumerate_choices(tree: &MenuTree, path: &MenuPath) -> Result<ChoiceList, NavigationError> {
    let entries = tree.sorted_children(path)?;
    Ok(ChoiceList { entries })
}

/// Interpret one line of user input against `choices`.
pub fn parse_selection(choices: &ChoiceList, raw: &str) -> Selection {
    let Ok(index) = raw.trim().parse::<usize>() else {
        return Selection::Invalid;
    };
    if index == choices.quit_index() {
        return Selection::Quit;
    }
    match choices.get(index) {
        Some(node) => Selection::Node(node),
        None => Selection::Invalid,
    }
}

fn choice_line(index: usize, label: &str) -> String {
    format!("({}) {}", index, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_out_choices() -> ChoiceList {
        let tree = MenuTree::load().expect("menu tree");
        enumerate_choices(&tree, &MenuPath::logged_out()).expect("choices")
    }

    #[test]
    fn enumeration_is_sorted_and_repeatable() {
        let tree = MenuTree::load().expect("menu tree");
        let first = enumerate_choices(&tree, &MenuPath::in_thread()).expect("choices");
        let second = enumerate_choices(&tree, &MenuPath::in_thread()).expect("choices");
        assert_eq!(first, second);
        assert_eq!(
            first.labels(),
            vec![
                "Show Art",
                "Show Artist",
                "Show Top Comments",
                "downvote thread",
                "leave thread",
                "upvote thread",
                "quit",
            ]
        );
    }

    #[test]
    fn every_resolvable_path_enumerates_sorted() {
        let tree = MenuTree::load().expect("menu tree");
        for path in [
            MenuPath::root(),
            MenuPath::logged_in(),
            MenuPath::logged_out(),
            MenuPath::in_thread(),
            MenuPath::in_profile(),
        ] {
            let choices = enumerate_choices(&tree, &path).expect("choices");
            let labels: Vec<&str> = choices.entries().iter().map(|n| n.label()).collect();
            let mut sorted = labels.clone();
            sorted.sort();
            assert_eq!(labels, sorted, "unsorted choices at {}", path);
        }
    }

    #[test]
    fn quit_sits_after_real_choices() {
        let choices = logged_out_choices();
        assert_eq!(choices.quit_index(), 2);
        assert_eq!(parse_selection(&choices, "2"), Selection::Quit);
        assert_eq!(
            parse_selection(&choices, "0"),
            Selection::Node(NodeId::CreateAccount)
        );
        assert_eq!(parse_selection(&choices, " 1 "), Selection::Node(NodeId::Login));
    }

    #[test]
    fn out_of_range_and_garbage_are_invalid() {
        let choices = logged_out_choices();
        for raw in ["3", "-1", "", "one", "1.0", "99999999999999999999999"] {
            assert_eq!(parse_selection(&choices, raw), Selection::Invalid, "{raw:?}");
        }
    }

    #[test]
    fn render_matches_screen_layout() {
        let choices = logged_out_choices();
        assert_eq!(
            choices.render(),
            vec!["(0) create account", "(1) login", "", "(2) quit", ""]
        );
    }
}
