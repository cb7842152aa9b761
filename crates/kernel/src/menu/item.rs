//! Menu item tree nodes.

use serde::Serialize;

use crate::models::Permission;

/// Target path of a node that only groups children.
pub const PLACEHOLDER_PATH: &str = "#";

/// One navigable destination, possibly grouping a submenu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    /// Human-readable label.
    pub label: String,
    /// Route path, or [`PLACEHOLDER_PATH`] for groups.
    pub path: String,
    /// Permission required to see this item.
    pub permission: Permission,
    /// Submenu in render order (empty for leaves).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// A leaf linking directly to `path`.
    pub fn leaf(label: impl Into<String>, path: impl Into<String>, permission: Permission) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            permission,
            children: Vec::new(),
        }
    }

    /// A group whose only navigation goes through `children`.
    pub fn group(label: impl Into<String>, permission: Permission, children: Vec<MenuItem>) -> Self {
        Self {
            label: label.into(),
            path: PLACEHOLDER_PATH.to_string(),
            permission,
            children,
        }
    }

    /// An item with no children, including an empty submenu, is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Find the node routing to `path` in this subtree.
    ///
    /// Group placeholders never match.
    pub fn find_by_path(&self, path: &str) -> Option<&MenuItem> {
        if self.path != PLACEHOLDER_PATH && self.path == path {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_path(path))
    }

    /// Every permission referenced in this subtree, depth first.
    pub fn permissions(&self) -> Vec<Permission> {
        let mut out = vec![self.permission];
        for child in &self.children {
            out.extend(child.permissions());
        }
        out
    }
}

/// Find the node routing to `path` anywhere in `items`.
pub fn find_by_path<'a>(items: &'a [MenuItem], path: &str) -> Option<&'a MenuItem> {
    items.iter().find_map(|item| item.find_by_path(path))
}
