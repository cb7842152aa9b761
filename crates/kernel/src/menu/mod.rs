//! Dashboard navigation and per-role menu visibility.
//!
//! The menu tree is a static constant; each node names the one permission it
//! requires. The resolver filters that tree for a caller's [`AccessPolicy`]:
//! - leaves render when their permission is held
//! - groups render when their own permission or any child's is held
//! - the super role sees everything
//!
//! [`AccessPolicy`]: crate::permissions::AccessPolicy

mod item;
mod resolver;
mod tree;

pub use item::{MenuItem, PLACEHOLDER_PATH, find_by_path};
pub use resolver::{
    NavItem, is_menu_item_visible, is_visible_for, resolve_navigation, visible_children_for,
    visible_submenu_items,
};
pub use tree::{menu_tree, validate_tree};
