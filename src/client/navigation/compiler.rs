use std::collections::{HashMap, HashSet};

use crate::client::navigation::{
    error::RouteConfigError,
    node::{MenuIcon, RouteNode, View},
};

/// A path to view binding registered with the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRoute {
    pub key: String,
    pub label: String,
    pub path: String,
    pub view: View,
}

/// One entry of the sidebar menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub key: String,
    pub label: String,
    /// Path the label links to, `None` for plain-text categories.
    pub target: Option<String>,
    pub icon: Option<MenuIcon>,
    pub children: Option<Vec<MenuEntry>>,
}

/// Sidebar curation entry referencing a registry node by key.
///
/// `children: None` exposes every child of the referenced node, while
/// `Some(list)` exposes only the listed children in the listed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiderNode {
    pub key: String,
    pub children: Option<Vec<SiderNode>>,
}

impl SiderNode {
    /// References a node together with all of its children.
    pub fn all(key: &str) -> Self {
        Self {
            key: key.to_string(),
            children: None,
        }
    }

    /// References a node and only the listed subset of its children.
    pub fn only(key: &str, children: Vec<SiderNode>) -> Self {
        Self {
            key: key.to_string(),
            children: Some(children),
        }
    }
}

/// Normalizes a request path so that `/home`, `/home/` and `home` compare equal.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Collects every navigable node of the registry, depth-first in declaration order.
///
/// A node is emitted when it has both a path and a view; its children are
/// visited afterwards whether or not the node itself was emitted. Two nodes
/// declaring the same path are rejected.
pub fn flatten(registry: &[RouteNode]) -> Result<Vec<FlatRoute>, RouteConfigError> {
    let mut routes = Vec::new();
    let mut owners = HashMap::new();

    collect_routes(registry, &mut routes, &mut owners)?;

    Ok(routes)
}

fn collect_routes(
    nodes: &[RouteNode],
    routes: &mut Vec<FlatRoute>,
    owners: &mut HashMap<String, String>,
) -> Result<(), RouteConfigError> {
    for node in nodes {
        if let (Some(path), Some(view)) = (node.path(), node.view()) {
            let path = normalize_path(path);

            if let Some(owner) = owners.get(&path) {
                return Err(RouteConfigError::DuplicatePath(
                    path,
                    owner.clone(),
                    node.key.clone(),
                ));
            }
            owners.insert(path.clone(), node.key.clone());

            routes.push(FlatRoute {
                key: node.key.clone(),
                label: node.label.clone(),
                path,
                view,
            });
        }

        collect_routes(node.children(), routes, owners)?;
    }

    Ok(())
}

/// Checks the whole registry for configuration errors.
///
/// Rejects empty keys, sibling key collisions, relative paths and duplicate
/// paths anywhere in the tree.
pub fn validate(registry: &[RouteNode]) -> Result<(), RouteConfigError> {
    check_siblings(registry, "<root>")?;
    flatten(registry)?;

    Ok(())
}

fn check_siblings(nodes: &[RouteNode], parent: &str) -> Result<(), RouteConfigError> {
    let mut keys = HashSet::new();

    for node in nodes {
        if node.key.is_empty() {
            return Err(RouteConfigError::EmptyKey(node.label.clone()));
        }
        if !keys.insert(node.key.as_str()) {
            return Err(RouteConfigError::DuplicateKey(
                node.key.clone(),
                parent.to_string(),
            ));
        }
        if let Some(path) = node.path() {
            if !path.starts_with('/') {
                return Err(RouteConfigError::InvalidPath(
                    node.key.clone(),
                    path.to_string(),
                ));
            }
        }

        check_siblings(node.children(), &node.key)?;
    }

    Ok(())
}

/// Selects the registry nodes exposed in the sidebar.
///
/// Keys that do not exist in the registry are skipped; hiding detail or edit
/// pages is done by leaving them out of the curated children.
pub fn curate(registry: &[RouteNode], sider: &[SiderNode]) -> Vec<RouteNode> {
    sider
        .iter()
        .filter_map(|entry| {
            let source = registry.iter().find(|node| node.key == entry.key)?;
            let mut node = source.clone();

            if let Some(children) = &entry.children {
                node.replace_children(curate(source.children(), children));
            }

            Some(node)
        })
        .collect()
}

/// Builds the recursive sidebar menu for the given nodes.
pub fn build_menu(nodes: &[RouteNode]) -> Vec<MenuEntry> {
    nodes
        .iter()
        .map(|node| {
            let children = node.children();

            MenuEntry {
                key: node.key.clone(),
                label: node.label.clone(),
                target: node.path().map(normalize_path),
                icon: node.icon,
                children: (!children.is_empty()).then(|| build_menu(children)),
            }
        })
        .collect()
}
