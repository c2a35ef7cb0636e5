use std::collections::HashMap;

use crate::client::navigation::{
    compiler::{build_menu, curate, flatten, normalize_path, validate, FlatRoute, MenuEntry, SiderNode},
    error::RouteConfigError,
    node::{RouteNode, View},
};

/// One step of the breadcrumb trail above the content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub target: Option<String>,
}

/// Compiled, immutable navigation configuration.
///
/// Built once at startup from the registry and the sidebar curation, then
/// shared with the router and the shell through context.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    registry: Vec<RouteNode>,
    routes: Vec<FlatRoute>,
    index: HashMap<String, usize>,
    menu: Vec<MenuEntry>,
}

impl RouteTable {
    pub fn compile(registry: Vec<RouteNode>, sider: &[SiderNode]) -> Result<Self, RouteConfigError> {
        validate(&registry)?;

        let routes = flatten(&registry)?;
        let index = routes
            .iter()
            .enumerate()
            .map(|(position, route)| (route.path.clone(), position))
            .collect();
        let menu = build_menu(&curate(&registry, sider));

        Ok(Self {
            registry,
            routes,
            index,
            menu,
        })
    }

    pub fn routes(&self) -> &[FlatRoute] {
        &self.routes
    }

    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    /// Finds the route bound to a request path.
    pub fn resolve(&self, path: &str) -> Option<&FlatRoute> {
        self.index
            .get(&normalize_path(path))
            .map(|position| &self.routes[*position])
    }

    pub fn view(&self, path: &str) -> Option<View> {
        self.resolve(path).map(|route| route.view)
    }

    /// Labels from the top-level registry entry down to the node owning `path`.
    ///
    /// Empty when the path is not registered.
    pub fn breadcrumbs(&self, path: &str) -> Vec<Crumb> {
        let path = normalize_path(path);
        let mut trail = Vec::new();

        if find_trail(&self.registry, &path, &mut trail) {
            trail
                .into_iter()
                .map(|node| Crumb {
                    label: node.label.clone(),
                    target: node.path().map(normalize_path),
                })
                .collect()
        } else {
            Vec::new()
        }
    }

    /// Menu keys leading to the entry for `path`, outermost first.
    ///
    /// The last key is the entry to highlight, the ones before it are the
    /// submenus to keep open. Empty when the path is not in the menu.
    pub fn selected_keys(&self, path: &str) -> Vec<String> {
        let path = normalize_path(path);
        let mut keys = Vec::new();

        if find_menu_keys(&self.menu, &path, &mut keys) {
            keys
        } else {
            Vec::new()
        }
    }
}

fn find_trail<'a>(nodes: &'a [RouteNode], path: &str, trail: &mut Vec<&'a RouteNode>) -> bool {
    for node in nodes {
        trail.push(node);

        if node.path().map(normalize_path).as_deref() == Some(path) {
            return true;
        }
        if find_trail(node.children(), path, trail) {
            return true;
        }

        trail.pop();
    }

    false
}

fn find_menu_keys(entries: &[MenuEntry], path: &str, keys: &mut Vec<String>) -> bool {
    for entry in entries {
        keys.push(entry.key.clone());

        if entry.target.as_deref() == Some(path) {
            return true;
        }
        if let Some(children) = &entry.children {
            if find_menu_keys(children, path, keys) {
                return true;
            }
        }

        keys.pop();
    }

    false
}
