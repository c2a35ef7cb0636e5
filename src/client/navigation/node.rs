use crate::client::navigation::error::RouteConfigError;

/// Renderable pages known to the console.
///
/// The registry only refers to pages through this enum; the mapping to actual
/// components lives in `component::view_outlet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    UserManagement,
    UserAdd,
    UserDetail,
    PermissionList,
    PermissionAdd,
    PermissionEdit,
    PermissionDetail,
    SettingCenter,
    PersonalInfo,
    SecuritySetting,
    ThemeSetting,
}

/// Presentational icon token shown next to a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Home,
    Team,
    Plus,
    Info,
    List,
    Shield,
    Setting,
    User,
    Lock,
    Palette,
}

/// One entry of the route registry.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode {
    pub key: String,
    pub label: String,
    pub icon: Option<MenuIcon>,
    pub kind: RouteKind,
}

/// Shape of a registry entry.
///
/// A path and a view always travel together, so a navigable node without a
/// view (or the reverse) cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteKind {
    /// Directly navigable page.
    Page { path: String, view: View },
    /// Menu category without a page of its own.
    Group { children: Vec<RouteNode> },
    /// Page that also acts as a category for its children.
    PageWithChildren {
        path: String,
        view: View,
        children: Vec<RouteNode>,
    },
}

impl RouteNode {
    pub fn page(key: &str, label: &str, path: &str, view: View) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon: None,
            kind: RouteKind::Page {
                path: path.to_string(),
                view,
            },
        }
    }

    pub fn group(key: &str, label: &str, children: Vec<RouteNode>) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon: None,
            kind: RouteKind::Group { children },
        }
    }

    /// Builds a node from loosely specified parts, as found in hand-written
    /// configuration where any field may be missing.
    ///
    /// Returns an error when only one of `path` and `view` is provided. A node
    /// with neither and no children becomes an empty group which contributes
    /// nothing to the route list or menu.
    pub fn from_parts(
        key: &str,
        label: &str,
        path: Option<&str>,
        view: Option<View>,
        children: Option<Vec<RouteNode>>,
    ) -> Result<Self, RouteConfigError> {
        let kind = match (path, view, children) {
            (Some(path), Some(view), None) => RouteKind::Page {
                path: path.to_string(),
                view,
            },
            (Some(path), Some(view), Some(children)) => RouteKind::PageWithChildren {
                path: path.to_string(),
                view,
                children,
            },
            (None, None, children) => RouteKind::Group {
                children: children.unwrap_or_default(),
            },
            (Some(path), None, _) => {
                return Err(RouteConfigError::PathWithoutView(
                    key.to_string(),
                    path.to_string(),
                ))
            }
            (None, Some(_), _) => return Err(RouteConfigError::ViewWithoutPath(key.to_string())),
        };

        Ok(Self {
            key: key.to_string(),
            label: label.to_string(),
            icon: None,
            kind,
        })
    }

    pub fn with_icon(mut self, icon: MenuIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Attaches children, turning a page into a page-with-children.
    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.kind = match self.kind {
            RouteKind::Page { path, view } => RouteKind::PageWithChildren {
                path,
                view,
                children,
            },
            RouteKind::PageWithChildren { path, view, .. } => RouteKind::PageWithChildren {
                path,
                view,
                children,
            },
            RouteKind::Group { .. } => RouteKind::Group { children },
        };
        self
    }

    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            RouteKind::Page { path, .. } | RouteKind::PageWithChildren { path, .. } => Some(path),
            RouteKind::Group { .. } => None,
        }
    }

    pub fn view(&self) -> Option<View> {
        match &self.kind {
            RouteKind::Page { view, .. } | RouteKind::PageWithChildren { view, .. } => Some(*view),
            RouteKind::Group { .. } => None,
        }
    }

    /// Children of this node, empty for plain pages.
    pub fn children(&self) -> &[RouteNode] {
        match &self.kind {
            RouteKind::Group { children } | RouteKind::PageWithChildren { children, .. } => {
                children
            }
            RouteKind::Page { .. } => &[],
        }
    }

    /// Replaces the children of a node that has them, leaving plain pages untouched.
    pub(crate) fn replace_children(&mut self, new_children: Vec<RouteNode>) {
        match &mut self.kind {
            RouteKind::Group { children } | RouteKind::PageWithChildren { children, .. } => {
                *children = new_children
            }
            RouteKind::Page { .. } => (),
        }
    }
}
