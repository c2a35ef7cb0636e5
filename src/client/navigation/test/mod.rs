use crate::client::navigation::{
    build_menu, curate, flatten, registry, validate, MenuIcon, RouteConfigError, RouteKind,
    RouteNode, RouteTable, SiderNode, View,
};

mod validate;

/// Three levels mixing pages, groups and a page with children.
///
/// ```text
/// home            page   /home
/// users           group
///   list          page   /users/list
///   archive       group
///     old         page   /users/archive/old
///     empty       group  (no children)
/// setting         page   /setting
///   theme         page   /setting/theme
/// ```
fn mixed_registry() -> Vec<RouteNode> {
    vec![
        RouteNode::page("home", "Home", "/home", View::Home),
        RouteNode::group(
            "users",
            "Users",
            vec![
                RouteNode::page("list", "List", "/users/list", View::UserManagement),
                RouteNode::group(
                    "archive",
                    "Archive",
                    vec![
                        RouteNode::page("old", "Old", "/users/archive/old", View::UserDetail),
                        RouteNode::group("empty", "Empty", Vec::new()),
                    ],
                ),
            ],
        ),
        RouteNode::page("setting", "Setting", "/setting", View::SettingCenter).with_children(vec![
            RouteNode::page("theme", "Theme", "/setting/theme", View::ThemeSetting),
        ]),
    ]
}

fn keys<T>(items: &[T], key: impl Fn(&T) -> &str) -> Vec<String> {
    items.iter().map(|item| key(item).to_string()).collect()
}
