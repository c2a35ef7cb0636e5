use super::*;

/// Tests sibling key collisions.
///
/// Expected: Err(RouteConfigError::DuplicateKey) naming the parent
#[test]
fn rejects_duplicate_sibling_keys() {
    let registry = vec![RouteNode::group(
        "users",
        "Users",
        vec![
            RouteNode::page("list", "List", "/users/list", View::UserManagement),
            RouteNode::page("list", "List again", "/users/list2", View::UserAdd),
        ],
    )];

    assert_eq!(
        validate(&registry),
        Err(RouteConfigError::DuplicateKey(
            "list".to_string(),
            "users".to_string()
        ))
    );
}

/// Tests that the same key under different parents is accepted.
///
/// Expected: Ok(())
#[test]
fn allows_same_key_under_different_parents() {
    let registry = vec![
        RouteNode::group(
            "users",
            "Users",
            vec![RouteNode::page("list", "List", "/users/list", View::UserManagement)],
        ),
        RouteNode::group(
            "permission",
            "Permission",
            vec![RouteNode::page("list", "List", "/permission/list", View::PermissionList)],
        ),
    ];

    assert_eq!(validate(&registry), Ok(()));
}

/// Tests a relative path.
///
/// Expected: Err(RouteConfigError::InvalidPath)
#[test]
fn rejects_relative_paths() {
    let registry = vec![RouteNode::page("home", "Home", "home", View::Home)];

    assert_eq!(
        validate(&registry),
        Err(RouteConfigError::InvalidPath(
            "home".to_string(),
            "home".to_string()
        ))
    );
}

/// Tests an empty key.
///
/// Expected: Err(RouteConfigError::EmptyKey)
#[test]
fn rejects_empty_keys() {
    let registry = vec![RouteNode::page("", "Home", "/home", View::Home)];

    assert_eq!(
        validate(&registry),
        Err(RouteConfigError::EmptyKey("Home".to_string()))
    );
}

/// Tests building nodes from parts where only one of path and view is set.
///
/// Expected: Err(PathWithoutView) and Err(ViewWithoutPath)
#[test]
fn rejects_path_view_mismatch_in_parts() {
    let path_only = RouteNode::from_parts("edit", "Edit", Some("/permission/edit"), None, None);
    let view_only = RouteNode::from_parts("detail", "Detail", None, Some(View::UserDetail), None);

    assert_eq!(
        path_only,
        Err(RouteConfigError::PathWithoutView(
            "edit".to_string(),
            "/permission/edit".to_string()
        ))
    );
    assert_eq!(
        view_only,
        Err(RouteConfigError::ViewWithoutPath("detail".to_string()))
    );
}

/// Tests that parts with path, view and children produce a page with children.
///
/// Expected: Ok(RouteKind::PageWithChildren)
#[test]
fn builds_page_with_children_from_parts() -> Result<(), RouteConfigError> {
    let node = RouteNode::from_parts(
        "setting",
        "Setting",
        Some("/setting"),
        Some(View::SettingCenter),
        Some(vec![RouteNode::page(
            "theme",
            "Theme",
            "/setting/theme",
            View::ThemeSetting,
        )]),
    )?;

    assert!(matches!(node.kind, RouteKind::PageWithChildren { .. }));
    assert_eq!(node.path(), Some("/setting"));
    assert_eq!(node.children().len(), 1);

    Ok(())
}
