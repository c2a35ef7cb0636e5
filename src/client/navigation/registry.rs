//! Route registry of the console.
//!
//! Keys are camelCase and unique among siblings. Paths mirror the nesting of
//! the registry so that `/userCenter/userAdd` lives under the `userCenter` entry.

use crate::client::navigation::{
    compiler::SiderNode,
    node::{MenuIcon, RouteNode, View},
};

pub fn registry() -> Vec<RouteNode> {
    vec![
        RouteNode::page("home", "Home", "/home", View::Home).with_icon(MenuIcon::Home),
        RouteNode::group(
            "userCenter",
            "用户中心",
            vec![
                RouteNode::page(
                    "userManagement",
                    "用户管理",
                    "/userCenter/userManagement",
                    View::UserManagement,
                )
                .with_icon(MenuIcon::Team),
                RouteNode::page("userAdd", "用户新增", "/userCenter/userAdd", View::UserAdd)
                    .with_icon(MenuIcon::Plus),
                RouteNode::page(
                    "userDetail",
                    "用户详情",
                    "/userCenter/userDetail",
                    View::UserDetail,
                )
                .with_icon(MenuIcon::Info),
            ],
        )
        .with_icon(MenuIcon::Team),
        RouteNode::group(
            "permission",
            "权限管理",
            vec![
                RouteNode::page(
                    "permissionList",
                    "权限列表",
                    "/permission/list",
                    View::PermissionList,
                )
                .with_icon(MenuIcon::List),
                RouteNode::page(
                    "permissionAdd",
                    "新增权限",
                    "/permission/add",
                    View::PermissionAdd,
                )
                .with_icon(MenuIcon::Plus),
                RouteNode::page(
                    "permissionEdit",
                    "编辑权限",
                    "/permission/edit",
                    View::PermissionEdit,
                )
                .with_icon(MenuIcon::Info),
                RouteNode::page(
                    "permissionDetail",
                    "权限详情",
                    "/permission/detail",
                    View::PermissionDetail,
                )
                .with_icon(MenuIcon::Info),
            ],
        )
        .with_icon(MenuIcon::Shield),
        RouteNode::page("setting", "设置中心", "/setting", View::SettingCenter)
            .with_icon(MenuIcon::Setting)
            .with_children(vec![
                RouteNode::page(
                    "personalInfo",
                    "个人中心",
                    "/setting/personalInfo",
                    View::PersonalInfo,
                )
                .with_icon(MenuIcon::User),
                RouteNode::page(
                    "securitySetting",
                    "安全设置",
                    "/setting/security",
                    View::SecuritySetting,
                )
                .with_icon(MenuIcon::Lock),
                RouteNode::page("themeSetting", "主题设置", "/setting/theme", View::ThemeSetting)
                    .with_icon(MenuIcon::Palette),
            ]),
    ]
}

/// Entries shown in the sidebar. Detail and edit pages stay reachable by path
/// but are not listed.
pub fn sider() -> Vec<SiderNode> {
    vec![
        SiderNode::all("home"),
        SiderNode::only(
            "userCenter",
            vec![SiderNode::all("userManagement"), SiderNode::all("userAdd")],
        ),
        SiderNode::only(
            "permission",
            vec![SiderNode::all("permissionList"), SiderNode::all("permissionAdd")],
        ),
        SiderNode::all("setting"),
    ]
}
