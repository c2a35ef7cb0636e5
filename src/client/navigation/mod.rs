//! Route registry and the compiler deriving router and sidebar views from it.
//!
//! The registry is a nested tree of [`RouteNode`]s. [`RouteTable::compile`]
//! validates it once at startup and produces the flat route list consumed by
//! the router and the menu tree consumed by the sidebar.

pub mod compiler;
pub mod error;
pub mod node;
pub mod registry;
pub mod table;

#[cfg(test)]
mod test;

pub use compiler::{build_menu, curate, flatten, validate, FlatRoute, MenuEntry, SiderNode};
pub use error::RouteConfigError;
pub use node::{MenuIcon, RouteKind, RouteNode, View};
pub use table::{Crumb, RouteTable};
