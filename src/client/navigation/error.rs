use thiserror::Error;

/// Errors raised while validating or compiling the route registry.
///
/// Every variant is a configuration mistake in the hand-authored registry. The
/// application refuses to start its router when one is returned rather than
/// silently dropping or merging routes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteConfigError {
    /// Two navigable nodes declare the same path.
    ///
    /// # Fields
    /// - The colliding path
    /// - Key of the node that registered the path first
    /// - Key of the node that attempted to register it again
    #[error("Path {0} is declared by both `{1}` and `{2}`")]
    DuplicatePath(String, String, String),

    /// Two siblings share the same key, which makes menu rendering ambiguous.
    ///
    /// # Fields
    /// - The colliding key
    /// - Key of the parent node, or `<root>` for top-level entries
    #[error("Key `{0}` is used more than once under `{1}`")]
    DuplicateKey(String, String),

    /// A node was declared with an empty key.
    #[error("Route labelled \"{0}\" has an empty key")]
    EmptyKey(String),

    /// A path that is not absolute.
    #[error("Route `{0}` has path \"{1}\" which does not start with '/'")]
    InvalidPath(String, String),

    /// A node declares a path but no view to render for it.
    #[error("Route `{0}` declares path \"{1}\" but no view")]
    PathWithoutView(String, String),

    /// A node declares a view but no path to reach it.
    #[error("Route `{0}` declares a view but no path")]
    ViewWithoutPath(String),
}
