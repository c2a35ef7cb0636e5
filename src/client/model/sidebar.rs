use crate::client::constant::MOBILE_BREAKPOINT;

/// Collapsed/expanded state of the shell's sidebar.
///
/// Only the viewport width and the user's toggle feed into it; the routed view
/// is never touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
    pub mobile: bool,
}

impl SidebarState {
    pub fn from_width(width: f64) -> Self {
        let mobile = is_mobile(width);
        Self {
            collapsed: mobile,
            mobile,
        }
    }

    /// State for the first paint, desktop layout when the width is unknown.
    pub fn for_viewport(width: Option<f64>) -> Self {
        width.map(Self::from_width).unwrap_or_default()
    }

    /// Applies a viewport resize.
    ///
    /// Crossing the breakpoint resets the collapsed flag to the default for the
    /// new side, staying on the same side keeps the user's choice.
    pub fn resize(self, width: f64) -> Self {
        let mobile = is_mobile(width);
        if mobile == self.mobile {
            self
        } else {
            Self {
                collapsed: mobile,
                mobile,
            }
        }
    }

    pub fn toggle(self) -> Self {
        Self {
            collapsed: !self.collapsed,
            ..self
        }
    }
}

fn is_mobile(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::client::navigation::View;

    /// Tests the initial state on both sides of the breakpoint.
    ///
    /// Expected: collapsed below 768px, expanded at and above
    #[test]
    fn initial_state_follows_width() {
        assert_eq!(
            SidebarState::from_width(767.0),
            SidebarState {
                collapsed: true,
                mobile: true
            }
        );
        assert_eq!(
            SidebarState::from_width(768.0),
            SidebarState {
                collapsed: false,
                mobile: false
            }
        );
    }

    /// Tests the first paint with and without a known viewport width.
    ///
    /// Expected: collapsed on a phone, expanded when the width is unknown
    #[test]
    fn first_paint_follows_viewport() {
        assert_eq!(
            SidebarState::for_viewport(Some(390.0)),
            SidebarState {
                collapsed: true,
                mobile: true
            }
        );
        assert_eq!(SidebarState::for_viewport(None), SidebarState::default());
    }

    /// Tests shrinking the viewport while a view is mounted.
    ///
    /// Verifies that crossing from desktop to mobile width collapses the
    /// sidebar and leaves the mounted view as it was.
    ///
    /// Expected: sidebar collapsed, view unchanged
    #[test]
    fn resize_changes_only_sidebar_flags() {
        let mounted = View::PermissionList;
        let shell = (SidebarState::from_width(1280.0), mounted);

        let resized = (shell.0.resize(600.0), shell.1);

        assert_eq!(
            resized.0,
            SidebarState {
                collapsed: true,
                mobile: true
            }
        );
        assert_eq!(resized.1, View::PermissionList);
    }

    /// Tests that a resize within the same side keeps a manual toggle.
    ///
    /// Expected: still expanded after resizing within mobile widths
    #[test]
    fn resize_within_side_keeps_toggle() {
        let state = SidebarState::from_width(500.0).toggle();

        let state = state.resize(700.0);

        assert!(!state.collapsed);
        assert!(state.mobile);
    }

    /// Tests growing back to desktop width.
    ///
    /// Expected: expanded
    #[test]
    fn resize_to_desktop_expands() {
        let state = SidebarState::from_width(500.0).resize(1024.0);

        assert_eq!(state, SidebarState::default());
    }

    /// Tests the manual toggle.
    ///
    /// Expected: collapsed flips, mobile untouched
    #[test]
    fn toggle_flips_collapsed() {
        let state = SidebarState::default().toggle();

        assert!(state.collapsed);
        assert!(!state.mobile);
        assert_eq!(state.toggle(), SidebarState::default());
    }
}
