pub mod chat_panel;
pub mod header;
pub mod icon;
pub mod layout;
pub mod page;
pub mod protected_layout;
pub mod sidebar;
pub mod user_menu;
pub mod view_outlet;

pub use chat_panel::ChatPanel;
pub use header::Header;
pub use layout::Shell;
pub use page::Page;
pub use protected_layout::{PublicOnly, RequiresSession};
pub use sidebar::Sidebar;
pub use user_menu::UserMenu;
pub use view_outlet::ViewOutlet;
