pub mod home;
pub mod index;
pub mod login;
pub mod permission;
pub mod register;
pub mod section;
pub mod setting;
pub mod user_center;

pub use index::Index;
pub use login::Login;
pub use register::Register;
pub use section::Section;
