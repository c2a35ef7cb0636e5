use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{
        FaCircleInfo, FaGear, FaHouse, FaList, FaLock, FaPalette, FaPlus, FaShieldHalved, FaUser,
        FaUsers,
    },
    Icon,
};

use crate::client::navigation::MenuIcon;

#[component]
pub fn MenuIconView(icon: MenuIcon) -> Element {
    let size = 14;

    match icon {
        MenuIcon::Home => rsx!(Icon { width: size, height: size, icon: FaHouse }),
        MenuIcon::Team => rsx!(Icon { width: size, height: size, icon: FaUsers }),
        MenuIcon::Plus => rsx!(Icon { width: size, height: size, icon: FaPlus }),
        MenuIcon::Info => rsx!(Icon { width: size, height: size, icon: FaCircleInfo }),
        MenuIcon::List => rsx!(Icon { width: size, height: size, icon: FaList }),
        MenuIcon::Shield => rsx!(Icon { width: size, height: size, icon: FaShieldHalved }),
        MenuIcon::Setting => rsx!(Icon { width: size, height: size, icon: FaGear }),
        MenuIcon::User => rsx!(Icon { width: size, height: size, icon: FaUser }),
        MenuIcon::Lock => rsx!(Icon { width: size, height: size, icon: FaLock }),
        MenuIcon::Palette => rsx!(Icon { width: size, height: size, icon: FaPalette }),
    }
}
