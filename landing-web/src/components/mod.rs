//! UI Components

pub mod background;
pub mod icons;
pub mod mobile_menu;
pub mod navbar;
pub mod section_loader;

pub use background::Background;
pub use mobile_menu::MobileMenu;
pub use navbar::Navbar;
pub use section_loader::Deferred;
