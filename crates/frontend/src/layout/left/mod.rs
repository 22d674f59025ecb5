pub mod actions;
pub mod left;
pub mod opener;
pub mod sidebar;

pub use left::Left;
pub use opener::Opener;
pub use sidebar::Sidebar;
