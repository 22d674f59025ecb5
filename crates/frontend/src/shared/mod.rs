pub mod components;
pub mod icons;
