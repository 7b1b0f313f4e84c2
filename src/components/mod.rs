//! Page components. Multi-file features live in their own directories.

pub mod articles;
pub mod contact;
pub mod lightbox;
pub mod nav;
pub mod particle_field;
pub mod reveal;
pub mod tabs;
pub mod tilt;
pub mod toast;
