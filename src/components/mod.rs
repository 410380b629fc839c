//! Page components
//!
//! Each section of the homepage is a leaf component implementing
//! [`Component`]. [`RootShell`] owns one of each and renders them in a
//! fixed order; there is no registry or dynamic lookup.
//!
//! - [`HeaderComponent`] - brand and navigation
//! - [`HeroComponent`] - landing banner
//! - [`AboutComponent`] - descriptive text
//! - [`ProjectsComponent`] - project list
//! - [`ContactComponent`] - contact details, copyright year

mod about;
mod component;
mod contact;
mod header;
mod hero;
mod projects;
mod shell;

pub use about::AboutComponent;
pub use component::{Component, ComponentId, RenderContext};
pub use contact::ContactComponent;
pub use header::HeaderComponent;
pub use hero::HeroComponent;
pub use projects::ProjectsComponent;
pub use shell::RootShell;
