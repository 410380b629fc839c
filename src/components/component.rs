//! Core component trait - the foundation of the page
//!
//! Every section of the page implements `Component`.
//! This trait provides identity and rendering capability.

use crate::clock::Clock;
use crate::config::SiteContent;

/// Unique identifier for a page section
///
/// Doubles as the element `id` attribute, so in-page navigation links
/// (`#about`, `#projects`) resolve to the right section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Branding and navigation
    Header,
    /// Landing banner
    Hero,
    /// Biographical text
    About,
    /// Project list
    Projects,
    /// Contact details and copyright
    Contact,
}

impl ComponentId {
    /// Element id used in the rendered markup
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// Navigation label, or None for sections that are not linked from the header
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::About => Some("About"),
            Self::Projects => Some("Projects"),
            Self::Contact => Some("Contact"),
            Self::Header | Self::Hero => None,
        }
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to server state.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Text the sections display
    pub site: &'a SiteContent,

    /// Time source for computed values (copyright year)
    pub clock: &'a dyn Clock,
}

impl<'a> RenderContext<'a> {
    pub fn new(site: &'a SiteContent, clock: &'a dyn Clock) -> Self {
        Self { site, clock }
    }
}

/// Base trait for all page sections
///
/// A component is anything that can render itself to an HTML fragment.
/// Rendering is pure apart from reading the context's clock.
pub trait Component: Send + Sync {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component as an HTML fragment
    fn render(&self, ctx: &RenderContext) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_labels_cover_linked_sections_only() {
        assert_eq!(ComponentId::Header.nav_label(), None);
        assert_eq!(ComponentId::Hero.nav_label(), None);
        assert_eq!(ComponentId::About.nav_label(), Some("About"));
        assert_eq!(ComponentId::Contact.as_str(), "contact");
    }
}
