//! Site header: brand mark and in-page navigation

use super::{Component, ComponentId, RenderContext};
use crate::html::escape;

/// Sections linked from the navigation bar, in page order
const NAV_SECTIONS: [ComponentId; 3] = [
    ComponentId::About,
    ComponentId::Projects,
    ComponentId::Contact,
];

#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderComponent;

impl Component for HeaderComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Header
    }

    fn render(&self, ctx: &RenderContext) -> String {
        let mut out = format!(
            "<header id=\"{}\" class=\"site-header\">\n<a class=\"brand\" href=\"#hero\">{}</a>\n<nav>",
            self.id().as_str(),
            escape(&ctx.site.brand)
        );
        for section in NAV_SECTIONS {
            if let Some(label) = section.nav_label() {
                out.push_str(&format!("<a href=\"#{}\">{}</a>", section.as_str(), label));
            }
        }
        out.push_str("</nav>\n</header>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::config::SiteContent;

    #[test]
    fn test_header_links_every_nav_section() {
        let site = SiteContent::default();
        let html = HeaderComponent.render(&RenderContext::new(&site, &SystemClock));

        assert!(html.starts_with("<header id=\"header\""));
        assert!(html.contains("href=\"#about\">About</a>"));
        assert!(html.contains("href=\"#projects\">Projects</a>"));
        assert!(html.contains("href=\"#contact\">Contact</a>"));
        assert!(html.contains(">Tallerlei</a>"));
    }

    #[test]
    fn test_header_escapes_brand() {
        let site = SiteContent {
            brand: "A&B <Studio>".to_string(),
            ..SiteContent::default()
        };
        let html = HeaderComponent.render(&RenderContext::new(&site, &SystemClock));
        assert!(html.contains("A&amp;B &lt;Studio&gt;"));
    }
}
