//! Root shell - composes the page sections in a fixed order
//!
//! ```text
//! ┌──────────────────────────┐
//! │ header                   │
//! │ hero                     │
//! │ about                    │
//! │ projects                 │
//! │ contact                  │
//! │ <main data-router-outlet>│  (always empty)
//! └──────────────────────────┘
//! ```

use super::{
    AboutComponent, Component, ComponentId, ContactComponent, HeaderComponent, HeroComponent,
    ProjectsComponent, RenderContext,
};
use crate::html::{escape, STYLESHEET};

/// Mount point for future routed views
pub const ROUTER_OUTLET: &str = "<main data-router-outlet></main>\n";

/// Top-level composition of the five page sections
pub struct RootShell {
    children: [Box<dyn Component>; 5],
}

impl RootShell {
    /// Application title, fixed for the lifetime of the process
    pub const TITLE: &'static str = "tallerlei-homepage";

    /// Build the shell with its children in page order
    pub fn new() -> Self {
        Self {
            children: [
                Box::new(HeaderComponent),
                Box::new(HeroComponent),
                Box::new(AboutComponent),
                Box::new(ProjectsComponent),
                Box::new(ContactComponent),
            ],
        }
    }

    pub fn title(&self) -> &'static str {
        Self::TITLE
    }

    /// Section ids in the order they are rendered
    pub fn sections(&self) -> [ComponentId; 5] {
        let [a, b, c, d, e] = &self.children;
        [a.id(), b.id(), c.id(), d.id(), e.id()]
    }

    /// Render the page body: every section in order, then the outlet
    pub fn render(&self, ctx: &RenderContext) -> String {
        let mut body = String::new();
        for child in &self.children {
            body.push_str(&child.render(ctx));
        }
        body.push_str(ROUTER_OUTLET);
        body
    }

    /// Render a complete HTML document around the page body
    pub fn render_document(&self, ctx: &RenderContext) -> String {
        let brand = ctx.site.brand.trim();
        let title = if brand.is_empty() { self.title() } else { brand };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="generator" content="{generator}">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
{body}</body>
</html>
"#,
            generator = self.title(),
            title = escape(title),
            style = STYLESHEET,
            body = self.render(ctx),
        )
    }
}

impl Default for RootShell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::SiteContent;
    use chrono::{Local, TimeZone};

    fn fixed() -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(2025, 1, 1, 0, 0, 1).unwrap())
    }

    #[test]
    fn test_sections_fixed_order() {
        assert_eq!(
            RootShell::new().sections(),
            [
                ComponentId::Header,
                ComponentId::Hero,
                ComponentId::About,
                ComponentId::Projects,
                ComponentId::Contact,
            ]
        );
    }

    #[test]
    fn test_render_contains_sections_in_order_then_outlet() {
        let site = SiteContent::default();
        let clock = fixed();
        let body = RootShell::new().render(&RenderContext::new(&site, &clock));

        let positions: Vec<usize> = ["header", "hero", "about", "projects", "contact"]
            .iter()
            .map(|id| {
                let needle = format!("id=\"{id}\"");
                assert_eq!(body.matches(&needle).count(), 1, "{id} rendered once");
                body.find(&needle).unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(body.matches("data-router-outlet").count(), 1);
        assert!(body.ends_with(ROUTER_OUTLET));
    }

    #[test]
    fn test_document_wraps_body() {
        let site = SiteContent::default();
        let clock = fixed();
        let doc = RootShell::new().render_document(&RenderContext::new(&site, &clock));

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Tallerlei</title>"));
        assert!(doc.contains("content=\"tallerlei-homepage\""));
        assert!(doc.contains("&copy; 2025 Tallerlei"));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_blank_brand_falls_back_to_title() {
        let site = SiteContent {
            brand: "  ".to_string(),
            ..SiteContent::default()
        };
        let clock = fixed();
        let doc = RootShell::new().render_document(&RenderContext::new(&site, &clock));
        assert!(doc.contains("<title>tallerlei-homepage</title>"));
    }

    #[test]
    fn test_title_is_constant() {
        let shell = RootShell::default();
        assert_eq!(shell.title(), "tallerlei-homepage");
        assert_eq!(shell.title(), RootShell::TITLE);
    }
}
