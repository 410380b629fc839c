use super::{Component, ComponentId, RenderContext};
use crate::html::escape;

#[derive(Debug, Default, Clone, Copy)]
pub struct AboutComponent;

impl Component for AboutComponent {
    fn id(&self) -> ComponentId {
        ComponentId::About
    }

    fn render(&self, ctx: &RenderContext) -> String {
        let mut out = format!("<section id=\"{}\">\n<h2>About</h2>\n", self.id().as_str());
        for paragraph in &ctx.site.about {
            out.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
        }
        out.push_str("</section>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::config::SiteContent;

    #[test]
    fn test_about_one_paragraph_per_entry() {
        let site = SiteContent {
            about: vec!["First.".to_string(), "Second.".to_string()],
            ..SiteContent::default()
        };
        let html = AboutComponent.render(&RenderContext::new(&site, &SystemClock));

        assert_eq!(html.matches("<p>").count(), 2);
        assert!(html.find("First.").unwrap() < html.find("Second.").unwrap());
    }

    #[test]
    fn test_about_empty_still_renders_section() {
        let site = SiteContent {
            about: Vec::new(),
            ..SiteContent::default()
        };
        let html = AboutComponent.render(&RenderContext::new(&site, &SystemClock));
        assert!(html.starts_with("<section id=\"about\">"));
        assert!(!html.contains("<p>"));
    }
}
