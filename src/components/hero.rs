//! Landing banner

use super::{Component, ComponentId, RenderContext};
use crate::html::escape;

#[derive(Debug, Default, Clone, Copy)]
pub struct HeroComponent;

impl Component for HeroComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Hero
    }

    fn render(&self, ctx: &RenderContext) -> String {
        format!(
            "<section id=\"{}\">\n<h1>{}</h1>\n<p>{}</p>\n<a class=\"cta\" href=\"#contact\">Get in touch</a>\n</section>\n",
            self.id().as_str(),
            escape(&ctx.site.headline),
            escape(&ctx.site.tagline)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::config::SiteContent;

    #[test]
    fn test_hero_renders_headline_and_tagline() {
        let site = SiteContent {
            headline: "Hello".to_string(),
            tagline: "Tools & sites".to_string(),
            ..SiteContent::default()
        };
        let html = HeroComponent.render(&RenderContext::new(&site, &SystemClock));

        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>Tools &amp; sites</p>"));
    }
}
