//! Project list

use super::{Component, ComponentId, RenderContext};
use crate::config::Project;
use crate::html::{escape, safe_href};

#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectsComponent;

impl ProjectsComponent {
    fn render_entry(project: &Project) -> String {
        // Unsafe or missing URLs leave the name unlinked
        let title = match project.url.as_deref().and_then(safe_href) {
            Some(href) => format!("<a href=\"{}\">{}</a>", href, escape(&project.name)),
            None => escape(&project.name).into_owned(),
        };
        format!(
            "<li><h3>{}</h3><p>{}</p></li>\n",
            title,
            escape(&project.description)
        )
    }
}

impl Component for ProjectsComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Projects
    }

    fn render(&self, ctx: &RenderContext) -> String {
        let mut out = format!(
            "<section id=\"{}\">\n<h2>Projects</h2>\n<ul class=\"projects\">\n",
            self.id().as_str()
        );
        for project in &ctx.site.projects {
            out.push_str(&Self::render_entry(project));
        }
        out.push_str("</ul>\n</section>\n");
        out
    }
}
