//! Contact details and copyright footer
//!
//! The only section with a computed value: the copyright year is read from
//! the render context's clock on every render.

use super::{Component, ComponentId, RenderContext};
use crate::clock::{current_year, Clock};
use crate::html::{escape, safe_href};

#[derive(Debug, Default, Clone, Copy)]
pub struct ContactComponent;

impl ContactComponent {
    /// Calendar year of the clock's current local date
    ///
    /// Recomputed on every call so a long-running server rolls over at New Year.
    pub fn get_current_year(&self, clock: &dyn Clock) -> i32 {
        current_year(clock)
    }
}

impl Component for ContactComponent {
    fn id(&self) -> ComponentId {
        ComponentId::Contact
    }

    fn render(&self, ctx: &RenderContext) -> String {
        let site = ctx.site;
        let email = escape(&site.email);

        let mut out = format!(
            "<footer id=\"{}\">\n<h2>Contact</h2>\n<p><a href=\"mailto:{email}\">{email}</a></p>\n",
            self.id().as_str()
        );

        if let Some(location) = &site.location {
            out.push_str(&format!("<p class=\"location\">{}</p>\n", escape(location)));
        }

        if !site.links.is_empty() {
            out.push_str("<ul class=\"links\">\n");
            for link in &site.links {
                let label = escape(&link.label);
                match safe_href(&link.url) {
                    Some(href) => out.push_str(&format!(
                        "<li><a href=\"{href}\" rel=\"noopener\">{label}</a></li>\n"
                    )),
                    None => out.push_str(&format!("<li>{label}</li>\n")),
                }
            }
            out.push_str("</ul>\n");
        }

        out.push_str(&format!(
            "<p class=\"copyright\">&copy; {} {}</p>\n</footer>\n",
            self.get_current_year(ctx.clock),
            escape(&site.brand)
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::site::ContactLink;
    use crate::config::SiteContent;
    use chrono::{Local, TimeZone};

    fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> FixedClock {
        FixedClock(Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap())
    }

    #[test]
    fn test_get_current_year_new_years_eve() {
        let clock = clock_at(2024, 12, 31, 23, 59, 59);
        assert_eq!(ContactComponent.get_current_year(&clock), 2024);
    }

    #[test]
    fn test_get_current_year_new_years_day() {
        let clock = clock_at(2025, 1, 1, 0, 0, 1);
        assert_eq!(ContactComponent.get_current_year(&clock), 2025);
    }

    #[test]
    fn test_copyright_uses_clock_year() {
        let site = SiteContent::default();
        let clock = clock_at(2031, 6, 1, 12, 0, 0);
        let html = ContactComponent.render(&RenderContext::new(&site, &clock));

        assert!(html.contains("&copy; 2031 Tallerlei"));
        assert!(html.contains("mailto:hello@tallerlei.example"));
    }

    #[test]
    fn test_optional_location_and_links() {
        let clock = clock_at(2025, 3, 3, 9, 0, 0);

        let bare = SiteContent::default();
        let html = ContactComponent.render(&RenderContext::new(&bare, &clock));
        assert!(!html.contains("class=\"location\""));
        assert!(!html.contains("class=\"links\""));

        let full = SiteContent {
            location: Some("Köln".to_string()),
            links: vec![ContactLink {
                label: "GitHub".to_string(),
                url: "https://github.com/tallerlei".to_string(),
            }],
            ..SiteContent::default()
        };
        let html = ContactComponent.render(&RenderContext::new(&full, &clock));
        assert!(html.contains("<p class=\"location\">Köln</p>"));
        assert!(html.contains("<a href=\"https://github.com/tallerlei\" rel=\"noopener\">GitHub</a>"));
    }

    #[test]
    fn test_script_link_renders_as_text() {
        let clock = clock_at(2025, 3, 3, 9, 0, 0);
        let site = SiteContent {
            links: vec![
                ContactLink {
                    label: "Click".to_string(),
                    url: "JavaScript:alert(1)".to_string(),
                },
                ContactLink {
                    label: "Mail".to_string(),
                    url: "mailto:hi@tallerlei.example".to_string(),
                },
            ],
            ..SiteContent::default()
        };
        let html = ContactComponent.render(&RenderContext::new(&site, &clock));
        assert!(html.contains("<li>Click</li>"));
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(html.contains("<a href=\"mailto:hi@tallerlei.example\" rel=\"noopener\">Mail</a>"));
    }
}
