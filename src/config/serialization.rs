//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::{level_name, Config};

/// Render a string as a TOML basic string literal (quotes and escapes included)
fn quote(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        let site = &self.site;
        let about: Vec<String> = site.about.iter().map(|p| quote(p)).collect();

        let mut output = format!(
            r#"# tallerlei-homepage configuration

# HTTP server bind address
bind_addr = {bind}

# Directory `render` writes index.html into
output_dir = {output_dir}

# Page content
[site]
brand = {brand}
headline = {headline}
tagline = {tagline}
about = [{about}]
email = {email}
"#,
            bind = quote(&self.bind_addr.to_string()),
            output_dir = quote(&self.output_dir.display().to_string()),
            brand = quote(&site.brand),
            headline = quote(&site.headline),
            tagline = quote(&site.tagline),
            about = about.join(", "),
            email = quote(&site.email),
        );

        match &site.location {
            Some(location) => output.push_str(&format!("location = {}\n", quote(location))),
            None => output.push_str("# location = \"Berlin, Germany\"\n"),
        }

        output.push_str(&self.projects_to_toml());
        output.push_str(&self.links_to_toml());

        output.push_str(&format!(
            r#"
# Logging configuration (RUST_LOG env var overrides level)
[logging]
level = {level}
file_enabled = {file_enabled}
file_dir = {file_dir}
file_rotation = {rotation}
file_prefix = {prefix}
"#,
            level = quote(&level_name(self.logging.level)),
            file_enabled = self.logging.file_enabled,
            file_dir = quote(&self.logging.file_dir.display().to_string()),
            rotation = quote(self.logging.file_rotation.as_str()),
            prefix = quote(&self.logging.file_prefix),
        ));

        output
    }

    /// Serialize projects as [[site.projects]] entries
    fn projects_to_toml(&self) -> String {
        let mut output = String::new();
        for project in &self.site.projects {
            output.push_str("\n[[site.projects]]\n");
            output.push_str(&format!("name = {}\n", quote(&project.name)));
            output.push_str(&format!("description = {}\n", quote(&project.description)));
            if let Some(url) = &project.url {
                output.push_str(&format!("url = {}\n", quote(url)));
            }
        }
        output
    }

    /// Serialize contact links as [[site.links]] entries
    fn links_to_toml(&self) -> String {
        if self.site.links.is_empty() {
            // Show example comments when no links configured
            return r#"
# [[site.links]]
# label = "GitHub"
# url = "https://github.com/tallerlei"
"#
            .to_string();
        }

        let mut output = String::new();
        for link in &self.site.links {
            output.push_str("\n[[site.links]]\n");
            output.push_str(&format!("label = {}\n", quote(&link.label)));
            output.push_str(&format!("url = {}\n", quote(&link.url)));
        }
        output
    }
}
