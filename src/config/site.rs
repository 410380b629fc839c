//! Site content: the static strings the page components render
//!
//! Everything here is read once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// A single entry in the projects section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    /// Optional link to the project (repository, live site, case study)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A labelled outbound link shown in the contact section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

/// Content rendered by the header, hero, about, projects and contact components
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    /// Brand name shown in the header and the copyright line
    pub brand: String,
    /// Hero banner headline
    pub headline: String,
    /// Hero banner sub-line
    pub tagline: String,
    /// About section, one entry per paragraph
    pub about: Vec<String>,
    pub projects: Vec<Project>,
    /// Contact email address (rendered as a mailto link)
    pub email: String,
    /// Optional location line under the email
    pub location: Option<String>,
    pub links: Vec<ContactLink>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "Tallerlei".to_string(),
            headline: "Software from the workshop".to_string(),
            tagline: "Small, carefully built tools and websites.".to_string(),
            about: vec![
                "Tallerlei is a one-person workshop for web development and tooling.".to_string(),
                "I build fast, accessible websites and the small programs that keep them running."
                    .to_string(),
            ],
            projects: vec![
                Project {
                    name: "tallerlei-homepage".to_string(),
                    description: "This site: a handful of components rendered on the server."
                        .to_string(),
                    url: None,
                },
                Project {
                    name: "Workshop tools".to_string(),
                    description: "Command-line helpers for builds, deploys and backups."
                        .to_string(),
                    url: None,
                },
            ],
            email: "hello@tallerlei.example".to_string(),
            location: None,
            links: Vec::new(),
        }
    }
}

/// Site settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSite {
    pub brand: Option<String>,
    pub headline: Option<String>,
    pub tagline: Option<String>,
    pub about: Option<Vec<String>>,
    pub projects: Option<Vec<Project>>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub links: Option<Vec<ContactLink>>,
}

impl SiteContent {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileSite>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            brand: file.brand.unwrap_or(defaults.brand),
            headline: file.headline.unwrap_or(defaults.headline),
            tagline: file.tagline.unwrap_or(defaults.tagline),
            about: file.about.unwrap_or(defaults.about),
            projects: file.projects.unwrap_or(defaults.projects),
            email: file.email.unwrap_or(defaults.email),
            // Empty string in the file clears the location line
            location: file
                .location
                .or(defaults.location)
                .filter(|s| !s.is_empty()),
            links: file.links.unwrap_or(defaults.links),
        }
    }
}
