//! Portfolio content: the page's static inputs, loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::highlight::{HighlightMatcher, HighlightSpan};

const SAMPLE_JSON: &str = include_str!("../../content/sample.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    /// Hero line revealed by the typing effect.
    pub tagline: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ContactLink {
    fn is_local_scheme(&self) -> bool {
        self.href.starts_with("mailto:") || self.href.starts_with("tel:")
    }

    /// `http…`, `mailto:` and `tel:` pass through; bare hosts get `https://`.
    pub fn href(&self) -> String {
        if self.href.starts_with("http") || self.is_local_scheme() {
            self.href.clone()
        } else {
            format!("https://{}", self.href)
        }
    }

    /// Web links open in a new tab; mail and phone links do not.
    pub fn opens_new_tab(&self) -> bool {
        !self.is_local_scheme()
    }
}

/// A paragraph or bullet with the terms to emphasize in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightedText {
    pub text: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl HighlightedText {
    pub fn spans(&self) -> Vec<HighlightSpan> {
        HighlightMatcher::new(&self.highlights).highlight(&self.text)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub company_url: Option<String>,
    #[serde(default)]
    pub company_logo: Option<String>,
    pub period: String,
    pub bullets: Vec<HighlightedText>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    pub tech: String,
    pub overview: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub contributions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hobby {
    pub icon: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    pub built_with: String,
}

/// Everything the page shows. Section order on the page is fixed; order within a
/// section follows the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
    pub summary: HighlightedText,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Job>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub hobbies: Vec<Hobby>,
    pub footer: Footer,
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let portfolio: Portfolio = serde_json::from_str(raw)
            .map_err(|e| AppError::Content(format!("invalid portfolio JSON: {e}")))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Loads content from `path`.
    pub async fn load(path: &Path) -> Result<Self, AppError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Content(format!("cannot read {}: {e}", path.display()))
        })?;
        let portfolio = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            jobs = portfolio.experience.len(),
            projects = portfolio.projects.len(),
            "Portfolio content loaded"
        );
        Ok(portfolio)
    }

    /// The bundled sample content.
    pub fn sample() -> Result<Self, AppError> {
        Self::from_json(SAMPLE_JSON)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.profile.first_name.trim().is_empty() {
            return Err(AppError::Content("profile.first_name is empty".to_string()));
        }
        if let Some(link) = self.contacts.iter().find(|c| c.href.trim().is_empty()) {
            return Err(AppError::Content(format!(
                "contact '{}' has an empty href",
                link.label
            )));
        }
        Ok(())
    }
}
