//! Display records for the portfolio page and the built-in data set.

use serde::Deserialize;
use thiserror::Error;

const BUILTIN_PORTFOLIO: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("portfolio field `{field}` must not be blank")]
    Blank { field: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Code,
    Database,
    Cloud,
    Terminal,
    Globe,
    Layout,
    Server,
    Github,
    Linkedin,
    Mail,
    Download,
    ExternalLink,
}

impl Icon {
    /// Glyphs drifting behind the page, in draw order.
    pub const BACKGROUND: [Icon; 7] = [
        Icon::Code,
        Icon::Database,
        Icon::Cloud,
        Icon::Terminal,
        Icon::Globe,
        Icon::Layout,
        Icon::Server,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Database => "⛁",
            Self::Cloud => "☁",
            Self::Terminal => ">_",
            Self::Globe => "◍",
            Self::Layout => "▦",
            Self::Server => "▤",
            Self::Github => "⌥",
            Self::Linkedin => "in",
            Self::Mail => "✉",
            Self::Download => "⤓",
            Self::ExternalLink => "↗",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Database => "Database",
            Self::Cloud => "Cloud",
            Self::Terminal => "Terminal",
            Self::Globe => "Globe",
            Self::Layout => "Layout",
            Self::Server => "Server",
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Mail => "Email",
            Self::Download => "Download",
            Self::ExternalLink => "External link",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub icon: Icon,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub demo: String,
    pub github: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub monogram: String,
    pub greeting: String,
    pub tagline: String,
    pub year: u16,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Self = serde_json::from_str(raw)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_PORTFOLIO)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Blank { field: "profile.name" });
        }
        if self.profile.monogram.trim().is_empty() {
            return Err(ContentError::Blank {
                field: "profile.monogram",
            });
        }
        Ok(())
    }
}
