use serde::{Deserialize, Serialize};

/// Ordered technology identifiers per skill category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Languages,
    Frameworks,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Languages,
        SkillCategory::Frameworks,
        SkillCategory::Tools,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Tools => "tools",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            SkillCategory::Languages => "💻 Languages",
            SkillCategory::Frameworks => "🧩 Frameworks & Libraries",
            SkillCategory::Tools => "🛠 Tools",
        }
    }

    pub fn alt_text(self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Frameworks => "Frameworks",
            SkillCategory::Tools => "Tools",
        }
    }
}

impl Skills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Languages => &self.languages,
            SkillCategory::Frameworks => &self.frameworks,
            SkillCategory::Tools => &self.tools,
        }
    }

    pub fn len(&self) -> usize {
        self.languages.len() + self.frameworks.len() + self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A featured project card. `title` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub emoji: String,
    pub description: String,
    pub link: String,
    pub image: String,
}

impl Project {
    pub fn display_title(&self) -> String {
        format!("{} {}", self.emoji, self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub href: String,
    pub text: String,
}

/// Free text of the page outside the two data tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    pub tagline: String,
    pub intro: String,
    pub bio: String,
    pub about: Vec<String>,
    pub philosophy: String,
    pub focus: Vec<String>,
    pub footer_note: String,
    pub footer_sign_off: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub skills: Skills,
    pub projects: Vec<Project>,
}

/// A file produced by the renderer, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    pub path: String,
    pub contents: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct RenderedSite {
    pub files: Vec<SiteFile>,
    pub project_count: usize,
    pub skill_count: usize,
}

impl RenderedSite {
    pub fn file(&self, path: &str) -> Option<&SiteFile> {
        self.files.iter().find(|f| f.path == path)
    }
}
