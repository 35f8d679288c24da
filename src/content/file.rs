use crate::domain::model::{Content, SkillCategory};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_identifier, validate_link_target, validate_non_empty_string, validate_unique_titles,
    validate_url, Validate,
};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Load page content from a TOML file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Content> {
    let content = std::fs::read_to_string(&path)?;
    from_toml_str(&content)
}

/// Parse page content from TOML, after `${VAR}` substitution.
pub fn from_toml_str(content: &str) -> Result<Content> {
    let processed_content = substitute_env_vars(content);

    toml::from_str(&processed_content).map_err(|e| SiteError::ContentParseError {
        field: "toml_parsing".to_string(),
        message: e.to_string(),
    })
}

/// Serialize content back to TOML, the format `from_toml_str` reads.
pub fn to_toml_string(content: &Content) -> Result<String> {
    Ok(toml::to_string_pretty(content)?)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"))
}

/// Replace `${VAR}` with the variable's value. Unset variables stay verbatim.
fn substitute_env_vars(content: &str) -> String {
    env_var_pattern()
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}

impl Validate for Content {
    fn validate(&self) -> Result<()> {
        let profile = &self.profile;
        validate_non_empty_string("profile.name", &profile.name)?;
        validate_non_empty_string("profile.short_name", &profile.short_name)?;

        if profile.socials.is_empty() {
            return Err(SiteError::MissingConfigError {
                field: "profile.socials".to_string(),
            });
        }
        for (i, social) in profile.socials.iter().enumerate() {
            validate_link_target(&format!("profile.socials[{}].href", i), &social.href)?;
            validate_non_empty_string(&format!("profile.socials[{}].text", i), &social.text)?;
        }

        for category in SkillCategory::ALL {
            for (i, id) in self.skills.get(category).iter().enumerate() {
                validate_identifier(&format!("skills.{}[{}]", category.key(), i), id)?;
            }
        }

        for (i, project) in self.projects.iter().enumerate() {
            validate_non_empty_string(&format!("projects[{}].title", i), &project.title)?;
            validate_url(&format!("projects[{}].link", i), &project.link)?;
            validate_url(&format!("projects[{}].image", i), &project.image)?;
        }
        validate_unique_titles("projects.title", self.projects.iter().map(|p| p.title.as_str()))?;

        Ok(())
    }
}
