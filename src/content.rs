use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONTENT_FILE: &str = "portfolio.json";

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().expect("Embedded portfolio content should be valid")
});

/// Read-only view of the site content. Nothing hands out a mutable reference.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    NotFound(String),
    #[error("Couldn't parse portfolio content: {0}")]
    ParseError(String),
    #[error("Skill group {name} has level {level}, expected 0-100")]
    LevelOutOfRange { name: String, level: u8 },
    #[error("Project id {0} is used more than once")]
    DuplicateProject(ProjectId),
}

pub type ProjectId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    pub alt_phone: Option<String>,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub youtube: String,
    pub instagram: String,
    pub personal_instagram: Option<String>,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusStage {
    Active,
    Learning,
    Exploring,
}

impl FocusStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Learning => "Learning",
            Self::Exploring => "Exploring",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "border-green-400 text-green-400",
            Self::Learning => "border-yellow-400 text-yellow-400",
            Self::Exploring => "border-purple-400 text-purple-400",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusItem {
    pub label: String,
    pub stage: FocusStage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub description: String,
    pub highlights: Vec<String>,
    pub focus: Vec<FocusItem>,
}

/// Keys into the fixed icon set rendered next to each skill group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillIcon {
    Video,
    #[serde(rename = "Gamepad2")]
    Gamepad,
    Cpu,
}

impl SkillIcon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Video => "extra-video",
            Self::Gamepad => "extra-gamepad",
            Self::Cpu => "extra-cpu",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub level: u8,
    pub items: Vec<String>,
    pub icon: SkillIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Professional,
    Learning,
    Emerging,
}

impl SkillTier {
    /// Tier follows the position of the group in the list.
    pub fn for_position(index: usize) -> Self {
        match index {
            0 => Self::Professional,
            1 => Self::Learning,
            _ => Self::Emerging,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Learning => "Learning",
            Self::Emerging => "Emerging",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Professional => "bg-green-400",
            Self::Learning => "bg-yellow-400",
            Self::Emerging => "bg-purple-400",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub title: String,
    pub organization: String,
    pub duration: String,
    pub employment: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Ongoing,
    InProgress,
    Completed,
    Other(String),
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Ongoing" => Self::Ongoing,
            "In Progress" => Self::InProgress,
            "Completed" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        value.label().to_string()
    }
}

impl ProjectStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Other(s) => s,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Ongoing => "border-green-400 text-green-400",
            Self::InProgress => "border-yellow-400 text-yellow-400",
            Self::Completed => "border-blue-400 text-blue-400",
            Self::Other(_) => "border-gray-400 text-gray-400",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub status: ProjectStatus,
    pub timeline: String,
    #[serde(default)]
    pub highlight: Option<Highlight>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub year: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub titles: Vec<String>,
    pub about: About,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file =
            Assets::get(CONTENT_FILE).ok_or(ContentError::NotFound(CONTENT_FILE.to_string()))?;
        Self::parse(&file.data)
    }

    pub fn parse(data: &[u8]) -> Result<Self, ContentError> {
        let portfolio = serde_json::from_slice::<Portfolio>(data)
            .map_err(|e| ContentError::ParseError(e.to_string()))?;
        portfolio.check()?;
        Ok(portfolio)
    }

    fn check(&self) -> Result<(), ContentError> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::LevelOutOfRange {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
        }
        Ok(())
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = Portfolio::load().expect("embedded content should parse");
        assert_eq!(portfolio.profile.first_name(), "Zaid");
        assert_eq!(portfolio.skills.len(), 3);
        assert_eq!(portfolio.skills[1].icon, SkillIcon::Gamepad);
        assert!(!portfolio.titles.is_empty());
        assert!(portfolio.project(2).is_some());
        assert!(portfolio.project(42).is_none());
    }

    #[test]
    fn test_status_parsing() {
        let portfolio = portfolio();
        assert_eq!(portfolio.projects[0].status, ProjectStatus::Ongoing);
        assert_eq!(portfolio.projects[1].status, ProjectStatus::InProgress);

        let other = ProjectStatus::from("Paused".to_string());
        assert_eq!(other, ProjectStatus::Other("Paused".to_string()));
        assert_eq!(other.label(), "Paused");
        assert_eq!(other.badge_class(), "border-gray-400 text-gray-400");
        assert_eq!(String::from(ProjectStatus::Completed), "Completed");
    }

    #[test]
    fn test_rejects_out_of_range_level() {
        let mut value = serde_json::to_value(portfolio()).unwrap();
        value["skills"][0]["level"] = serde_json::json!(101);
        let data = serde_json::to_vec(&value).unwrap();
        let err = Portfolio::parse(&data).unwrap_err();
        assert!(matches!(err, ContentError::LevelOutOfRange { level: 101, .. }));
    }

    #[test]
    fn test_rejects_duplicate_project_ids() {
        let mut value = serde_json::to_value(portfolio()).unwrap();
        value["projects"][1]["id"] = serde_json::json!(1);
        let data = serde_json::to_vec(&value).unwrap();
        assert_eq!(
            Portfolio::parse(&data).unwrap_err(),
            ContentError::DuplicateProject(1)
        );
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Portfolio::parse(b"{ not json").unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
    }

    #[test]
    fn test_skill_tiers() {
        assert_eq!(SkillTier::for_position(0).label(), "Professional");
        assert_eq!(SkillTier::for_position(1).label(), "Learning");
        assert_eq!(SkillTier::for_position(2).label(), "Emerging");
        assert_eq!(SkillTier::for_position(7), SkillTier::Emerging);
    }
}
