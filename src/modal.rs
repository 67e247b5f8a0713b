use std::sync::LazyLock;

use regex::Regex;

use crate::content::{Profile, Project, ProjectId};

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\b").expect("year pattern should compile"));

/// At most one selected project. Last `open` wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectModal {
    selected: Option<ProjectId>,
}

impl ProjectModal {
    pub fn open(&mut self, project: &Project) {
        self.selected = Some(project.id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_id(&self) -> Option<ProjectId> {
        self.selected
    }

    /// Resolves the selection against the collection; a stale id yields nothing.
    pub fn selected<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.selected?;
        projects.iter().find(|p| p.id == id)
    }
}

/// First four-digit year mentioned in the timeline, else "Ongoing".
pub fn project_year(timeline: &str) -> String {
    YEAR.captures(timeline)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "Ongoing".to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAction {
    pub label: &'static str,
    pub href: String,
    pub icon: &'static str,
}

/// Call to action shown in the detail view. An explicit project link wins over
/// the category default.
pub fn project_action(project: &Project, profile: &Profile) -> Option<ProjectAction> {
    let (label, icon, default_href) = match project.category.as_str() {
        "Web Development" => ("View Live Site", "extra-link", "/".to_string()),
        "Video Production" => ("Watch Portfolio", "extra-link", profile.youtube.clone()),
        "Game Development" => ("View Progress", "devicon-github-plain", profile.github.clone()),
        _ => return None,
    };
    Some(ProjectAction {
        label,
        href: project.link.clone().unwrap_or(default_href),
        icon,
    })
}
