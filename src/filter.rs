use crate::content::Project;

/// Synthetic category matching every project.
pub const ALL_CATEGORY: &str = "All";

/// "All" followed by each category in order of first appearance.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORY.to_string()];
    for project in projects {
        if !out.iter().any(|c| c == &project.category) {
            out.push(project.category.clone());
        }
    }
    out
}

/// Projects in `category`, keeping their original order.
pub fn filter_projects<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == ALL_CATEGORY || p.category == category)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    selected: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            selected: ALL_CATEGORY.to_string(),
        }
    }
}

impl ProjectFilter {
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected == category
    }

    pub fn select(&mut self, category: impl Into<String>) {
        self.selected = category.into();
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        filter_projects(projects, &self.selected)
    }
}

/// Card view shows this many technology tags before collapsing the rest.
pub const CARD_TAG_LIMIT: usize = 3;

/// Tags shown on a card plus the number left out.
pub fn card_tags(project: &Project) -> (&[String], usize) {
    let shown = project.technologies.len().min(CARD_TAG_LIMIT);
    (
        &project.technologies[..shown],
        project.technologies.len() - shown,
    )
}
