//! Browsing filters and selectors over the projects slice.

use super::project::{Project, ProjectId};
use super::slice::SliceState;
use super::user::UserId;

/// Filter applied when browsing projects.
///
/// All criteria are optional and combine with AND. Search is a
/// case-insensitive substring match over title, description, category and
/// required skills; `category` matches exactly; `skills` matches when the
/// project requires any of the listed skills.
///
/// # Examples
/// ```
/// use projectmate::domain::ProjectQuery;
///
/// let query = ProjectQuery::default().with_search("react").with_paid(true);
/// assert_eq!(query.search.as_deref(), Some("react"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub paid: Option<bool>,
    pub skills: Vec<String>,
    pub creator: Option<UserId>,
}

impl ProjectQuery {
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_paid(mut self, paid: bool) -> Self {
        self.paid = Some(paid);
        self
    }

    #[must_use]
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    #[must_use]
    pub fn with_creator(mut self, creator: UserId) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Whether `project` satisfies every criterion.
    pub fn matches(&self, project: &Project) -> bool {
        self.matches_search(project)
            && self.category.as_ref().is_none_or(|c| &project.category == c)
            && self.paid.is_none_or(|paid| project.is_paid == paid)
            && (self.skills.is_empty()
                || self
                    .skills
                    .iter()
                    .any(|skill| project.required_skills.contains(skill)))
            && self
                .creator
                .as_ref()
                .is_none_or(|creator| &project.created_by.id == creator)
    }

    fn matches_search(&self, project: &Project) -> bool {
        let Some(term) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        else {
            return true;
        };
        let needle = term.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(&project.title)
            || contains(&project.description)
            || contains(&project.category)
            || project.required_skills.iter().any(|s| contains(s))
    }
}

impl SliceState<Project> {
    /// Look a project up by id among fetched and user-created listings.
    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.items()
            .iter()
            .chain(self.user_items())
            .chain(self.current())
            .find(|p| p.id == id)
    }

    /// Projects in `items` matching `query`, in slice order.
    pub fn filter(&self, query: &ProjectQuery) -> Vec<&Project> {
        self.items().iter().filter(|p| query.matches(p)).collect()
    }

    /// Count projects per category, matching names case-insensitively.
    ///
    /// The result keeps the order of `categories`.
    pub fn category_counts<'a>(&self, categories: &'a [String]) -> Vec<(&'a str, usize)> {
        categories
            .iter()
            .map(|category| {
                let count = self
                    .items()
                    .iter()
                    .filter(|p| p.category.eq_ignore_ascii_case(category))
                    .count();
                (category.as_str(), count)
            })
            .collect()
    }
}
