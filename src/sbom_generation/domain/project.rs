use std::collections::HashSet;
use std::fmt;

/// A project to export: the service token plus a display name.
///
/// The token is authoritative. The display name (`<product>:<project>`) is
/// advisory and used for file names. Equality and hashing cover both
/// fields, which is what exclusion matching relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectRef {
    token: String,
    name: String,
}

impl ProjectRef {
    pub fn new(token: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            name: name.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Segment of the display name between the first and second `:`, i.e.
    /// the project name without its product prefix. `None` when the name
    /// has no product prefix, as with lookup error placeholders.
    pub fn short_name(&self) -> Option<&str> {
        self.name.split(':').nth(1)
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.token)
    }
}

/// Projects removed from the scope.
///
/// Exclusion tokens are product tokens expanded to their projects. A token
/// that could not be expanded is kept as unresolved; it never matches a
/// project because matching is by `ProjectRef` value.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    projects: HashSet<ProjectRef>,
    unresolved: Vec<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_project(&mut self, project: ProjectRef) {
        self.projects.insert(project);
    }

    pub fn add_unresolved(&mut self, token: impl Into<String>) {
        self.unresolved.push(token.into());
    }

    pub fn contains(&self, project: &ProjectRef) -> bool {
        self.projects.contains(project)
    }

    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.unresolved.is_empty()
    }
}

/// Ordered, deduplicated list of projects a run will process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectScope {
    projects: Vec<ProjectRef>,
}

impl ProjectScope {
    /// Builds a scope, keeping the first occurrence of duplicate entries
    pub fn new(projects: impl IntoIterator<Item = ProjectRef>) -> Self {
        let mut seen = HashSet::new();
        let projects = projects
            .into_iter()
            .filter(|project| seen.insert(project.clone()))
            .collect();
        Self { projects }
    }

    /// Removes every project contained in `exclusions`.
    ///
    /// Applying the same exclusion set twice yields the same scope as once.
    pub fn excluding(self, exclusions: &ExclusionSet) -> Self {
        Self {
            projects: self
                .projects
                .into_iter()
                .filter(|project| !exclusions.contains(project))
                .collect(),
        }
    }

    pub fn projects(&self) -> &[ProjectRef] {
        &self.projects
    }

    pub fn tokens(&self) -> Vec<&str> {
        self.projects.iter().map(ProjectRef::token).collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn into_projects(self) -> Vec<ProjectRef> {
        self.projects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(token: &str, name: &str) -> ProjectRef {
        ProjectRef::new(token, name)
    }

    #[test]
    fn test_short_name_strips_product_prefix() {
        assert_eq!(project("t", "Shop:web").short_name(), Some("web"));
        assert_eq!(project("t", "Shop:web:v2").short_name(), Some("web"));
        assert_eq!(project("t", "Shop:").short_name(), Some(""));
        assert_eq!(project("t", "standalone").short_name(), None);
    }

    #[test]
    fn test_display_contains_name_and_token() {
        let display = project("tok-1", "Shop:web").to_string();
        assert_eq!(display, "Shop:web (tok-1)");
    }

    #[test]
    fn test_scope_deduplicates_keeping_order() {
        let scope = ProjectScope::new(vec![
            project("b", "P:b"),
            project("a", "P:a"),
            project("b", "P:b"),
        ]);
        assert_eq!(scope.tokens(), vec!["b", "a"]);
    }

    #[test]
    fn test_scope_excluding_removes_matching_projects() {
        let scope = ProjectScope::new(vec![
            project("a", "P:a"),
            project("b", "P:b"),
            project("c", "P:c"),
        ]);
        let mut exclusions = ExclusionSet::new();
        exclusions.add_project(project("b", "P:b"));

        let result = scope.excluding(&exclusions);
        assert_eq!(result.tokens(), vec!["a", "c"]);
    }

    #[test]
    fn test_scope_excluding_is_idempotent() {
        let scope = ProjectScope::new(vec![project("a", "P:a"), project("b", "P:b")]);
        let mut exclusions = ExclusionSet::new();
        exclusions.add_project(project("a", "P:a"));

        let once = scope.clone().excluding(&exclusions);
        let twice = once.clone().excluding(&exclusions);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_exclusion_matches_on_token_and_name() {
        // Same token, different display name: not excluded
        let scope = ProjectScope::new(vec![project("a", "P:a")]);
        let mut exclusions = ExclusionSet::new();
        exclusions.add_project(project("a", "Renamed:a"));

        assert_eq!(scope.excluding(&exclusions).len(), 1);
    }

    #[test]
    fn test_unresolved_exclusion_never_matches() {
        let scope = ProjectScope::new(vec![project("a", "P:a")]);
        let mut exclusions = ExclusionSet::new();
        exclusions.add_unresolved("a");

        assert!(!exclusions.is_empty());
        assert_eq!(exclusions.unresolved().to_vec(), vec!["a".to_string()]);
        assert_eq!(scope.excluding(&exclusions).len(), 1);
    }
}
