/// Case-insensitive substring filter over a role catalog.
///
/// Filtering never reorders: the output is always a subsequence of the input.
pub struct RoleFilter {
    query_lower: String,
}

impl RoleFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query_lower: query.to_lowercase(),
        }
    }

    pub fn matches(&self, role: &str) -> bool {
        self.query_lower.is_empty() || role.to_lowercase().contains(&self.query_lower)
    }

    /// Indices into `roles` of every matching entry, in catalog order.
    pub fn matching_indices(&self, roles: &[String]) -> Vec<usize> {
        roles
            .iter()
            .enumerate()
            .filter(|(_, role)| self.matches(role))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn apply(&self, roles: &[String]) -> Vec<String> {
        roles
            .iter()
            .filter(|role| self.matches(role))
            .cloned()
            .collect()
    }
}

/// Returns the roles containing `query`, ignoring case. An empty query keeps everything.
pub fn filter_roles(roles: &[String], query: &str) -> Vec<String> {
    RoleFilter::new(query).apply(roles)
}
