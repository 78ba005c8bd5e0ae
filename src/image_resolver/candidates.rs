//! Lookup inputs and the guessed titles/queries derived from them

use crate::constants::candidates::NAME_SUFFIXES;

/// A player to find a portrait for.
///
/// Blank team or nation values are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerQuery {
    pub name: String,
    pub team: Option<String>,
    pub nation: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl PlayerQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: None,
            nation: None,
        }
    }

    pub fn with_team(mut self, team: Option<&str>) -> Self {
        self.team = non_blank(team);
        self
    }

    pub fn with_nation(mut self, nation: Option<&str>) -> Self {
        self.nation = non_blank(nation);
        self
    }

    /// The name as used in titles and queries
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    pub fn has_name(&self) -> bool {
        !self.trimmed_name().is_empty()
    }
}

/// Guessed encyclopedia titles for a player, most specific disambiguation last.
///
/// Order: the name with each generic suffix, then team variants, then nation
/// variants. Duplicates keep their first position.
///
/// # Example
/// ```
/// use scout_portraits::image_resolver::{PlayerQuery, candidate_titles};
///
/// let titles = candidate_titles(&PlayerQuery::new("Jane Doe").with_team(Some("Arsenal")));
/// assert_eq!(titles[1], "Jane Doe (footballer)");
/// assert_eq!(titles[4], "Jane Doe (Arsenal)");
/// ```
pub fn candidate_titles(query: &PlayerQuery) -> Vec<String> {
    let name = query.trimmed_name();
    let mut titles: Vec<String> = NAME_SUFFIXES
        .iter()
        .map(|suffix| format!("{name}{suffix}"))
        .collect();

    if let Some(team) = &query.team {
        titles.push(format!("{name} ({team})"));
        titles.push(format!("{name} {team} footballer"));
    }
    if let Some(nation) = &query.nation {
        titles.push(format!("{name} ({nation} footballer)"));
        titles.push(format!("{name} {nation} footballer"));
    }

    dedup_preserving_order(titles)
}

/// Full-text search queries: the name, the name with the team, and the name
/// with the nation.
pub fn search_queries(query: &PlayerQuery) -> Vec<String> {
    let name = query.trimmed_name();
    let mut queries = vec![name.to_string()];
    if let Some(team) = &query.team {
        queries.push(format!("{name} {team}"));
    }
    if let Some(nation) = &query.nation {
        queries.push(format!("{name} {nation} footballer"));
    }
    dedup_preserving_order(queries)
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only_titles() {
        let titles = candidate_titles(&PlayerQuery::new("  Jane Doe "));
        assert_eq!(
            titles,
            vec![
                "Jane Doe",
                "Jane Doe (footballer)",
                "Jane Doe (soccer)",
                "Jane Doe footballer",
            ]
        );
    }

    #[test]
    fn test_full_titles_order() {
        let query = PlayerQuery::new("Jane Doe")
            .with_team(Some("Arsenal"))
            .with_nation(Some("Wales"));
        let titles = candidate_titles(&query);
        assert_eq!(
            titles,
            vec![
                "Jane Doe",
                "Jane Doe (footballer)",
                "Jane Doe (soccer)",
                "Jane Doe footballer",
                "Jane Doe (Arsenal)",
                "Jane Doe Arsenal footballer",
                "Jane Doe (Wales footballer)",
                "Jane Doe Wales footballer",
            ]
        );
    }

    #[test]
    fn test_duplicate_titles_are_dropped() {
        // Team "soccer" collides with the generic "(soccer)" variant
        let query = PlayerQuery::new("Jane Doe").with_team(Some("soccer"));
        let titles = candidate_titles(&query);
        assert_eq!(titles.len(), 5);
        assert_eq!(titles[2], "Jane Doe (soccer)");
        assert_eq!(titles[4], "Jane Doe soccer footballer");
    }

    #[test]
    fn test_blank_context_is_absent() {
        let query = PlayerQuery::new("Jane Doe")
            .with_team(Some("   "))
            .with_nation(Some(""));
        assert_eq!(query.team, None);
        assert_eq!(query.nation, None);
        assert_eq!(candidate_titles(&query).len(), 4);
    }

    #[test]
    fn test_search_queries() {
        let query = PlayerQuery::new("Jane Doe")
            .with_team(Some("Arsenal"))
            .with_nation(Some("Wales"));
        assert_eq!(
            search_queries(&query),
            vec!["Jane Doe", "Jane Doe Arsenal", "Jane Doe Wales footballer"]
        );
        assert_eq!(search_queries(&PlayerQuery::new("Jane Doe")), vec!["Jane Doe"]);
    }

    #[test]
    fn test_has_name() {
        assert!(PlayerQuery::new("Jane").has_name());
        assert!(!PlayerQuery::new("   ").has_name());
    }
}
