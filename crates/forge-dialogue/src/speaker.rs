//! Topic-driven speaker selection.
//!
//! Topics map to candidate roles through an ordered list of (keyword,
//! role-set) rules evaluated first-match-wins against the lower-cased topic
//! string, with a final default of "everyone". The table is injected so tests
//! can substitute alternates; [`TopicRoleTable::default`] supplies the stock
//! rules.

use forge_core::entities::Participant;

/// One keyword rule: a substring to look for and the roles it selects.
#[derive(Debug, Clone)]
pub struct TopicRule {
    pub keyword: &'static str,
    pub roles: &'static [&'static str],
}

/// Ordered first-match-wins topic→role table.
#[derive(Debug, Clone)]
pub struct TopicRoleTable {
    rules: Vec<TopicRule>,
}

impl TopicRoleTable {
    #[must_use]
    pub const fn new(rules: Vec<TopicRule>) -> Self {
        Self { rules }
    }

    /// Roles for a topic, or `None` when no rule matches (callers fall back
    /// to the full participant list).
    #[must_use]
    pub fn roles_for(&self, topic: &str) -> Option<&'static [&'static str]> {
        let lowered = topic.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(rule.keyword))
            .map(|rule| rule.roles)
    }

    /// Select the speakers for a topic out of the participant list.
    ///
    /// Participants whose role appears in the matched role-set, in
    /// participant-list order; the full list when no rule matches or none of
    /// the selected roles is present.
    #[must_use]
    pub fn speakers_for<'a>(
        &self,
        topic: &str,
        participants: &'a [Participant],
    ) -> Vec<&'a Participant> {
        let Some(roles) = self.roles_for(topic) else {
            return participants.iter().collect();
        };

        let matched: Vec<&Participant> = participants
            .iter()
            .filter(|p| roles.contains(&p.role.as_str()))
            .collect();

        if matched.is_empty() {
            participants.iter().collect()
        } else {
            matched
        }
    }
}

impl Default for TopicRoleTable {
    fn default() -> Self {
        Self::new(vec![
            TopicRule {
                keyword: "cost",
                roles: &["General Contractor", "Project Manager", "Finance Analyst"],
            },
            TopicRule {
                keyword: "timeline",
                roles: &["Project Manager", "General Contractor"],
            },
            TopicRule {
                keyword: "constraint",
                roles: &["General Contractor", "Store Manager", "Project Manager"],
            },
            TopicRule {
                keyword: "vendor",
                roles: &["Procurement Manager", "General Contractor"],
            },
            TopicRule {
                keyword: "design",
                roles: &["Architect", "Design Lead", "Project Manager"],
            },
        ])
    }
}

/// Role → team mapping printed in transcript headers. Injected alongside the
/// topic table; [`default_team_table`] supplies the stock mapping.
#[must_use]
pub fn default_team_table() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Project Manager", "ANF Store Development"),
        ("General Contractor", "BuildRight Construction"),
        ("Procurement Manager", "ANF"),
        ("Store Manager", "ANF"),
        ("VP Store Development", "ANF"),
        ("Finance Analyst", "ANF Finance"),
        ("Design Lead", "ANF Design"),
        ("Architect", "ANF Design"),
    ]
}

/// Team for a role, defaulting to `"ANF"`.
#[must_use]
pub fn team_for_role(table: &[(&str, &str)], role: &str) -> String {
    table
        .iter()
        .find(|(r, _)| *r == role)
        .map_or("ANF", |(_, team)| *team)
        .to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn participants() -> Vec<Participant> {
        [
            ("Sarah Chen", "Project Manager"),
            ("Tom Wilson", "General Contractor"),
            ("Jennifer Liu", "Procurement Manager"),
            ("Mike Rodriguez", "Store Manager"),
        ]
        .into_iter()
        .map(|(name, role)| Participant {
            name: name.into(),
            role: role.into(),
            team: "ANF".into(),
        })
        .collect()
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = TopicRoleTable::default();
        // "cost" appears before "vendor" in the table; a topic containing
        // both resolves through the cost rule only.
        let roles = table.roles_for("vendor cost impact").unwrap();
        assert!(roles.contains(&"Finance Analyst"));
        assert!(!roles.contains(&"Procurement Manager"));
    }

    #[test]
    fn match_is_case_insensitive() {
        let table = TopicRoleTable::default();
        assert!(table.roles_for("Vendor Alternatives").is_some());
        assert!(table.roles_for("TIMELINE review").is_some());
    }

    #[test]
    fn no_match_returns_all_participants_in_order() {
        let table = TopicRoleTable::default();
        let people = participants();
        let speakers = table.speakers_for("weather smalltalk", &people);
        let names: Vec<&str> = speakers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Sarah Chen", "Tom Wilson", "Jennifer Liu", "Mike Rodriguez"]
        );
    }

    #[test]
    fn matched_roles_filter_participants_in_declaration_order() {
        let table = TopicRoleTable::default();
        let people = participants();
        let speakers = table.speakers_for("cost estimate review", &people);
        let names: Vec<&str> = speakers.iter().map(|p| p.name.as_str()).collect();
        // Participant-list order, not role-set order.
        assert_eq!(names, ["Sarah Chen", "Tom Wilson"]);
    }

    #[test]
    fn selected_roles_absent_falls_back_to_everyone() {
        let table = TopicRoleTable::new(vec![TopicRule {
            keyword: "design",
            roles: &["Architect"],
        }]);
        let people = participants();
        let speakers = table.speakers_for("design review", &people);
        assert_eq!(speakers.len(), people.len());
    }

    #[test]
    fn substituted_table_is_honored() {
        let table = TopicRoleTable::new(vec![TopicRule {
            keyword: "anything",
            roles: &["Store Manager"],
        }]);
        let people = participants();
        let speakers = table.speakers_for("anything goes", &people);
        let names: Vec<&str> = speakers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Mike Rodriguez"]);
    }

    #[test]
    fn team_lookup_defaults_to_anf() {
        let table = default_team_table();
        assert_eq!(team_for_role(&table, "Finance Analyst"), "ANF Finance");
        assert_eq!(team_for_role(&table, "Unknown Role"), "ANF");
    }
}
