//! Knowledge Base: the static role keyword table, question bank and skill
//! vocabularies every analysis operation reads from.
//!
//! Built once at startup (built-in tables, optionally overridden from a JSON file)
//! and shared read-only through `AppState` as `Arc<KnowledgeBase>`.

pub mod questions;
pub mod roles;
pub mod vocabulary;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::keywords::{compile_email_pattern, SkillPatterns};

// ────────────────────────────────────────────────────────────────────────────
// Roles
// ────────────────────────────────────────────────────────────────────────────

/// Known job roles, declared in table order, plus the `General` fallback.
///
/// `Ord` follows declaration order, so `BTreeMap<Role, _>` iterates in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    #[serde(rename = "Full Stack Developer")]
    FullStackDeveloper,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "ML Engineer")]
    MlEngineer,
    #[serde(rename = "DevOps Engineer")]
    DevOpsEngineer,
    #[serde(rename = "Mobile Developer")]
    MobileDeveloper,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "General")]
    General,
}

impl Role {
    pub const KNOWN: [Role; 9] = [
        Role::FrontendDeveloper,
        Role::BackendDeveloper,
        Role::FullStackDeveloper,
        Role::DataScientist,
        Role::MlEngineer,
        Role::DevOpsEngineer,
        Role::MobileDeveloper,
        Role::UiUxDesigner,
        Role::DataAnalyst,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::FrontendDeveloper => "Frontend Developer",
            Role::BackendDeveloper => "Backend Developer",
            Role::FullStackDeveloper => "Full Stack Developer",
            Role::DataScientist => "Data Scientist",
            Role::MlEngineer => "ML Engineer",
            Role::DevOpsEngineer => "DevOps Engineer",
            Role::MobileDeveloper => "Mobile Developer",
            Role::UiUxDesigner => "UI/UX Designer",
            Role::DataAnalyst => "Data Analyst",
            Role::General => "General",
        }
    }

    /// Exact (trimmed) display-name lookup. Unrecognized names are `General`.
    pub fn from_name(name: &str) -> Role {
        Self::lookup(name).unwrap_or(Role::General)
    }

    fn lookup(name: &str) -> Option<Role> {
        let name = name.trim();
        Self::KNOWN.into_iter().find(|r| r.name() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weighted keywords for one role. Primary matches count 2, secondary 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
}

pub const PRIMARY_WEIGHT: u32 = 2;
pub const SECONDARY_WEIGHT: u32 = 1;

impl RoleProfile {
    fn new(primary: &[&str], secondary: &[&str]) -> Self {
        Self {
            primary: normalize_list(primary.iter().copied()),
            secondary: normalize_list(secondary.iter().copied()),
        }
    }

    /// Primary keywords followed by secondary keywords.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .map(String::as_str)
    }

    /// Raw score of a skill set matching every keyword.
    pub fn max_score(&self) -> u32 {
        self.primary.len() as u32 * PRIMARY_WEIGHT + self.secondary.len() as u32 * SECONDARY_WEIGHT
    }
}

fn normalize_list<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Knowledge base
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    profiles: BTreeMap<Role, RoleProfile>,
    questions: BTreeMap<Role, Vec<String>>,
    generic_questions: Vec<String>,
    tech_keywords: Vec<String>,
    skill_patterns: SkillPatterns,
    email_pattern: Regex,
}

/// On-disk override document. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct KnowledgeOverrides {
    #[serde(default)]
    roles: BTreeMap<String, RoleProfile>,
    #[serde(default)]
    questions: BTreeMap<String, Vec<String>>,
    generic_questions: Option<Vec<String>>,
}

impl KnowledgeBase {
    /// Builds the knowledge base from the compiled-in tables.
    pub fn builtin() -> Result<Self> {
        let profiles = roles::ROLE_KEYWORDS
            .iter()
            .map(|(role, primary, secondary)| (*role, RoleProfile::new(primary, secondary)))
            .collect();

        let banks = questions::ROLE_QUESTIONS
            .iter()
            .map(|(role, qs)| (*role, qs.iter().map(|q| q.to_string()).collect()))
            .collect();

        let kb = Self {
            profiles,
            questions: banks,
            generic_questions: questions::GENERIC_QUESTIONS
                .iter()
                .map(|q| q.to_string())
                .collect(),
            tech_keywords: normalize_list(vocabulary::TECH_KEYWORDS.iter().copied()),
            skill_patterns: SkillPatterns::compile(vocabulary::SKILL_CATEGORIES)
                .context("Failed to compile skill patterns")?,
            email_pattern: compile_email_pattern().context("Failed to compile email pattern")?,
        };
        kb.validate()?;
        Ok(kb)
    }

    /// Built-in tables, overridden by the JSON document at `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut kb = Self::builtin()?;
        if let Some(path) = path {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read knowledge base '{}'", path.display()))?;
            kb.apply_overrides_json(&raw)
                .with_context(|| format!("Invalid knowledge base '{}'", path.display()))?;
            info!("Knowledge base overrides loaded from {}", path.display());
        }
        Ok(kb)
    }

    pub(crate) fn apply_overrides_json(&mut self, raw: &str) -> Result<()> {
        let overrides: KnowledgeOverrides = serde_json::from_str(raw)?;

        for (name, profile) in overrides.roles {
            let role = Role::lookup(&name)
                .with_context(|| format!("Unknown role '{name}' in role profiles"))?;
            let profile = RoleProfile {
                primary: normalize_list(profile.primary.iter().map(String::as_str)),
                secondary: normalize_list(profile.secondary.iter().map(String::as_str)),
            };
            self.profiles.insert(role, profile);
        }

        for (name, qs) in overrides.questions {
            let role = Role::lookup(&name)
                .with_context(|| format!("Unknown role '{name}' in question bank"))?;
            self.questions.insert(role, qs);
        }

        if let Some(generic) = overrides.generic_questions {
            self.generic_questions = generic;
        }

        self.validate()
    }

    fn validate(&self) -> Result<()> {
        for role in Role::KNOWN {
            match self.profiles.get(&role) {
                Some(p) if !p.primary.is_empty() && !p.secondary.is_empty() => {}
                _ => bail!("Role '{role}' must define non-empty primary and secondary keywords"),
            }
        }
        if let Some((role, _)) = self.questions.iter().find(|(_, qs)| qs.is_empty()) {
            bail!("Question bank for '{role}' is empty");
        }
        if self.generic_questions.is_empty() {
            bail!("Generic question bank is empty");
        }
        Ok(())
    }

    /// Role profiles in table order.
    pub fn profiles(&self) -> impl Iterator<Item = (Role, &RoleProfile)> {
        self.profiles.iter().map(|(role, profile)| (*role, profile))
    }

    /// `None` for `General`.
    pub fn profile(&self, role: Role) -> Option<&RoleProfile> {
        self.profiles.get(&role)
    }

    /// The role's question bank, or the generic bank if it has none.
    pub fn questions_for(&self, role: Role) -> &[String] {
        self.questions
            .get(&role)
            .map(Vec::as_slice)
            .unwrap_or(self.generic_questions.as_slice())
    }

    pub fn tech_keywords(&self) -> &[String] {
        &self.tech_keywords
    }

    pub fn skill_patterns(&self) -> &SkillPatterns {
        &self.skill_patterns
    }

    pub fn email_pattern(&self) -> &Regex {
        &self.email_pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_role_has_nonempty_profile() {
        let kb = KnowledgeBase::builtin().unwrap();
        for role in Role::KNOWN {
            let profile = kb.profile(role).expect("profile");
            assert!(!profile.primary.is_empty(), "{role} primary empty");
            assert!(!profile.secondary.is_empty(), "{role} secondary empty");
        }
        assert!(kb.profile(Role::General).is_none());
    }

    #[test]
    fn test_profiles_iterate_in_table_order() {
        let kb = KnowledgeBase::builtin().unwrap();
        let order: Vec<Role> = kb.profiles().map(|(r, _)| r).collect();
        assert_eq!(order, Role::KNOWN.to_vec());
    }

    #[test]
    fn test_from_name_exact_and_fallback() {
        assert_eq!(Role::from_name("Frontend Developer"), Role::FrontendDeveloper);
        assert_eq!(Role::from_name("  UI/UX Designer "), Role::UiUxDesigner);
        assert_eq!(Role::from_name("frontend developer"), Role::General);
        assert_eq!(Role::from_name("Astronaut"), Role::General);
        assert_eq!(Role::from_name(""), Role::General);
    }

    #[test]
    fn test_role_serializes_as_display_name() {
        let json = serde_json::to_string(&Role::UiUxDesigner).unwrap();
        assert_eq!(json, r#""UI/UX Designer""#);
        assert_eq!(Role::MlEngineer.to_string(), "ML Engineer");
    }

    #[test]
    fn test_max_score_weights_primary_double() {
        let kb = KnowledgeBase::builtin().unwrap();
        // 10 primary, 8 secondary
        assert_eq!(kb.profile(Role::FrontendDeveloper).unwrap().max_score(), 28);
        // 7 primary, 6 secondary
        assert_eq!(kb.profile(Role::FullStackDeveloper).unwrap().max_score(), 20);
    }

    #[test]
    fn test_question_banks_have_ten_entries() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert_eq!(kb.questions_for(Role::FrontendDeveloper).len(), 10);
        assert_eq!(kb.questions_for(Role::DevOpsEngineer).len(), 10);
        // No dedicated bank → generic
        assert_eq!(
            kb.questions_for(Role::DataScientist),
            kb.questions_for(Role::General)
        );
        assert_eq!(kb.questions_for(Role::General).len(), 10);
    }

    #[test]
    fn test_overrides_replace_profile_and_normalize() {
        let mut kb = KnowledgeBase::builtin().unwrap();
        kb.apply_overrides_json(
            r#"{"roles": {"Data Analyst": {"primary": ["  SQL "], "secondary": ["Looker"]}}}"#,
        )
        .unwrap();
        let profile = kb.profile(Role::DataAnalyst).unwrap();
        assert_eq!(profile.primary, vec!["sql"]);
        assert_eq!(profile.secondary, vec!["looker"]);
        // Untouched roles keep built-in data
        assert_eq!(kb.profile(Role::FrontendDeveloper).unwrap().primary.len(), 10);
    }

    #[test]
    fn test_overrides_reject_unknown_role() {
        let mut kb = KnowledgeBase::builtin().unwrap();
        let err = kb
            .apply_overrides_json(r#"{"roles": {"Astronaut": {"primary": ["a"], "secondary": ["b"]}}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Astronaut"));
    }

    #[test]
    fn test_overrides_reject_empty_keyword_list() {
        let mut kb = KnowledgeBase::builtin().unwrap();
        assert!(kb
            .apply_overrides_json(r#"{"roles": {"Data Analyst": {"primary": [], "secondary": ["b"]}}}"#)
            .is_err());
    }

    #[test]
    fn test_overrides_question_bank_for_role_without_one() {
        let mut kb = KnowledgeBase::builtin().unwrap();
        kb.apply_overrides_json(r#"{"questions": {"Data Scientist": ["What is a p-value?"]}}"#)
            .unwrap();
        assert_eq!(kb.questions_for(Role::DataScientist), ["What is a p-value?"]);
    }

    #[test]
    fn test_overrides_reject_empty_generic_bank() {
        let mut kb = KnowledgeBase::builtin().unwrap();
        assert!(kb.apply_overrides_json(r#"{"genericQuestions": []}"#).is_err());
    }
}
