//! Role Classifier: picks the best-fit role for a skill set from the weighted
//! role keyword table.
//!
//! Algorithm:
//! 1. Normalize skills (trim + lower-case).
//! 2. Per role: a keyword matches when it is contained in any skill.
//!    raw score = 2 × primary matches + 1 × secondary matches
//! 3. Highest raw score wins; ties go to the role defined first in the table.
//! 4. confidence = raw / max possible for the winner × 100 (≤ 100, one decimal)
//! 5. Up to three other roles with a non-zero score, best first, as alternatives.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::keywords::{contained_in_any, normalize_skills};
use crate::analysis::scoring::percentage;
use crate::knowledge::{KnowledgeBase, Role, RoleProfile, PRIMARY_WEIGHT, SECONDARY_WEIGHT};

const MAX_ALTERNATIVES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRole {
    pub role: Role,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub role: Role,
    pub confidence: f64,
    pub matched_skills: Vec<String>,
    pub alternative_roles: Vec<AlternativeRole>,
}

impl ClassificationResult {
    /// The terminal "no signal" outcome.
    pub fn general() -> Self {
        Self {
            role: Role::General,
            confidence: 0.0,
            matched_skills: vec![],
            alternative_roles: vec![],
        }
    }
}

struct RoleScore<'a> {
    role: Role,
    profile: &'a RoleProfile,
    raw_score: u32,
    matched: Vec<String>,
}

pub fn classify<S: AsRef<str>>(kb: &KnowledgeBase, skills: &[S]) -> ClassificationResult {
    let skills = normalize_skills(skills);
    if skills.is_empty() {
        return ClassificationResult::general();
    }

    let scores: Vec<RoleScore<'_>> = kb
        .profiles()
        .map(|(role, profile)| score_role(role, profile, &skills))
        .collect();

    // First maximum wins, so earlier roles take ties.
    let Some(top) = scores
        .iter()
        .reduce(|best, s| if s.raw_score > best.raw_score { s } else { best })
        .filter(|top| top.raw_score > 0)
    else {
        return ClassificationResult::general();
    };

    let confidence = percentage(top.raw_score as usize, top.profile.max_score() as usize);

    let mut alternatives: Vec<&RoleScore<'_>> = scores
        .iter()
        .filter(|s| s.role != top.role && s.raw_score > 0)
        .collect();
    // Stable: equal scores keep table order.
    alternatives.sort_by(|a, b| b.raw_score.cmp(&a.raw_score));

    let alternative_roles = alternatives
        .into_iter()
        .take(MAX_ALTERNATIVES)
        .map(|s| AlternativeRole {
            role: s.role,
            score: s.raw_score,
        })
        .collect();

    debug!(
        role = %top.role,
        raw_score = top.raw_score,
        confidence,
        "Role classified"
    );

    ClassificationResult {
        role: top.role,
        confidence,
        matched_skills: top.matched.clone(),
        alternative_roles,
    }
}

fn score_role<'a>(role: Role, profile: &'a RoleProfile, skills: &[String]) -> RoleScore<'a> {
    let primary: Vec<String> = profile
        .primary
        .iter()
        .filter(|kw| contained_in_any(kw, skills))
        .cloned()
        .collect();
    let secondary: Vec<String> = profile
        .secondary
        .iter()
        .filter(|kw| contained_in_any(kw, skills))
        .cloned()
        .collect();

    let raw_score = primary.len() as u32 * PRIMARY_WEIGHT + secondary.len() as u32 * SECONDARY_WEIGHT;

    RoleScore {
        role,
        profile,
        raw_score,
        matched: primary.into_iter().chain(secondary).collect(),
    }
}
