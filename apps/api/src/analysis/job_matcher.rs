//! Job Matcher: scores résumé skills against the technology requirements found
//! in a job description.
//!
//! Algorithm:
//! 1. required = technology vocabulary terms found in the job text (substring match)
//! 2. a required skill matches when it is contained in any normalized résumé skill
//! 3. match score = matching / required × 100 (one decimal)
//! 4. recommendations: optional "skills to add" entry, then one score-band message

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::keywords::{contained_in_any, extract_keywords, normalize_skills};
use crate::analysis::scoring::percentage;
use crate::knowledge::{KnowledgeBase, Role};

const MAX_LISTED_MISSING: usize = 3;

pub const NO_REQUIREMENTS_MESSAGE: &str = "Unable to extract requirements from job description";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_score: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub total_required: usize,
    pub total_matching: usize,
}

pub fn match_job<S: AsRef<str>>(
    kb: &KnowledgeBase,
    resume_skills: &[S],
    job_text: &str,
) -> MatchResult {
    let required = extract_keywords(job_text, kb.tech_keywords());

    if required.is_empty() {
        return MatchResult {
            match_score: 0.0,
            matching_skills: vec![],
            missing_skills: vec![],
            recommendations: vec![NO_REQUIREMENTS_MESSAGE.to_string()],
            total_required: 0,
            total_matching: 0,
        };
    }

    let resume_skills = normalize_skills(resume_skills);
    let (matching_skills, missing_skills): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|skill| contained_in_any(skill, &resume_skills));

    let match_score = percentage(matching_skills.len(), required.len());
    let recommendations = build_recommendations(match_score, &missing_skills);

    debug!(
        match_score,
        required = required.len(),
        matching = matching_skills.len(),
        "Job match computed"
    );

    MatchResult {
        match_score,
        total_required: required.len(),
        total_matching: matching_skills.len(),
        matching_skills,
        missing_skills,
        recommendations,
    }
}

/// Matches against a role instead of free text.
///
/// Known roles are described by their profile keywords; anything else is treated
/// as job-description text verbatim.
pub fn match_role<S: AsRef<str>>(kb: &KnowledgeBase, resume_skills: &[S], role: &str) -> MatchResult {
    match kb.profile(Role::from_name(role)) {
        Some(profile) => {
            let job_text = profile.keywords().collect::<Vec<_>>().join(", ");
            match_job(kb, resume_skills, &job_text)
        }
        None => match_job(kb, resume_skills, role),
    }
}

fn build_recommendations(score: f64, missing: &[String]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing.is_empty() {
        let listed = missing
            .iter()
            .take(MAX_LISTED_MISSING)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if missing.len() <= MAX_LISTED_MISSING {
            recommendations.push(format!("Add these skills to your resume: {listed}"));
        } else {
            recommendations.push(format!(
                "Consider adding: {listed} and {} more skills",
                missing.len() - MAX_LISTED_MISSING
            ));
        }
    }

    let band = if score >= 80.0 {
        "Excellent match! Your resume aligns well with this job."
    } else if score >= 60.0 {
        "Good match. Adding missing skills could strengthen your application."
    } else if score >= 40.0 {
        "Moderate match. Consider gaining experience in missing skills."
    } else {
        "Low match. This role may require significant skill development."
    };
    recommendations.push(band.to_string());

    recommendations
}
