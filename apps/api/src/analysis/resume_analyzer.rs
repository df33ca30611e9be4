//! Resume Analyzer: contact heuristics, skill extraction and a simple
//! completeness score over plain résumé text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::knowledge::KnowledgeBase;

const NAME_SCAN_LINES: usize = 5;
const MIN_NAME_TOKENS: usize = 2;
const MAX_NAME_TOKENS: usize = 4;
const EXPERIENCE_SNIPPET_CHARS: usize = 200;
const BRIEF_RESUME_CHARS: usize = 500;
const STRONG_SKILL_COUNT: usize = 5;
const POINTS_PER_SKILL: u32 = 8;
const BASE_SCORE: u32 = 20;
const MAX_SCORE: u32 = 100;

pub const UNREADABLE_EXPERIENCE: &str = "Unable to extract text from resume";
pub const UNREADABLE_IMPROVEMENT: &str =
    "Unable to parse resume. Please ensure it's a valid PDF or DOCX file.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Vec<String>,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAssessment {
    pub score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub extracted_data: ExtractedData,
    pub analysis: ResumeAssessment,
}

impl ResumeAnalysis {
    /// Result for a résumé whose text could not be extracted.
    pub fn unreadable() -> Self {
        Self {
            extracted_data: ExtractedData {
                name: None,
                email: None,
                skills: vec![],
                experience: UNREADABLE_EXPERIENCE.to_string(),
            },
            analysis: ResumeAssessment {
                score: 0,
                strengths: vec![],
                improvements: vec![UNREADABLE_IMPROVEMENT.to_string()],
                missing_skills: vec![],
            },
        }
    }
}

pub fn analyze(kb: &KnowledgeBase, text: &str) -> ResumeAnalysis {
    if text.trim().is_empty() {
        return ResumeAnalysis::unreadable();
    }

    let name = extract_name(text);
    let email = kb
        .email_pattern()
        .find(text)
        .map(|m| m.as_str().to_string());
    let skills: Vec<String> = kb.skill_patterns().extract(text).into_iter().collect();

    let score = (skills.len() as u32 * POINTS_PER_SKILL + BASE_SCORE).min(MAX_SCORE);
    let text_chars = text.chars().count();

    let mut strengths = Vec::new();
    if skills.len() >= STRONG_SKILL_COUNT {
        strengths.push(format!(
            "Strong technical skill set with {} identified skills",
            skills.len()
        ));
    }
    if email.is_some() {
        strengths.push("Contact information clearly provided".to_string());
    }

    let mut improvements = Vec::new();
    if skills.len() < STRONG_SKILL_COUNT {
        improvements.push("Consider adding more technical skills to your resume".to_string());
    }
    if email.is_none() {
        improvements.push("Add contact email for better visibility".to_string());
    }
    if text_chars < BRIEF_RESUME_CHARS {
        improvements.push(
            "Resume appears brief. Consider adding more details about your experience".to_string(),
        );
    }

    debug!(
        skills = skills.len(),
        score,
        has_email = email.is_some(),
        has_name = name.is_some(),
        "Resume analyzed"
    );

    ResumeAnalysis {
        extracted_data: ExtractedData {
            name,
            email,
            skills,
            experience: experience_snippet(text, text_chars),
        },
        analysis: ResumeAssessment {
            score,
            strengths,
            improvements,
            missing_skills: vec![],
        },
    }
}

/// First of the opening lines that looks like a personal name: 2–4 words made
/// only of letters.
fn extract_name(text: &str) -> Option<String> {
    text.split('\n')
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .find(|line| {
            let tokens = line.split_whitespace().count();
            (MIN_NAME_TOKENS..=MAX_NAME_TOKENS).contains(&tokens)
                && line.chars().filter(|c| *c != ' ').all(char::is_alphabetic)
        })
        .map(str::to_string)
}

fn experience_snippet(text: &str, text_chars: usize) -> String {
    if text_chars > EXPERIENCE_SNIPPET_CHARS {
        let head: String = text.chars().take(EXPERIENCE_SNIPPET_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
