//! Wire request shapes and their validation.
//!
//! Absent required fields are an `InvalidInput` rejection. Present-but-empty
//! values that the engine can score (an empty skill list, say) pass through and
//! produce a degenerate result instead.

use serde::Deserialize;
use thiserror::Error;

use crate::analysis::interview::AnswerEvaluation;

#[derive(Debug, Error, PartialEq)]
pub enum InvalidInput {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("either {0} or {1} is required")]
    MissingEither(&'static str, &'static str),
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, InvalidInput> {
    value.ok_or(InvalidInput::Missing(field))
}

fn require_text(value: Option<String>, field: &'static str) -> Result<String, InvalidInput> {
    let value = require(value, field)?;
    if value.trim().is_empty() {
        return Err(InvalidInput::Empty(field));
    }
    Ok(value)
}

// ────────────────────────────────────────────────────────────────────────────
// Match
// ────────────────────────────────────────────────────────────────────────────

/// Body of `/ml/match-job`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchJobRequest {
    pub skills: Option<Vec<String>>,
    pub role: Option<String>,
    pub job_description: Option<String>,
}

/// Body of `/ml/match-job-description`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchJobDescriptionRequest {
    pub resume_skills: Option<Vec<String>>,
    pub job_description: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum MatchTarget {
    Role(String),
    Description(String),
}

#[derive(Debug)]
pub struct ValidMatchJob {
    pub skills: Vec<String>,
    pub target: MatchTarget,
}

impl MatchJobRequest {
    /// A job description wins over a role when both are given. Skills may be
    /// omitted, which is the same as an empty list.
    pub fn validate(self) -> Result<ValidMatchJob, InvalidInput> {
        let target = match (self.job_description, self.role) {
            (Some(jd), _) if !jd.trim().is_empty() => MatchTarget::Description(jd),
            (_, Some(role)) if !role.trim().is_empty() => MatchTarget::Role(role),
            (Some(_), _) => return Err(InvalidInput::Empty("jobDescription")),
            (None, Some(_)) => return Err(InvalidInput::Empty("role")),
            (None, None) => return Err(InvalidInput::MissingEither("role", "jobDescription")),
        };
        Ok(ValidMatchJob {
            skills: self.skills.unwrap_or_default(),
            target,
        })
    }
}

impl MatchJobDescriptionRequest {
    /// Skills must be present and the description non-blank.
    pub fn validate(self) -> Result<ValidMatchJob, InvalidInput> {
        let skills = require(self.resume_skills, "resumeSkills")?;
        let jd = require_text(self.job_description, "jobDescription")?;
        Ok(ValidMatchJob {
            skills,
            target: MatchTarget::Description(jd),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interview
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub role: Option<String>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ValidGenerateQuestions {
    pub role: String,
    pub skills: Vec<String>,
}

impl GenerateQuestionsRequest {
    pub fn validate(self) -> Result<ValidGenerateQuestions, InvalidInput> {
        Ok(ValidGenerateQuestions {
            role: require_text(self.role, "role")?,
            skills: self.skills.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EvaluateAnswerRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug)]
pub struct ValidEvaluateAnswer {
    pub question: String,
    pub answer: String,
    pub role: String,
}

impl EvaluateAnswerRequest {
    /// Question and answer must be non-empty strings. A whitespace-only answer is
    /// still an answer; it is scored (and rejected as too short) by the engine.
    pub fn validate(self) -> Result<ValidEvaluateAnswer, InvalidInput> {
        let question = require(self.question, "question")?;
        if question.is_empty() {
            return Err(InvalidInput::Empty("question"));
        }
        let answer = require(self.answer, "answer")?;
        if answer.is_empty() {
            return Err(InvalidInput::Empty("answer"));
        }
        Ok(ValidEvaluateAnswer {
            question,
            answer,
            role: self.role.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InterviewSummaryRequest {
    pub evaluations: Option<Vec<AnswerEvaluation>>,
}

impl InterviewSummaryRequest {
    pub fn validate(self) -> Result<Vec<AnswerEvaluation>, InvalidInput> {
        require(self.evaluations, "evaluations")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Classification & résumé text
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ClassifyRoleRequest {
    pub skills: Option<Vec<String>>,
}

impl ClassifyRoleRequest {
    /// An empty list is valid and classifies as `General`.
    pub fn validate(self) -> Result<Vec<String>, InvalidInput> {
        require(self.skills, "skills")
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: Option<String>,
}

impl AnalyzeTextRequest {
    /// Empty text is valid and yields the unreadable-résumé result.
    pub fn validate(self) -> Result<String, InvalidInput> {
        require(self.text, "text")
    }
}
