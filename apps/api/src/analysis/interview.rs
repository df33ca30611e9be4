//! Interview Engine: question selection and keyword-based answer scoring.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::keywords::extract_keywords;
use crate::knowledge::{KnowledgeBase, Role};

const MIN_QUESTIONS: usize = 10;
const MAX_QUESTIONS: usize = 12;

const MIN_ANSWER_CHARS: usize = 10;
const BASE_SCORE: u32 = 40;
const MAX_LENGTH_BONUS: u32 = 20;
const WORDS_PER_LENGTH_POINT: u32 = 5;
const POINTS_PER_KEYWORD: u32 = 10;
const MAX_KEYWORD_BONUS: u32 = 40;
const MAX_ANSWER_SCORE: u32 = 100;

pub const TOO_SHORT_FEEDBACK: &str = "Answer is too short. Please provide more details.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSet {
    pub questions: Vec<String>,
    pub role: String,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    pub score: u32,
    pub feedback: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSummary {
    pub overall_score: u32,
    pub answered: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Question selection
// ────────────────────────────────────────────────────────────────────────────

/// Shuffles the role's question bank (generic bank for unknown roles) and keeps
/// between 10 and 12 questions, or the whole bank if it is smaller.
///
/// `rng` is per call; pass a seeded generator for reproducible output.
pub fn generate_questions<S, R>(
    kb: &KnowledgeBase,
    role: &str,
    skills: &[S],
    rng: &mut R,
) -> QuestionSet
where
    S: AsRef<str>,
    R: Rng,
{
    let mut questions = kb.questions_for(Role::from_name(role)).to_vec();
    questions.shuffle(rng);

    let wanted = rng.gen_range(MIN_QUESTIONS..=MAX_QUESTIONS);
    questions.truncate(wanted);

    debug!(
        role,
        skills = skills.len(),
        selected = questions.len(),
        "Interview questions selected"
    );

    QuestionSet {
        total_questions: questions.len(),
        questions,
        role: role.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Answer scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores an answer: 40 base + up to 20 for length (one point per five words)
/// + 10 per role keyword mentioned (up to 40). Answers under ten trimmed
/// characters score 0 regardless of question or role.
pub fn evaluate_answer(kb: &KnowledgeBase, question: &str, answer: &str, role: &str) -> AnswerEvaluation {
    if answer.trim().chars().count() < MIN_ANSWER_CHARS {
        return AnswerEvaluation {
            score: 0,
            feedback: TOO_SHORT_FEEDBACK.to_string(),
            keywords: vec![],
        };
    }

    let role_keywords: Vec<&str> = kb
        .profile(Role::from_name(role))
        .map(|p| p.keywords().collect())
        .unwrap_or_default();
    let keywords = extract_keywords(answer, &role_keywords);

    let word_count = answer.split_whitespace().count() as u32;
    let length_bonus = (word_count / WORDS_PER_LENGTH_POINT).min(MAX_LENGTH_BONUS);
    let keyword_bonus = (keywords.len() as u32 * POINTS_PER_KEYWORD).min(MAX_KEYWORD_BONUS);
    let score = (BASE_SCORE + length_bonus + keyword_bonus).min(MAX_ANSWER_SCORE);

    debug!(
        question_len = question.len(),
        score,
        length_bonus,
        keyword_bonus,
        "Answer evaluated"
    );

    AnswerEvaluation {
        score,
        feedback: feedback_for(score).to_string(),
        keywords,
    }
}

fn feedback_for(score: u32) -> &'static str {
    match score {
        80.. => "Excellent answer! You covered key concepts well and demonstrated strong understanding.",
        60..=79 => "Good answer! Consider adding more specific examples or technical details.",
        40..=59 => "Decent attempt. Try to include more relevant technical terms and elaborate on your points.",
        _ => "Your answer needs more depth. Focus on technical details and provide concrete examples.",
    }
}

/// Overall interview score: the rounded mean of the answer scores (0 with no answers).
pub fn summarize_interview(evaluations: &[AnswerEvaluation]) -> InterviewSummary {
    let answered = evaluations.len();
    let overall_score = if answered == 0 {
        0
    } else {
        let total: u32 = evaluations.iter().map(|e| e.score.min(MAX_ANSWER_SCORE)).sum();
        (total as f64 / answered as f64).round() as u32
    };
    InterviewSummary {
        overall_score,
        answered,
    }
}
