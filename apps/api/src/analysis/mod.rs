// Skill analysis engine: résumé parsing, role classification, job matching and
// interview scoring over the shared knowledge base.
// Everything below `handlers` is synchronous and free of I/O.

pub mod handlers;
pub mod interview;
pub mod job_matcher;
pub mod keywords;
pub mod requests;
pub mod resume_analyzer;
pub mod role_classifier;
pub mod scoring;
