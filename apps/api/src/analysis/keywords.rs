//! Keyword Extractor: vocabulary matching over free text.
//!
//! Two flavours:
//! - `extract_keywords`: case-insensitive substring match (job descriptions, answers).
//! - `SkillPatterns`: whole-word, case-insensitive regex match for résumé skill tags,
//!   so short names like "Go" never fire inside "Gold".

use std::collections::BTreeSet;

use regex::{Regex, RegexBuilder};

/// Returns the vocabulary entries that occur anywhere in `text`, ignoring case.
///
/// Output follows vocabulary order with duplicates collapsed; treat it as a set.
pub fn extract_keywords<S: AsRef<str>>(text: &str, vocabulary: &[S]) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }
    let haystack = text.to_lowercase();

    let mut found: Vec<String> = Vec::new();
    for keyword in vocabulary {
        let keyword = keyword.as_ref().to_lowercase();
        if !keyword.is_empty() && haystack.contains(&keyword) && !found.contains(&keyword) {
            found.push(keyword);
        }
    }
    found
}

/// Lower-cases and trims skills, dropping blanks.
pub fn normalize_skills<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// True when `keyword` is contained in any of the (already normalized) skills.
pub fn contained_in_any(keyword: &str, skills: &[String]) -> bool {
    skills.iter().any(|skill| skill.contains(keyword))
}

/// Standard e-mail address shape.
pub fn compile_email_pattern() -> Result<Regex, regex::Error> {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
}

// ────────────────────────────────────────────────────────────────────────────
// Whole-word skill patterns
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct SkillCategory {
    name: String,
    pattern: Regex,
}

/// Compiled, categorized skill-tag vocabulary.
#[derive(Debug, Clone)]
pub struct SkillPatterns {
    categories: Vec<SkillCategory>,
}

impl SkillPatterns {
    /// Compiles one case-insensitive alternation per category.
    pub fn compile(categories: &[(&str, &[&str])]) -> Result<Self, regex::Error> {
        let categories = categories
            .iter()
            .map(|(name, terms)| {
                let alternation = terms
                    .iter()
                    .map(|t| whole_word(t))
                    .collect::<Vec<_>>()
                    .join("|");
                let pattern = RegexBuilder::new(&format!("(?:{alternation})"))
                    .case_insensitive(true)
                    .build()?;
                Ok(SkillCategory {
                    name: name.to_string(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { categories })
    }

    /// All skill tags found in `text`, lower-cased.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        self.categories
            .iter()
            .flat_map(|c| c.pattern.find_iter(text))
            .map(|m| m.as_str().to_lowercase())
            .collect()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

/// Escapes `term` and anchors it with `\b` on each edge that is a word character.
/// Edges like the `+` in "C++" cannot take a `\b` without breaking the match.
fn whole_word(term: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut out = String::new();
    if term.chars().next().is_some_and(is_word) {
        out.push_str(r"\b");
    }
    out.push_str(&regex::escape(term));
    if term.chars().last().is_some_and(is_word) {
        out.push_str(r"\b");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::vocabulary::SKILL_CATEGORIES;

    fn patterns() -> SkillPatterns {
        SkillPatterns::compile(SKILL_CATEGORIES).unwrap()
    }

    #[test]
    fn test_extract_keywords_case_insensitive_substring() {
        let found = extract_keywords("We need REACT and Node.js", &["react", "node.js", "vue"]);
        assert_eq!(found, vec!["react", "node.js"]);
    }

    #[test]
    fn test_extract_keywords_is_substring_not_word_based() {
        // "java" sits inside "javascript"
        let found = extract_keywords("Strong JavaScript skills", &["java", "javascript"]);
        assert_eq!(found, vec!["java", "javascript"]);
    }

    #[test]
    fn test_extract_keywords_empty_text() {
        assert!(extract_keywords("", &["react"]).is_empty());
    }

    #[test]
    fn test_extract_keywords_collapses_duplicates() {
        let found = extract_keywords("python", &["Python", "python"]);
        assert_eq!(found, vec!["python"]);
    }

    #[test]
    fn test_normalize_skills_trims_lowercases_and_drops_blanks() {
        let skills = normalize_skills(&["  React ", "", "NODE.JS", "   "]);
        assert_eq!(skills, vec!["react", "node.js"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_skills(&["React", " Docker "]);
        let twice = normalize_skills(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_skill_patterns_whole_word() {
        let found = patterns().extract("Gold medal winner, GitHub user");
        assert!(!found.contains("go"));
        assert!(!found.contains("git"));
    }

    #[test]
    fn test_skill_patterns_match_symbols_and_case() {
        let found = patterns().extract("Skills: c++, C#, node.js, Go, CI/CD");
        for skill in ["c++", "c#", "node.js", "go", "ci/cd"] {
            assert!(found.contains(skill), "missing {skill}: {found:?}");
        }
    }

    #[test]
    fn test_skill_patterns_prefer_longer_alternative() {
        let found = patterns().extract("JavaScript developer");
        assert!(found.contains("javascript"));
        assert!(!found.contains("java"));
    }

    #[test]
    fn test_skill_patterns_multi_word_terms() {
        let found = patterns().extract("Built a REST API; studied machine learning and NoSQL");
        assert!(found.contains("rest api"));
        assert!(found.contains("machine learning"));
        assert!(found.contains("nosql"));
        // "SQL" inside "NoSQL" is not a whole word
        assert!(!found.contains("sql"));
    }

    #[test]
    fn test_skill_patterns_collapse_case_variants() {
        let found = patterns().extract("Python python PYTHON");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_category_names_in_order() {
        let patterns = patterns();
        let names: Vec<&str> = patterns.category_names().collect();
        assert_eq!(names.first(), Some(&"languages"));
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_email_pattern_finds_first_address() {
        let re = compile_email_pattern().unwrap();
        let found = re.find("Contact: jane.doe+cv@mail.example.com or jd@x.io").unwrap();
        assert_eq!(found.as_str(), "jane.doe+cv@mail.example.com");
        assert!(re.find("no address here @ all").is_none());
    }

    #[test]
    fn test_contained_in_any() {
        let skills = vec!["react native".to_string()];
        assert!(contained_in_any("react", &skills));
        assert!(!contained_in_any("vue", &skills));
    }
}
