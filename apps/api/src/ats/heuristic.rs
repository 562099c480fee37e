//! Heuristic ATS scoring: local keyword analysis used when the model is unavailable.
//!
//! Algorithm (case-insensitive substring matching):
//! 1. base score 40
//! 2. +2 per technical keyword found (cap +30)
//! 3. +2 per soft-skill keyword found (cap +10)
//! 4. +5 per resume section heading found (cap +20)
//! 5. +10 when a job description is supplied and any of its keywords appear
//! 6. final score capped at 95

use std::collections::HashSet;
use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::models::assessment::Assessment;

pub const TECH_KEYWORDS: &[&str] = &[
    "javascript",
    "react",
    "node",
    "python",
    "java",
    "c++",
    "sql",
    "mongodb",
    "aws",
    "docker",
    "git",
    "html",
    "css",
    "typescript",
    "angular",
    "vue",
    "express",
    "flask",
    "django",
    "spring",
    "kubernetes",
    "linux",
    "rest api",
    "graphql",
];

pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "adaptability",
    "time management",
    "creativity",
    "collaboration",
    "agile",
    "scrum",
];

pub const SECTION_HEADINGS: &[&str] = &[
    "education",
    "experience",
    "projects",
    "skills",
    "summary",
    "profile",
    "contact",
];

const BASE_SCORE: u32 = 40;
const TECH_POINTS: u32 = 2;
const TECH_CAP: u32 = 30;
const SOFT_POINTS: u32 = 2;
const SOFT_CAP: u32 = 10;
const SECTION_POINTS: u32 = 5;
const SECTION_CAP: u32 = 20;
const JD_MATCH_BONUS: u32 = 10;
pub const MAX_SCORE: u32 = 95;

const MAX_JD_SUGGESTIONS: usize = 5;
const RANDOM_TECH_SUGGESTIONS: usize = 3;
const DEFAULT_SUGGESTIONS: &[&str] = &["Agile", "Testing", "Documentation"];

/// ASCII words of four or more characters; accented letters split words.
static JD_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b\w{4,}\b)").expect("static regex"));

/// Counts of what the resume text covers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMatches {
    pub tech: Vec<&'static str>,
    pub soft: Vec<&'static str>,
    pub sections: Vec<&'static str>,
}

impl KeywordMatches {
    pub fn find(lower_text: &str) -> Self {
        let found = |list: &[&'static str]| -> Vec<&'static str> {
            list.iter()
                .copied()
                .filter(|k| lower_text.contains(k))
                .collect()
        };
        Self {
            tech: found(TECH_KEYWORDS),
            soft: found(SOFT_SKILLS),
            sections: found(SECTION_HEADINGS),
        }
    }
}

/// Extracts unique job-description keywords in order of first appearance.
pub fn job_keywords(lower_jd: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    JD_WORD
        .find_iter(lower_jd)
        .map(|m| m.as_str())
        .filter(|w| seen.insert(*w))
        .map(String::from)
        .collect()
}

/// Pure score computation from match counts.
pub fn compute_score(matches: &KeywordMatches, jd_matched: bool) -> u32 {
    let mut score = BASE_SCORE;
    score += (matches.tech.len() as u32 * TECH_POINTS).min(TECH_CAP);
    score += (matches.soft.len() as u32 * SOFT_POINTS).min(SOFT_CAP);
    score += (matches.sections.len() as u32 * SECTION_POINTS).min(SECTION_CAP);
    if jd_matched {
        score += JD_MATCH_BONUS;
    }
    score.min(MAX_SCORE)
}

/// Builds a full assessment from resume text and an optional job description.
///
/// `rng` only picks which absent technical keywords to suggest when no job
/// description is supplied; the score itself is deterministic.
pub fn assess<R: Rng + ?Sized>(
    resume_text: &str,
    job_description: Option<&str>,
    rng: &mut R,
) -> Assessment {
    let lower_text = resume_text.to_lowercase();
    let lower_jd = job_description
        .map(str::trim)
        .filter(|jd| !jd.is_empty())
        .map(str::to_lowercase);

    let matches = KeywordMatches::find(&lower_text);

    let (jd_matched, mut missing): (bool, Vec<String>) = match &lower_jd {
        Some(jd) => {
            let keywords = job_keywords(jd);
            let matched = keywords.iter().any(|k| lower_text.contains(k.as_str()));
            let missing = keywords
                .into_iter()
                .filter(|k| !lower_text.contains(k.as_str()))
                .take(MAX_JD_SUGGESTIONS)
                .collect();
            (matched, missing)
        }
        None => {
            let absent: Vec<&str> = TECH_KEYWORDS
                .iter()
                .copied()
                .filter(|k| !lower_text.contains(k))
                .collect();
            let picked = absent
                .choose_multiple(rng, RANDOM_TECH_SUGGESTIONS)
                .map(|k| k.to_string())
                .collect();
            (false, picked)
        }
    };

    if missing.is_empty() {
        missing = DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
    }

    let score = compute_score(&matches, jd_matched);

    Assessment {
        score,
        summary: build_summary(&matches, lower_jd.is_some()),
        strengths: build_strengths(&matches),
        weaknesses: build_weaknesses(&matches),
        formatting_issues: vec![
            "Check font consistency".to_string(),
            "Ensure margins are standard".to_string(),
        ],
        improvement_plan: vec![
            "Add more quantifiable metrics (numbers/percentages)".to_string(),
            format!(
                "Consider adding these keywords: {}",
                missing.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
            ),
            "Proofread for minor typos".to_string(),
        ],
        missing_keywords: missing,
        warning: None,
    }
}

fn build_summary(matches: &KeywordMatches, has_jd: bool) -> String {
    format!(
        "Local Analysis: The resume contains {} technical skills and {} soft skills. \
         It appears to include {} standard sections. {}",
        matches.tech.len(),
        matches.soft.len(),
        matches.sections.len(),
        if has_jd {
            "Job description provided for context."
        } else {
            "No specific job description provided."
        }
    )
}

fn build_strengths(matches: &KeywordMatches) -> Vec<String> {
    let mut strengths: Vec<String> = matches
        .tech
        .iter()
        .take(3)
        .map(|k| format!("Proficient in {k}"))
        .collect();
    strengths.extend(matches.soft.iter().take(2).map(|k| format!("Demonstrates {k}")));
    strengths.push(if matches.sections.len() >= 4 {
        "Good structure with key sections".to_string()
    } else {
        "Clear layout".to_string()
    });
    strengths
}

fn build_weaknesses(matches: &KeywordMatches) -> Vec<String> {
    vec![
        if matches.sections.len() < 4 {
            "Missing some standard sections (e.g., Projects or Summary)".to_string()
        } else {
            "Could expand on project details".to_string()
        },
        if matches.tech.len() < 3 {
            "Limited technical skills listed".to_string()
        } else {
            "Could quantify achievements more".to_string()
        },
        "Formatting could be more consistent".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_job_keywords_use_ascii_word_boundaries() {
        assert_eq!(
            job_keywords("résumé python naïveté café-bar"),
            vec!["python".to_string()]
        );
        assert_eq!(
            job_keywords("rust rust backend_dev"),
            vec!["rust".to_string(), "backend_dev".to_string()]
        );
    }

    #[test]
    fn test_single_react_keyword_shows_in_strengths() {
        let a = assess("Built dashboards in React.", None, &mut rng());
        assert!(a
            .strengths
            .iter()
            .any(|s| s.to_lowercase().contains("react")));
        // base 40 + one tech keyword
        assert_eq!(a.score, 42);
    }

    #[test]
    fn test_empty_resume_scores_base() {
        let a = assess("", None, &mut rng());
        assert_eq!(a.score, BASE_SCORE);
        assert_eq!(a.strengths, vec!["Clear layout"]);
    }

    #[test]
    fn test_score_never_exceeds_cap() {
        let everything = [TECH_KEYWORDS, SOFT_SKILLS, SECTION_HEADINGS]
            .concat()
            .join(" ");
        let a = assess(&everything, Some(&everything), &mut rng());
        assert_eq!(a.score, MAX_SCORE);
    }

    #[test]
    fn test_score_monotonic_in_tech_keywords() {
        // Keywords that do not contain one another as substrings.
        let isolated = [
            "react", "python", "sql", "mongodb", "aws", "docker", "html", "typescript",
            "angular", "vue", "flask", "django", "kubernetes", "linux", "graphql",
            "spring", "git", "c++",
        ];
        let mut previous = 0;
        for n in 0..=isolated.len() {
            let text = isolated[..n].join(" ");
            let a = assess(&text, None, &mut rng());
            assert!(a.score >= previous, "score dropped at {n} keywords");
            assert_eq!(a.score, BASE_SCORE + (n as u32 * TECH_POINTS).min(TECH_CAP));
            previous = a.score;
        }
    }

    #[test]
    fn test_soft_and_section_caps() {
        let text = [SOFT_SKILLS, SECTION_HEADINGS].concat().join(" ");
        let a = assess(&text, None, &mut rng());
        assert_eq!(a.score, BASE_SCORE + SOFT_CAP + SECTION_CAP);
        assert!(a.strengths.contains(&"Good structure with key sections".to_string()));
    }

    #[test]
    fn test_job_description_bonus_requires_overlap() {
        let resume = "Experience in python";
        let with_overlap = assess(resume, Some("Looking for Python developers"), &mut rng());
        let without_overlap = assess(resume, Some("Seeking chef for baking"), &mut rng());
        assert_eq!(with_overlap.score, without_overlap.score + JD_MATCH_BONUS);
    }

    #[test]
    fn test_missing_keywords_come_from_job_description() {
        let a = assess(
            "python",
            Some("Need Python, Kafka, Terraform, Ansible, Prometheus, Grafana, Jenkins"),
            &mut rng(),
        );
        assert_eq!(
            a.missing_keywords,
            vec!["need", "kafka", "terraform", "ansible", "prometheus"]
        );
        assert!(a.summary.contains("Job description provided"));
    }

    #[test]
    fn test_missing_keywords_without_jd_are_absent_tech() {
        let a = assess("react developer", None, &mut rng());
        assert_eq!(a.missing_keywords.len(), 3);
        for k in &a.missing_keywords {
            assert!(TECH_KEYWORDS.contains(&k.as_str()));
            assert!(!"react developer".contains(k.as_str()));
        }
    }

    #[test]
    fn test_fully_covered_jd_falls_back_to_default_suggestions() {
        let a = assess("python django", Some("python django"), &mut rng());
        assert_eq!(a.missing_keywords, vec!["Agile", "Testing", "Documentation"]);
    }

    #[test]
    fn test_blank_job_description_is_treated_as_absent() {
        let a = assess("react", Some("   "), &mut rng());
        assert!(a.summary.contains("No specific job description"));
    }

    #[test]
    fn test_job_keywords_dedup_in_order() {
        assert_eq!(
            job_keywords("rust rust tokio is fast, tokio axum"),
            vec!["rust", "tokio", "fast", "axum"]
        );
    }

    #[test]
    fn test_weaknesses_reflect_coverage() {
        let a = assess("react", None, &mut rng());
        assert!(a.weaknesses[0].contains("Missing some standard sections"));
        assert_eq!(a.weaknesses[1], "Limited technical skills listed");
        assert_eq!(a.weaknesses.len(), 3);
    }
}
