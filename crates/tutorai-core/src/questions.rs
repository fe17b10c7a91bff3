//! Practice-question generation
//!
//! Questions are built from fixed templates selected by skill tag. A request
//! for `n` questions yields `n - 1` multiple-choice items (none when `n <= 1`)
//! followed by exactly one short-answer item, so the total is
//! `max(0, n - 1) + 1`.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Question generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionGenerationPayload {
    pub topic: String,

    /// Accepted for forward compatibility, not used by the templates
    #[serde(default = "default_difficulty")]
    pub difficulty: i64,

    pub skill_tag: String,

    #[serde(default = "default_num_questions")]
    pub num_questions: i64,

    /// Accepted for forward compatibility, not used by the templates
    #[serde(default = "default_grade_level")]
    pub grade_level: String,
}

fn default_difficulty() -> i64 {
    1
}

fn default_num_questions() -> i64 {
    3
}

fn default_grade_level() -> String {
    "6-8".to_string()
}

/// Question type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Multiple choice
    Mcq,
    /// Short free-text answer
    Short,
}

/// A single generated question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedQuestion {
    #[serde(rename = "type")]
    pub kind: QuestionKind,

    pub prompt: String,

    /// Answer choices, multiple choice only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    pub answer_key: String,

    /// Grading keywords, short answer only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rubric_keywords: Option<Vec<String>>,

    pub explanation: String,
}

impl GeneratedQuestion {
    fn multiple_choice(
        prompt: String,
        options: Vec<String>,
        answer_key: String,
        explanation: String,
    ) -> Self {
        Self {
            kind: QuestionKind::Mcq,
            prompt,
            options: Some(options),
            answer_key,
            rubric_keywords: None,
            explanation,
        }
    }

    fn short_answer(
        prompt: String,
        answer_key: String,
        rubric_keywords: Vec<String>,
        explanation: String,
    ) -> Self {
        Self {
            kind: QuestionKind::Short,
            prompt,
            options: None,
            answer_key,
            rubric_keywords: Some(rubric_keywords),
            explanation,
        }
    }
}

/// Generated question set.
///
/// `total_generated` is derived from `questions` at construction and cannot
/// be set independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionGenerationResult {
    questions: Vec<GeneratedQuestion>,
    topic: String,
    total_generated: usize,
}

impl QuestionGenerationResult {
    pub fn new(topic: impl Into<String>, questions: Vec<GeneratedQuestion>) -> Self {
        let total_generated = questions.len();
        Self {
            questions,
            topic: topic.into(),
            total_generated,
        }
    }

    pub fn questions(&self) -> &[GeneratedQuestion] {
        &self.questions
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn total_generated(&self) -> usize {
        self.total_generated
    }
}

/// Template family selected by a request's `skill_tag`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTag {
    Fractions,
    Algebra,
    /// Any tag without dedicated templates
    General,
}

impl From<&str> for SkillTag {
    fn from(tag: &str) -> Self {
        match tag {
            "fractions" => SkillTag::Fractions,
            "algebra" => SkillTag::Algebra,
            _ => SkillTag::General,
        }
    }
}

impl fmt::Display for SkillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillTag::Fractions => "fractions",
            SkillTag::Algebra => "algebra",
            SkillTag::General => "general",
        };
        f.write_str(name)
    }
}

impl SkillTag {
    /// Multiple-choice question for loop index `i`
    pub fn multiple_choice(self, i: i64, topic: &str) -> GeneratedQuestion {
        match self {
            SkillTag::Fractions => {
                let (a, b) = (i + 2, i + 3);
                let denominator = a * b;
                // 1/a + 1/b = (a+b)/ab, already in lowest terms for consecutive a, b
                let correct = format!("{}/{}", a + b, denominator);
                GeneratedQuestion::multiple_choice(
                    format!("What is the result of 1/{} + 1/{}?", a, b),
                    vec![
                        correct.clone(),
                        format!("{}/{}", a, b),
                        format!("2/{}", i + 5),
                        format!("1/{}", i + 1),
                    ],
                    correct,
                    format!(
                        "Use the common denominator {d}: 1/{a} = {b}/{d} and 1/{b} = {a}/{d}, so the sum is {n}/{d}.",
                        a = a,
                        b = b,
                        d = denominator,
                        n = a + b,
                    ),
                )
            }
            SkillTag::Algebra => {
                let (a, b) = (i + 2, i + 3);
                let rhs = a * 5 + b;
                GeneratedQuestion::multiple_choice(
                    format!("Solve for x: {}x + {} = {}", a, b, rhs),
                    vec![
                        "5".to_string(),
                        b.to_string(),
                        a.to_string(),
                        "10".to_string(),
                    ],
                    "5".to_string(),
                    format!(
                        "Subtract {} from both sides to get {}x = {}, then divide both sides by {} to get x = 5.",
                        b,
                        a,
                        a * 5,
                        a,
                    ),
                )
            }
            SkillTag::General => GeneratedQuestion::multiple_choice(
                format!("Which of the following best describes {}?", topic),
                ["Concept A", "Concept B", "Concept C", "Concept D"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                "Concept A".to_string(),
                format!("Concept A captures the central idea of {}.", topic),
            ),
        }
    }

    /// The closing short-answer question
    pub fn short_answer(self, topic: &str) -> GeneratedQuestion {
        match self {
            SkillTag::Fractions => GeneratedQuestion::short_answer(
                "Explain how to add two fractions with different denominators.".to_string(),
                "Find a common denominator, rewrite each fraction as an equivalent fraction, \
                 add the numerators, then simplify the result."
                    .to_string(),
                keywords(&[
                    "common denominator",
                    "equivalent fractions",
                    "add numerators",
                    "simplify",
                ]),
                "Fractions can only be added once they share a denominator.".to_string(),
            ),
            SkillTag::Algebra => GeneratedQuestion::short_answer(
                "Describe the steps you would use to solve a linear equation such as 3x + 4 = 19."
                    .to_string(),
                "Use inverse operations to isolate the variable, doing the same thing to both \
                 sides so the equation stays in balance."
                    .to_string(),
                keywords(&[
                    "isolate",
                    "variable",
                    "inverse operations",
                    "balance",
                    "both sides",
                ]),
                "Every step must keep both sides of the equation equal.".to_string(),
            ),
            SkillTag::General => {
                let topic_keyword = topic.to_lowercase();
                GeneratedQuestion::short_answer(
                    format!("Explain {} in your own words and give an example.", topic),
                    format!(
                        "A clear explanation of {} with its applications and examples.",
                        topic_keyword
                    ),
                    vec![
                        topic_keyword,
                        "explanation".to_string(),
                        "applications".to_string(),
                        "examples".to_string(),
                    ],
                    format!(
                        "A strong answer defines {} and shows where it is used.",
                        topic
                    ),
                )
            }
        }
    }
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Generate practice questions for a topic.
///
/// Produces `max(0, num_questions - 1)` multiple-choice questions and always
/// appends one short-answer question. `difficulty` and `grade_level` do not
/// affect the output.
pub fn generate_questions(payload: &QuestionGenerationPayload) -> QuestionGenerationResult {
    let skill = SkillTag::from(payload.skill_tag.as_str());
    let mcq_count = payload.num_questions.saturating_sub(1).max(0);

    debug!(
        %skill,
        requested = payload.num_questions,
        mcq_count,
        "Generating questions"
    );

    let mut questions: Vec<GeneratedQuestion> = (0..mcq_count)
        .map(|i| skill.multiple_choice(i, &payload.topic))
        .collect();
    questions.push(skill.short_answer(&payload.topic));

    QuestionGenerationResult::new(payload.topic.clone(), questions)
}
