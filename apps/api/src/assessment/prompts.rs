// Assessment LLM prompt templates.
// The evaluator parses the `Feedback:` / `Skill Score:` lines this template asks for,
// so the two output markers must stay in sync with `evaluator.rs`.

pub const ANSWER_EVALUATION_PROMPT: &str = r#"You are an experienced technical interviewer assessing a candidate's answer.

CANDIDATE ANSWER:
{answer}

TASKS:
1. Give a two-line evaluation of the answer's technical depth, clarity and relevance.
2. Assign a skill score from 0 to 10.

Respond in exactly this format:
Feedback: <two-line evaluation>
Skill Score: <number from 0 to 10>"#;

/// Embeds the candidate's answer verbatim into the evaluation template.
pub fn build_evaluation_prompt(answer: &str) -> String {
    ANSWER_EVALUATION_PROMPT.replace("{answer}", answer)
}
