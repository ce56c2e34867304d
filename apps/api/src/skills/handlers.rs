use axum::Json;
use serde::Serialize;

use crate::models::skill::{Skill, SkillStatus};

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<Skill>,
}

/// GET /api/skills
pub async fn handle_list_skills() -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: skill_catalog(),
    })
}

fn skill_catalog() -> Vec<Skill> {
    vec![
        Skill {
            id: 1,
            name: "Python",
            category: "Programming",
            status: SkillStatus::Mastered,
        },
        Skill {
            id: 2,
            name: "Machine Learning",
            category: "AI/ML",
            status: SkillStatus::Learning,
        },
        Skill {
            id: 3,
            name: "React",
            category: "Frontend",
            status: SkillStatus::Pending,
        },
    ]
}
