use serde::Serialize;

/// Where the user stands on a skill in their roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    Mastered,
    Learning,
    Pending,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub status: SkillStatus,
}
