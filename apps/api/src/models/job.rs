use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    pub skills: Vec<&'static str>,
    pub posted: &'static str,
    pub remote: bool,
}
