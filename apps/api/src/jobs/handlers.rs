//! Job search. Listings are a fixed sample until a job-board integration exists.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::job::JobPosting;

#[derive(Debug, Default, Deserialize)]
pub struct JobSearchQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobPosting>,
    pub total: usize,
}

/// GET /api/jobs/search?query=
///
/// The query is accepted for API compatibility but does not filter the sample listing.
pub async fn handle_search(Query(params): Query<JobSearchQuery>) -> Json<JobSearchResponse> {
    debug!(query = %params.query, "Job search");

    let jobs = sample_jobs();
    Json(JobSearchResponse {
        total: jobs.len(),
        jobs,
    })
}

fn sample_jobs() -> Vec<JobPosting> {
    vec![JobPosting {
        id: 1,
        title: "Machine Learning Engineer",
        company: "Tech Corp",
        location: "Remote",
        salary: "$120K - $180K",
        skills: vec!["Python", "TensorFlow", "ML"],
        posted: "2 days ago",
        remote: true,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_returns_sample_listing_regardless_of_query() {
        for query in ["", "rust", "nonexistent role"] {
            let Json(response) = handle_search(Query(JobSearchQuery {
                query: query.to_string(),
            }))
            .await;

            assert_eq!(response.total, 1);
            assert_eq!(response.jobs.len(), 1);
            assert_eq!(response.jobs[0].title, "Machine Learning Engineer");
            assert!(response.jobs[0].remote);
        }
    }
}
