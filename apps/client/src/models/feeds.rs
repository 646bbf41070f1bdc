//! Recommendation-feed payloads — the shapes the remote matching service
//! returns for job listings, networking resources, and skill suggestions,
//! plus the cover-letter request/response pair.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub position: String,
    pub link: String,
    pub company_name: String,
    #[serde(default)]
    pub company_profile: Option<String>,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub posted_on: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkingItem {
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The three resource lists served by the networking endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkingResources {
    #[serde(default)]
    pub online_communities: Vec<NetworkingItem>,
    #[serde(default)]
    pub conferences: Vec<NetworkingItem>,
    #[serde(default)]
    pub mentorship: Vec<NetworkingItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverLetterRequest {
    pub user_id: Uuid,
    pub company_name: String,
    pub job_role: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_posting_tolerates_sparse_listing() {
        let job: JobPosting = serde_json::from_str(
            r#"{"id":"j1","position":"Backend Engineer","link":"https://jobs.example/j1",
                "company_name":"Acme"}"#,
        )
        .unwrap();
        assert_eq!(job.company_name, "Acme");
        assert!(job.location.is_none());
    }

    #[test]
    fn test_networking_resources_default_to_empty_lists() {
        let res: NetworkingResources = serde_json::from_str("{}").unwrap();
        assert!(res.online_communities.is_empty());
        assert!(res.conferences.is_empty());
        assert!(res.mentorship.is_empty());
    }
}
