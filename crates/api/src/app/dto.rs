//! Request DTOs (responses serialize the domain records directly).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use campushub_core::PrincipalId;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct EventRequest {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub category: Option<String>,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectRequest {
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TeamRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub members: Vec<PrincipalId>,
}

#[derive(Debug, Deserialize)]
pub struct ClassGroupRequest {
    pub name: String,
    pub description: String,
    pub course_code: Option<String>,
    #[serde(default)]
    pub enrolled: Vec<PrincipalId>,
}
