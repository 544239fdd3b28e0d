//! Records and queries for the hosted table store.

#[cfg(feature = "ssr")]
pub mod postgrest;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
pub use postgrest::PostgrestStore;

/// Number of projects shown on the home page.
pub const FEATURED_PROJECTS: usize = 4;

/// Row key as the table hands it back: a serial number or a uuid/text key.
/// Only compared and displayed, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectListItem {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub detail_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestbookEntry {
    pub id: RecordId,
    pub author_name: String,
    pub message: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_email_public: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for the guestbook table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGuestbookEntry {
    pub author_name: String,
    pub message: String,
    pub organization: Option<String>,
    pub email: Option<String>,
    pub is_email_public: bool,
}

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreError {
    #[error("The remote store is not configured")]
    NotConfigured,
    #[error("Couldn't reach the remote store: {0}")]
    Transport(String),
    #[error("The remote store answered {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Couldn't read the remote store response: {0}")]
    Decode(String),
    /// A failure already described by the server.
    #[error("{0}")]
    Remote(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A PostgREST-style read: `select`, equality filters, one ordering, limit.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    table: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Direction)>,
    limit: Option<usize>,
}

impl ListQuery {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some((column.to_string(), direction));
        self
    }

    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Query-string pairs in the order PostgREST documents them.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(
            self.filters
                .iter()
                .map(|(column, value)| (column.clone(), format!("eq.{value}"))),
        );
        if let Some((column, direction)) = &self.order {
            let dir = match direction {
                Direction::Ascending => "asc",
                Direction::Descending => "desc",
            };
            params.push(("order".to_string(), format!("{column}.{dir}")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

/// Published projects by ascending `sort_order`.
pub fn projects_query(table: &str, limit: Option<usize>) -> ListQuery {
    ListQuery::new(table)
        .eq("is_published", true)
        .order("sort_order", Direction::Ascending)
        .limit(limit)
}

/// Every guestbook entry, newest first.
pub fn guestbook_query(table: &str) -> ListQuery {
    ListQuery::new(table).order("created_at", Direction::Descending)
}

/// The two tables the site reads and writes.
#[allow(async_fn_in_trait)]
pub trait RemoteStore {
    async fn list_projects(&self, limit: Option<usize>) -> Result<Vec<ProjectListItem>, StoreError>;

    async fn list_guestbook(&self) -> Result<Vec<GuestbookEntry>, StoreError>;

    async fn insert_guestbook(&self, entry: NewGuestbookEntry) -> Result<(), StoreError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_projects_query_params() {
        let query = projects_query("projects", Some(4));
        assert_eq!(query.table(), "projects");
        assert_eq!(
            query.params(),
            owned(&[
                ("select", "*"),
                ("is_published", "eq.true"),
                ("order", "sort_order.asc"),
                ("limit", "4"),
            ])
        );

        let unlimited = projects_query("projects", None);
        assert!(unlimited.params().iter().all(|(k, _)| k != "limit"));
    }

    #[test]
    fn test_guestbook_query_params() {
        let query = guestbook_query("guestbook");
        assert_eq!(
            query.params(),
            owned(&[("select", "*"), ("order", "created_at.desc")])
        );
    }

    #[test]
    fn test_project_decodes_with_missing_optionals() {
        let json = r#"{
            "id": 7,
            "title": "Site",
            "description": "A site",
            "tech_stack": ["Rust", "Leptos"],
            "detail_url": "https://example.com",
            "thumbnail_url": null,
            "is_published": true,
            "sort_order": 1
        }"#;
        let project: ProjectListItem = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, RecordId::Number(7));
        assert_eq!(project.tech_stack, vec!["Rust", "Leptos"]);
        assert_eq!(project.thumbnail_url, None);
    }

    #[test]
    fn test_text_keys_decode() {
        let json = r#"[{
            "id": "3f1c2b4e-9a7d-4c1e-8b2f-5d6e7a8b9c0d",
            "title": "Site",
            "description": "A site",
            "detail_url": "https://example.com"
        }]"#;
        let projects: Vec<ProjectListItem> = serde_json::from_str(json).unwrap();
        assert_eq!(
            projects[0].id,
            RecordId::Text("3f1c2b4e-9a7d-4c1e-8b2f-5d6e7a8b9c0d".to_string())
        );
        assert_eq!(projects[0].id.to_string(), "3f1c2b4e-9a7d-4c1e-8b2f-5d6e7a8b9c0d");

        let entry: GuestbookEntry = serde_json::from_str(
            r#"{"id": "a1", "author_name": "Mina", "message": "hi", "created_at": "2025-01-05T09:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(entry.id, RecordId::Text("a1".to_string()));
    }

    #[test]
    fn test_guestbook_entry_decodes_timestamp() {
        let json = r#"{
            "id": 1,
            "author_name": "Mina",
            "message": "hi",
            "organization": null,
            "email": "mina@example.com",
            "is_email_public": false,
            "created_at": "2025-01-05T09:30:00+00:00"
        }"#;
        let entry: GuestbookEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.created_at.to_rfc3339(), "2025-01-05T09:30:00+00:00");
        assert_eq!(entry.email.as_deref(), Some("mina@example.com"));
    }

    #[test]
    fn test_insert_payload_serializes_nulls() {
        let entry = NewGuestbookEntry {
            author_name: "Anonymous".to_string(),
            message: "hello".to_string(),
            organization: None,
            email: None,
            is_email_public: false,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value["organization"].is_null());
        assert!(value["email"].is_null());
        assert_eq!(value["author_name"], "Anonymous");
    }
}
