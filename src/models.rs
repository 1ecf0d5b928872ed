use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::Title;

/// A todo as the remote API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "todoName")]
    pub title: String,
    #[serde(rename = "isComplete", default)]
    pub is_complete: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Body of a create call. Only validated titles can be sent.
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    #[serde(rename = "todoName")]
    pub title: &'a str,
}

impl<'a> NewTodo<'a> {
    pub fn new(title: &'a Title) -> Self {
        Self {
            title: title.as_str(),
        }
    }
}

/// Partial update; absent fields are left out of the body.
#[derive(Debug, Default, Serialize)]
pub struct TodoPatch<'a> {
    #[serde(rename = "todoName", skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(rename = "isComplete", skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
}

impl<'a> TodoPatch<'a> {
    pub fn title(title: &'a Title) -> Self {
        Self {
            title: Some(title.as_str()),
            ..Self::default()
        }
    }

    pub fn completion(is_complete: bool) -> Self {
        Self {
            is_complete: Some(is_complete),
            ..Self::default()
        }
    }
}

/// Ordering of the list view, newest first unless asked otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    pub fn sort(self, todos: &mut [Todo]) {
        match self {
            SortOrder::Newest => todos.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => todos.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
    }
}
