use crate::domain;
use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// DTO for creating a new todo via the API
#[derive(Deserialize, Display, Validate, ToSchema)]
#[display("{title}")]
#[cfg_attr(test, derive(Serialize))]
pub struct NewTodo {
    #[validate(length(min = 1))]
    #[schema(example = "Water the plants")]
    pub title: String,
}

impl From<NewTodo> for domain::todo::NewTodo {
    fn from(value: NewTodo) -> Self {
        domain::todo::NewTodo { title: value.title }
    }
}

/// DTO for a todo record returned by the API
#[derive(Serialize, ToSchema)]
pub struct TodoItem {
    #[schema(example = 10)]
    pub id: i32,
    #[schema(example = "Water the plants")]
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<domain::todo::TodoItem> for TodoItem {
    fn from(value: domain::todo::TodoItem) -> Self {
        TodoItem {
            id: value.id,
            title: value.title,
            completed: value.completed,
            created_at: value.created_at,
        }
    }
}

/// DTO for partially updating a todo via the API. Fields left out of the
/// request body keep their stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[cfg_attr(test, derive(Serialize))]
pub struct UpdateTodo {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl From<UpdateTodo> for domain::todo::UpdateTodo {
    fn from(value: UpdateTodo) -> Self {
        domain::todo::UpdateTodo {
            title: value.title,
            completed: value.completed,
        }
    }
}

/// DTO for a newly created todo
#[derive(Serialize, ToSchema)]
pub struct InsertedTodo {
    #[schema(example = 5)]
    pub id: i32,
}

/// Fixed acknowledgement returned by the liveness endpoint
#[derive(Serialize, ToSchema)]
pub struct InitResponse {
    #[schema(example = "Server is up and running")]
    pub message: String,
}
