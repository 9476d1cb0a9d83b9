use crate::domain;
use crate::domain::todo::{NewTodo, TodoItem, UpdateTodo};
use crate::external_connections::{ConnectionHandle, ExternalConnectivity};
use anyhow::{Context, Error};
use chrono::{DateTime, Utc};
use sqlx::{query, query_as};

/// Reads todos out of the todo_item table
pub struct DbTodoReader;

#[derive(sqlx::FromRow)]
struct TodoItemRow {
    id: i32,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl From<TodoItemRow> for TodoItem {
    fn from(value: TodoItemRow) -> Self {
        TodoItem {
            id: value.id,
            title: value.title,
            completed: value.completed,
            created_at: value.created_at,
        }
    }
}

impl domain::todo::driven_ports::TodoReader for DbTodoReader {
    async fn all_todos(
        &self,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<Vec<TodoItem>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let todo_rows: Vec<TodoItemRow> =
            query_as("SELECT id, title, completed, created_at FROM todo_item ORDER BY id")
                .fetch_all(cxn.borrow_connection())
                .await
                .context("trying to fetch the todo list")?;

        Ok(todo_rows.into_iter().map(TodoItem::from).collect())
    }
}

/// Writes todos into the todo_item table. Every write is a direct single-row
/// statement; concurrent edits to the same record resolve last-write-wins.
pub struct DbTodoWriter;

impl domain::todo::driven_ports::TodoWriter for DbTodoWriter {
    async fn create_todo(
        &self,
        new_todo: &NewTodo,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<i32, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let new_id: super::NewId = query_as("INSERT INTO todo_item(title) VALUES ($1) RETURNING id")
            .bind(&new_todo.title)
            .fetch_one(cxn.borrow_connection())
            .await
            .context("trying to insert a new todo into the database")?;

        Ok(new_id.id)
    }

    async fn update_todo(
        &self,
        todo_id: i32,
        update: &UpdateTodo,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<u64, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        // COALESCE keeps any field the caller left out of the patch
        let update_result = query(
            "UPDATE todo_item \
             SET title = COALESCE($1, title), completed = COALESCE($2, completed) \
             WHERE id = $3",
        )
        .bind(update.title.as_deref())
        .bind(update.completed)
        .bind(todo_id)
        .execute(cxn.borrow_connection())
        .await
        .context("trying to update a todo in the database")?;

        Ok(update_result.rows_affected())
    }

    async fn delete_todo(
        &self,
        todo_id: i32,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<u64, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let delete_result = query("DELETE FROM todo_item WHERE id = $1")
            .bind(todo_id)
            .execute(cxn.borrow_connection())
            .await
            .context("trying to remove a todo from the database")?;

        Ok(delete_result.rows_affected())
    }
}
