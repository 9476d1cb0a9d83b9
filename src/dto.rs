use utoipa::OpenApi;

mod todo;

pub use todo::*;

/// OpenAPI schema definitions shared across the API's endpoints
#[derive(OpenApi)]
#[openapi(components(
    schemas(NewTodo, UpdateTodo, TodoItem, InsertedTodo, InitResponse),
    responses(
        err_resps::BasicError400,
        err_resps::BasicError404,
        err_resps::BasicError500,
    )
))]
pub struct OpenApiSchemas;

/// Canned error responses reused across endpoint documentation
pub mod err_resps {
    use serde_json::json;
    use utoipa::ToResponse;

    #[derive(ToResponse)]
    #[response(
        description = "Invalid request body was passed",
        example = json!({
            "error_code": "invalid_input",
            "error_description": "Submitted data was invalid.",
            "extra_info": null
        })
    )]
    pub struct BasicError400 {
        pub error_code: String,
        pub error_description: String,
        pub extra_info: Option<String>,
    }

    #[derive(ToResponse)]
    #[response(
        description = "Entity could not be found",
        example = json!({
            "error_code": "not_found",
            "error_description": "The requested entity could not be found.",
            "extra_info": null
        })
    )]
    pub struct BasicError404 {
        pub error_code: String,
        pub error_description: String,
        pub extra_info: Option<String>,
    }

    #[derive(ToResponse)]
    #[response(
        description = "Something unexpected went wrong inside the server",
        example = json!({
            "error_code": "internal_error",
            "error_description": "Could not access data to complete your request.",
            "extra_info": null
        })
    )]
    pub struct BasicError500 {
        pub error_code: String,
        pub error_description: String,
        pub extra_info: Option<String>,
    }
}
