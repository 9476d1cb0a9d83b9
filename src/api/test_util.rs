use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::Response;
use serde::de::DeserializeOwned;

/// Splits an HTTP response into its status code and deserialized JSON body.
/// Panics and fails the test if the body can't be read or parsed.
pub async fn status_and_body<T: DeserializeOwned>(response: Response) -> (StatusCode, T) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read data from response body!");

    let parsed = serde_json::from_slice(&bytes).unwrap_or_else(|err| {
        panic!(
            "Could not parse body content into data structure! Error: {}, Received body: {:?}",
            err, bytes
        )
    });

    (status, parsed)
}
