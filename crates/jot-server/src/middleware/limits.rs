//! Request body guard: byte, depth, and cost limits.
//!
//! Mutation bodies are validated before dispatch: an overall byte cap,
//! then a nesting-depth cap and a node-count cost cap over the parsed
//! JSON. Requests over any limit are rejected with `BadRequest` before a
//! handler runs. Non-JSON and empty bodies pass through untouched, as
//! does malformed JSON; the handler's own extractor reports that with
//! better context.

use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::Method;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Middleware that enforces the body limits from [`ServerConfig`].
///
/// [`ServerConfig`]: crate::config::ServerConfig
pub async fn guard_body(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !matches!(
        request.method(),
        &Method::POST | &Method::PUT | &Method::PATCH
    ) {
        return Ok(next.run(request).await);
    }

    let is_json = request
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start().starts_with("application/json"))
        .unwrap_or(false);
    if !is_json {
        return Ok(next.run(request).await);
    }

    let config = state.config();
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, config.max_body_bytes).await.map_err(|_| {
        ApiError::BadRequest(format!(
            "request body exceeds {} bytes",
            config.max_body_bytes
        ))
    })?;

    if !bytes.is_empty() {
        if let Ok(value) = serde_json::from_slice::<Value>(&bytes) {
            let depth = json_depth(&value);
            if depth > config.max_body_depth {
                return Err(ApiError::BadRequest(format!(
                    "request body depth {} exceeds maximum {}",
                    depth, config.max_body_depth
                )));
            }

            let cost = json_cost(&value);
            if cost > config.max_body_cost {
                return Err(ApiError::BadRequest(format!(
                    "request body cost {} exceeds maximum {}",
                    cost, config.max_body_cost
                )));
            }
        }
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

/// Nesting depth of a JSON value. Scalars are depth 1; each enclosing
/// array or object adds 1.
fn json_depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(json_depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(json_depth).max().unwrap_or(0),
        _ => 1,
    }
}

/// Node-count cost of a JSON value: every scalar, array, and object
/// counts 1.
fn json_cost(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(json_cost).sum::<usize>(),
        Value::Object(map) => 1 + map.values().map(json_cost).sum::<usize>(),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_depth_of_scalars_and_flat_objects() {
        assert_eq!(json_depth(&json!("hello")), 1);
        assert_eq!(json_depth(&json!({"content": "hello"})), 2);
        assert_eq!(json_depth(&json!({})), 1);
    }

    #[test]
    fn test_depth_of_nested_structures() {
        // depth 5: object > array > object > array > scalar
        let value = json!({"a": [{"b": [1]}]});
        assert_eq!(json_depth(&value), 5);

        let value = json!({"a": [{"b": [[1]]}]});
        assert_eq!(json_depth(&value), 6);
    }

    #[test]
    fn test_cost_counts_every_node() {
        assert_eq!(json_cost(&json!("x")), 1);
        // object + 2 scalars
        assert_eq!(json_cost(&json!({"a": 1, "b": 2})), 3);
        // object + array + 3 scalars
        assert_eq!(json_cost(&json!({"a": [1, 2, 3]})), 5);
    }

    #[test]
    fn test_wide_body_exceeds_default_cost() {
        let items: Vec<Value> = (0..2000).map(|i| json!(i)).collect();
        let value = Value::Array(items);
        assert!(json_cost(&value) > 1000);
    }

    #[test]
    fn test_typical_mutation_bodies_pass_defaults() {
        let bodies = [
            json!({"content": "a note"}),
            json!({"username": "ada", "email": "ada@example.com", "password": "hunter22"}),
        ];
        for body in &bodies {
            assert!(json_depth(body) <= 5);
            assert!(json_cost(body) <= 1000);
        }
    }
}
