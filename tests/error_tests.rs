// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use profile_form::error::AppError;

#[test]
fn test_status_mapping() {
    assert_eq!(
        AppError::NotFound("x".to_string()).status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::Store("x".to_string()).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        AppError::Template("x".to_string()).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_response_body_carries_message() {
    let response = AppError::Store("connection refused".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Store error: connection refused");
}
