//! API documentation.

use axum::response::Html;

/// Stoplight API documentation.
pub async fn handler() -> Html<&'static str> {
    Html(
        r#"
<html lang="en">
<head>
    <title>Loop Mailer API</title>
    <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
    <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
</head>
<body>
    <main role="main">
        <elements-api apiDescriptionUrl="/api/v1/openapi.json" router="hash" />
    </main>
</body>
</html>
"#,
    )
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::infrastructure::http::{router, state::test_state};

    #[tokio::test]
    async fn test_docs_handler() -> TestResult {
        let response = TestServer::new(router(test_state(None, None)))?
            .get("/api/v1")
            .await;

        response.assert_status_ok();

        let raw_text = response.text();

        assert!(raw_text.contains("Loop Mailer API"));
        assert!(raw_text.contains("/api/v1/openapi.json"));

        Ok(())
    }

    #[tokio::test]
    async fn test_openapi_lists_form_endpoints() -> TestResult {
        let response = TestServer::new(router(test_state(None, None)))?
            .get("/api/v1/openapi.json")
            .await;

        response.assert_status_ok();

        let json = response.json::<serde_json::Value>();

        assert!(json["paths"]["/api/v1/contact"]["post"].is_object());
        assert!(json["paths"]["/api/v1/newsletter"]["post"].is_object());

        Ok(())
    }
}
