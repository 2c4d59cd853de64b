use axum::{
    body::Body,
    extract::State,
    http::{
        Request, Response, StatusCode,
        header::{HeaderName, HeaderValue},
    },
    middleware::Next,
};

/// Minimum length for an admin password in production.
pub const MIN_ADMIN_SECRET_LEN: usize = 8;

/// Builds the Content-Security-Policy for the site.
///
/// The hydrated client talks to the REST API directly from the browser, so
/// the API origin has to be admitted by `connect-src` next to `'self'`.
pub fn content_security_policy(api_origin: Option<&str>) -> String {
    let connect_src = match api_origin {
        Some(origin) => format!("connect-src 'self' {origin}"),
        None => "connect-src 'self'".to_owned(),
    };
    [
        "default-src 'self'",
        "script-src 'self' 'wasm-unsafe-eval'",
        "style-src 'self' 'unsafe-inline'",
        "img-src 'self' data: https:",
        "font-src 'self' data:",
        &connect_src,
        "frame-ancestors 'none'",
        "base-uri 'self'",
        "form-action 'self'",
    ]
    .join("; ")
}

/// Header values computed once at startup and shared by every response.
#[derive(Clone)]
pub struct SecurityHeaders {
    csp: HeaderValue,
}

impl SecurityHeaders {
    pub fn new(api_origin: Option<&str>) -> Self {
        let csp = HeaderValue::from_str(&content_security_policy(api_origin))
            .unwrap_or_else(|_| HeaderValue::from_static("default-src 'self'"));
        Self { csp }
    }
}

pub async fn security_headers(
    State(policy): State<SecurityHeaders>,
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, StatusCode> {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(HeaderName::from_static("x-frame-options"), HeaderValue::from_static("DENY"));
    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        HeaderName::from_static("strict-transport-security"),
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    headers.insert(HeaderName::from_static("content-security-policy"), policy.csp);
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static("geolocation=(), microphone=(), camera=(), payment=(), usb=()"),
    );

    Ok(response)
}

/// Checks the environment a production deployment needs.
///
/// Outside production (`RUST_ENV` other than `production`) nothing is required.
pub fn validate_production_env<F>(lookup: F) -> Result<(), Vec<String>>
where
    F: Fn(&str) -> Option<String>,
{
    if lookup("RUST_ENV").as_deref() != Some("production") {
        return Ok(());
    }

    let mut errors: Vec<String> = ["PORTFOLIO_API_URL", "LEPTOS_SITE_ADDR"]
        .into_iter()
        .filter(|var| lookup(var).is_none_or(|value| value.trim().is_empty()))
        .map(|var| format!("Missing required environment variable: {var}"))
        .collect();

    if let Some(secret) = lookup("PORTFOLIO_ADMIN_PASSWORD")
        && !secret.is_empty()
        && secret.chars().count() < MIN_ADMIN_SECRET_LEN
    {
        errors.push(format!(
            "PORTFOLIO_ADMIN_PASSWORD is too weak (minimum {MIN_ADMIN_SECRET_LEN} characters required)"
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;
    use axum::{Router, middleware, routing::get};
    use tower::ServiceExt as _;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_csp_admits_api_origin() {
        let csp = content_security_policy(Some("https://api.example.dev"));
        assert!(csp.contains("connect-src 'self' https://api.example.dev"));
        assert!(csp.contains("script-src 'self' 'wasm-unsafe-eval'"));

        let csp = content_security_policy(None);
        assert!(csp.contains("connect-src 'self';"));
    }

    #[test]
    fn test_development_requires_nothing() {
        assert_eq!(validate_production_env(env(&[])), Ok(()));
        assert_eq!(validate_production_env(env(&[("RUST_ENV", "development")])), Ok(()));
    }

    #[test]
    fn test_production_requires_api_and_addr() {
        let result = validate_production_env(env(&[("RUST_ENV", "production"), ("PORTFOLIO_API_URL", " ")]));
        assert_matches!(result, Err(errors) if errors.len() == 2);

        let result = validate_production_env(env(&[
            ("RUST_ENV", "production"),
            ("PORTFOLIO_API_URL", "https://api.example.dev"),
            ("LEPTOS_SITE_ADDR", "0.0.0.0:3000"),
        ]));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_production_rejects_short_admin_secret() {
        let result = validate_production_env(env(&[
            ("RUST_ENV", "production"),
            ("PORTFOLIO_API_URL", "https://api.example.dev"),
            ("LEPTOS_SITE_ADDR", "0.0.0.0:3000"),
            ("PORTFOLIO_ADMIN_PASSWORD", "short"),
        ]));
        assert_matches!(result, Err(errors) if errors[0].contains("too weak"));
    }

    #[tokio::test]
    async fn test_headers_are_attached() {
        let policy = SecurityHeaders::new(Some("https://api.example.dev"));
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(policy, security_headers));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers["x-frame-options"], "DENY");
        assert!(
            headers["content-security-policy"]
                .to_str()
                .unwrap()
                .contains("https://api.example.dev")
        );
    }
}
