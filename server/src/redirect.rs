use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};

/// Where a request for `host` should be sent instead, if anywhere.
///
/// `www.` hosts always collapse onto the bare domain. When a canonical host is
/// configured, any other host that is not the canonical one is sent there too;
/// local addresses are left alone so development keeps working.
pub fn canonical_location(host: &str, path_query: &str, canonical: Option<&str>) -> Option<String> {
    let bare = host.strip_prefix("www.");
    let target = match (bare, canonical) {
        (_, Some(canonical)) if host == canonical => return None,
        (_, Some(_)) if is_local(host) => return None,
        (_, Some(canonical)) => canonical,
        (Some(bare), None) => bare,
        (None, None) => return None,
    };
    Some(format!("https://{target}{path_query}"))
}

fn is_local(host: &str) -> bool {
    if host.starts_with("[::1]") {
        return true;
    }
    let name = host.split(':').next().unwrap_or(host);
    matches!(name, "localhost" | "127.0.0.1" | "0.0.0.0")
}

pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    let canonical = std::env::var("CANONICAL_HOST").ok().filter(|host| !host.is_empty());
    let host = req.headers().get(header::HOST).and_then(|host| host.to_str().ok());
    let path_query = req.uri().path_and_query().map_or("/", |pq| pq.as_str());

    if let Some(location) = host.and_then(|host| canonical_location(host, path_query, canonical.as_deref())) {
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(header::LOCATION, location)
            .body(Body::empty())
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(next.run(req).await)
}
