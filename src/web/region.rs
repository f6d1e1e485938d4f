use axum::http::{HeaderMap, header};

/// Region named by the request, if any.
///
/// The SigV4 credential scope in `Authorization` wins over the `Host`
/// header. Signatures are never verified.
pub fn region_from_headers(headers: &HeaderMap) -> Option<String> {
    header_str(headers, header::AUTHORIZATION)
        .and_then(region_from_authorization)
        .or_else(|| header_str(headers, header::HOST).and_then(region_from_host))
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

// Credential=<access key>/<date>/<region>/<service>/aws4_request
fn region_from_authorization(value: &str) -> Option<String> {
    let credential = value
        .split([',', ' '])
        .find_map(|part| part.trim().strip_prefix("Credential="))?;

    credential
        .split('/')
        .nth(2)
        .filter(|region| !region.is_empty())
        .map(ToString::to_string)
}

fn region_from_host(value: &str) -> Option<String> {
    let host = value.split(':').next()?;
    let region = host
        .strip_prefix("servicecatalog.")?
        .strip_suffix(".amazonaws.com")?;

    (!region.is_empty() && !region.contains('.')).then(|| region.to_string())
}
