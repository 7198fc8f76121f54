//! HTTP span helpers.

/// Collapse numeric path segments so spans for `/api/products/1` and
/// `/api/products/2` share a route name.
pub(super) fn route_name(method: &str, path: &str) -> String {
    let route = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    format!("{method} /{route}")
}
