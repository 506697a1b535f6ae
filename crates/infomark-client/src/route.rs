//! Request path construction

/// API version used by every InfoMark endpoint
pub const API_VERSION: &str = "v1";

/// Join path segments into an API route for the given version.
///
/// Produces `/api/{version}/{s1}/.../{sN}`. Segments are inserted verbatim:
/// nothing is escaped or normalized here, so callers pass identifiers and
/// literals only. URL encoding happens later, when the transport parses the
/// route against its connection target.
pub fn build_route<S: AsRef<str>>(segments: &[S], version: &str) -> String {
    let joined = segments
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect::<Vec<_>>()
        .join("/");
    format!("/api/{}/{}", version, joined)
}

/// Build a route against [`API_VERSION`]
pub fn route<S: AsRef<str>>(segments: &[S]) -> String {
    build_route(segments, API_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_segments() {
        assert_eq!(route(&["auth", "token"]), "/api/v1/auth/token");
        assert_eq!(
            route(&["account", "exams", "enrollments"]),
            "/api/v1/account/exams/enrollments"
        );
    }

    #[test]
    fn test_route_single_segment() {
        assert_eq!(route(&["ping"]), "/api/v1/ping");
    }

    #[test]
    fn test_route_no_segments() {
        let empty: [&str; 0] = [];
        assert_eq!(route(&empty), "/api/v1/");
    }

    #[test]
    fn test_route_owned_segments() {
        let course_id = 42;
        let segments = vec!["courses".to_string(), course_id.to_string(), "bids".to_string()];
        assert_eq!(route(&segments), "/api/v1/courses/42/bids");
    }

    #[test]
    fn test_route_custom_version() {
        assert_eq!(build_route(&["ping"], "v2"), "/api/v2/ping");
    }

    #[test]
    fn test_route_does_not_escape_segments() {
        assert_eq!(route(&["users", "find?q=a b"]), "/api/v1/users/find?q=a b");
    }

    #[test]
    fn test_route_separator_count() {
        for n in 0..6usize {
            let segments: Vec<String> = (0..n).map(|i| format!("s{}", i)).collect();
            let path = route(&segments);
            // "/api/v1/" contributes three separators, each further segment one more
            let expected = 3 + n.saturating_sub(1);
            assert_eq!(path.matches('/').count(), expected, "{} segments", n);
            assert!(!path.contains("//"));
        }
    }
}
