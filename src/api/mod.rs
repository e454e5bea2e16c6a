//! Typed endpoint groups on top of [`ApiClient`](crate::client::ApiClient).

pub mod cms;
pub mod dashboard;

pub use cms::CmsApi;
pub use dashboard::DashboardApi;

/// Percent-encode a user-supplied string for use as a single path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn active_filter(is_active: Option<bool>) -> Vec<(&'static str, String)> {
    is_active
        .map(|active| vec![("isActive", active.to_string())])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_escapes_reserved_characters() {
        assert_eq!(segment("main menu/fa"), "main%20menu%2Ffa");
        assert_eq!(segment("about-us"), "about-us");
    }
}
