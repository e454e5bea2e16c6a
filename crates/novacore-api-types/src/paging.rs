use serde::{Deserialize, Serialize};

/// Envelope returned by every paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PagedResult<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page_number: 1,
            page_size: 0,
            total_pages: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_flags_follow_page_bounds() {
        let page: PagedResult<u8> = serde_json::from_str(
            r#"{"items":[1,2],"totalCount":12,"pageNumber":2,"pageSize":2,"totalPages":6}"#,
        )
        .expect("envelope");
        assert!(page.has_previous());
        assert!(page.has_next());

        let last = PagedResult::<u8> {
            page_number: 6,
            total_pages: 6,
            ..PagedResult::default()
        };
        assert!(!last.has_next());
    }
}
