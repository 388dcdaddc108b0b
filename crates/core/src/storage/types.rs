use super::PageError;

/// Number of rows a list query returns when the caller does not ask for more.
pub const DEFAULT_LIMIT: i64 = 100;

/// Upper bound on rows returned by a single list query. Requests asking for
/// more are capped here rather than rejected.
pub const MAX_LIMIT: i64 = 500;

/// A validated pagination window for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    /// Creates a page, validating that `skip >= 0` and `limit >= 1`.
    ///
    /// The limit is silently capped at [`MAX_LIMIT`].
    pub fn new(skip: i64, limit: i64) -> Result<Self, PageError> {
        if skip < 0 {
            return Err(PageError::InvalidSkip);
        }
        if limit < 1 {
            return Err(PageError::InvalidLimit);
        }
        Ok(Self {
            skip,
            limit: limit.min(MAX_LIMIT),
        })
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_page_construction() {
        let page = Page::new(10, 50).unwrap();

        assert_eq!(page.skip, 10);
        assert_eq!(page.limit, 50);
    }

    #[test]
    fn test_zero_skip_is_valid() {
        let page = Page::new(0, 1).unwrap();

        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 1);
    }

    #[test]
    fn test_negative_skip_returns_error() {
        let result = Page::new(-1, 100);

        assert_eq!(result, Err(PageError::InvalidSkip));
    }

    #[test]
    fn test_zero_limit_returns_error() {
        let result = Page::new(0, 0);

        assert_eq!(result, Err(PageError::InvalidLimit));
    }

    #[test]
    fn test_negative_limit_returns_error() {
        let result = Page::new(0, -5);

        assert_eq!(result, Err(PageError::InvalidLimit));
    }

    #[test]
    fn test_limit_is_capped_at_max() {
        let page = Page::new(0, 1000).unwrap();

        assert_eq!(page.limit, MAX_LIMIT);
    }

    #[test]
    fn test_limit_at_max_is_unchanged() {
        let page = Page::new(0, MAX_LIMIT).unwrap();

        assert_eq!(page.limit, MAX_LIMIT);
    }

    #[test]
    fn test_default_page() {
        let page = Page::default();

        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, DEFAULT_LIMIT);
    }
}
