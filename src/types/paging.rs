pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Zero values are clamped to 1.
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).saturating_mul(i64::from(self.per_page))
    }

    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}

/// One page of results along with the unpaginated total.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total: i64,
    pub request: PageRequest,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    #[must_use]
    pub fn pages(&self) -> i64 {
        let per_page = self.request.limit();
        (self.total + per_page - 1) / per_page
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.request.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        i64::from(self.request.page) < self.pages()
    }

    #[must_use]
    pub fn prev_num(&self) -> Option<u32> {
        self.has_prev().then(|| self.request.page - 1)
    }

    #[must_use]
    pub fn next_num(&self) -> Option<u32> {
        self.has_next().then(|| self.request.page + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: i64, page: u32, per_page: u32) -> Page<()> {
        Page {
            total,
            request: PageRequest::new(page, per_page),
            items: Vec::new(),
        }
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 2).offset(), 4);
        assert_eq!(PageRequest::new(0, 0), PageRequest::new(1, 1));
        assert_eq!(PageRequest::new(u32::MAX, u32::MAX).offset(), i64::MAX);
    }

    #[test]
    fn test_first_of_several_pages() {
        let p = page(5, 1, 2);
        assert_eq!(p.pages(), 3);
        assert_eq!(p.prev_num(), None);
        assert_eq!(p.next_num(), Some(2));
    }

    #[test]
    fn test_last_page() {
        let p = page(5, 3, 2);
        assert_eq!(p.prev_num(), Some(2));
        assert_eq!(p.next_num(), None);
    }

    #[test]
    fn test_beyond_last_page() {
        let p = page(5, 9, 2);
        assert_eq!(p.next_num(), None);
        assert_eq!(p.prev_num(), Some(8));
    }

    #[test]
    fn test_empty_total() {
        let p = page(0, 1, 10);
        assert_eq!(p.pages(), 0);
        assert!(!p.has_next());
        assert!(!p.has_prev());
    }
}
