use crate::model::api::PaginationDto;

/// Validated `page` and `limit` query values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page number.
    pub page: u64,
    pub limit: u64,
}

impl PageParams {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 20;
    pub const MAX_LIMIT: u64 = 100;

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// One page of results together with the total row count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub params: PageParams,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.params.limit)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            params: self.params,
        }
    }

    pub fn pagination_dto(&self) -> PaginationDto {
        let total_pages = self.total_pages();
        PaginationDto {
            current_page: self.params.page,
            total_pages,
            total_items: self.total,
            items_per_page: self.params.limit,
            has_next_page: self.params.page < total_pages,
            has_prev_page: self.params.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: u64, page: u64, limit: u64) -> Page<()> {
        Page {
            items: Vec::new(),
            total,
            params: PageParams { page, limit },
        }
    }

    #[test]
    fn computes_offset() {
        assert_eq!(PageParams { page: 1, limit: 20 }.offset(), 0);
        assert_eq!(PageParams { page: 3, limit: 10 }.offset(), 20);
    }

    #[test]
    fn rounds_total_pages_up() {
        assert_eq!(page(0, 1, 20).total_pages(), 0);
        assert_eq!(page(20, 1, 20).total_pages(), 1);
        assert_eq!(page(21, 1, 20).total_pages(), 2);
    }

    #[test]
    fn reports_neighbour_pages() {
        let first = page(45, 1, 20).pagination_dto();
        assert!(first.has_next_page);
        assert!(!first.has_prev_page);

        let last = page(45, 3, 20).pagination_dto();
        assert_eq!(last.total_pages, 3);
        assert!(!last.has_next_page);
        assert!(last.has_prev_page);
    }

    #[test]
    fn empty_result_has_no_next_page() {
        let dto = page(0, 1, 20).pagination_dto();

        assert_eq!(dto.total_pages, 0);
        assert!(!dto.has_next_page);
        assert!(!dto.has_prev_page);
    }
}
