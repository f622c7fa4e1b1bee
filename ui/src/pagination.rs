//! Offset pagination arithmetic for the history table.

use std::ops::RangeInclusive;

/// Number of wash records requested per page.
pub const PAGE_SIZE: u32 = 10;

/// A snapshot of the table's paging position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
    total_items: u64,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, total_items: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total_items,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// `ceil(total_items / page_size)`; zero when there is nothing to show.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// The current page, moved back onto the last page when the total no
    /// longer reaches it.  Page 1 when there are no records.
    pub fn clamped_page(&self) -> u32 {
        self.page.min(self.total_pages().max(1))
    }

    /// Controls are only useful with more than one page.
    pub fn shows_controls(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn page_numbers(&self) -> RangeInclusive<u32> {
        1..=self.total_pages()
    }

    /// 1-based position of the first record on this page.
    pub fn first_item(&self) -> u64 {
        if self.total_items == 0 {
            return 0;
        }
        let offset = u64::from(self.page - 1) * u64::from(self.page_size);
        (offset + 1).min(self.total_items)
    }

    /// 1-based position of the last record on this page.
    pub fn last_item(&self) -> u64 {
        (u64::from(self.page) * u64::from(self.page_size)).min(self.total_items)
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {}",
            self.first_item(),
            self.last_item(),
            self.total_items
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_items_means_no_pages() {
        let p = Pagination::new(1, PAGE_SIZE, 0);
        assert_eq!(p.total_pages(), 0);
        assert!(!p.shows_controls());
        assert!(p.page_numbers().is_empty());
    }

    #[test]
    fn single_page_hides_controls() {
        let p = Pagination::new(1, PAGE_SIZE, 10);
        assert_eq!(p.total_pages(), 1);
        assert!(!p.shows_controls());
    }

    #[test]
    fn first_page_of_twenty_five() {
        let p = Pagination::new(1, PAGE_SIZE, 25);
        assert_eq!(p.total_pages(), 3);
        assert!(p.shows_controls());
        assert!(!p.has_previous());
        assert!(p.has_next());
        assert_eq!(p.summary(), "Showing 1 to 10 of 25");
    }

    #[test]
    fn last_page_of_twenty_five() {
        let p = Pagination::new(3, PAGE_SIZE, 25);
        assert!(p.has_previous());
        assert!(!p.has_next());
        assert_eq!(p.summary(), "Showing 21 to 25 of 25");
        assert_eq!(p.page_numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pagination::new(1, 10, 11).total_pages(), 2);
        assert_eq!(Pagination::new(1, 10, 20).total_pages(), 2);
        assert_eq!(Pagination::new(1, 10, 21).total_pages(), 3);
    }

    #[test]
    fn page_zero_is_treated_as_first() {
        assert_eq!(Pagination::new(0, PAGE_SIZE, 25).page(), 1);
    }

    #[test]
    fn page_past_the_end_is_clamped_to_last_page() {
        assert_eq!(Pagination::new(3, 10, 12).clamped_page(), 2);
        assert_eq!(Pagination::new(3, 10, 0).clamped_page(), 1);
        assert_eq!(Pagination::new(2, 10, 25).clamped_page(), 2);
        assert_eq!(Pagination::new(3, 10, 25).clamped_page(), 3);
    }
}
