use std::{num::NonZeroUsize, ops::RangeInclusive};

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// In-memory pagination over a collection that was fetched in full.
///
/// Pages are 1-based. There is always at least one page, even when the
/// collection is empty.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    all: Vec<T>,
    page_size: NonZeroUsize,
    current_page: usize,
}

impl<T> Paginator<T> {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            all: Vec::new(),
            page_size,
            current_page: 1,
        }
    }

    /// Replaces the whole collection and clamps the current page to the new
    /// page range
    pub fn replace(&mut self, items: Vec<T>) {
        self.all = items;
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    /// Moves to page `page`. Returns false and leaves the state untouched
    /// when the page is out of range.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn visible(&self) -> &[T] {
        let size = self.page_size.get();
        let start = (self.current_page - 1) * size;
        if start >= self.all.len() {
            return &[];
        }
        let end = std::cmp::min(start.saturating_add(size), self.all.len());
        &self.all[start..end]
    }

    pub fn total_pages(&self) -> usize {
        self.all.len().div_ceil(self.page_size.get()).max(1)
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn items(&self) -> &[T] {
        &self.all
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn paginator(len: usize, page_size: usize) -> Paginator<usize> {
        let mut p = Paginator::new(NonZeroUsize::new(page_size).unwrap());
        p.replace((0..len).collect());
        p
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let p = paginator(0, 5);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.current_page(), 1);
        assert!(p.visible().is_empty());
        assert_eq!(p.page_numbers(), 1..=1);
    }

    #[test]
    fn seven_users_two_pages() {
        let mut p = paginator(7, 5);
        assert_eq!(p.total_pages(), 2);
        assert_eq!(p.visible(), &[0, 1, 2, 3, 4]);
        assert!(p.go_to(2));
        assert_eq!(p.visible(), &[5, 6]);
    }

    #[test]
    fn out_of_range_pages_are_noops() {
        let mut p = paginator(7, 5);
        assert!(!p.go_to(0));
        assert_eq!(p.current_page(), 1);
        assert!(p.go_to(2));
        assert!(!p.go_to(3));
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.visible(), &[5, 6]);
    }

    #[test]
    fn pages_concatenate_to_the_collection() {
        for page_size in 1..=7 {
            for len in 0..=23 {
                let mut p = paginator(len, page_size);
                let mut seen = Vec::new();
                for page in p.page_numbers() {
                    assert!(p.go_to(page));
                    assert!(p.visible().len() <= page_size);
                    seen.extend_from_slice(p.visible());
                }
                assert_eq!(seen, (0..len).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn huge_page_size_is_a_single_page() {
        let mut p = Paginator::new(NonZeroUsize::MAX);
        p.replace(vec![1, 2, 3]);
        assert_eq!(p.total_pages(), 1);
        assert_eq!(p.page_numbers(), 1..=1);
        assert_eq!(p.visible(), &[1, 2, 3]);
        assert!(p.go_to(1));
        assert!(!p.go_to(2));
    }

    #[test]
    fn replace_clamps_current_page() {
        let mut p = paginator(12, 5);
        assert!(p.go_to(3));
        p.replace((0..6).collect());
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.visible(), &[5]);

        p.replace(Vec::new());
        assert_eq!(p.current_page(), 1);
        assert!(p.visible().is_empty());
    }

    #[test]
    fn replace_keeps_page_in_range() {
        let mut p = paginator(12, 5);
        assert!(p.go_to(2));
        p.replace((100..115).collect());
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.visible(), &[105, 106, 107, 108, 109]);
    }

    #[test]
    fn default_page_size() {
        let p = Paginator::<u8>::default();
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
    }
}
