use serde::Serialize;

/// Page count at or below which every page number is shown
const SHOW_ALL_THRESHOLD: usize = 7;
const SIBLINGS: usize = 1;

/// Entry of a rendered page range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// 1-indexed pagination over `total_items`. The page is always within `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total_items: usize,
    pub page_size: usize,
    pub page: usize,
}

impl Pagination {
    pub fn new(total_items: usize, page_size: usize, page: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size).max(1);
        Self {
            total_items,
            page_size,
            page: page.clamp(1, total_pages),
        }
    }

    /// Never less than one, even for an empty list
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// 0-based index of the first item on the page
    pub fn start(&self) -> usize {
        ((self.page - 1) * self.page_size).min(self.total_items)
    }

    /// 0-based exclusive end index
    pub fn end(&self) -> usize {
        (self.start() + self.page_size).min(self.total_items)
    }

    /// Page after a new page size, keeping the first visible item on screen
    pub fn with_page_size(&self, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self::new(self.total_items, page_size, self.start() / page_size + 1)
    }

    /// Page numbers with ellipses around the current page
    pub fn page_range(&self) -> Vec<PageItem> {
        let total = self.total_pages();
        if total <= SHOW_ALL_THRESHOLD {
            return (1..=total).map(PageItem::Page).collect();
        }

        let left = self.page.saturating_sub(SIBLINGS).max(1);
        let right = (self.page + SIBLINGS).min(total);
        let left_gap = left > 2;
        let right_gap = right + 1 < total;
        let edge_count = 3 + 2 * SIBLINGS;

        let mut items = Vec::with_capacity(SHOW_ALL_THRESHOLD);
        match (left_gap, right_gap) {
            (false, true) => {
                items.extend((1..=edge_count).map(PageItem::Page));
                items.push(PageItem::Ellipsis);
                items.push(PageItem::Page(total));
            }
            (true, false) => {
                items.push(PageItem::Page(1));
                items.push(PageItem::Ellipsis);
                items.extend((total + 1 - edge_count..=total).map(PageItem::Page));
            }
            _ => {
                items.push(PageItem::Page(1));
                items.push(PageItem::Ellipsis);
                items.extend((left..=right).map(PageItem::Page));
                items.push(PageItem::Ellipsis);
                items.push(PageItem::Page(total));
            }
        }
        items
    }

    /// "Mostrando 1-10 de 25 propuestas"
    pub fn results_label(&self, noun: &str) -> String {
        if self.total_items == 0 {
            return format!("No hay {noun}");
        }
        format!(
            "Mostrando {}-{} de {} {}",
            self.start() + 1,
            self.end(),
            self.total_items,
            noun
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_twenty_five_items() {
        let p = Pagination::new(25, 10, 1);
        assert_eq!(p.total_pages(), 3);
        assert!(!p.has_prev());
        assert!(p.has_next());
        assert_eq!(p.results_label("propuestas"), "Mostrando 1-10 de 25 propuestas");

        let last = Pagination::new(25, 10, 3);
        assert_eq!(last.end() - last.start(), 5);
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_is_clamped() {
        assert_eq!(Pagination::new(25, 10, 9).page, 3);
        assert_eq!(Pagination::new(25, 10, 0).page, 1);
        let empty = Pagination::new(0, 10, 4);
        assert_eq!(empty.total_pages(), 1);
        assert_eq!(empty.page, 1);
        assert_eq!((empty.start(), empty.end()), (0, 0));
    }

    #[test]
    fn test_labels_from_middle_pages() {
        assert_eq!(Pagination::new(45, 10, 3).results_label("proyectos"), "Mostrando 21-30 de 45 proyectos");
        assert_eq!(Pagination::new(45, 10, 5).results_label("proyectos"), "Mostrando 41-45 de 45 proyectos");
    }

    #[test]
    fn test_page_range() {
        assert_eq!(Pagination::new(50, 10, 2).page_range(), (1..=5).map(Page).collect::<Vec<_>>());
        assert_eq!(
            Pagination::new(100, 10, 1).page_range(),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            Pagination::new(100, 10, 5).page_range(),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            Pagination::new(100, 10, 10).page_range(),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_page_size_change_keeps_position() {
        let p = Pagination::new(100, 10, 3).with_page_size(20);
        assert_eq!(p.page, 2);
    }
}
