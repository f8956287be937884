use serde::Serialize;
use std::cmp::Ordering;
use std::ops::Range;
use tracing::trace;

/// Which edge the incoming page slides in from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Direction {
    Backward = -1,
    #[default]
    Forward = 1,
}

impl Direction {
    pub fn sign(self) -> i8 {
        self as i8
    }
}

/// Fixed-size windowing over a list of `len` items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    len: usize,
    current: usize,
    direction: Direction,
}

impl Paginator {
    pub fn new(page_size: usize, len: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            len,
            current: 0,
            direction: Direction::default(),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.len.div_ceil(self.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.total_pages()
    }

    /// Range of item indexes on the current page
    pub fn window(&self) -> Range<usize> {
        let start = (self.current * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);

        start..end
    }

    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let window = self.window();

        &items[window.start.min(items.len())..window.end.min(items.len())]
    }

    pub fn next_page(&mut self) -> bool {
        if self.is_last() {
            return false;
        }

        self.go_to_page(self.current + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        if self.is_first() {
            return false;
        }

        self.go_to_page(self.current - 1)
    }

    /// Moves to `page` if it exists, returning whether the page changed
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= self.total_pages() {
            trace!(page, total = self.total_pages(), "Ignoring out of range page");
            return false;
        }

        self.direction = match page.cmp(&self.current) {
            Ordering::Greater => Direction::Forward,
            Ordering::Less => Direction::Backward,
            Ordering::Equal => return false,
        };
        self.current = page;

        true
    }

    /// Starts over on the first page with a new item count and page size
    pub fn reset(&mut self, page_size: usize, len: usize) {
        *self = Self::new(page_size, len);
    }
}
