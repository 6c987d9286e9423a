// FHRSView - core/pager.rs
//
// Windowed browsing over the sorted, de-duplicated business-name list.
// The cursor is explicit state owned by the caller for the duration of one
// browsing session; nothing here is global.

use crate::core::model::Record;
use crate::util::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Collect every business name, sorted case-sensitively and de-duplicated.
///
/// Adjacent-equality de-duplication is exact here because the sort puts
/// identical names next to each other.
pub fn unique_business_names<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut names: Vec<String> = records
        .into_iter()
        .map(|r| r.business_name().to_string())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Cursor over a name list that wraps at both ends.
///
/// Each step returns `(index, name)` pairs for exactly the entries traversed.
#[derive(Debug, Clone)]
pub struct Pager {
    names: Vec<String>,
    cursor: usize,
    page_size: usize,
}

impl Pager {
    /// Create a pager positioned at index 0. A zero `page_size` is treated
    /// as the default; larger values are capped at `MAX_PAGE_SIZE`.
    pub fn new(names: Vec<String>, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size.min(MAX_PAGE_SIZE)
        };
        Self {
            names,
            cursor: 0,
            page_size,
        }
    }

    /// Build a pager over the unique business names of `records`.
    pub fn from_records<'a, I>(records: I, page_size: usize) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        Self::new(unique_business_names(records), page_size)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Step forward one page.
    ///
    /// Emits `cursor..cursor + n` and leaves the cursor just past the window.
    /// If that window would reach or pass the end of the list, the cursor
    /// first wraps to 0, so a final partial page is never shown by this step.
    pub fn next(&mut self) -> Vec<(usize, &str)> {
        let len = self.names.len();
        if len == 0 {
            return Vec::new();
        }
        let mut end = self.cursor.saturating_add(self.page_size);
        if end >= len {
            self.cursor = 0;
            end = self.page_size;
        }
        let end = end.min(len);
        let start = self.cursor;
        self.cursor = end;
        self.window(start..end)
    }

    /// Step back one page.
    ///
    /// Emits up to `n` entries in descending index order starting at the
    /// cursor. If stepping back would go below index 0 the cursor first wraps
    /// to the last entry.
    pub fn previous(&mut self) -> Vec<(usize, &str)> {
        let len = self.names.len();
        if len == 0 {
            return Vec::new();
        }
        let start = if self.cursor < self.page_size {
            len - 1
        } else {
            self.cursor.min(len - 1)
        };
        let stop = (start + 1).saturating_sub(self.page_size);
        self.cursor = start.saturating_sub(self.page_size);
        let mut entries = self.window(stop..start + 1);
        entries.reverse();
        entries
    }

    /// Every entry, cursor unaffected.
    pub fn all(&self) -> Vec<(usize, &str)> {
        self.window(0..self.names.len())
    }

    fn window(&self, range: std::ops::Range<usize>) -> Vec<(usize, &str)> {
        range.map(|i| (i, self.names[i].as_str())).collect()
    }
}
