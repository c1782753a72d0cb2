use crate::page::Page;
use common::prelude::*;

/// Owns the dense, append-only collection of page buffers.
///
/// Ids are assigned densely starting at 0 and never reused. Each buffer is
/// boxed so its address stays pinned while the bookkeeping vector grows;
/// pages live until the store is dropped.
pub struct PageStore {
    pages: Vec<Box<Page>>,
}

impl PageStore {
    pub fn new() -> Self {
        PageStore { pages: Vec::new() }
    }

    /// Append a freshly zeroed page buffer, returning its id (the previous
    /// page count) and the buffer itself.
    pub fn allocate_page(&mut self) -> Result<(PageId, &mut Page), StoreError> {
        debug_assert!(self.pages.len() < PageId::MAX as usize);
        self.pages.try_reserve(1)?;
        let page_id = self.pages.len() as PageId;
        self.pages.push(Box::new(Page::new()));
        trace!("allocated page {}", page_id);
        Ok((page_id, self.pages[page_id as usize].as_mut()))
    }

    /// Constant-time lookup of a page buffer.
    pub fn get(&self, page_id: PageId) -> &Page {
        &self.pages[page_id as usize]
    }

    /// Constant-time mutable lookup of a page buffer.
    pub fn get_mut(&mut self, page_id: PageId) -> &mut Page {
        &mut self.pages[page_id as usize]
    }

    /// Number of pages allocated so far.
    pub fn num_pages(&self) -> PageId {
        self.pages.len() as PageId
    }
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new()
    }
}
