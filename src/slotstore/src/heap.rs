//! Best-fit placement of byte payloads across slotted pages.
//!
//! The allocator never splits a slot, so the only placement question is
//! whether some page has enough room. A max-heap of free-space snapshots
//! answers that in O(log n), and the page written most recently is held
//! outside the queue as a hot cache to short-circuit runs of small
//! inserts.

use crate::page_store::PageStore;
use crate::slotted_page::{ByteAligned, DirAlignment, Mutable, SlottedPage, StaticCap};
use common::prelude::*;
use common::PAGE_SIZE;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// The concrete page shape the heap packs values into.
pub type HeapPage<'a> =
    SlottedPage<&'a mut [u8], u16, StaticCap<PAGE_SIZE>, ByteAligned<u16>, Mutable<u16>>;

/// The same shape over a shared borrow, for reading.
pub type HeapPageRef<'a> =
    SlottedPage<&'a [u8], u16, StaticCap<PAGE_SIZE>, ByteAligned<u16>, Mutable<u16>>;

/// Snapshot of a page's remaining room, taken when the page leaves the
/// hot cache. Only hot pages are ever written, so the snapshot stays
/// accurate for as long as the entry sits in the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FreeSpace {
    pub(crate) free: Offset,
    pub(crate) page_id: PageId,
}

/// Max-heap order: more free space first, ties broken toward the older
/// page so placement is deterministic and older pages fill first.
impl Ord for FreeSpace {
    fn cmp(&self, other: &Self) -> Ordering {
        self.free
            .cmp(&other.free)
            .then_with(|| other.page_id.cmp(&self.page_id))
    }
}

impl PartialOrd for FreeSpace {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Places caller-supplied byte payloads into page-backed slots, returning
/// stable addresses.
///
/// The heap exclusively borrows its page store: every page the store has
/// ever handed out is reachable through the hot cache or through exactly
/// one queue entry, never both and never neither.
pub struct Heap<'s> {
    store: &'s mut PageStore,
    by_free: BinaryHeap<FreeSpace>,
    hot: Option<PageId>,
    values: u64,
}

impl<'s> Heap<'s> {
    pub fn new(store: &'s mut PageStore) -> Self {
        Heap {
            store,
            by_free: BinaryHeap::new(),
            hot: None,
            values: 0,
        }
    }

    /// Largest payload a freshly initialised page can hold: the capacity
    /// minus the header and the first directory entry.
    pub fn max_value_bytes() -> usize {
        PAGE_SIZE - HeapPage::HEADER_BYTES - <ByteAligned<u16> as DirAlignment>::dir_bytes(1)
    }

    /// Place `bytes` into some page, returning its stable address.
    ///
    /// Grows the store by one page exactly when no known page has room. A
    /// failing push has no observable effect on the queue or the hot
    /// cache.
    pub fn push(&mut self, bytes: &[u8]) -> Result<Address, StoreError> {
        let size = bytes.len();
        if size > Self::max_value_bytes() {
            return Err(StoreError::PayloadTooLarge);
        }

        // Fast path: the page serviced most recently.
        if let Some(page_id) = self.hot {
            let mut page = HeapPage::open(self.store.get_mut(page_id).to_bytes_mut().as_mut_slice());
            if page.available() >= size {
                let slot = page.push(bytes);
                self.values += 1;
                trace!("hot page {} took slot {}", page_id, slot);
                return Ok(Address::new(page_id, slot as SlotId));
            }
        }

        // Re-enqueueing the hot descriptor must not fail once we start
        // moving state around.
        self.by_free.try_reserve(1)?;

        let reuse = match self.by_free.peek() {
            Some(top) if top.free as usize >= size => Some(top.page_id),
            _ => None,
        };
        let page_id = match reuse {
            Some(page_id) => {
                self.by_free.pop();
                debug!("placing {} bytes on queued page {}", size, page_id);
                page_id
            }
            None => {
                let (page_id, page) = self.store.allocate_page()?;
                HeapPage::init(page.to_bytes_mut().as_mut_slice(), PAGE_SIZE);
                debug!("grew heap to page {}", page_id);
                page_id
            }
        };
        self.flush_hot();

        let mut page = HeapPage::open(self.store.get_mut(page_id).to_bytes_mut().as_mut_slice());
        let slot = page.push(bytes);
        self.hot = Some(page_id);
        self.values += 1;
        Ok(Address::new(page_id, slot as SlotId))
    }

    /// The exact bytes previously pushed at `addr`.
    pub fn get(&self, addr: Address) -> &[u8] {
        let data = self.store.get(addr.page_id).to_bytes().as_slice();
        let (start, end) = HeapPageRef::open(data).extent(addr.slot_id as usize);
        &data[HeapPageRef::HEADER_BYTES + start..HeapPageRef::HEADER_BYTES + end]
    }

    /// Number of values pushed so far.
    pub fn len(&self) -> u64 {
        self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values == 0
    }

    /// Read-only view of the underlying page store.
    pub fn store(&self) -> &PageStore {
        self.store
    }

    /// Move the hot page's descriptor back into the queue.
    fn flush_hot(&mut self) {
        if let Some(page_id) = self.hot.take() {
            let free =
                HeapPageRef::open(self.store.get(page_id).to_bytes().as_slice()).available();
            self.by_free.push(FreeSpace {
                free: free as Offset,
                page_id,
            });
        }
    }

    /// Known page ids split into the hot cache and the queued set; the
    /// invariant checks in the tests look at both sides.
    #[cfg(test)]
    pub(crate) fn debug_state(&self) -> (Option<PageId>, Vec<PageId>) {
        let queued = self.by_free.iter().map(|fs| fs.page_id).collect();
        (self.hot, queued)
    }
}
