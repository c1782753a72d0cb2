#[macro_use]
#[allow(unused_imports)]
extern crate log;

pub mod heap;
pub mod page;
pub mod page_store;
pub mod slotted_page;
pub mod testutil;
pub mod varint;

pub use heap::Heap;
pub use page::Page;
pub use page_store::PageStore;
