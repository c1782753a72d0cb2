#[macro_use]
#[allow(unused_imports)]
extern crate serde;
#[macro_use]
#[allow(unused_imports)]
extern crate log;

pub mod error;
pub mod ids;
pub mod util;
pub use util::common_test_util as testutil;

/// Page size in bytes
pub const PAGE_SIZE: usize = 65536;

pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::{Address, Offset, PageId, SlotId};
}

pub use crate::error::StoreError;
