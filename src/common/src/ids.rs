use std::fmt;
use std::mem;

/// The Id type for a page. Ids are handed out densely by the page store,
/// starting at 0, and are never reused.
pub type PageId = u32;

/// The Id type for a value's slot within a page.
pub type SlotId = u16;

/// Data type to hold any byte offset or size that fits inside a page.
/// Note that you will need to cast Offset to usize if you want to use it
/// to index an array.
pub type Offset = u16;

pub const PAGE_ID_SIZE: usize = mem::size_of::<PageId>();
pub const SLOT_ID_SIZE: usize = mem::size_of::<SlotId>();

/// The packed byte form of an [`Address`].
pub type AddressBytes = [u8; PAGE_ID_SIZE + SLOT_ID_SIZE];

/// Holds the location of a stored value: the page it lives on and the slot
/// within that page. An address stays valid for as long as the value's
/// heap allocator is alive; slots are never renumbered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    pub page_id: PageId,
    pub slot_id: SlotId,
}

impl Address {
    pub fn new(page_id: PageId, slot_id: SlotId) -> Self {
        Address { page_id, slot_id }
    }

    /// Pack the address into its fixed 48-bit byte form.
    pub fn to_fixed_bytes(&self) -> AddressBytes {
        let mut bytes = [0; PAGE_ID_SIZE + SLOT_ID_SIZE];
        bytes[..PAGE_ID_SIZE].copy_from_slice(&self.page_id.to_le_bytes());
        bytes[PAGE_ID_SIZE..].copy_from_slice(&self.slot_id.to_le_bytes());
        bytes
    }

    /// Utility to convert the packed byte form back into an Address.
    pub fn from_fixed_bytes(bytes: &AddressBytes) -> Self {
        let page_id = PageId::from_le_bytes(bytes[..PAGE_ID_SIZE].try_into().unwrap());
        let slot_id = SlotId::from_le_bytes(bytes[PAGE_ID_SIZE..].try_into().unwrap());
        Address { page_id, slot_id }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<p_id:{},slot_id:{}>", self.page_id, self.slot_id)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, s:{})", self.page_id, self.slot_id)
    }
}
