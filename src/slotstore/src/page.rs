use common::PAGE_SIZE;
use std::fmt;
use std::fmt::Write;
use std::ops::Deref;
use std::ops::DerefMut;

/// For debugging purposes only
const BYTES_PER_LINE: usize = 40;

/// A fixed-size in-memory page buffer. This must always occupy `PAGE_SIZE`
/// bytes at all times. The buffer carries no header of its own: a page's
/// identity lives in the page store that handed it out, and all layout
/// within the buffer is imposed by the slotted-page view interpreting it.
pub struct Page {
    /// For holding data/bytes. No other fields are allowed in this struct.
    pub(crate) data: [u8; PAGE_SIZE],
}

impl Page {
    /// Create a new zeroed page buffer.
    pub fn new() -> Self {
        Page {
            data: [0; PAGE_SIZE],
        }
    }

    /// Create a page from a byte array.
    pub fn from_bytes(data: [u8; PAGE_SIZE]) -> Self {
        Page { data }
    }

    /// Get a reference to the bytes of the page
    pub fn to_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.data
    }

    /// Get a mutable reference to the bytes of the page
    pub fn to_bytes_mut(&mut self) -> &mut [u8; PAGE_SIZE] {
        &mut self.data
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

/// The implementation to create a clone of a page
impl Clone for Page {
    fn clone(&self) -> Self {
        Page { data: self.data }
    }
}

impl Deref for Page {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for Page {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// A custom implementation of the Debug trait for the Page struct.
/// Formats the page bytes in a human-readable way, hiding runs of zeroed
/// lines. Use the {:?} format specifier to print the page debug data.
impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.to_bytes();
        let mut buffer = String::new();
        let len_bytes = p.len();

        let mut pos = 0;
        let mut empty_lines_count = 0;
        let comp = [0; BYTES_PER_LINE];
        //hide the empty lines
        while pos < len_bytes {
            let remaining = (len_bytes - pos).min(BYTES_PER_LINE);
            let pv = &p[pos..pos + remaining];
            if remaining == BYTES_PER_LINE && pv.eq(&comp) {
                empty_lines_count += 1;
                pos += BYTES_PER_LINE;
                continue;
            }
            if empty_lines_count != 0 {
                write!(&mut buffer, "{} ", empty_lines_count).unwrap();
                buffer += "empty lines were hidden\n";
                empty_lines_count = 0;
            }
            // for hex offset
            write!(&mut buffer, "[{:4}] ", pos).unwrap();
            for b in pv {
                match b {
                    0x00 => buffer += ".  ",
                    0xff => buffer += "## ",
                    _ => write!(&mut buffer, "{:02x} ", b).unwrap(),
                };
            }
            buffer += "\n";
            pos += BYTES_PER_LINE;
        }
        if empty_lines_count != 0 {
            write!(&mut buffer, "{} ", empty_lines_count).unwrap();
            buffer += "empty lines were hidden\n";
        }
        write!(f, "{}", buffer)
    }
}
