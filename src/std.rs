//! proxy file for when no_std support is enabled. Simply defines aliases for std modules so we don't need to
//! deal with different names elsewhere

pub mod collections {
    pub use hashbrown::HashMap;
}

pub mod fmt {
    pub use core::fmt::{Display, Formatter, Result};
}

pub mod vec {
    pub use alloc::vec::Vec;
}

pub mod string {
    pub use alloc::string::String;
}
