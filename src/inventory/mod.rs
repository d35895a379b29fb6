mod entry;
mod scanner;

pub use entry::{FileEntry, Inventory};
pub use scanner::{scan, scan_with_observer};
