pub mod disk;
pub mod memory;

pub use disk::FjallStore;
pub use memory::MemoryStore;
