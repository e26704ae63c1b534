//! Adapters for the `SlashingStore` port.

pub mod codec;
pub mod file;
pub mod lock;
pub mod memory;
#[cfg(feature = "rocksdb")]
pub mod rocksdb;

pub use file::FileSlashingStore;
pub use lock::DirectoryLock;
pub use memory::InMemorySlashingStore;
#[cfg(feature = "rocksdb")]
pub use self::rocksdb::{RocksDbConfig, RocksDbSlashingStore};
