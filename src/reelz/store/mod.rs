//! # Storage Layer
//!
//! Persistence is a plain key-value capability: string keys, string values. The
//! [`KeyValueStore`] trait is injected wherever something needs to persist, instead of
//! reaching for an ambient global.
//!
//! ## Implementations
//!
//! - [`fs::FsStore`]: Production storage
//!   - One file per key: `{root}/{key}.json`
//!   - Writes are atomic (temp file, then rename)
//!
//! - [`memory::MemStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.local/share/reelz/          # or $REELZ_HOME
//! ├── config.json               # Configuration
//! └── storage/                  # FsStore root
//!     └── movieFavorites.json   # Favorites collection (JSON array)
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for key-value persistence.
///
/// All methods take `&self`; implementations handle their own interior
/// mutability (or are stateless I/O).
pub trait KeyValueStore {
    /// Read the raw value for a key.
    /// Returns Ok(None) if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value for a key.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
