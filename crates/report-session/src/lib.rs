//! Editing session for one report
//!
//! `ReportSession` owns the live document and is the single entry point
//! for changes. Every accepted change is pushed to the registered
//! observers, persistence being one of them.
//!
//! Also here: snapshot stores, TOML configuration, the optional text
//! assistant, the controlled text binding used by editors, and the user
//! notices emitted by imports and exports.

pub mod assist;
pub mod binding;
pub mod config;
pub mod error;
pub mod guard;
pub mod notice;
pub mod observer;
pub mod session;
pub mod store;

pub use assist::{AssistClient, AssistConfig, AssistError, Assistant};
pub use binding::TextBinding;
pub use config::{ReportConfig, StorageConfig, DEFAULT_STORAGE_KEY};
pub use error::{SessionError, StoreError};
pub use guard::{ExportGuard, ExportSlot};
pub use notice::{Notice, NoticeKind};
pub use observer::{PersistObserver, SnapshotObserver};
pub use session::{ExportJob, ReportSession};
pub use store::{FileStore, MemoryStore, SnapshotStore};
