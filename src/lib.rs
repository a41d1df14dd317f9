//! A lightweight virtual file system (VFS) for Rust that lives entirely in memory.
//! Models directories and files as a tree of typed nodes addressed by path strings.
//! Ideal for testing, isolated sandboxing, deterministic fixtures, and more.
//!
//! ### Overview
//!
//! `treefs` allows you to work with filesystem-like structures in Rust without touching the actual disk.
//! It provides the `TreeFS` store, which resolves `/`-separated paths against an in-memory tree
//! and exposes the familiar operations: list, create, read, append.
//!
//! **Key ideas**:
//! - **Isolation**: All state lives in one owned value; nothing escapes to the host file system.
//! - **Determinism**: Directory listings always come back in lexicographic order.
//! - **Testability**: Build, inspect and throw away whole filesystems in unit tests without side effects.
//! - **Forgiving writes**: `mkdir` and `append` create missing parent directories on the fly.
//! - **Clarity**: Typed, catchable errors for every failure condition.

mod core;
mod vfs;

pub use crate::core::{FsError, Result};
pub use crate::vfs::{Children, Node, TreeFS};
