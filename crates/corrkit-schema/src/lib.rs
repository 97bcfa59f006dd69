//! Message schemas for bit-packed correction frames.
//!
//! A schema declares the ordered field layout of one message type,
//! selected by the 12-bit message number inside each frame payload.
//! Schemas are plain configuration data: an ordered header field list,
//! an ordered content field list, and a declared content-block size.
//!
//! Field type tags (`uint12`, `bit3`, `int20`) are resolved into
//! `(width, signedness)` pairs once, at registration. A tag that does
//! not resolve is a configuration bug and fails loudly here, never at
//! decode time.

pub mod builtin;
pub mod config;
pub mod error;
pub mod field;
pub mod registry;

pub use builtin::{MSG_2004, MSG_2104};
pub use config::RegistryConfig;
pub use error::{Result, SchemaError};
pub use field::{FieldDescriptor, FieldType};
pub use registry::{Schema, SchemaRegistry};

/// Message numbers are carried in a 12-bit field.
pub const MAX_MSG_NUMBER: u16 = 4095;
