//! HAL fqname parser and entry model.
//!
//! Turns a single fully-qualified HAL interface identifier into an [`Entry`]:
//!
//! ```text
//! android.hardware.foo@1.0::IFoo/default      (HIDL)
//! android.hardware.foo.IFoo/default (@2)      (AIDL, version marker dropped)
//! ```
pub mod ast;
pub mod parser;

pub use ast::{Entry, InterfaceRecord, ProtocolKind, VersionRecord};
pub use parser::{classify, parse_fqname, strip_versioned_suffix, ParseError};
