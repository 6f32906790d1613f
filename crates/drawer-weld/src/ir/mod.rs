//! Intermediate Representation (IR) for the Drawer interface
//!
//! Method descriptors stand in for live reflection on the drawing library:
//! they are static data, either the built-in cairo `Context` table or a
//! JSON document supplied by the caller.

pub mod builtin;
pub mod interface;
pub mod method;

pub use builtin::*;
pub use interface::*;
pub use method::*;
