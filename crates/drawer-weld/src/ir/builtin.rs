//! Built-in descriptor table for cairocffi's `Context`
//!
//! The table is checked in as JSON so generation never needs a Python
//! interpreter. Entries follow `inspect.getmembers` order (sorted by name)
//! and carry the raw `__doc__` text. `data/dump_cairo_context.py`
//! regenerates the file from an installed cairocffi.

use crate::error::WeldResult;
use crate::ir::DrawerInterface;

/// Raw descriptor document for `cairocffi.Context`
pub const CAIRO_CONTEXT_JSON: &str = include_str!("../../data/cairo_context.json");

/// The `Drawer` interface built from the cairo `Context` methods
pub fn cairo_context() -> WeldResult<DrawerInterface> {
    DrawerInterface::from_json(CAIRO_CONTEXT_JSON)
}
