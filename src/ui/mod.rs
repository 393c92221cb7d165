//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Frame drawing, split by screen area
//! - `theme.rs` - Light and dark color tables
//! - `layout.rs` - Row sequence, heights and scrolling
//! - `slot_row.rs` - Slot / interval row widget

mod draw;
pub mod layout;
pub mod slot_row;
pub mod theme;

// Re-export main draw function
pub use draw::draw;
