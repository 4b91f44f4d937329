//! Cross-cutting helpers shared by every view.

pub mod format;
pub mod platform;
pub mod theme;
