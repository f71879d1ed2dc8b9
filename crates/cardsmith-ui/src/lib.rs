//! Cardsmith UI Components
//!
//! Dioxus form widgets shared by the card editor.
//!
//! ## Design
//!
//! Light, print-friendly chrome so the card preview stays the focus:
//! - **Blue (#2563eb)**: primary actions, focus rings, active toggles
//! - **Slate (#64748b)**: labels and secondary text
//! - **Red (#ef4444)**: destructive actions (reset, remove image)
//!
//! Class names match the global stylesheet shipped by the desktop app.

pub mod components;

pub use components::*;
