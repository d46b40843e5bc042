//! # Parsing
//!
//! - **`first_pass`**: reference extraction, tab expansion, line-ending
//!   normalisation
//! - **`reference`**: the `[id]: url "title"` micro-grammar and the table
//!   it fills
//! - **`tabs`**: column-aware tab expansion
//! - **`blocks`**: the block-level collaborator
//! - **`inline`**: the span-level collaborator and its dispatch table
//! - **`chars`**: byte classes shared by the above

pub mod blocks;
pub mod chars;
pub mod first_pass;
pub mod inline;
pub mod reference;
pub mod tabs;
