//! Page-level reactive state

pub mod menu;
