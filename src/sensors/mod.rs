//! Signal acquisition.

pub mod edge_counter;
