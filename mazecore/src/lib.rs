//! Perfect maze generation and solving.
//!
//! A [`Grid`](gameboard::Grid) of fully walled cells is carved into a spanning tree by the
//! [`RecursiveBacktracker`](algorithms::RecursiveBacktracker), then
//! [`solve`](algorithms::solve) walks it with a depth-first search from the entrance to the exit.
//! Both algorithms report their progress through observer traits, so the caller can animate them.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod gameboard;
