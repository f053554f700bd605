//! Browser plumbing kept out of the simulation

pub mod scheduler;

pub use scheduler::FrameScheduler;
