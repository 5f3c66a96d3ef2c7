//! Classic disk scheduling over a fixed set of cylinder requests.
//!
//! Each algorithm takes the requests, the disk geometry and the starting head, and
//! returns the order the requests are serviced in plus the total head movement.

pub mod cli;
pub mod disk;
pub mod error;
pub mod movement;
pub mod report;
pub mod requests;
pub mod schedulers;
pub mod utils;

pub use disk::{Direction, DiskGeometry, Head};
pub use error::{ConfigError, DiskschedError, LoadError};
pub use movement::{compute_movement, find_split};
pub use requests::RequestSet;
pub use schedulers::{run_all, Algorithm, DiskScheduler, Schedule};
