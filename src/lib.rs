//! Linear-time timestamp association for paired sensor recordings.
//!
//! Matches each record of one time-ordered sequence (e.g. camera images)
//! to the closest-in-time record of another (e.g. depth images), subject
//! to a maximum allowed gap.
//!
//! ```rust
//! use framesync::{TimestampedRecord, associate};
//!
//! let rgb = vec![
//!     TimestampedRecord::new(0.000, "rgb/0.png"),
//!     TimestampedRecord::new(0.033, "rgb/1.png"),
//! ];
//! let depth = vec![
//!     TimestampedRecord::new(0.001, "depth/0.png"),
//!     TimestampedRecord::new(0.040, "depth/1.png"),
//! ];
//!
//! let matches = associate(&rgb, &depth, 0.02);
//! assert_eq!(matches.len(), 2);
//! ```

pub mod associate;
pub mod error;
pub mod io;
pub mod types;

pub use associate::{DEFAULT_TOLERANCE, associate, associate_with_config};
pub use error::{FramesyncError, Result};
pub use io::{read_record_file, write_associations};
pub use types::{Association, MatchConfig, TimestampedRecord};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{DEFAULT_TOLERANCE, associate, associate_with_config};
    pub use crate::{Association, MatchConfig, TimestampedRecord};
    pub use crate::{FramesyncError, Result};
    pub use crate::{read_record_file, write_associations};
}
