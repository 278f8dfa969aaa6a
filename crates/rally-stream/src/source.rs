//! The pluggable fix source.

use crate::{LocationFix, StreamError};

/// Anything that can play the role of the device positioning watch.
///
/// Each pull yields either a fix or a positioning failure; `None` means the
/// stream is exhausted (a real watch never ends — finite sources exist for
/// replays and tests).  Swap implementations at compile time with no runtime
/// overhead, the same way the tracker is agnostic about who calls it.
pub trait FixSource {
    fn next_fix(&mut self) -> Option<Result<LocationFix, StreamError>>;
}
