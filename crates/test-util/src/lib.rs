//! Assertion macros shared by the workspace's integration tests.

mod assert;

pub mod prelude {
    pub use crate::{assert_err, assert_none, assert_ok, assert_rejected};
}
