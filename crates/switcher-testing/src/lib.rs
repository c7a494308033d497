//! Testing utilities and harness for Switcher

pub mod assertions;
pub mod rule;

pub use assertions::*;
pub use rule::*;

/// Installs an `env_logger` for tests; honours `RUST_LOG`. Safe to call repeatedly.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    pub use crate::assertions;
    pub use crate::init_test_logging;
    pub use crate::rule::*;
}
