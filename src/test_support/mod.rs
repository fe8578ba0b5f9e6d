//! Helpers for tests. Compiled into the library so integration tests can
//! share them; not intended for production call sites.

pub mod logging;
