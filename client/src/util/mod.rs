//! Browser-independent helpers used by the `csr` entry point.

pub mod endpoint;
