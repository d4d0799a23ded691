//! CLI subcommand implementations.

pub(crate) mod estimate;
pub(crate) mod inspect;
pub(crate) mod validate;
