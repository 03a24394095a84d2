//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod routes;

pub(crate) use build::BuildArgs;
pub(crate) use routes::RoutesArgs;
