//! Library side of the annotation workbench CLI: logging setup and the
//! chained COG pipeline, exposed for the binary and the integration tests.

pub mod logging;
pub mod pipeline;
