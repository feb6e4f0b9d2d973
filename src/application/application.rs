use compio::fs::{stdin, stdout};
use snafu::Snafu;
use snafu::prelude::*;
use tracing::info;

use crate::bridge::{Bridge, BridgeError};
use crate::namespace::Namespace;

pub struct Application;

impl Application {
    /// Builds an empty namespace and serves it over stdin/stdout until the
    /// parent process closes the stream.
    pub async fn run() -> Result<(), ApplicationError> {
        let namespace = Namespace::new();
        info!("Serving the namespace bridge on stdin/stdout");

        Bridge::new(stdin(), stdout(), namespace)
            .serve()
            .await
            .context(BridgeSnafu)?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while serving the bridge"))]
    BridgeError { source: BridgeError },
}
