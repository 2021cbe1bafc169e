use aws_sdk_drs::error::DisplayErrorContext;
use thiserror::Error;

/// Failures talking to Elastic Disaster Recovery.
///
/// Every variant aborts the operation in progress; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// An SDK call failed (credentials, network or service error).
    #[error("{operation} failed: {message}")]
    Remote {
        operation: &'static str,
        message: String,
    },

    /// The launch configuration came back without a launch template.
    #[error("source server {server_id} has no EC2 launch template")]
    MissingLaunchTemplate { server_id: String },
}

impl Error {
    /// Wrap an SDK error, keeping its full source chain in the message.
    pub fn remote<E: std::error::Error>(operation: &'static str, err: E) -> Self {
        Error::Remote {
            operation,
            message: DisplayErrorContext(err).to_string(),
        }
    }
}
