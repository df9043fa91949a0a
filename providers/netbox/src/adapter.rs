//! JSON-lines host adapter.
//!
//! Binds the [`Provider`] lifecycle to a line-oriented transport: one JSON
//! request per input line, one JSON response per output line. A malformed
//! line yields a `protocol` error response and the loop carries on.
//!
//! ```text
//! {"op":"create","resource":"netbox_ipam_aggregate","state":{"attributes":{"prefix":"10.0.0.0/8","rir_id":1}}}
//! {"ok":true,"state":{"id":"1","attributes":{"prefix":"10.0.0.0/8","rir_id":1}}}
//! ```

use crate::error::ProviderError;
use crate::provider::Provider;
use crate::resource_data::ResourceData;
use crate::schema::Schema;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// One lifecycle request from the host
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// List registered resource types
    Resources,
    /// Fetch a resource schema
    Schema {
        /// Resource type
        resource: String,
    },
    /// Create a resource
    Create {
        /// Resource type
        resource: String,
        /// Declared state
        state: ResourceData,
    },
    /// Refresh a resource
    Read {
        /// Resource type
        resource: String,
        /// Last known state
        state: ResourceData,
    },
    /// Update a resource in place
    Update {
        /// Resource type
        resource: String,
        /// Declared state including the ID
        state: ResourceData,
    },
    /// Delete a resource
    Delete {
        /// Resource type
        resource: String,
        /// Last known state
        state: ResourceData,
    },
    /// Adopt an existing object by ID
    Import {
        /// Resource type
        resource: String,
        /// NetBox ID
        id: String,
    },
}

/// Error body of a failed response
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Machine-readable classification
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

/// One response to the host
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Response {
    /// Lifecycle call succeeded and produced a state
    State {
        /// Always true
        ok: bool,
        /// Resulting state
        state: ResourceData,
    },
    /// Schema lookup succeeded
    Schema {
        /// Always true
        ok: bool,
        /// Resource schema
        schema: serde_json::Value,
    },
    /// Resource type listing
    Resources {
        /// Always true
        ok: bool,
        /// Registered resource types
        resources: Vec<String>,
    },
    /// The call failed
    Error {
        /// Always false
        ok: bool,
        /// What went wrong
        error: ErrorBody,
    },
}

impl Response {
    fn state(state: ResourceData) -> Self {
        Response::State { ok: true, state }
    }

    fn schema(schema: &Schema) -> Self {
        match serde_json::to_value(schema) {
            Ok(schema) => Response::Schema { ok: true, schema },
            Err(e) => Self::protocol_error(format!("failed to encode schema: {}", e)),
        }
    }

    fn error(err: &ProviderError) -> Self {
        Response::Error {
            ok: false,
            error: ErrorBody {
                kind: err.kind().to_string(),
                message: err.to_string(),
            },
        }
    }

    fn protocol_error(message: String) -> Self {
        Response::Error {
            ok: false,
            error: ErrorBody {
                kind: "protocol".to_string(),
                message,
            },
        }
    }
}

/// Run one request against the provider
pub async fn handle_request(provider: &Provider, request: Request) -> Response {
    let result = match request {
        Request::Resources => {
            let resources = provider.resource_types().into_iter().map(String::from).collect();
            return Response::Resources { ok: true, resources };
        }
        Request::Schema { resource } => {
            return match provider.schema(&resource) {
                Ok(schema) => Response::schema(&schema),
                Err(e) => Response::error(&e),
            };
        }
        Request::Create { resource, mut state } => {
            provider.create(&resource, &mut state).await.map(|()| state)
        }
        Request::Read { resource, mut state } => {
            provider.read(&resource, &mut state).await.map(|()| state)
        }
        Request::Update { resource, mut state } => {
            provider.update(&resource, &mut state).await.map(|()| state)
        }
        Request::Delete { resource, mut state } => {
            provider.delete(&resource, &mut state).await.map(|()| state)
        }
        Request::Import { resource, id } => provider.import(&resource, &id).await,
    };

    match result {
        Ok(state) => Response::state(state),
        Err(e) => {
            warn!("Lifecycle call failed: {}", e);
            Response::error(&e)
        }
    }
}

/// Decode one line and run it
pub async fn handle_line(provider: &Provider, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            debug!("Handling request: {:?}", request);
            handle_request(provider, request).await
        }
        Err(e) => Response::protocol_error(format!("malformed request: {}", e)),
    }
}

/// Serve requests until the input reaches end of file
pub async fn serve<R, W>(provider: &Provider, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(provider, &line).await;
        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');
        output.write_all(encoded.as_bytes()).await?;
        output.flush().await?;
    }

    debug!("Input closed, stopping adapter");
    Ok(())
}
