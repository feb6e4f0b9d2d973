use compio::io::{AsyncRead, AsyncWrite};
use serde_json::{Value, json};
use snafu::{ResultExt, Snafu};
use tracing::{debug, info, warn};

use crate::bridge::frame::{FrameError, FrameReader, write_frame};
use crate::bridge::protocol::{Request, Response};
use crate::namespace::{Namespace, NamespaceError};
use crate::snapshot::{self, SnapshotError};

/// Serves namespace operations over a delimiter-framed JSON byte stream.
///
/// Requests are handled strictly one at a time, so every operation appears
/// atomic to the peer. A failed dispatch becomes an error frame; only the
/// end of the request stream (or a transport fault) stops the loop.
pub struct Bridge<R, W> {
    reader: FrameReader<R>,
    writer: W,
    namespace: Namespace,
}

impl<R: AsyncRead, W: AsyncWrite> Bridge<R, W> {
    pub fn new(reader: R, writer: W, namespace: Namespace) -> Self {
        Self {
            reader: FrameReader::new(reader),
            writer,
            namespace,
        }
    }

    /// Runs until the request stream ends, then hands the namespace back.
    pub async fn serve(mut self) -> Result<Namespace, BridgeError> {
        while let Some(frame) = self.reader.next_frame().await.context(TransportSnafu)? {
            let response = self.handle_frame(&frame);
            let encoded = serde_json::to_vec(&response).context(EncodeResponseSnafu)?;
            write_frame(&mut self.writer, encoded)
                .await
                .context(TransportSnafu)?;
        }
        info!("Bridge request stream ended");
        Ok(self.namespace)
    }

    fn handle_frame(&mut self, frame: &[u8]) -> Response {
        let request: Request = match serde_json::from_slice(frame) {
            Ok(request) => request,
            Err(error) => {
                warn!("Discarding unparseable request frame: {}", error);
                return Response::failure(Value::Null, format!("invalid request: {error}"));
            }
        };
        debug!("Dispatching method '{}'", request.method);

        let id = request.id.clone();
        match self.dispatch(&request) {
            Ok(result) => Response::success(id, result),
            Err(error @ DispatchError::UnknownMethod { .. }) => Response::failure_with_details(
                id,
                error.to_string(),
                json!({ "method": request.method }),
            ),
            Err(error) => Response::failure(id, error.to_string()),
        }
    }

    fn dispatch(&mut self, request: &Request) -> Result<Value, DispatchError> {
        // The original surface exposes `fooAsync` twins that merely defer
        // the synchronous operation; both spellings land here.
        let method = request
            .method
            .strip_suffix("Async")
            .unwrap_or(&request.method);
        let args = Args {
            method,
            params: &request.params,
        };

        match method {
            "createFile" => {
                let path = args.string(0, "path")?;
                let content = args.string(1, "content")?;
                let overwrite = args.bool_or(2, "overwrite", false)?;
                self.namespace
                    .create_file(path, content, overwrite)
                    .context(NamespaceOpSnafu)?;
                Ok(Value::Null)
            }
            "readFile" => {
                let content = self
                    .namespace
                    .read_file(args.string(0, "path")?)
                    .context(NamespaceOpSnafu)?;
                Ok(Value::String(content.to_string()))
            }
            "writeFile" => {
                self.namespace
                    .write_file(args.string(0, "path")?, args.string(1, "content")?)
                    .context(NamespaceOpSnafu)?;
                Ok(Value::Null)
            }
            "appendFile" => {
                self.namespace
                    .append_file(args.string(0, "path")?, args.string(1, "content")?)
                    .context(NamespaceOpSnafu)?;
                Ok(Value::Null)
            }
            "unlink" => {
                self.namespace
                    .unlink(args.string(0, "path")?)
                    .context(NamespaceOpSnafu)?;
                Ok(Value::Null)
            }
            "mkdir" => {
                self.namespace
                    .mkdir(args.string(0, "path")?)
                    .context(NamespaceOpSnafu)?;
                Ok(Value::Null)
            }
            "readdir" => {
                let names = self
                    .namespace
                    .readdir(args.string(0, "path")?)
                    .context(NamespaceOpSnafu)?;
                Ok(json!(names))
            }
            "rename" => {
                self.namespace
                    .rename(args.string(0, "oldPath")?, args.string(1, "newPath")?)
                    .context(NamespaceOpSnafu)?;
                Ok(Value::Null)
            }
            "stat" => {
                let stat = self
                    .namespace
                    .stat(args.string(0, "path")?)
                    .context(NamespaceOpSnafu)?;
                serde_json::to_value(stat).context(EncodeResultSnafu)
            }
            "exists" => Ok(Value::Bool(self.namespace.exists(args.string(0, "path")?))),
            "save" => {
                let text = snapshot::save(&self.namespace).context(SnapshotOpSnafu)?;
                Ok(Value::String(text))
            }
            "load" => {
                let restored =
                    snapshot::load(args.string(0, "snapshot")?).context(SnapshotOpSnafu)?;
                self.namespace = restored;
                Ok(Value::Null)
            }
            _ => UnknownMethodSnafu {
                method: &request.method,
            }
            .fail(),
        }
    }
}

/// Positional-or-named access to a request's `params`.
struct Args<'a> {
    method: &'a str,
    params: &'a Value,
}

impl<'a> Args<'a> {
    fn get(&self, index: usize, name: &str) -> Option<&'a Value> {
        match self.params {
            Value::Array(items) => items.get(index),
            Value::Object(fields) => fields.get(name),
            _ => None,
        }
    }

    fn string(&self, index: usize, name: &'static str) -> Result<&'a str, DispatchError> {
        match self.get(index, name) {
            Some(Value::String(value)) => Ok(value),
            Some(_) => WrongParamTypeSnafu {
                method: self.method,
                name,
                expected: "string",
            }
            .fail(),
            None => MissingParamSnafu {
                method: self.method,
                name,
            }
            .fail(),
        }
    }

    fn bool_or(
        &self,
        index: usize,
        name: &'static str,
        default: bool,
    ) -> Result<bool, DispatchError> {
        match self.get(index, name) {
            Some(Value::Bool(value)) => Ok(*value),
            None | Some(Value::Null) => Ok(default),
            Some(_) => WrongParamTypeSnafu {
                method: self.method,
                name,
                expected: "boolean",
            }
            .fail(),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum BridgeError {
    #[snafu(display("Bridge transport failure"))]
    TransportError { source: FrameError },
    #[snafu(display("Failed to encode a response frame"))]
    EncodeResponseError { source: serde_json::Error },
}

#[derive(Debug, Snafu)]
enum DispatchError {
    #[snafu(display("{}", source))]
    NamespaceOp { source: NamespaceError },
    #[snafu(display("{}", source))]
    SnapshotOp { source: SnapshotError },
    #[snafu(display("Unknown method '{}'", method))]
    UnknownMethod { method: String },
    #[snafu(display("Invalid params for '{}': missing '{}'", method, name))]
    MissingParam { method: String, name: String },
    #[snafu(display("Invalid params for '{}': '{}' must be a {}", method, name, expected))]
    WrongParamType {
        method: String,
        name: String,
        expected: &'static str,
    },
    #[snafu(display("Failed to encode the method result"))]
    EncodeResult { source: serde_json::Error },
}
