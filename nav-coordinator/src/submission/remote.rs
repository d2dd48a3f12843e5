use super::ConversationKind;
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

/// Result payload of a successful create call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEntity {
    pub id: String,
    pub display_name: String,
}

/// Error returned by the remote collaborator, surfaced verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError(pub String);

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.trim().is_empty() {
            write!(f, "Something went wrong, please try again")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl std::error::Error for RemoteError {}

/// The remote API client performing the actual mutation
#[async_trait]
pub trait RemoteMutation: Send + Sync {
    async fn create_entity(
        &self,
        server_url: &str,
        name: &str,
        kind: ConversationKind,
    ) -> Result<CreatedEntity, RemoteError>;
}

/// A canned reply for [`ScriptedRemote`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteReply {
    Ok { id: String },
    Error { message: String },
}

/// One recorded call to the scripted remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCall {
    pub server_url: String,
    pub name: String,
    pub kind: ConversationKind,
}

/// Remote collaborator answering from a queue of canned replies.
///
/// When the queue runs dry every call succeeds with a generated id.
#[derive(Default)]
pub struct ScriptedRemote {
    replies: Mutex<VecDeque<RemoteReply>>,
    calls: Mutex<Vec<RemoteCall>>,
}

impl ScriptedRemote {
    pub fn new(replies: impl IntoIterator<Item = RemoteReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

#[async_trait]
impl RemoteMutation for ScriptedRemote {
    async fn create_entity(
        &self,
        server_url: &str,
        name: &str,
        kind: ConversationKind,
    ) -> Result<CreatedEntity, RemoteError> {
        let call_number = {
            let mut calls = self
                .calls
                .lock()
                .map_err(|_| RemoteError::new("remote call log poisoned"))?;
            calls.push(RemoteCall {
                server_url: server_url.to_string(),
                name: name.to_string(),
                kind,
            });
            calls.len()
        };
        debug!("Scripted create_entity #{} for '{}' ({})", call_number, name, kind.code());

        let reply = self
            .replies
            .lock()
            .map_err(|_| RemoteError::new("remote reply queue poisoned"))?
            .pop_front();

        match reply {
            Some(RemoteReply::Error { message }) => Err(RemoteError(message)),
            Some(RemoteReply::Ok { id }) => Ok(CreatedEntity {
                id,
                display_name: name.to_string(),
            }),
            None => Ok(CreatedEntity {
                id: format!("entity-{}", call_number),
                display_name: name.to_string(),
            }),
        }
    }
}
