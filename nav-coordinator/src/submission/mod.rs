pub mod gate;
pub mod remote;
pub mod state;
pub mod validation;

pub use gate::SaveGate;
pub use remote::{CreatedEntity, RemoteCall, RemoteError, RemoteMutation, RemoteReply, ScriptedRemote};
pub use state::{Phase, SubmissionAction, SubmissionState, reduce};
pub use validation::{
    ConversationKind, DisplayNameValidator, EditTarget, LengthValidator, ValidationError, is_valid_display_name,
};
