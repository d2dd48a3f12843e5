//! Create (or rename) a team
//!
//! The navigation bar carries a Create button that is only enabled while the
//! save gate holds, plus a close icon when the screen is presented as a
//! modal. The back gesture and the close icon share one dismissal.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::{AppearanceConfig, CoordinatorConfig};
use crate::dismissal::DismissalPolicy;
use crate::error::SubmissionError;
use crate::nav::{ButtonLayout, Icon, NavButton, ScreenId, ShowAsAction};
use crate::screen::{Command, Screen, Subscription};
use crate::submission::{
    ConversationKind, CreatedEntity, DisplayNameValidator, EditTarget, LengthValidator, Phase, RemoteError,
    RemoteMutation, SaveGate, SubmissionAction, SubmissionState, is_valid_display_name,
};

pub const CLOSE_BUTTON_ID: &str = "close-team";
pub const CREATE_BUTTON_ID: &str = "create-team";

pub struct CreateTeamScreen;

pub struct CreateTeamParams {
    pub screen_id: ScreenId,
    pub server_url: String,
    /// Set when renaming an existing conversation instead of creating one
    pub editing: Option<EditTarget>,
    pub presented_as_overlay: bool,
    pub remote: Arc<dyn RemoteMutation>,
    pub validator: Arc<dyn DisplayNameValidator>,
    pub gate: SaveGate,
    pub appearance: AppearanceConfig,
}

impl CreateTeamParams {
    pub fn from_config(
        screen_id: ScreenId,
        config: &CoordinatorConfig,
        remote: Arc<dyn RemoteMutation>,
        presented_as_overlay: bool,
    ) -> Self {
        let submission = &config.submission;
        Self {
            screen_id,
            server_url: submission.server_url.clone(),
            editing: None,
            presented_as_overlay,
            remote,
            validator: Arc::new(LengthValidator::new(
                submission.min_display_name_length,
                submission.max_display_name_length,
            )),
            gate: SaveGate::new(submission.min_display_name_length),
            appearance: config.appearance.clone(),
        }
    }

    pub fn editing(mut self, target: EditTarget) -> Self {
        self.editing = Some(target);
        self
    }
}

pub struct State {
    display_name: String,
    editing: Option<EditTarget>,
    submission: SubmissionState,
    can_save: bool,
    // Bumped per remote call so a completion can be matched to its request
    attempt: u64,
    created: Option<CreatedEntity>,
    dismissal: DismissalPolicy,

    server_url: String,
    remote: Arc<dyn RemoteMutation>,
    validator: Arc<dyn DisplayNameValidator>,
    gate: SaveGate,
    appearance: AppearanceConfig,
}

impl State {
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn phase(&self) -> Phase {
        self.submission.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.submission.error()
    }

    pub fn can_save(&self) -> bool {
        self.can_save
    }

    pub fn created(&self) -> Option<&CreatedEntity> {
        self.created.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.dismissal.is_closed()
    }

    fn baseline(&self) -> Option<&str> {
        self.editing.as_ref().map(|t| t.display_name.as_str())
    }

    fn recompute_gate(&mut self) {
        self.can_save = self
            .gate
            .evaluate(&self.display_name, self.baseline(), self.submission.phase);
    }

    fn transition(&mut self, action: SubmissionAction) {
        self.submission.apply(&action);
        self.recompute_gate();
    }

    fn fail(&mut self, error: SubmissionError) {
        debug!("Submission failed: {}", error);
        self.transition(SubmissionAction::Failure(error.display_message()));
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    DisplayNameChanged(String),
    Create,
    Close,
    CreateFinished {
        attempt: u64,
        result: Result<CreatedEntity, RemoteError>,
    },
}

impl Screen for CreateTeamScreen {
    type Params = CreateTeamParams;
    type State = State;
    type Msg = Msg;

    fn init(params: CreateTeamParams) -> (State, Command<Msg>) {
        let display_name = params
            .editing
            .as_ref()
            .map(|t| t.display_name.clone())
            .unwrap_or_default();

        let mut state = State {
            display_name,
            editing: params.editing,
            submission: SubmissionState::new(),
            can_save: false,
            attempt: 0,
            created: None,
            dismissal: DismissalPolicy::new(params.screen_id, params.presented_as_overlay),
            server_url: params.server_url,
            remote: params.remote,
            validator: params.validator,
            gate: params.gate,
            appearance: params.appearance,
        };
        state.recompute_gate();

        (state, Command::None)
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::DisplayNameChanged(name) => {
                // A failure message stays until the next attempt starts
                state.display_name = name;
                state.recompute_gate();
                Command::None
            }

            Msg::Create => {
                if state.submission.is_saving() || state.submission.is_complete() {
                    debug!("Ignoring create press while {:?}", state.phase());
                    return Command::None;
                }

                state.transition(SubmissionAction::Start);

                if let Err(err) =
                    is_valid_display_name(state.editing.as_ref(), &state.display_name, state.validator.as_ref())
                {
                    state.fail(err.into());
                    return Command::dismiss_keyboard();
                }

                state.attempt += 1;
                let attempt = state.attempt;
                let remote = Arc::clone(&state.remote);
                let server_url = state.server_url.clone();
                let name = state.display_name.clone();
                info!("Creating team '{}' on {}", name, server_url);

                Command::batch(vec![
                    Command::dismiss_keyboard(),
                    Command::perform(
                        async move {
                            remote
                                .create_entity(&server_url, &name, ConversationKind::Open)
                                .await
                        },
                        move |result| Msg::CreateFinished { attempt, result },
                    ),
                ])
            }

            Msg::CreateFinished { attempt, result } => {
                if attempt != state.attempt || !state.submission.is_saving() {
                    debug!("Dropping stale create result for attempt {}", attempt);
                    return Command::None;
                }

                match result {
                    Ok(entity) => {
                        info!("Created team {} ({})", entity.display_name, entity.id);
                        state.created = Some(entity);
                        state.transition(SubmissionAction::Complete);
                        state.dismissal.close()
                    }
                    Err(err) => {
                        warn!("Create team failed: {}", err);
                        state.fail(err.into());
                        Command::None
                    }
                }
            }

            Msg::Close => state.dismissal.close(),
        }
    }

    fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
        let mut subs = Vec::new();

        if state.dismissal.presented_as_overlay() {
            subs.push(Subscription::nav_button(CLOSE_BUTTON_ID, Msg::Close));
        }

        subs.push(
            Subscription::nav_button(CREATE_BUTTON_ID, Msg::Create).with_deps(&state.display_name),
        );
        subs.push(Subscription::back_press(Msg::Close));

        subs
    }

    fn buttons(state: &State) -> ButtonLayout {
        let text = if state.editing.is_some() { "Save" } else { "Create" };

        let create = NavButton::new(CREATE_BUTTON_ID, "create_team.create.button")
            .text(text)
            .enabled(state.can_save)
            .color(state.appearance.header_text_color.clone())
            .show_as_action(ShowAsAction::Always);

        let left = if state.dismissal.presented_as_overlay() {
            vec![
                NavButton::new(CLOSE_BUTTON_ID, "close.create_team.button").icon(Icon::close(
                    state.appearance.close_icon_size,
                    state.appearance.header_text_color.clone(),
                )),
            ]
        } else {
            Vec::new()
        };

        ButtonLayout {
            left,
            right: vec![create],
        }
    }

    fn title(state: &State) -> &'static str {
        if state.editing.is_some() { "Edit name" } else { "Create a new team" }
    }
}
