//! Shell session: the adapter between user input and core state.
//!
//! # Responsibility
//! - Run classified intents against the router, activity log and gateway.
//! - Produce the exact log/status lines the rendering layer displays.
//!
//! # Invariants
//! - Blank command input is ignored without side effects.
//! - Voice transcripts take the same path as typed chat messages.
//! - A gateway failure never aborts the session; it becomes a log line.

use crate::command::interpreter::{CommandIntent, CommandInterpreter};
use crate::gateway::{BackendError, BackendGateway};
use crate::model::panel::{ModuleId, PanelId};
use crate::shell::activity_log::ActivityLog;
use crate::shell::router::PanelRouter;
use log::warn;

/// Source tag for command-box traffic.
const SOURCE_COMMAND_BOX: &str = "command-box";
/// Source tag for chat-panel traffic (voice transcripts included).
const SOURCE_OMNI_CHAT: &str = "omni-chat";

/// Result of one chat send, as the chat panel renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOutcome {
    /// Reply text when the backend answered.
    pub reply: Option<String>,
    /// Status line ("Reply received.", "Backend error (500).", ...).
    pub status: String,
}

/// One interactive shell session; owns all mutable shell state.
pub struct ShellSession<G: BackendGateway> {
    interpreter: CommandInterpreter,
    router: PanelRouter,
    log: ActivityLog,
    gateway: G,
}

impl<G: BackendGateway> ShellSession<G> {
    /// Builds a session over the given panel configuration and gateway.
    pub fn new(enabled_panels: impl IntoIterator<Item = PanelId>, gateway: G) -> Self {
        let panels: Vec<PanelId> = enabled_panels.into_iter().collect();
        Self {
            interpreter: CommandInterpreter::new(panels.iter().copied()),
            router: PanelRouter::new(panels),
            log: ActivityLog::new(),
            gateway,
        }
    }

    pub fn router(&self) -> &PanelRouter {
        &self.router
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Handles one command-box submission; returns the executed intents.
    pub fn handle_command(&mut self, text: &str) -> Vec<CommandIntent> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let intents = self.interpreter.interpret(text);
        for intent in &intents {
            self.execute(intent);
        }
        intents
    }

    /// Handles a sidebar click on a panel key.
    pub fn handle_nav_click(&mut self, key: &str) {
        match self.router.switch_to(key) {
            Ok(panel) => {
                self.log
                    .append(format!("Switched view to: {}", panel.title()));
            }
            Err(err) => {
                warn!("event=nav_click module=shell status=rejected error={err}");
                self.log.append(format!("Unknown view: {}", err.requested));
            }
        }
    }

    /// Sends one chat-panel message and reports the outcome for rendering.
    pub fn send_chat(&mut self, message: &str) -> ChatOutcome {
        let message = message.trim();
        if message.is_empty() {
            return ChatOutcome {
                reply: None,
                status: "Type or speak a message first.".to_string(),
            };
        }

        match self.gateway.send(message, SOURCE_OMNI_CHAT) {
            Ok(reply) => {
                self.log.append("Omni chat backend replied.");
                ChatOutcome {
                    reply: Some(reply),
                    status: "Reply received.".to_string(),
                }
            }
            Err(BackendError::Http { status }) => {
                self.log
                    .append(format!("Omni chat backend error ({status})."));
                ChatOutcome {
                    reply: None,
                    status: format!("Backend error ({status})."),
                }
            }
            Err(BackendError::Unreachable(_)) => {
                self.log
                    .append("Omni chat: backend not reachable (check Flask on port 8000).");
                ChatOutcome {
                    reply: None,
                    status: "Backend not reachable.".to_string(),
                }
            }
        }
    }

    /// Feeds a voice transcript into the same path as typed chat input.
    pub fn handle_transcript(&mut self, transcript: &str) -> ChatOutcome {
        self.send_chat(transcript)
    }

    fn execute(&mut self, intent: &CommandIntent) {
        match intent {
            CommandIntent::NavigateTo(panel) => {
                if self.router.activate(*panel).is_ok() {
                    self.log
                        .append(format!("Switched view to: {}", panel.title()));
                    match panel {
                        PanelId::Settings => self
                            .log
                            .append("Navigated to Kai Core / Settings via command."),
                        PanelId::OmniChat => self.log.append("Switched to Omni Chat."),
                        _ => {}
                    }
                }
            }
            CommandIntent::LaunchModule(module) => self.launch_module(*module),
            CommandIntent::ForwardToBackend(text) => {
                self.log
                    .append(format!("Command sent to backend: \"{text}\""));
                match self.gateway.send(text, SOURCE_COMMAND_BOX) {
                    Ok(reply) => self.log.append(format!("OmniAI backend: {reply}")),
                    Err(BackendError::Http { status }) => {
                        self.log.append(format!("Backend error ({status})."));
                    }
                    Err(BackendError::Unreachable(_)) => {
                        self.log.append(
                            "Backend not reachable. Is the Flask server running on port 8000?",
                        );
                    }
                }
            }
        }
    }

    fn launch_module(&mut self, module: ModuleId) {
        match module {
            ModuleId::JargonLinker => {
                // The embedded glossary renders inside the modules panel.
                if self.router.activate(PanelId::Modules).is_ok() {
                    self.log
                        .append(format!("Switched view to: {}", PanelId::Modules.title()));
                }
                self.log
                    .append(format!("Loaded module: {}", module.description()));
            }
            ModuleId::Math => {
                self.log
                    .append("Math / Tutor Engine launch requested (frontend).");
            }
            ModuleId::Network => {
                self.log
                    .append("Network / DNS Lab Assistant launch requested (frontend).");
            }
            ModuleId::Footprint => {
                self.log
                    .append("Digital Footprint Removal tools launch requested (frontend).");
            }
        }
    }
}
