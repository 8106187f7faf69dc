use omni_core::{
    BackendError, BackendGateway, CommandIntent, ModuleId, PanelId, ShellSession,
};
use std::cell::RefCell;

/// Scripted gateway double; records every call it receives.
struct FakeGateway {
    result: Result<String, BackendError>,
    calls: RefCell<Vec<(String, String)>>,
}

impl FakeGateway {
    fn replying(reply: &str) -> Self {
        Self {
            result: Ok(reply.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn failing(error: BackendError) -> Self {
        Self {
            result: Err(error),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl BackendGateway for &FakeGateway {
    fn send(&self, message: &str, source: &str) -> Result<String, BackendError> {
        self.calls
            .borrow_mut()
            .push((message.to_string(), source.to_string()));
        self.result.clone()
    }
}

fn log_lines<G: BackendGateway>(session: &ShellSession<G>) -> Vec<String> {
    session.log().entries().map(|e| e.message.clone()).collect()
}

#[test]
fn blank_command_is_ignored() {
    let gateway = FakeGateway::replying("unused");
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    assert!(session.handle_command("   ").is_empty());
    assert!(session.log().is_empty());
    assert!(gateway.calls.borrow().is_empty());
}

#[test]
fn forwarded_command_logs_request_and_reply() {
    let gateway = FakeGateway::replying("hello from the backend");
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    let intents = session.handle_command("what is a resolver made of");
    assert_eq!(
        intents,
        vec![CommandIntent::ForwardToBackend(
            "what is a resolver made of".to_string()
        )]
    );

    let lines = log_lines(&session);
    assert_eq!(lines[1], "Command sent to backend: \"what is a resolver made of\"");
    assert_eq!(lines[0], "OmniAI backend: hello from the backend");
    assert_eq!(
        gateway.calls.borrow()[0],
        (
            "what is a resolver made of".to_string(),
            "command-box".to_string()
        )
    );
}

#[test]
fn forwarded_command_surfaces_http_failure_as_log_line() {
    let gateway = FakeGateway::failing(BackendError::Http { status: 500 });
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    session.handle_command("anything unmatched");
    assert_eq!(log_lines(&session)[0], "Backend error (500).");
}

#[test]
fn math_command_switches_to_modules_and_logs_launch() {
    let gateway = FakeGateway::replying("unused");
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    session.handle_command("start the math tutor");
    assert_eq!(session.router().active(), PanelId::Modules);

    let lines = log_lines(&session);
    assert!(lines.contains(&"Math / Tutor Engine launch requested (frontend).".to_string()));
    assert!(lines.contains(&"Switched view to: Modules".to_string()));
    assert!(gateway.calls.borrow().is_empty());
}

#[test]
fn settings_command_logs_the_via_command_line() {
    let gateway = FakeGateway::replying("unused");
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    session.handle_command("show me the kai core");
    assert_eq!(session.router().active(), PanelId::Settings);

    let lines = log_lines(&session);
    assert_eq!(lines[0], "Navigated to Kai Core / Settings via command.");
    assert_eq!(lines[1], "Switched view to: Kai Core / Settings");
}

#[test]
fn chat_command_logs_the_switch_line() {
    let gateway = FakeGateway::replying("unused");
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    session.handle_command("open omni chat");
    assert_eq!(session.router().active(), PanelId::OmniChat);

    let lines = log_lines(&session);
    assert_eq!(lines[0], "Switched to Omni Chat.");
    assert_eq!(lines[1], "Switched view to: OmniAI Chat");
}

#[test]
fn forwarded_command_unreachable_backend_logs_the_flask_hint() {
    let gateway = FakeGateway::failing(BackendError::Unreachable("refused".to_string()));
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    session.handle_command("anything unmatched");
    assert_eq!(
        log_lines(&session)[0],
        "Backend not reachable. Is the Flask server running on port 8000?"
    );
}

#[test]
fn jargon_command_activates_modules_panel_for_the_embedded_glossary() {
    let gateway = FakeGateway::replying("unused");
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    let intents = session.handle_command("open jargon linker");
    assert_eq!(
        intents,
        vec![CommandIntent::LaunchModule(ModuleId::JargonLinker)]
    );
    assert_eq!(session.router().active(), PanelId::Modules);

    let lines = log_lines(&session);
    assert_eq!(lines[0], "Loaded module: Jargon Linker");
    assert_eq!(lines[1], "Switched view to: Modules");
}

#[test]
fn nav_click_switches_and_logs_title() {
    let gateway = FakeGateway::replying("unused");
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    session.handle_nav_click("archives");
    assert_eq!(session.router().active(), PanelId::Archives);
    assert_eq!(
        log_lines(&session)[0],
        "Switched view to: Archives / Transcend"
    );
}

#[test]
fn nav_click_on_unknown_panel_keeps_state() {
    let gateway = FakeGateway::replying("unused");
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    session.handle_nav_click("nonsense");
    assert_eq!(session.router().active(), PanelId::Dashboard);
    assert_eq!(log_lines(&session)[0], "Unknown view: nonsense");
}

#[test]
fn chat_send_reports_reply_and_status() {
    let gateway = FakeGateway::replying("chat reply");
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    let outcome = session.send_chat("hello there");
    assert_eq!(outcome.reply.as_deref(), Some("chat reply"));
    assert_eq!(outcome.status, "Reply received.");
    assert_eq!(
        gateway.calls.borrow()[0],
        ("hello there".to_string(), "omni-chat".to_string())
    );
}

#[test]
fn chat_send_maps_failures_to_status_lines() {
    let gateway = FakeGateway::failing(BackendError::Http { status: 503 });
    let mut session = ShellSession::new(PanelId::ALL, &gateway);
    let outcome = session.send_chat("hello");
    assert_eq!(outcome.reply, None);
    assert_eq!(outcome.status, "Backend error (503).");

    let gateway = FakeGateway::failing(BackendError::Unreachable("refused".to_string()));
    let mut session = ShellSession::new(PanelId::ALL, &gateway);
    let outcome = session.send_chat("hello");
    assert_eq!(outcome.status, "Backend not reachable.");
    assert_eq!(
        log_lines(&session)[0],
        "Omni chat: backend not reachable (check Flask on port 8000)."
    );
}

#[test]
fn blank_chat_message_prompts_without_calling_backend() {
    let gateway = FakeGateway::replying("unused");
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    let outcome = session.send_chat("  ");
    assert_eq!(outcome.status, "Type or speak a message first.");
    assert!(gateway.calls.borrow().is_empty());
}

#[test]
fn voice_transcript_takes_the_chat_path() {
    let gateway = FakeGateway::replying("heard you");
    let mut session = ShellSession::new(PanelId::ALL, &gateway);

    let outcome = session.handle_transcript("turn on the lights");
    assert_eq!(outcome.reply.as_deref(), Some("heard you"));
    assert_eq!(
        gateway.calls.borrow()[0],
        ("turn on the lights".to_string(), "omni-chat".to_string())
    );
}
