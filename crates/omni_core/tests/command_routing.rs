use omni_core::{CommandIntent, CommandInterpreter, ModuleId, PanelId, PanelRouter};

fn full() -> CommandInterpreter {
    CommandInterpreter::with_all_panels()
}

#[test]
fn jargon_rule_wins_over_every_later_rule() {
    assert_eq!(
        full().interpret("jargon chat"),
        vec![CommandIntent::LaunchModule(ModuleId::JargonLinker)]
    );
}

#[test]
fn math_rule_launches_and_navigates_to_modules() {
    assert_eq!(
        full().interpret("open the math tutor"),
        vec![
            CommandIntent::LaunchModule(ModuleId::Math),
            CommandIntent::NavigateTo(PanelId::Modules),
        ]
    );
}

#[test]
fn network_rule_wins_despite_settings_like_text() {
    assert_eq!(
        full().interpret("please open the network dns settings"),
        vec![
            CommandIntent::LaunchModule(ModuleId::Network),
            CommandIntent::NavigateTo(PanelId::Modules),
        ]
    );
}

#[test]
fn footprint_and_broker_keywords_launch_footprint() {
    for text in ["check my footprint", "remove me from broker sites"] {
        assert_eq!(
            full().interpret(text),
            vec![
                CommandIntent::LaunchModule(ModuleId::Footprint),
                CommandIntent::NavigateTo(PanelId::Modules),
            ]
        );
    }
}

#[test]
fn kai_and_standard_keywords_navigate_to_settings() {
    for text in ["show kai core", "kai status", "standard formatting rules"] {
        assert_eq!(
            full().interpret(text),
            vec![CommandIntent::NavigateTo(PanelId::Settings)],
            "text: {text}"
        );
    }
}

#[test]
fn chat_keywords_navigate_when_chat_panel_enabled() {
    for text in ["omni chat please", "open chat"] {
        assert_eq!(
            full().interpret(text),
            vec![CommandIntent::NavigateTo(PanelId::OmniChat)],
            "text: {text}"
        );
    }
}

#[test]
fn chat_keywords_forward_in_the_variant_without_a_chat_panel() {
    let no_chat = CommandInterpreter::new(
        PanelId::ALL
            .into_iter()
            .filter(|panel| *panel != PanelId::OmniChat),
    );
    assert_eq!(
        no_chat.interpret("open chat"),
        vec![CommandIntent::ForwardToBackend("open chat".to_string())]
    );
}

#[test]
fn unmatched_text_forwards_verbatim() {
    assert_eq!(
        full().interpret("What Is The Weather Like"),
        vec![CommandIntent::ForwardToBackend(
            "What Is The Weather Like".to_string()
        )]
    );
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(
        full().interpret("LAUNCH THE JARGON LINKER"),
        vec![CommandIntent::LaunchModule(ModuleId::JargonLinker)]
    );
}

#[test]
fn router_keeps_state_on_unknown_panel() {
    let mut router = PanelRouter::with_all_panels();
    assert_eq!(router.active(), PanelId::Dashboard);

    router.switch_to("modules").unwrap();
    let err = router.switch_to("no-such-panel").unwrap_err();
    assert_eq!(err.requested, "no-such-panel");
    assert_eq!(router.active(), PanelId::Modules);
}
