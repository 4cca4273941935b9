use super::*;
use crux_core::{testing::AppTester, App as _};

fn party(id: u32, name: &str) -> Party {
    Party {
        id,
        name: name.to_string(),
        description: "desc".to_string(),
        date: "2025-01-15T00:00:00.000Z".to_string(),
        location: "HQ".to_string(),
    }
}

#[test]
fn test_initialize_starts_bootstrap() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _update = app.update(Event::Initialize, &mut model);

    assert_eq!(model.bootstrap, BootstrapStage::LoadingEvents);
}

#[test]
fn test_bootstrap_loads_sequentially_then_renders() {
    let mut model = Model::default();

    let mut cmd = update::update(Event::Initialize, &mut model);
    assert_eq!(
        cmd.events().collect::<Vec<_>>(),
        vec![Event::Party(PartyEvent::List)]
    );

    let mut cmd = update::update(
        Event::Party(PartyEvent::ListResponse(Ok(vec![party(1, "Gala")]))),
        &mut model,
    );
    assert_eq!(
        cmd.events().collect::<Vec<_>>(),
        vec![Event::Guest(GuestEvent::ListGuests)]
    );

    // a failing guest load does not stop the sequence
    let mut cmd = update::update(
        Event::Guest(GuestEvent::GuestsResponse(Err("offline".to_string()))),
        &mut model,
    );
    assert_eq!(
        cmd.events().collect::<Vec<_>>(),
        vec![Event::Guest(GuestEvent::ListRsvps)]
    );

    let mut cmd = update::update(
        Event::Guest(GuestEvent::RsvpsResponse(Ok(vec![]))),
        &mut model,
    );
    assert!(cmd.events().next().is_none());
    assert!(cmd.effects().any(|effect| matches!(effect, Effect::Render(_))));

    assert_eq!(model.bootstrap, BootstrapStage::Idle);
    assert_eq!(model.events, vec![party(1, "Gala")]);
    assert!(model.guests.is_empty());
}

#[test]
fn test_later_reload_does_not_restart_bootstrap() {
    let mut model = Model::default();

    let mut cmd = update::update(
        Event::Party(PartyEvent::ListResponse(Ok(vec![party(1, "Gala")]))),
        &mut model,
    );

    assert_eq!(model.bootstrap, BootstrapStage::Idle);
    assert!(cmd.events().next().is_none());
}

#[test]
fn test_out_of_order_select_responses_last_one_wins() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    // selection of 2 resolves before the earlier selection of 1
    let _ = app.update(
        Event::Party(PartyEvent::SelectResponse(Ok(party(2, "Picnic")))),
        &mut model,
    );
    let _ = app.update(
        Event::Party(PartyEvent::SelectResponse(Ok(party(1, "Gala")))),
        &mut model,
    );

    assert_eq!(model.selected_event, Some(party(1, "Gala")));
}

#[test]
fn test_view_reflects_selection() {
    let mut model = Model {
        events: vec![party(1, "Gala")],
        ..Default::default()
    };

    let empty = App.view(&model);
    assert!(empty.app.text_content().contains(view::NO_SELECTION_PROMPT));

    model.selected_event = Some(party(1, "Gala"));
    let selected = App.view(&model);
    assert!(!selected.app.text_content().contains(view::NO_SELECTION_PROMPT));
    assert!(selected.app.text_content().contains("Gala #1"));
    assert_eq!(App.view(&model), selected);
}
