mod support;

use alert_map::{AlertState, Gesture, KeyValueStore, MarkerColor, SyncOutcome, STORAGE_KEY};
use support::{harness, record};

#[test]
fn startup_renders_every_persisted_record() {
    let mut h = harness();
    h.store.save(&[
        record("a_1", AlertState::Danger),
        record("a_2", AlertState::Ok),
    ])
    .unwrap();

    h.sync.start();

    let markers = h.widget.markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].id, "a_1");
    assert_eq!(markers[0].color, MarkerColor::Red);
    assert_eq!(markers[1].id, "a_2");
    assert_eq!(markers[1].color, MarkerColor::Green);
}

#[test]
fn startup_with_empty_store_renders_nothing() {
    let mut h = harness();
    h.sync.start();
    assert!(h.widget.markers().is_empty());
}

#[test]
fn unknown_state_renders_with_fallback_color() {
    let mut h = harness();
    h.backend
        .set(
            STORAGE_KEY,
            r#"[{"id":"a_1","lat":1.0,"lng":2.0,"state":"unknown","text":"?"}]"#,
        )
        .unwrap();

    h.sync.start();

    let markers = h.widget.markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].color, MarkerColor::Gray);
    assert_eq!(markers[0].popup.state_label, "unknown");
}

#[test]
fn create_adds_one_marker_without_rerendering() {
    let mut h = harness();
    h.store.save(&[record("a_1", AlertState::Ok)]).unwrap();
    h.sync.start();

    h.input.push_prompt(Some("danger"));
    h.input.push_prompt(Some("sinkhole"));
    let created = h.sync.handle_map_click(3.0, 4.0).unwrap().unwrap();

    // Incremental add: the existing marker was not removed and re-added,
    // the new one landed at the end.
    let markers = h.widget.markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].id, "a_1");
    assert_eq!(markers[1].id, created.id);
    assert_eq!(markers[1].popup.text.as_deref(), Some("sinkhole"));
}

#[test]
fn abandoned_create_changes_nothing() {
    let mut h = harness();
    h.sync.start();
    h.input.push_prompt(Some("bogus"));

    let outcome = h.sync.handle(Gesture::MapClick { lat: 1.0, lng: 2.0 }).unwrap();

    assert_eq!(outcome, SyncOutcome::Abandoned);
    assert!(h.store.load().is_empty());
    assert!(h.widget.markers().is_empty());
    assert_eq!(h.input.notices(), vec!["Invalid alert state"]);
}

#[test]
fn each_popup_deletes_its_own_record() {
    let mut h = harness();
    h.store.save(&[
        record("a_1", AlertState::Danger),
        record("a_2", AlertState::Alert),
        record("a_3", AlertState::Ok),
    ])
    .unwrap();
    h.sync.start();

    // Every popup's delete control is bound to its own record.
    for marker in h.widget.markers() {
        assert_eq!(marker.popup.delete_id, marker.id);
    }

    // Deleting through the middle popup removes exactly that record.
    let target = h.widget.markers()[1].popup.delete_id.clone();
    let outcome = h.sync.handle(Gesture::DeleteMarker { id: target }).unwrap();
    assert_eq!(outcome, SyncOutcome::Removed);

    let ids: Vec<String> = h.widget.markers().into_iter().map(|m| m.id).collect();
    assert_eq!(ids, ["a_1", "a_3"]);
    assert_eq!(h.store.load().len(), 2);
}

#[test]
fn delete_rerenders_from_the_store() {
    let mut h = harness();
    h.store.save(&[
        record("a_1", AlertState::Danger),
        record("a_2", AlertState::Ok),
    ])
    .unwrap();
    h.sync.start();

    h.sync.handle_delete("a_1").unwrap();

    assert_eq!(h.sync.displayed(), ["a_2".to_string()]);
    assert_eq!(h.widget.markers().len(), 1);
}

#[test]
fn delete_of_missing_id_is_a_noop() {
    let mut h = harness();
    h.store.save(&[record("a_1", AlertState::Ok)]).unwrap();
    h.sync.start();

    h.sync.handle_delete("a_9").unwrap();

    assert_eq!(h.store.load().len(), 1);
    assert_eq!(h.widget.markers().len(), 1);
}

#[test]
fn confirmed_clear_empties_store_and_view() {
    let mut h = harness();
    h.store.save(&[
        record("a_1", AlertState::Danger),
        record("a_2", AlertState::Ok),
    ])
    .unwrap();
    h.sync.start();
    h.input.push_confirm(true);

    let outcome = h.sync.handle(Gesture::ClearAll).unwrap();

    assert_eq!(outcome, SyncOutcome::Cleared);
    assert!(h.store.load().is_empty());
    assert!(h.widget.markers().is_empty());
    assert_eq!(h.backend.get(STORAGE_KEY).unwrap(), None);
}

#[test]
fn declined_clear_leaves_everything_untouched() {
    let mut h = harness();
    h.store.save(&[record("a_1", AlertState::Danger)]).unwrap();
    h.sync.start();
    h.input.push_confirm(false);

    let outcome = h.sync.handle(Gesture::ClearAll).unwrap();

    assert_eq!(outcome, SyncOutcome::Abandoned);
    assert_eq!(h.store.load().len(), 1);
    assert_eq!(h.widget.markers().len(), 1);
}

#[test]
fn locate_gesture_recenters_the_view() {
    let mut h = harness();
    let outcome = h.sync.handle(Gesture::Locate).unwrap();
    assert_eq!(outcome, SyncOutcome::Located);
    assert_eq!(h.widget.locate_calls(), 1);
}

#[test]
fn created_records_persist_across_a_restart() {
    let mut h = harness();
    h.input.push_prompt(Some("alert"));
    h.input.push_prompt(None);
    let created = h.sync.handle_map_click(5.0, 6.0).unwrap().unwrap();

    // A fresh sync layer over the same backend sees the record.
    let mut restarted = support::harness_over(h.backend.clone());
    restarted.sync.start();

    let markers = restarted.widget.markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].id, created.id);
    assert_eq!(markers[0].color, MarkerColor::Orange);
}
