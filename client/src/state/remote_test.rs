use super::*;

#[test]
fn default_is_loading() {
    let state: Loadable<u8> = Loadable::default();
    assert!(state.is_loading());
    assert_eq!(state.loaded(), None);
}

#[test]
fn from_result_maps_errors_to_messages() {
    let ok: Loadable<u8> = Loadable::from_result::<String>(Ok(3));
    let err: Loadable<u8> = Loadable::from_result(Err("boom"));
    assert_eq!(ok.loaded(), Some(&3));
    assert_eq!(err.error(), Some("boom"));
}

#[test]
fn refresh_failure_keeps_loaded_data() {
    let mut state = Loadable::Loaded(vec![1, 2]);
    state.refresh_with(Err("offline"));
    assert_eq!(state.loaded(), Some(&vec![1, 2]));
}

#[test]
fn refresh_failure_while_loading_records_error() {
    let mut state: Loadable<u8> = Loadable::Loading;
    state.refresh_with(Err("offline"));
    assert_eq!(state.error(), Some("offline"));
    state.refresh_with::<&str>(Ok(9));
    assert_eq!(state, Loadable::Loaded(9));
}
