use std::sync::Once;

use classifier_core::{
    update, ClassificationRequest, ClassificationResult, Effect, FormError, FormState, Msg,
    ProductList, RequestId, Screen, SubmitPhase, FALLBACK_LABEL, TRANSPORT_ERROR_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn submit(list: ProductList, text: &str) -> (FormState, RequestId) {
    let (state, _) = update(FormState::new(), Msg::ListSelected(list));
    let (state, _) = update(state, Msg::DescriptionChanged(text.to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    let request_id = match effects.as_slice() {
        [Effect::Classify { request_id, .. }] => *request_id,
        other => panic!("expected one classify effect, got {other:?}"),
    };
    (state, request_id)
}

fn done(state: FormState, request_id: RequestId, result: ClassificationResult) -> FormState {
    let (state, effects) = update(state, Msg::ClassificationDone { request_id, result });
    assert!(effects.is_empty());
    state
}

#[test]
fn valid_submit_emits_single_request() {
    init_logging();
    let (state, _) = update(FormState::new(), Msg::ListSelected(ProductList::HdiGlobal));
    let (state, _) = update(state, Msg::DescriptionChanged("Llantas de auto".to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::Classify {
            request_id: 1,
            request: ClassificationRequest {
                description: "Llantas de auto".to_string(),
                list: Some("Mercancías HDI Global".to_string()),
            },
        }]
    );
    assert!(state.is_submitting());
    let view = state.view();
    assert!(view.submitting);
    assert!(!view.submit_enabled);
}

#[test]
fn success_sets_label_and_clears_error() {
    init_logging();
    let (state, request_id) = submit(ProductList::ZuruMax, "Juguetes de plástico");
    let state = done(
        state,
        request_id,
        ClassificationResult::Category(Some("Juguetes".to_string())),
    );

    assert_eq!(state.phase(), SubmitPhase::Idle);
    assert_eq!(state.result_label(), Some("Juguetes"));
    assert_eq!(state.error(), None);
    assert!(state.view().submit_enabled);
}

#[test]
fn missing_category_uses_fallback_label() {
    init_logging();
    let (state, request_id) = submit(ProductList::ZuruMax, "algo raro");
    let state = done(state, request_id, ClassificationResult::Category(None));
    assert_eq!(state.result_label(), Some(FALLBACK_LABEL));

    let (state, request_id) = submit(ProductList::ZuruMax, "algo raro");
    let state = done(
        state,
        request_id,
        ClassificationResult::Category(Some(String::new())),
    );
    assert_eq!(state.result_label(), Some("Sin coincidencias claras"));
}

#[test]
fn failure_sets_fixed_message_and_clears_label() {
    init_logging();
    let (state, request_id) = submit(ProductList::ChubbCarga, "Electrónicos");
    let state = done(
        state,
        request_id,
        ClassificationResult::Category(Some("Electrónica".to_string())),
    );
    assert!(state.result_label().is_some());

    let (state, _) = update(state, Msg::SubmitClicked);
    let request_id = match state.phase() {
        SubmitPhase::Submitting { request_id, .. } => request_id,
        SubmitPhase::Idle => panic!("second submit should be in flight"),
    };
    let state = done(state, request_id, ClassificationResult::Failed);

    assert!(!state.is_submitting());
    assert_eq!(state.result_label(), None);
    assert_eq!(state.error(), Some(FormError::Transport));
    assert_eq!(
        state.view().error_message.as_deref(),
        Some(TRANSPORT_ERROR_MESSAGE)
    );
}

#[test]
fn failure_after_validation_error_replaces_message() {
    init_logging();
    let (state, _) = update(FormState::new(), Msg::ListSelected(ProductList::ZuruMax));
    let (state, _) = update(state, Msg::SubmitClicked);
    assert!(matches!(state.error(), Some(FormError::Validation(_))));

    let (state, _) = update(state, Msg::DescriptionChanged("Muebles".to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);
    let state = done(state, 1, ClassificationResult::Failed);
    assert_eq!(state.error(), Some(FormError::Transport));
}

#[test]
fn submit_while_submitting_is_ignored() {
    init_logging();
    let (state, request_id) = submit(ProductList::ZuruMax, "Camisas");
    let before = state.view();

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view(), before);
    assert_eq!(
        state.phase(),
        SubmitPhase::Submitting {
            request_id,
            stale: false
        }
    );
}

#[test]
fn submitting_is_false_before_and_after_each_cycle() {
    init_logging();
    let (state, _) = update(FormState::new(), Msg::ListSelected(ProductList::HdiGlobal));
    let (state, _) = update(state, Msg::DescriptionChanged("Vinos".to_string()));
    assert!(!state.is_submitting());

    let mut state = state;
    for (expected_id, result) in [
        (1, ClassificationResult::Category(Some("Bebidas".to_string()))),
        (2, ClassificationResult::Failed),
        (3, ClassificationResult::Category(None)),
    ] {
        let (next, effects) = update(state, Msg::SubmitClicked);
        assert!(next.is_submitting());
        assert!(matches!(
            effects.as_slice(),
            [Effect::Classify { request_id, .. }] if *request_id == expected_id
        ));
        state = done(next, expected_id, result);
        assert!(!state.is_submitting());
    }
}

#[test]
fn unknown_completion_is_ignored() {
    init_logging();
    let (state, request_id) = submit(ProductList::ZuruMax, "Relojes");
    let before = state.clone();

    let state = done(
        state,
        request_id + 1,
        ClassificationResult::Category(Some("X".to_string())),
    );
    assert_eq!(state, before);

    let idle = done(FormState::new(), 1, ClassificationResult::Failed);
    assert_eq!(idle.error(), None);
}

#[test]
fn reset_during_submit_discards_late_result() {
    init_logging();
    let (state, request_id) = submit(ProductList::ChubbCarga, "Medicamentos");
    let (state, _) = update(state, Msg::ResetClicked);

    assert_eq!(state.view().screen, Screen::ChooseList);
    assert!(state.is_submitting());
    assert!(!state.view().submit_enabled);

    let (state, _) = update(state, Msg::ListSelected(ProductList::ZuruMax));
    let state = done(
        state,
        request_id,
        ClassificationResult::Category(Some("Farmacéuticos".to_string())),
    );

    assert!(!state.is_submitting());
    assert_eq!(state.result_label(), None);
    assert_eq!(state.error(), None);
    assert_eq!(state.selected_list(), Some(ProductList::ZuruMax));
}

#[test]
fn selecting_list_clears_previous_result() {
    init_logging();
    let (state, request_id) = submit(ProductList::ZuruMax, "Bicicletas");
    let state = done(
        state,
        request_id,
        ClassificationResult::Category(Some("Vehículos".to_string())),
    );
    let (state, _) = update(state, Msg::ResetClicked);
    let (state, _) = update(state, Msg::ListSelected(ProductList::HdiGlobal));

    assert_eq!(state.result_label(), None);
    assert_eq!(state.description(), "");
}
