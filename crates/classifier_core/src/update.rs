use crate::{Effect, FormState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::ListSelected(list) => {
            state.select_list(list);
            Vec::new()
        }
        Msg::DescriptionChanged(text) => {
            state.set_description(text);
            Vec::new()
        }
        Msg::ResetClicked => {
            state.reset();
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The submit affordance is disabled while a request is in flight.
            if state.is_submitting() {
                return (state, Vec::new());
            }
            match state.validate() {
                Ok(list) => {
                    let (request_id, request) = state.begin_submit(list);
                    vec![Effect::Classify {
                        request_id,
                        request,
                    }]
                }
                Err(err) => {
                    state.reject(err);
                    Vec::new()
                }
            }
        }
        Msg::ClassificationDone { request_id, result } => {
            state.finish_submit(request_id, result);
            Vec::new()
        }
    };

    (state, effects)
}
