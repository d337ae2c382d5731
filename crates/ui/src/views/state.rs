use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(resource: &Resource<T>) -> ViewState<T> {
    match resource.value().read().as_ref() {
        Some(data) => ViewState::Ready(data.clone()),
        None => ViewState::Loading,
    }
}
