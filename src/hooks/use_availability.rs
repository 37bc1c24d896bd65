use dioxus::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use super::api::{check_code, Availability};
use crate::CHECKER_BASE_URL;

/// Runs the availability lookup at most once for the lifetime of the calling
/// view. The spawned task is owned by the component scope, so an unmount
/// drops it before a late response can write anywhere.
///
/// `None` means no redeem code was present in the URL; no lookup is
/// performed and the result stays `Pending`.
pub fn use_availability(code: Option<String>) -> Signal<Availability> {
    let mut availability = use_signal(|| Availability::Pending);

    // One lookup per mount, no retry.
    let started = use_hook(|| Rc::new(Cell::new(false)));

    use_effect(move || {
        if started.get() {
            return;
        }
        started.set(true);

        let Some(id) = code.clone() else {
            return;
        };

        spawn(async move {
            let result = check_code(CHECKER_BASE_URL, &id).await;
            availability.set(result);
        });
    });

    availability
}
