use log::info;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

pub const TIME_SLOTS: [&str; 6] = ["09:00", "10:30", "13:00", "14:30", "16:00", "17:30"];

/// Slot `i` carries `selected` only when it is the one chosen slot.
pub fn slot_selected(selected: Option<usize>, i: usize) -> bool {
    selected == Some(i)
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    // A single index keeps the slot group single-select.
    let selected = use_state(|| None::<usize>);

    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Only a click on the backdrop itself closes; clicks bubbling up from
    // the dialog content do not.
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            let current = e.current_target().and_then(|t| t.dyn_into::<Element>().ok());
            if target.is_some() && target == current {
                on_close.emit(());
            }
        })
    };

    let onsubmit = {
        let on_close = props.on_close.clone();
        let selected = selected.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Booking confirmed for slot {:?}", (*selected).map(|i| TIME_SLOTS[i]));
            if let Some(window) = window() {
                let _ = window.alert_with_message("Booking Confirmed! Check your email.");
            }
            on_close.emit(());
        })
    };

    html! {
        <div id="booking-modal" class={classes!("modal", props.open.then_some("show"))} onclick={on_backdrop}>
            <div class="modal-content">
                <button type="button" class="close-modal" aria-label="Close" onclick={on_close_button}>{"×"}</button>
                <h2>{"Book a Call"}</h2>
                <form class="booking-form" {onsubmit}>
                    <input type="text" name="booking-name" placeholder="Your name" required=true />
                    <input type="email" name="booking-email" placeholder="Your email" required=true />
                    <input type="date" name="booking-date" required=true />
                    <div class="time-slots">
                        { for TIME_SLOTS.iter().enumerate().map(|(i, slot)| {
                            let onclick = {
                                let selected = selected.clone();
                                Callback::from(move |_: MouseEvent| selected.set(Some(i)))
                            };
                            html! {
                                <button
                                    type="button"
                                    key={*slot}
                                    class={classes!(slot_selected(*selected, i).then_some("selected"))}
                                    {onclick}
                                >
                                    { *slot }
                                </button>
                            }
                        }) }
                    </div>
                    <button type="submit" class="btn btn-primary">{"Confirm Booking"}</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(selected: Option<usize>) -> Vec<usize> {
        (0..TIME_SLOTS.len()).filter(|&i| slot_selected(selected, i)).collect()
    }

    #[test]
    fn nothing_marked_initially() {
        assert!(marked(None).is_empty());
    }

    #[test]
    fn choosing_another_slot_moves_the_mark() {
        for pick in [2, 4] {
            assert_eq!(marked(Some(pick)), vec![pick]);
        }
    }
}
