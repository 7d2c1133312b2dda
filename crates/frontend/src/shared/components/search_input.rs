use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Search box with a 300 ms debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value (for the active highlight).
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired with the debounced filter value.
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state, ahead of the debounce
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Cancel the previous timer if one is pending
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => log::warn!("setTimeout failed: {e:?}"),
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 260px; padding: 7px 32px 7px 10px; border: 1px solid #cbd5e1; border-radius: 6px; font-size: 14px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "#fff" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #64748b; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
