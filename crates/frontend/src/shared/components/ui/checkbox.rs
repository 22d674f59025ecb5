use crate::shared::icons::icon_sized;
use leptos::prelude::*;

/// Controlled checkbox with a styled box in place of the native input.
///
/// The box reflects `checked` only; `on_change` is called once per change event.
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let wrapper_class = move || format!("form__checkbox-wrapper {}", class.get().unwrap_or_default());

    view! {
        <label class=wrapper_class>
            <input
                type="checkbox"
                class="form__checkbox--hidden"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <div
                class="form__checkbox-box"
                class:form__checkbox-box--checked=move || checked.get()
            >
                {icon_sized("check", 12)}
            </div>
            <span class="form__checkbox-label">{label}</span>
        </label>
    }
}
