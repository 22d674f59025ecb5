use crate::layout::left::actions::SidebarHandlers;
use crate::layout::viewport::SidebarLayout;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Fixed button in the top-left corner that shows or hides the drawer.
#[component]
pub fn Opener(layout: Signal<SidebarLayout>, handlers: SidebarHandlers) -> impl IntoView {
    let is_open = move || layout.get().open;

    view! {
        <button
            class="app-sidebar-opener"
            on:click=move |ev: leptos::ev::MouseEvent| handlers.toggle(&ev)
            title=move || if is_open() { "Скрыть навигацию" } else { "Показать навигацию" }
        >
            <div class="app-sidebar__logo"></div>
            <Show when=move || layout.get().opener_icon_visible>
                <span
                    class="app-sidebar-opener__chevron"
                    style:transform=move || if is_open() { "rotate(180deg)" } else { "rotate(0)" }
                >
                    {icon("chevron-right")}
                </span>
            </Show>
        </button>
    }
}
