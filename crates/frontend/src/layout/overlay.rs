use crate::layout::left::actions::SidebarHandlers;
use crate::layout::viewport::SidebarLayout;
use leptos::prelude::*;

/// Scrim behind the open drawer in narrow mode. Clicking it closes the drawer.
#[component]
pub fn Overlay(layout: Signal<SidebarLayout>, handlers: SidebarHandlers) -> impl IntoView {
    view! {
        <Show when=move || layout.get().overlay_visible>
            <div
                class="app-sidebar-overlay"
                on:click=move |ev: leptos::ev::MouseEvent| handlers.toggle(&ev)
            ></div>
        </Show>
    }
}
