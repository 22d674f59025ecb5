use crate::layout::viewport::SidebarLayout;
use leptos::prelude::*;

/// Sliding drawer. Hidden entirely while printing.
#[component]
pub fn Left(layout: Signal<SidebarLayout>, children: Children) -> impl IntoView {
    view! {
        <div
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--open=move || layout.get().open
            class:app-sidebar--square=move || !layout.get().panel_rounded
            class:hidden=move || !layout.get().panel_visible
            style:width=move || format!("{}px", layout.get().panel_width_px)
            style:transform=move || format!("translateX({}px)", layout.get().panel_offset_px)
        >
            {children()}
        </div>
    }
}
