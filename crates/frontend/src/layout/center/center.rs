use crate::layout::viewport::SidebarLayout;
use leptos::prelude::*;

#[component]
pub fn Center(layout: Signal<SidebarLayout>, children: Children) -> impl IntoView {
    view! {
        <div
            data-zone="center"
            class="app-main"
            style:margin-left=move || format!("{}px", layout.get().content_margin_px)
        >
            {children()}
        </div>
    }
}
