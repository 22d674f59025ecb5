//! Drawer contents: branding, menu actions, auto-approve toggle and external links.

use crate::layout::global_context::use_settings_store;
use crate::layout::left::actions::{BrowserHost, NavAction, RouterNavigate, SidebarHandlers};
use crate::layout::use_shell_config;
use crate::shared::components::ui::checkbox::Checkbox;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Sidebar(handlers: SidebarHandlers) -> impl IntoView {
    let store = use_settings_store();
    let navigator = RouterNavigate(use_navigate());
    let host = BrowserHost;

    let company_url = use_shell_config().company_url;

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__logo app-sidebar__logo--spacer"></div>
            <a
                class="app-sidebar__company-link"
                href=company_url
                target="_blank"
                rel="noopener noreferrer"
            >
                "🚀 AST-SOFTPRO.RU"
            </a>

            {NavAction::all().into_iter().map(|action| {
                let navigator = navigator.clone();
                view! {
                    <div
                        class="app-sidebar__item"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            handlers.nav(&ev, action, &navigator, &host)
                        }
                    >
                        <div class="app-sidebar__item-content">
                            {icon(action.icon())}
                            <span>{action.label()}</span>
                        </div>
                    </div>
                }
            }).collect_view()}

            <Checkbox
                label="Auto Approve"
                class="app-sidebar__checkbox"
                checked=Signal::derive(move || store.auto_approve_checked())
                on_change=Callback::new(move |value: bool| handlers.auto_approve_changed(value))
            />

            <div
                class="app-sidebar__github"
                title="Открыть GitHub репозиторий"
                on:click=move |ev: leptos::ev::MouseEvent| handlers.open_repository(&ev, &host)
            >
                <div class="app-sidebar__github-icon">"🐙"</div>
                <div class="app-sidebar__github-text">"GitHub" <br /> "Repository"</div>
            </div>

            <div class="app-sidebar__qr"></div>
        </div>
    }
}
