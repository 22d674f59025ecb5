use crate::layout::SidebarShell;
use crate::system::pages::chat::{ChatPage, ChatSession};
use crate::system::pages::demo_settings::DemoSettingsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = ChatSession::new();
    provide_context(session);

    let on_new_chat = Callback::new(move |_: ()| session.start_new());

    view! {
        <Router>
            <SidebarShell on_new_chat=on_new_chat>
                <Routes fallback=|| view! { <p>"Страница не найдена"</p> }>
                    <Route path=path!("/") view=ChatPage />
                    <Route path=path!("/demo/settings") view=DemoSettingsPage />
                </Routes>
            </SidebarShell>
        </Router>
    }
}
