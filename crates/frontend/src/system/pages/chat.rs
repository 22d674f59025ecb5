use leptos::prelude::*;

/// Current chat session number, bumped by "New chat" in the sidebar.
#[derive(Clone, Copy)]
pub struct ChatSession(pub RwSignal<u32>);

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self(RwSignal::new(1))
    }

    pub fn start_new(&self) {
        self.0.update(|n| *n += 1);
        log::info!("new chat session #{}", self.0.get_untracked());
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = use_context::<ChatSession>().expect("ChatSession not found");

    view! {
        <div class="chat-page">
            <h2>{move || format!("Чат #{}", session.0.get())}</h2>
            <p class="chat-page__hint">"Сообщений пока нет"</p>
        </div>
    }
}
