//! Landing page: product header plus the chat interface.

use leptos::prelude::*;

use crate::components::chat_interface::ChatInterface;

/// Static page shell. Holds no state; the chat interface owns the conversation.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="home__header">
                <div class="home__header-inner">
                    <div class="home__brand">
                        <div class="home__logo" aria-hidden="true">"⚖"</div>
                        <h1 class="home__title">"Lexi Legal Assistant"</h1>
                    </div>
                    <div class="home__meta">
                        <span class="home__tagline">"Legal Research Made Simple"</span>
                        <button class="btn btn--ghost home__settings" title="Settings">
                            "⚙"
                        </button>
                    </div>
                </div>
            </header>

            <main class="home__main">
                <ChatInterface/>
            </main>
        </div>
    }
}
