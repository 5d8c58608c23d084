//! Chat pane: conversation history, citation rows, and the question input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `ChatState` signal for the page. Submissions append the user turn
//! immediately and resolve through `net::assistant` after the simulated delay.
//! The citation viewer receives the selection as a read-only memo.

use leptos::prelude::*;

use crate::components::citation_viewer::CitationViewer;
use crate::state::chat::{ChatMessage, ChatState, Citation, MessageBody};
use crate::util::{clock, display, keys};

/// Chat interface with message list, loading indicator, and input row.
#[component]
pub fn ChatInterface() -> impl IntoView {
    let chat = RwSignal::new(ChatState::with_welcome(clock::now_ms()));
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Pending replies check this before touching state so a reply landing
    // after unmount is dropped.
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Opening or closing a citation leaves this unchanged.
    let transcript = Memo::new(move |_| chat.with(ChatState::transcript));

    Effect::new(move || {
        transcript.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    Effect::new(move || {
        let _ = input.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = textarea_ref.get() {
                crate::util::textarea::fit_to_content(&el);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let mut accepted = false;
        chat.update(|c| accepted = c.submit(&text, clock::now_ms()));
        if !accepted {
            return;
        }
        input.set(String::new());
        leptos::logging::log!("question submitted ({} chars)", text.len());

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let reply = crate::net::assistant::ask(text).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    leptos::logging::warn!("assistant reply dropped: chat interface unmounted");
                    return;
                }
                let _ = chat.try_update(|c| c.receive_reply(reply, clock::now_ms()));
            });
        }
    };

    let on_keydown = {
        let do_send = do_send.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if keys::is_submit_key(&ev.key(), ev.shift_key()) {
                ev.prevent_default();
                do_send();
            }
        }
    };
    let on_click = move |_| do_send();

    let on_citation = Callback::new(move |citation: Citation| {
        leptos::logging::log!("opening citation: {} paragraph {}", citation.source, citation.paragraph);
        chat.update(|c| c.open_citation(citation));
    });
    let on_viewer_close = Callback::new(move |()| chat.update(ChatState::close_viewer));
    let selected = Memo::new(move |_| chat.with(|c| c.viewer().selected().cloned()));

    let can_send = move || chat.with(|c| c.can_submit(&input.get()));

    view! {
        <div class="chat">
            <div class="chat__messages" node_ref=messages_ref>
                {move || {
                    transcript
                        .get()
                        .into_iter()
                        .map(|msg| view! { <MessageRow message=msg on_citation=on_citation/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="chat__input-area">
                <div class="chat__input-row">
                    <textarea
                        class="chat__input"
                        rows="1"
                        placeholder="Ask a legal question..."
                        node_ref=textarea_ref
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    ></textarea>
                    <button class="btn btn--primary chat__send" on:click=on_click disabled=move || !can_send()>
                        "Send"
                    </button>
                </div>
                <div class="chat__hint">"Press Enter to send, Shift+Enter for new line"</div>
            </div>
        </div>

        <CitationViewer citation=selected on_close=on_viewer_close/>
    }
}

/// One bubble in the transcript.
#[component]
fn MessageRow(message: ChatMessage, on_citation: Callback<Citation>) -> impl IntoView {
    match message.body {
        MessageBody::User { content } => view! {
            <div class="chat__row chat__row--user">
                <div class="chat__bubble chat__bubble--user">
                    <div class="chat__byline chat__byline--user">
                        <span class="chat__role">"You"</span>
                        <span class="chat__name">"User"</span>
                    </div>
                    <p class="chat__text">{content}</p>
                </div>
                <div class="chat__avatar" aria-hidden="true">"👤"</div>
            </div>
        }
        .into_any(),
        MessageBody::Assistant { content, citations } => view! {
            <div class="chat__row chat__row--assistant">
                <div class="chat__avatar" aria-hidden="true">"⚖"</div>
                <div class="chat__bubble">
                    <div class="chat__byline">
                        <span class="chat__role">"Lexi"</span>
                        <span class="chat__name">"Legal Assistant"</span>
                        <span class="chat__badge">"Answered"</span>
                    </div>
                    <p class="chat__text">{content}</p>
                    {(!citations.is_empty()).then(move || view! { <CitationList citations on_citation/> })}
                </div>
            </div>
        }
        .into_any(),
        MessageBody::Loading => view! {
            <div class="chat__row chat__row--assistant">
                <div class="chat__avatar" aria-hidden="true">"⚖"</div>
                <div class="chat__bubble chat__bubble--loading">
                    <div class="chat__byline">
                        <span class="chat__name">"Lexi"</span>
                        <span class="chat__role">"Researching..."</span>
                    </div>
                    <div class="chat__loading">
                        <span class="chat__dot"></span>
                        <span class="chat__dot chat__dot--2"></span>
                        <span class="chat__dot chat__dot--3"></span>
                        <span class="chat__loading-text">"Analyzing legal precedents..."</span>
                    </div>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn CitationList(citations: Vec<Citation>, on_citation: Callback<Citation>) -> impl IntoView {
    view! {
        <div class="citations">
            <h4 class="citations__heading">"Citations"</h4>
            {citations
                .into_iter()
                .map(|citation| {
                    let title = display::source_title(&citation.source);
                    let paragraph = citation.paragraph;
                    let quote = format!("\"{}\"", citation.text);
                    view! {
                        <div class="citations__item" on:click=move |_| on_citation.run(citation.clone())>
                            <div class="citations__icon" aria-hidden="true">"📄"</div>
                            <div class="citations__body">
                                <blockquote class="citations__quote">{quote}</blockquote>
                                <div class="citations__meta">
                                    <span class="citations__source">{title}</span>
                                    <span>"•"</span>
                                    <span>{format!("Paragraph {paragraph}")}</span>
                                    <span>"•"</span>
                                    <span class="citations__open">"Click to view document"</span>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
