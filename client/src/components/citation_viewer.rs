//! Modal simulating a view of the cited paragraph inside its source PDF.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stateless: renders from the parent's selection and reports closes through
//! `on_close`. While open it locks page scrolling and closes on Escape; both
//! side effects are undone on close and on unmount.

use leptos::prelude::*;

use crate::state::chat::Citation;
use crate::util::mock_document::{self, COURT_NAME, Paragraph, ParagraphBody};
use crate::util::{body_scroll, display, external_link, keys};

/// Document modal for the selected citation. Renders nothing when no
/// citation is selected.
#[component]
pub fn CitationViewer(#[prop(into)] citation: Signal<Option<Citation>>, on_close: Callback<()>) -> impl IntoView {
    Effect::new(move || {
        body_scroll::sync(citation.with(Option::is_some));
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if keys::is_close_key(&ev.key(), citation.with_untracked(Option::is_some)) {
                ev.prevent_default();
                on_close.run(());
            }
        });
        on_cleanup(move || handle.remove());
    }

    on_cleanup(body_scroll::unlock);

    view! {
        {move || citation.get().map(|c| view! { <ViewerDialog citation=c on_close/> })}
    }
}

#[component]
fn ViewerDialog(citation: Citation, on_close: Callback<()>) -> impl IntoView {
    let title = display::source_title(&citation.source);
    let caption = display::paragraph_caption(citation.paragraph);
    let subtitle = format!("Legal Document - {caption}");
    let paragraphs = mock_document::paragraphs(&citation);
    let link = citation.link.clone();

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_download = move |_| {
        if !external_link::open_in_new_tab(&link) {
            leptos::logging::warn!("download skipped: no link for citation");
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div class="dialog viewer" on:click=move |ev| ev.stop_propagation()>
                <div class="viewer__header">
                    <div class="viewer__heading">
                        <div class="viewer__icon" aria-hidden="true">"📄"</div>
                        <div>
                            <h3 class="viewer__title">{title.clone()}</h3>
                            <p class="viewer__subtitle">{subtitle}</p>
                        </div>
                    </div>
                    <button class="viewer__close" on:click=on_close_click title="Close document">
                        "✕"
                    </button>
                </div>

                <div class="viewer__canvas">
                    <div class="viewer__page">
                        <div class="viewer__page-head">
                            <h2>{title}</h2>
                            <p>{COURT_NAME}</p>
                        </div>
                        <div class="viewer__paragraphs">
                            {paragraphs.into_iter().map(render_paragraph).collect_view()}
                        </div>
                    </div>
                </div>

                <div class="viewer__footer">
                    <div class="viewer__status">
                        <span>{caption}</span>
                        <span>"Original PDF available"</span>
                    </div>
                    <button class="btn btn--primary" on:click=on_download>
                        "Download PDF"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_paragraph(paragraph: Paragraph) -> impl IntoView {
    let highlighted = paragraph.is_highlighted();
    let number = format!("{}.", paragraph.number);
    let body = match paragraph.body {
        ParagraphBody::Plain(text) => view! { <span>{text}</span> }.into_any(),
        ParagraphBody::Highlighted { lead, quote, trail } => view! {
            <span>
                {lead}" "<mark class="viewer__mark">{quote}</mark>" "{trail}
            </span>
        }
        .into_any(),
    };

    view! {
        <div class="viewer__paragraph" class:viewer__paragraph--highlighted=highlighted>
            <p>
                <strong>{number}</strong>" "{body}
            </p>
        </div>
    }
}
