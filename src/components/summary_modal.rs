//! Summary Modal
//!
//! Shows the chat-generated summary of the report being edited, with a
//! spinner while the request is still in flight.

use leptos::prelude::*;

#[component]
pub fn SummaryModal(
    open: Signal<bool>,
    /// Sanitized summary; `None` while the request is in flight
    summary: Signal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal modal--wide">
                    <div class="modal__header">
                        <h4>"Summary of Report"</h4>
                    </div>
                    <div class="modal__body">
                        {move || match summary.get() {
                            Some(text) => view! {
                                <div class="summary-body" inner_html=text></div>
                            }.into_any(),
                            None => view! {
                                <div class="loader">"Generating summary..."</div>
                            }.into_any(),
                        }}
                    </div>
                    <div class="modal__footer">
                        <button type="button" class="btn btn--subtle" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
