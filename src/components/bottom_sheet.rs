//! Bottom Sheet Component
//!
//! On narrow screens the sidebar becomes a sheet dragged by its handle.
//! Desktop layouts ignore the drag state (the stylesheet hides the handle).

use leptos::prelude::*;
use leptos_sheet_drag::make_on_touchstart;

use crate::context::use_app_context;

#[component]
pub fn BottomSheet(children: Children) -> impl IntoView {
    let sheet = use_app_context().sheet;
    let sheet_ref = NodeRef::<leptos::html::Aside>::new();

    let measure = move || sheet_ref.get_untracked().map(|el| f64::from(el.offset_height()));
    let on_touchstart = make_on_touchstart(sheet, measure);

    // Content only scrolls once the sheet is open on mobile
    let content_overflow = move || {
        if sheet.max_down_read.get() <= 0.0 {
            ""
        } else if sheet.is_open() {
            "auto"
        } else {
            "hidden"
        }
    };

    view! {
        <aside
            id="attractions-sidebar"
            class="attractions-sidebar"
            class:is-open=move || sheet.is_open()
            class:is-dragging=move || sheet.dragging_read.get()
            style:transform=move || sheet.transform().unwrap_or_default()
            node_ref=sheet_ref
        >
            <div id="drag-handle" class="drag-handle" on:touchstart=on_touchstart>
                <span class="drag-handle-bar"></span>
            </div>
            <div id="content-area" class="content-area" style:overflow-y=content_overflow>
                {children()}
            </div>
        </aside>
    }
}
