//! Leptos Bottom Sheet Drag
//!
//! Touch dragging for a mobile bottom sheet.
//! The sheet moves between fully open (offset 0) and collapsed
//! (offset = sheet height - header height) and snaps on release.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Resting position of the sheet
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SheetPosition {
    Open,
    #[default]
    Collapsed,
}

/// Sheet state signals
#[derive(Clone, Copy)]
pub struct SheetSignals {
    pub dragging_read: ReadSignal<bool>,
    pub dragging_write: WriteSignal<bool>,
    /// Inline translateY in px while dragging (None = no inline transform)
    pub offset_read: ReadSignal<Option<f64>>,
    pub offset_write: WriteSignal<Option<f64>>,
    pub position_read: ReadSignal<SheetPosition>,
    pub position_write: WriteSignal<SheetPosition>,
    /// Touch start position and offset at touch start
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    pub initial_offset_read: ReadSignal<f64>,
    pub initial_offset_write: WriteSignal<f64>,
    /// Maximum downward travel measured at touch start
    pub max_down_read: ReadSignal<f64>,
    pub max_down_write: WriteSignal<f64>,
    header_px: f64,
}

/// Viewport width above which the sheet is a regular sidebar
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

pub fn create_sheet_signals(header_px: f64) -> SheetSignals {
    let (dragging_read, dragging_write) = signal(false);
    let (offset_read, offset_write) = signal(None::<f64>);
    let (position_read, position_write) = signal(SheetPosition::Collapsed);
    let (start_y_read, start_y_write) = signal(0i32);
    let (initial_offset_read, initial_offset_write) = signal(0f64);
    let (max_down_read, max_down_write) = signal(0f64);
    SheetSignals {
        dragging_read,
        dragging_write,
        offset_read,
        offset_write,
        position_read,
        position_write,
        start_y_read,
        start_y_write,
        initial_offset_read,
        initial_offset_write,
        max_down_read,
        max_down_write,
        header_px,
    }
}

/// Travel available to the sheet for a given rendered height
pub fn max_travel(sheet_height: f64, header_px: f64) -> f64 {
    (sheet_height - header_px).max(0.0)
}

/// Keep an offset inside [0, max_down]
pub fn clamp_offset(offset: f64, max_down: f64) -> f64 {
    offset.clamp(0.0, max_down.max(0.0))
}

/// Resting position after a release at `offset`
pub fn snap(offset: f64, max_down: f64) -> SheetPosition {
    if offset < max_down / 2.0 {
        SheetPosition::Open
    } else {
        SheetPosition::Collapsed
    }
}

impl SheetSignals {
    /// CSS transform for the sheet element (None = leave it to the stylesheet)
    pub fn transform(&self) -> Option<String> {
        if let Some(offset) = self.offset_read.get() {
            return Some(format!("translateY({}px)", offset));
        }
        match self.position_read.get() {
            SheetPosition::Open => Some("translateY(0)".to_string()),
            SheetPosition::Collapsed if self.max_down_read.get() > 0.0 => {
                Some(format!("translateY(calc(100% - {}px))", self.header_px))
            }
            SheetPosition::Collapsed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.position_read.get() == SheetPosition::Open
    }

    fn resting_offset(&self) -> f64 {
        match self.position_read.get_untracked() {
            SheetPosition::Open => 0.0,
            SheetPosition::Collapsed => self.max_down_read.get_untracked(),
        }
    }
}

/// Create touchstart handler for the drag handle.
/// `measure` returns the current rendered height of the sheet.
pub fn make_on_touchstart<M>(sheet: SheetSignals, measure: M) -> impl Fn(web_sys::TouchEvent) + Copy + 'static
where
    M: Fn() -> Option<f64> + Copy + 'static,
{
    move |ev: web_sys::TouchEvent| {
        let Some(touch) = ev.touches().get(0) else { return };
        if let Some(height) = measure() {
            sheet.max_down_write.set(max_travel(height, sheet.header_px));
        }
        let initial = sheet
            .offset_read
            .get_untracked()
            .unwrap_or_else(|| sheet.resting_offset());
        sheet.start_y_write.set(touch.client_y());
        sheet.initial_offset_write.set(initial);
        sheet.dragging_write.set(true);
    }
}

/// End drag and snap to the nearest resting position
pub fn end_drag(sheet: &SheetSignals) {
    if !sheet.dragging_read.get_untracked() {
        return;
    }
    sheet.dragging_write.set(false);
    let max_down = sheet.max_down_read.get_untracked();
    let current = sheet
        .offset_read
        .get_untracked()
        .unwrap_or(sheet.initial_offset_read.get_untracked());
    sheet.position_write.set(snap(current, max_down));
    sheet.offset_write.set(None);
}

fn non_passive() -> web_sys::AddEventListenerOptions {
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(false);
    opts
}

/// Bind document touchmove so the sheet follows the finger while dragging
pub fn bind_global_touchmove(sheet: SheetSignals) {
    use wasm_bindgen::closure::Closure;

    let on_touchmove = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        if !sheet.dragging_read.get_untracked() {
            return;
        }
        // Page scroll would fight the sheet
        ev.prevent_default();
        let Some(touch) = ev.touches().get(0) else { return };
        let delta = f64::from(touch.client_y() - sheet.start_y_read.get_untracked());
        let next = clamp_offset(
            sheet.initial_offset_read.get_untracked() + delta,
            sheet.max_down_read.get_untracked(),
        );
        sheet.offset_write.set(Some(next));
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            on_touchmove.as_ref().unchecked_ref(),
            &non_passive(),
        );
    }
    on_touchmove.forget();
}

/// Bind document touchend for snapping, plus touchmove and resize handling
pub fn bind_global_touchend(sheet: SheetSignals) {
    use wasm_bindgen::closure::Closure;

    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        end_drag(&sheet);
    });

    let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        if width > DESKTOP_BREAKPOINT_PX {
            sheet.dragging_write.set(false);
            sheet.offset_write.set(None);
            sheet.position_write.set(SheetPosition::Collapsed);
            sheet.max_down_write.set(0.0);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("touchend", on_touchend.as_ref().unchecked_ref());
        }
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_touchend.forget();
    on_resize.forget();

    bind_global_touchmove(sheet);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(-20.0, 300.0), 0.0);
        assert_eq!(clamp_offset(120.0, 300.0), 120.0);
        assert_eq!(clamp_offset(450.0, 300.0), 300.0);
        assert_eq!(clamp_offset(10.0, -5.0), 0.0);
    }

    #[test]
    fn test_snap_threshold() {
        // Half of the travel is the boundary
        assert_eq!(snap(0.0, 400.0), SheetPosition::Open);
        assert_eq!(snap(199.0, 400.0), SheetPosition::Open);
        assert_eq!(snap(200.0, 400.0), SheetPosition::Collapsed);
        assert_eq!(snap(400.0, 400.0), SheetPosition::Collapsed);
    }

    #[test]
    fn test_max_travel() {
        assert_eq!(max_travel(640.0, 140.0), 500.0);
        assert_eq!(max_travel(100.0, 140.0), 0.0);
    }
}
