/// Narrowest window width the dashboard supports, in CSS pixels.
pub const MIN_SUPPORTED_WIDTH_PX: f64 = 1024.0;

/// Blocking-overlay state for undersized viewports.
///
/// Dismissal is sticky for the session: once the warning is closed it does
/// not re-arm, even if the window later shrinks below the threshold again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGate {
    threshold_px: f64,
    dismissed: bool,
}

impl Default for ViewportGate {
    fn default() -> Self {
        Self::new(MIN_SUPPORTED_WIDTH_PX)
    }
}

impl ViewportGate {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            dismissed: false,
        }
    }

    pub fn is_blocked(&self, width_px: f64) -> bool {
        !self.dismissed && width_px < self.threshold_px
    }

    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn dismissed(&self) -> bool {
        self.dismissed
    }
}

/// Injected window-size capability, so the gate can be driven in tests
/// without a real window. The wasm implementation lives with the UI and
/// wraps resize listeners; `subscribe` must deliver the current width
/// immediately and then once per resize until `unsubscribe`.
pub trait ViewportObserver {
    fn subscribe(&mut self, on_width: Box<dyn Fn(f64)>);
    fn unsubscribe(&mut self);
}

/// Fixed-width observer used on native targets and in tests.
pub struct FixedViewport {
    width_px: f64,
    listener: Option<Box<dyn Fn(f64)>>,
}

impl FixedViewport {
    pub fn new(width_px: f64) -> Self {
        Self {
            width_px,
            listener: None,
        }
    }

    /// Simulate a window resize.
    pub fn set_width(&mut self, width_px: f64) {
        self.width_px = width_px;
        if let Some(listener) = &self.listener {
            listener(width_px);
        }
    }
}

impl ViewportObserver for FixedViewport {
    fn subscribe(&mut self, on_width: Box<dyn Fn(f64)>) {
        on_width(self.width_px);
        self.listener = Some(on_width);
    }

    fn unsubscribe(&mut self) {
        self.listener = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn blocks_below_threshold_only() {
        let gate = ViewportGate::default();
        assert!(gate.is_blocked(700.0));
        assert!(!gate.is_blocked(1024.0));
        assert!(!gate.is_blocked(1600.0));
    }

    #[test]
    fn dismissal_is_sticky_across_resizes() {
        let mut gate = ViewportGate::default();
        assert!(gate.is_blocked(700.0));
        gate.dismiss();
        assert!(!gate.is_blocked(700.0));
        // Shrinking further never re-arms the overlay.
        assert!(!gate.is_blocked(320.0));
        assert!(gate.dismissed());
    }

    #[test]
    fn observer_delivers_current_width_then_resizes() {
        let mut viewport = FixedViewport::new(700.0);
        let widths = Rc::new(RefCell::new(Vec::new()));
        {
            let widths = Rc::clone(&widths);
            viewport.subscribe(Box::new(move |w| widths.borrow_mut().push(w)));
        }
        viewport.set_width(1280.0);
        viewport.unsubscribe();
        viewport.set_width(500.0);
        assert_eq!(widths.borrow().as_slice(), &[700.0, 1280.0]);
    }

    #[test]
    fn gate_driven_by_observer() {
        let mut viewport = FixedViewport::new(700.0);
        let gate = Rc::new(RefCell::new(ViewportGate::default()));
        let blocked = Rc::new(RefCell::new(false));
        {
            let gate = Rc::clone(&gate);
            let blocked = Rc::clone(&blocked);
            viewport.subscribe(Box::new(move |w| {
                *blocked.borrow_mut() = gate.borrow().is_blocked(w);
            }));
        }
        assert!(*blocked.borrow());
        gate.borrow_mut().dismiss();
        viewport.set_width(600.0);
        assert!(!*blocked.borrow());
    }
}
