// Pure pointer/keyboard helpers, kept free of web_sys so host tests can include them.

/// Turns absolute pointer x positions into per-event deltas for one gesture.
///
/// A gesture belongs to the pointer that started it; events from any other
/// pointer (a second finger, a pen) are ignored until it ends.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragTracker {
    active: Option<ActivePointer>,
}

#[derive(Clone, Copy, Debug)]
struct ActivePointer {
    id: i32,
    last_x: f64,
}

impl DragTracker {
    /// Returns `false` if another pointer already owns the gesture.
    #[inline]
    pub fn begin(&mut self, pointer_id: i32, x: f64) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(ActivePointer {
            id: pointer_id,
            last_x: x,
        });
        true
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Movement since the previous call, or `None` for a pointer that does
    /// not own the gesture.
    #[inline]
    pub fn delta(&mut self, pointer_id: i32, x: f64) -> Option<f64> {
        let p = self.active.as_mut().filter(|p| p.id == pointer_id)?;
        let dx = x - p.last_x;
        p.last_x = x;
        Some(dx)
    }

    /// Returns whether this pointer's gesture was in progress.
    #[inline]
    pub fn end(&mut self, pointer_id: i32) -> bool {
        match self.active {
            Some(p) if p.id == pointer_id => {
                self.active = None;
                true
            }
            _ => false,
        }
    }
}

// ---------------- Keyboard ----------------

/// Where a keydown came from, as far as deciding who handles it.
#[derive(Default, Clone, Copy, Debug)]
pub struct KeyContext<'a> {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    /// Tag name of the focused element receiving the event, if any.
    pub target_tag: Option<&'a str>,
    pub target_editable: bool,
}

/// Shortcuts and typing in form fields stay with the browser and page.
pub fn carousel_owns_key(ctx: &KeyContext) -> bool {
    if ctx.ctrl || ctx.meta || ctx.alt || ctx.target_editable {
        return false;
    }
    !matches!(
        ctx.target_tag,
        Some(tag) if ["INPUT", "TEXTAREA", "SELECT"]
            .iter()
            .any(|t| tag.eq_ignore_ascii_case(t))
    )
}

#[inline]
pub fn step_for_key(key: &str) -> Option<i32> {
    match key {
        "ArrowRight" | "l" | "L" => Some(1),
        "ArrowLeft" | "h" | "H" => Some(-1),
        _ => None,
    }
}

/// Digit keys jump straight to an item ("1" is the first).
#[inline]
pub fn index_for_digit(key: &str, item_count: usize) -> Option<usize> {
    let digit = key.parse::<usize>().ok()?;
    (1..=item_count).contains(&digit).then(|| digit - 1)
}
