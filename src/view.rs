use std::rc::Rc;

use yew::functional::Reducible;

use crate::theme::Theme;

/// Edge length of the cursor follower marker, in CSS pixels.
pub const CURSOR_SIZE_PX: f64 = 32.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
}

impl Pointer {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x: x.max(0),
            y: y.max(0),
        }
    }

    /// Top-left corner that centres the follower marker on this pointer.
    pub fn cursor_target(self) -> (f64, f64) {
        let half = CURSOR_SIZE_PX / 2.0;
        (f64::from(self.x) - half, f64::from(self.y) - half)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    ToggleTheme,
    PointerMoved(Pointer),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub theme: Theme,
    pub pointer: Pointer,
}

impl ViewState {
    pub fn apply(self, action: ViewAction) -> Self {
        match action {
            ViewAction::ToggleTheme => Self {
                theme: self.theme.toggled(),
                ..self
            },
            ViewAction::PointerMoved(pointer) => Self { pointer, ..self },
        }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
