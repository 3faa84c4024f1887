//! Click-outside dismissal for the result list.
//!
//! The front-end reports where the widget was last drawn and every pointer
//! press; the watcher decides whether the press hides the list.

use tracing::debug;

/// Axis-aligned screen rectangle in cells, half-open on the far edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    #[must_use]
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let right = u32::from(self.x) + u32::from(self.width);
        let bottom = u32::from(self.y) + u32::from(self.height);
        column >= self.x
            && u32::from(column) < right
            && row >= self.y
            && u32::from(row) < bottom
    }

    /// Smallest rectangle covering both.
    #[must_use]
    pub fn union(&self, other: &Bounds) -> Bounds {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (u32::from(self.x) + u32::from(self.width))
            .max(u32::from(other.x) + u32::from(other.width));
        let bottom = (u32::from(self.y) + u32::from(self.height))
            .max(u32::from(other.y) + u32::from(other.height));
        Bounds {
            x,
            y,
            width: u16::try_from(right - u32::from(x)).unwrap_or(u16::MAX),
            height: u16::try_from(bottom - u32::from(y)).unwrap_or(u16::MAX),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Owns the visibility flag of the result list.
#[derive(Debug, Clone, Default)]
pub struct DismissalWatcher {
    bounds: Bounds,
    visibility: Visibility,
}

impl DismissalWatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the widget (input and result list) was drawn.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn focus_input(&mut self) {
        self.visibility = Visibility::Visible;
    }

    /// Feed a pointer press. Returns true when it dismissed the list.
    pub fn on_press(&mut self, column: u16, row: u16) -> bool {
        if self.visibility == Visibility::Hidden || self.bounds.contains(column, row) {
            return false;
        }
        self.on_outside_interaction();
        true
    }

    fn on_outside_interaction(&mut self) {
        debug!("Press outside widget, hiding results");
        self.visibility = Visibility::Hidden;
    }
}
