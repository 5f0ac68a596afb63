//! Page state read by the renderers and the click handler.
//!
//! The page controller owns a [`ViewState`] and shares it with the diagram
//! through a [`ViewHandle`]. The diagram only reads it.

use std::sync::{Arc, RwLock};

use crate::error::ValidationError;
use crate::points::{SampledPoint, parse_points_json};

/// Smallest accepted radius.
pub const MIN_RADIUS: f64 = 1.0;
/// Largest accepted radius.
pub const MAX_RADIUS: f64 = 5.0;

/// Check whether `r` is a usable radius.
pub fn is_valid_radius(r: f64) -> bool {
    r.is_finite() && (MIN_RADIUS..=MAX_RADIUS).contains(&r)
}

/// Fallback radio group of discrete radius values.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusSelection {
    options: Vec<f64>,
    checked: Option<f64>,
}

impl RadiusSelection {
    /// Create a selection with the given options and nothing checked.
    pub fn new(options: impl IntoIterator<Item = f64>) -> Self {
        Self {
            options: options.into_iter().collect(),
            checked: None,
        }
    }

    /// Offered values.
    pub fn options(&self) -> &[f64] {
        &self.options
    }

    /// Currently checked value.
    pub fn checked(&self) -> Option<f64> {
        self.checked
    }

    /// Check a value. Returns false when it is not one of the options.
    pub fn check(&mut self, value: f64) -> bool {
        if self.options.contains(&value) {
            self.checked = Some(value);
            true
        } else {
            false
        }
    }

    /// Clear the selection.
    pub fn uncheck(&mut self) {
        self.checked = None;
    }
}

impl Default for RadiusSelection {
    fn default() -> Self {
        Self::new([1.0, 2.0, 3.0, 4.0, 5.0])
    }
}

/// The radius R together with its fallback radio group.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusState {
    /// Current radius; may be unset or out of range.
    pub value: Option<f64>,
    /// Fallback radio group consulted when `value` is unusable.
    pub radio: RadiusSelection,
}

impl RadiusState {
    /// Create a state holding `r` with the default radio group.
    pub fn new(r: f64) -> Self {
        Self {
            value: Some(r),
            radio: RadiusSelection::default(),
        }
    }

    /// Create a state with no radius set.
    pub fn unset() -> Self {
        Self {
            value: None,
            radio: RadiusSelection::default(),
        }
    }

    /// Resolve the radius to use, falling back to the checked radio value.
    pub fn resolve(&self) -> Result<f64, ValidationError> {
        if let Some(r) = self.value.filter(|r| is_valid_radius(*r)) {
            return Ok(r);
        }
        self.radio
            .checked()
            .filter(|r| is_valid_radius(*r))
            .ok_or(ValidationError::InvalidRadius)
    }
}

impl Default for RadiusState {
    fn default() -> Self {
        Self::new(3.0)
    }
}

/// Radius and classified points for one diagram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Radius and its fallback selection.
    pub radius: RadiusState,
    /// Classified points in arrival order.
    pub points: Vec<SampledPoint>,
}

impl ViewState {
    /// Create a state with the given radius and no points.
    pub fn new(radius: f64) -> Self {
        Self {
            radius: RadiusState::new(radius),
            points: Vec::new(),
        }
    }

    /// Resolve the radius to use; see [`RadiusState::resolve`].
    pub fn effective_radius(&self) -> Result<f64, ValidationError> {
        self.radius.resolve()
    }

    /// Replace the point list from the backend's JSON result list.
    ///
    /// Returns the number of points loaded.
    pub fn replace_points_json(&mut self, json: &str) -> usize {
        self.points = parse_points_json(json);
        self.points.len()
    }
}

/// Shared handle to a [`ViewState`].
///
/// The handle clones cheaply and can be moved into other tasks.
#[derive(Debug, Clone, Default)]
pub struct ViewHandle {
    state: Arc<RwLock<ViewState>>,
}

impl ViewHandle {
    /// Wrap a state in a new handle.
    pub fn new(state: ViewState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Read the state. Returns `None` if the lock is poisoned.
    pub fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        let state = self.state.read().ok()?;
        Some(f(&state))
    }

    /// Mutate the state. Returns `None` if the lock is poisoned.
    pub fn write<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        let mut state = self.state.write().ok()?;
        Some(f(&mut state))
    }
}
