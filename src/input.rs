//! Input-backend boundary
//!
//! The core never polls devices itself. Human controllers look up a named
//! analog axis through this trait each tick; the embedder maps it onto
//! whatever input backend it uses.

/// Named analog axis lookup, typically in [-1, 1]
pub trait InputAxes {
    /// Current value of the named axis; 0.0 when unknown
    fn axis(&self, name: &str) -> f32;
}

/// Axis name for a player's vertical control
pub fn vertical_axis_name(player_id: u32) -> String {
    format!("Vertical_P{player_id}")
}

/// Input source with no axes; every lookup reads 0.0.
///
/// Used for AI-vs-AI demo matches where no human input exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAxes;

impl InputAxes for NullAxes {
    fn axis(&self, _name: &str) -> f32 {
        0.0
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::HashMap;

    /// Fixed axis values for tests
    #[derive(Debug, Clone, Default)]
    pub struct FixedAxes {
        values: HashMap<String, f32>,
    }

    impl FixedAxes {
        pub fn with(name: &str, value: f32) -> Self {
            let mut axes = Self::default();
            axes.values.insert(name.to_string(), value);
            axes
        }
    }

    impl InputAxes for FixedAxes {
        fn axis(&self, name: &str) -> f32 {
            self.values.get(name).copied().unwrap_or(0.0)
        }
    }
}
