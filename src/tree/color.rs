//! Depth-based greyscale coloring

use super::node::Node;

/// Default lightness drop per tree level, in percent.
pub const DEFAULT_COLOR_STEP: u8 = 4;

/// Assigns each node an `hsl` grey that darkens with depth.
///
/// The root sits one step below white. Lightness is clamped at 0, so a
/// branch deeper than `100 / step` levels bottoms out at black. The step is
/// kept within `1..=100` so every level is darker than the one above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    step: u8,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            step: DEFAULT_COLOR_STEP,
        }
    }
}

impl ColorScheme {
    pub fn new(step: u8) -> Self {
        Self {
            step: step.clamp(1, 100),
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    /// Lightness percentage for a node at `depth` (root = 0).
    pub fn lightness(&self, depth: usize) -> u8 {
        let intensity = (depth as u64 + 1).saturating_mul(u64::from(self.step));
        100u64.saturating_sub(intensity) as u8
    }

    pub fn color_for_depth(&self, depth: usize) -> String {
        format!("hsl(0, 0%, {}%)", self.lightness(depth))
    }

    /// Color every node in the tree rooted at `root`.
    pub fn apply(&self, root: &mut Node) {
        self.apply_at(root, 0);
    }

    fn apply_at(&self, node: &mut Node, depth: usize) {
        node.color = Some(self.color_for_depth(depth));
        for child in &mut node.children {
            self.apply_at(child, depth + 1);
        }
    }
}
