//! Maximize-transition classification.
//!
//! Caller-side policy: given the window frame before and after a size
//! change, the monitor work area and the maximize flags, decide whether the
//! change warrants the maximize snap wobble. Pure function over rectangles -
//! the core never reads compositor state itself.

/// Axis-aligned rectangle in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Which axes a window is maximized along after the size change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MaximizeFlags {
    pub horizontal: bool,
    pub vertical: bool,
}

impl MaximizeFlags {
    pub const BOTH: Self = Self {
        horizontal: true,
        vertical: true,
    };
    pub const VERTICAL: Self = Self {
        horizontal: false,
        vertical: true,
    };
    pub const HORIZONTAL: Self = Self {
        horizontal: true,
        vertical: false,
    };
}

/// True when a size change into a maximized frame should trigger the snap.
///
/// Fully maximized windows always snap. Vertically-maximized windows (half
/// tiles) snap only when the vertical extent actually changed, or when a
/// horizontal edge toggled flush against the monitor edge - a plain
/// horizontal resize of an already-tiled window stays quiet.
pub fn maximize_should_wobble(
    flags: MaximizeFlags,
    source: Rect,
    target: Rect,
    monitor: Rect,
) -> bool {
    if flags.horizontal && flags.vertical {
        return true;
    }
    if !flags.vertical {
        return false;
    }

    source.y != target.y
        || source.bottom() != target.bottom()
        || (source.x == monitor.x) != (target.x == monitor.x)
        || (source.right() == monitor.right()) != (target.right() == monitor.right())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONITOR: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1920.0,
        height: 1080.0,
    };

    #[test]
    fn fully_maximized_always_wobbles() {
        let source = Rect::new(100.0, 100.0, 800.0, 600.0);
        let target = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        assert!(maximize_should_wobble(MaximizeFlags::BOTH, source, target, MONITOR));
    }

    #[test]
    fn not_maximized_never_wobbles() {
        let source = Rect::new(100.0, 100.0, 800.0, 600.0);
        let target = Rect::new(100.0, 100.0, 900.0, 600.0);
        assert!(!maximize_should_wobble(MaximizeFlags::default(), source, target, MONITOR));
        assert!(!maximize_should_wobble(MaximizeFlags::HORIZONTAL, source, target, MONITOR));
    }

    #[test]
    fn vertical_tile_wobbles_when_height_changes() {
        let source = Rect::new(0.0, 100.0, 960.0, 600.0);
        let target = Rect::new(0.0, 0.0, 960.0, 1080.0);
        assert!(maximize_should_wobble(MaximizeFlags::VERTICAL, source, target, MONITOR));
    }

    #[test]
    fn vertical_tile_wobbles_when_edge_snaps_to_monitor() {
        // Already full height, but the left edge lands flush on the monitor.
        let source = Rect::new(100.0, 0.0, 960.0, 1080.0);
        let target = Rect::new(0.0, 0.0, 960.0, 1080.0);
        assert!(maximize_should_wobble(MaximizeFlags::VERTICAL, source, target, MONITOR));

        // And the right edge leaving the monitor edge counts too.
        let source = Rect::new(960.0, 0.0, 960.0, 1080.0);
        let target = Rect::new(800.0, 0.0, 960.0, 1080.0);
        assert!(maximize_should_wobble(MaximizeFlags::VERTICAL, source, target, MONITOR));
    }

    #[test]
    fn vertical_tile_stays_quiet_on_interior_width_change() {
        // Full height both before and after, neither horizontal edge touches
        // the monitor edge: no snap.
        let source = Rect::new(100.0, 0.0, 800.0, 1080.0);
        let target = Rect::new(100.0, 0.0, 900.0, 1080.0);
        assert!(!maximize_should_wobble(MaximizeFlags::VERTICAL, source, target, MONITOR));
    }
}
