//! Events dispatched from the host to section widgets

use serde::Serialize;

use crate::env::Timer;

/// A point in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a component container
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether `point` lies inside, edges included
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Keys the viewers react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Space,
    /// Digit keys `1`..=`9`
    Digit(u8),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            " " | "Space" | "Spacebar" => Key::Space,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c @ '1'..='9'), None) => Key::Digit(c as u8 - b'0'),
                    _ => Key::Other,
                }
            }
        }
    }
}

/// Host event delivered to every mounted section
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// First client-side mount finished; the hydration gate may open
    Hydrated,
    /// A timer started through the environment fired
    Timer(Timer),
    /// The document scrolled; read the offset from the environment
    Scroll,
    /// The viewport resized; read the size from the environment
    Resize,
    KeyDown(Key),
    PointerDown(Point),
    PointerMove(Point),
    /// An image failed to load
    ImageError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key_name("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_key_name(" "), Key::Space);
        assert_eq!(Key::from_key_name("Escape"), Key::Escape);
        assert_eq!(Key::from_key_name("3"), Key::Digit(3));
        assert_eq!(Key::from_key_name("0"), Key::Other);
        assert_eq!(Key::from_key_name("12"), Key::Other);
        assert_eq!(Key::from_key_name("a"), Key::Other);
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(110.0, 60.0)));
        assert!(!rect.contains(Point::new(9.9, 30.0)));
        assert!(!rect.contains(Point::new(50.0, 61.0)));
    }
}
