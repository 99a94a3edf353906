use serde::{Deserialize, Serialize};

/// Tunables for the sketch toy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Canvas units covered by one forward/backward step
    pub move_distance: f64,
    /// Degrees turned by one left/right step
    pub rotate_angle: f64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            move_distance: 20.0,
            rotate_angle: 15.0,
        }
    }
}

/// One drawn line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// The drawing turtle: a position, a heading, and a pen
///
/// Heading is in degrees, 0 pointing along +x, counter-clockwise positive.
/// Moves with the pen down leave a stroke; pen-up moves only translate.
#[derive(Debug, Clone, PartialEq)]
pub struct Turtle {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub pen_down: bool,
    strokes: Vec<Stroke>,
}

impl Turtle {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            heading: 0.0,
            pen_down: true,
            strokes: Vec::new(),
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Step along the current heading
    pub fn forward(&mut self, distance: f64) {
        let rad = self.heading.to_radians();
        let nx = self.x + rad.cos() * distance;
        let ny = self.y + rad.sin() * distance;

        if self.pen_down {
            self.strokes.push(Stroke {
                x1: self.x,
                y1: self.y,
                x2: nx,
                y2: ny,
            });
        }
        self.x = nx;
        self.y = ny;
    }

    /// Step against the current heading
    pub fn backward(&mut self, distance: f64) {
        self.forward(-distance);
    }

    pub fn turn_left(&mut self, degrees: f64) {
        self.heading = (self.heading + degrees).rem_euclid(360.0);
    }

    pub fn turn_right(&mut self, degrees: f64) {
        self.heading = (self.heading - degrees).rem_euclid(360.0);
    }

    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    /// Wipe the drawing and return home: origin, heading 0, pen down
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.x = 0.0;
        self.y = 0.0;
        self.heading = 0.0;
        self.pen_down = true;
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}
