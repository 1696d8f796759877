use rgb::{RGB, RGB8};

/// Red end of the scale, `#FF6961`.
pub const WARM: RGB8 = RGB8 {
    r: 255,
    g: 105,
    b: 97,
};

/// Blue end of the scale, `#B3EBF2`.
pub const COOL: RGB8 = RGB8 {
    r: 179,
    g: 235,
    b: 242,
};

/// Blend `start` and `end` channel by channel, truncating toward zero.
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate along the same line.
pub fn interpolate(t: f64, start: RGB8, end: RGB8) -> RGB<i32> {
    let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t) as i32;
    RGB::new(
        channel(start.r, end.r),
        channel(start.g, end.g),
        channel(start.b, end.b),
    )
}

/// Formats a color the way CSS expects it, e.g. `rgb(179, 235, 242)`.
pub fn css_rgb(color: RGB<i32>) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

/// Two-color gradient. Runs from [`COOL`] to [`WARM`], or the other way round when reversed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScaler {
    start: RGB8,
    end: RGB8,
}

impl ColorScaler {
    pub fn new(reverse: bool) -> Self {
        if reverse {
            Self {
                start: WARM,
                end: COOL,
            }
        } else {
            Self {
                start: COOL,
                end: WARM,
            }
        }
    }

    pub fn start(&self) -> RGB8 {
        self.start
    }

    pub fn end(&self) -> RGB8 {
        self.end
    }

    pub fn interpolate(&self, normalized_value: f64) -> RGB<i32> {
        interpolate(normalized_value, self.start, self.end)
    }

    /// Color for a value already in `[0, 1]`, as `rgb(r, g, b)`.
    pub fn get_color(&self, normalized_value: f64) -> String {
        css_rgb(self.interpolate(normalized_value))
    }
}
