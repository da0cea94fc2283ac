//! Leather back-wrap allowance
//!
//! How far leather has to fold around the back of a pad grows with pad size.
//! The base allowance is piecewise linear and continuous at its breakpoints:
//!
//! | pad size (mm) | base wrap (mm)                    |
//! |---------------|-----------------------------------|
//! | >= 45         | 3.2                               |
//! | 12 .. 45      | 1.2 + (size - 12) * 2.0 / 33.0    |
//! | 6 .. 12       | 1.0 + (size - 6) * 0.2 / 6.0      |
//! | < 6           | 1.0                               |

/// Leather back-wrap allowance in mm
///
/// `extra_base` is added to the base wrap before `multiplier` is applied.
/// Star-shaped pads pass their dart wrap bonus here so the star tips reach
/// further than a plain circle's rim would.
pub fn back_wrap(pad_size: f64, multiplier: f64, extra_base: f64) -> f64 {
    (base_wrap(pad_size) + extra_base) * multiplier
}

fn base_wrap(pad_size: f64) -> f64 {
    if pad_size >= 45.0 {
        3.2
    } else if pad_size >= 12.0 {
        1.2 + (pad_size - 12.0) * (2.0 / 33.0)
    } else if pad_size >= 6.0 {
        1.0 + (pad_size - 6.0) * (0.2 / 6.0)
    } else {
        1.0
    }
}
