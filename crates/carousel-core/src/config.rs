//! Carousel configuration and its validation.
//!
//! [`CarouselConfig`] is the user-facing option set. It is checked once at
//! engine construction and split into the immutable [`RingGeometry`] used by
//! the frame math and the [`SpringParams`] used by the settle animation. Any
//! option that would later produce NaN or infinite angles is rejected here.

use crate::constants::*;
use crate::ring::RingGeometry;
use crate::settle::SpringParams;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("carousel needs at least one item")]
    EmptyRing,

    #[error("radius must be finite and > 0, got {0}")]
    InvalidRadius(f64),

    #[error("drag factor must be finite, got {0}")]
    InvalidDragFactor(f64),

    #[error("spring {name} must be finite and {requirement}, got {value}")]
    InvalidSpring {
        name: &'static str,
        requirement: &'static str,
        value: f64,
    },

    #[error("brightness range must satisfy 0 <= min <= max, got min={min} max={max}")]
    InvalidBrightness { min: f64, max: f64 },

    #[error("max tilt must be finite, got {0}")]
    InvalidTilt(f64),

    #[error("front zone must be within (-1, 1), got {0}")]
    InvalidFrontZone(f64),

    #[error("perspective must be finite and greater than the radius ({radius}), got {perspective}")]
    InvalidPerspective { perspective: f64, radius: f64 },

    #[error("duplicate item id {0:?}")]
    DuplicateItemId(String),
}

/// Options recognized by the carousel engine.
///
/// The item count is not part of the options: it is always the length of the
/// item list handed to the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub radius: f64,
    pub drag_factor: f64,
    pub settle_stiffness: f64,
    pub settle_damping: f64,
    pub settle_mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
    pub min_brightness: f64,
    pub max_brightness: f64,
    pub max_tilt_deg: f64,
    pub front_zone: f64,
    pub perspective: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            drag_factor: DEFAULT_DRAG_FACTOR,
            settle_stiffness: DEFAULT_SETTLE_STIFFNESS,
            settle_damping: DEFAULT_SETTLE_DAMPING,
            settle_mass: DEFAULT_SETTLE_MASS,
            rest_delta: DEFAULT_REST_DELTA_DEG,
            rest_speed: DEFAULT_REST_SPEED_DEG_PER_SEC,
            min_brightness: DEFAULT_MIN_BRIGHTNESS,
            max_brightness: DEFAULT_MAX_BRIGHTNESS,
            max_tilt_deg: DEFAULT_MAX_TILT_DEG,
            front_zone: DEFAULT_FRONT_ZONE,
            perspective: DEFAULT_PERSPECTIVE,
        }
    }
}

impl CarouselConfig {
    /// Check every option against `item_count` and derive the ring geometry
    /// and spring parameters the engine runs on.
    pub fn validate(&self, item_count: usize) -> Result<(RingGeometry, SpringParams), ConfigError> {
        if item_count == 0 {
            return Err(ConfigError::EmptyRing);
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !self.drag_factor.is_finite() {
            return Err(ConfigError::InvalidDragFactor(self.drag_factor));
        }
        positive("stiffness", self.settle_stiffness)?;
        // an undamped spring oscillates forever and the settle never ends
        positive("damping", self.settle_damping)?;
        positive("mass", self.settle_mass)?;
        positive("rest delta", self.rest_delta)?;
        positive("rest speed", self.rest_speed)?;
        let brightness_ok = self.min_brightness.is_finite()
            && self.max_brightness.is_finite()
            && self.min_brightness >= 0.0
            && self.min_brightness <= self.max_brightness;
        if !brightness_ok {
            return Err(ConfigError::InvalidBrightness {
                min: self.min_brightness,
                max: self.max_brightness,
            });
        }
        if !self.max_tilt_deg.is_finite() {
            return Err(ConfigError::InvalidTilt(self.max_tilt_deg));
        }
        if !(self.front_zone.is_finite() && self.front_zone > -1.0 && self.front_zone < 1.0) {
            return Err(ConfigError::InvalidFrontZone(self.front_zone));
        }
        if !(self.perspective.is_finite() && self.perspective > self.radius) {
            return Err(ConfigError::InvalidPerspective {
                perspective: self.perspective,
                radius: self.radius,
            });
        }

        let geometry = RingGeometry {
            item_count,
            radius: self.radius,
            min_brightness: self.min_brightness,
            max_brightness: self.max_brightness,
            max_tilt_deg: self.max_tilt_deg,
            front_zone: self.front_zone,
            perspective: self.perspective,
        };
        let spring = SpringParams {
            stiffness: self.settle_stiffness,
            damping: self.settle_damping,
            mass: self.settle_mass,
            rest_delta: self.rest_delta,
            rest_speed: self.rest_speed,
        };
        Ok((geometry, spring))
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpring {
            name,
            requirement: "> 0",
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let (ring, spring) = CarouselConfig::default().validate(5).unwrap();
        assert_eq!(ring.item_count, 5);
        assert_eq!(ring.radius, 170.0);
        assert_eq!(spring.stiffness, 90.0);
        assert_eq!(spring.damping, 20.0);
    }

    #[test]
    fn zero_items_rejected() {
        let err = CarouselConfig::default().validate(0).unwrap_err();
        assert_eq!(err, ConfigError::EmptyRing);
    }

    #[test]
    fn non_positive_radius_rejected() {
        for radius in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let config = CarouselConfig {
                radius,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(3), Err(ConfigError::InvalidRadius(_))),
                "radius {radius} accepted"
            );
        }
    }

    #[test]
    fn spring_parameters_checked() {
        let cases: [(&str, fn(&mut CarouselConfig, f64)); 5] = [
            ("stiffness", |c: &mut CarouselConfig, v: f64| c.settle_stiffness = v),
            ("damping", |c: &mut CarouselConfig, v: f64| c.settle_damping = v),
            ("mass", |c: &mut CarouselConfig, v: f64| c.settle_mass = v),
            ("rest delta", |c: &mut CarouselConfig, v: f64| c.rest_delta = v),
            ("rest speed", |c: &mut CarouselConfig, v: f64| c.rest_speed = v),
        ];
        for (field, set) in cases {
            for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
                let mut config = CarouselConfig::default();
                set(&mut config, value);
                match config.validate(3) {
                    Err(ConfigError::InvalidSpring { name, requirement, .. }) => {
                        assert_eq!(name, field);
                        assert_eq!(requirement, "> 0");
                    }
                    other => panic!("{field}={value} gave {other:?}"),
                }
            }
        }
    }

    #[test]
    fn undamped_spring_rejected() {
        let config = CarouselConfig {
            settle_damping: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(3).unwrap_err(),
            ConfigError::InvalidSpring {
                name: "damping",
                requirement: "> 0",
                value: 0.0,
            }
        );
    }

    #[test]
    fn non_finite_drag_factor_rejected() {
        for drag_factor in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let config = CarouselConfig {
                drag_factor,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(3), Err(ConfigError::InvalidDragFactor(_))),
                "drag factor {drag_factor} accepted"
            );
        }
        // negative factors just invert the drag direction
        let config = CarouselConfig {
            drag_factor: -0.3,
            ..Default::default()
        };
        assert!(config.validate(3).is_ok());
    }

    #[test]
    fn non_finite_tilt_rejected() {
        for max_tilt_deg in [f64::NAN, f64::INFINITY] {
            let config = CarouselConfig {
                max_tilt_deg,
                ..Default::default()
            };
            assert!(matches!(config.validate(3), Err(ConfigError::InvalidTilt(_))));
        }
    }

    #[test]
    fn front_zone_must_lie_inside_the_ring() {
        for front_zone in [-1.0, 1.0, 1.5, -2.0, f64::NAN] {
            let config = CarouselConfig {
                front_zone,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(3), Err(ConfigError::InvalidFrontZone(_))),
                "front zone {front_zone} accepted"
            );
        }
        for front_zone in [-0.99, 0.0, 0.99] {
            let config = CarouselConfig {
                front_zone,
                ..Default::default()
            };
            assert!(config.validate(3).is_ok(), "front zone {front_zone} rejected");
        }
    }

    #[test]
    fn inverted_brightness_rejected() {
        let config = CarouselConfig {
            min_brightness: 0.9,
            max_brightness: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(3),
            Err(ConfigError::InvalidBrightness { .. })
        ));
    }

    #[test]
    fn negative_or_non_finite_brightness_rejected() {
        for (min, max) in [(-0.1, 1.0), (f64::NAN, 1.0), (0.6, f64::INFINITY)] {
            let config = CarouselConfig {
                min_brightness: min,
                max_brightness: max,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(3), Err(ConfigError::InvalidBrightness { .. })),
                "brightness {min}..{max} accepted"
            );
        }
    }

    #[test]
    fn perspective_must_clear_the_ring() {
        let config = CarouselConfig {
            perspective: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(3),
            Err(ConfigError::InvalidPerspective { .. })
        ));
    }
}
