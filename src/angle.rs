/*!
Angle units, and reducing angles to the principal range.
*/

use std::f64::consts::{PI, TAU};
use std::fmt;

use ::serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleUnit {
    Radians,
    Degrees,
    Gradians,
    Turns,
}

/**
Reduce an angle in radians to the half-open range (−π, π].
*/
pub fn normalize_angle(angle: f64) -> f64 {
    let angle = angle % TAU;
    if angle > PI {
        angle - TAU
    } else if angle <= -PI {
        angle + TAU
    } else {
        angle
    }
}

impl AngleUnit {
    pub const ALL: [AngleUnit; 4] = [
        AngleUnit::Radians,
        AngleUnit::Degrees,
        AngleUnit::Gradians,
        AngleUnit::Turns,
    ];

    /** How many of this unit make up one full revolution. */
    pub fn per_turn(self) -> f64 {
        match self {
            AngleUnit::Radians  => TAU,
            AngleUnit::Degrees  => 360.0,
            AngleUnit::Gradians => 400.0,
            AngleUnit::Turns    => 1.0,
        }
    }

    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            _ => radians * self.per_turn() / TAU,
        }
    }

    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            _ => value * TAU / self.per_turn(),
        }
    }

    /** Convert `value`, given in `unit`, into this unit. */
    pub fn convert_from(self, value: f64, unit: AngleUnit) -> f64 {
        self.from_radians(unit.to_radians(value))
    }

    /** Convert `value`, given in this unit, into `unit`. */
    pub fn convert_to(self, value: f64, unit: AngleUnit) -> f64 {
        unit.from_radians(self.to_radians(value))
    }

    /**
    Reduce an angle given in this unit to the equivalent of (−π, π],
    expressed back in this unit.
    */
    pub fn normalize(self, angle: f64) -> f64 {
        self.from_radians(normalize_angle(self.to_radians(angle)))
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            AngleUnit::Radians  => "radians",
            AngleUnit::Degrees  => "degrees",
            AngleUnit::Gradians => "gradians",
            AngleUnit::Turns    => "turns",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPSILON: f64 = 1.0e-10;

    #[test]
    fn conversion_factors() {
        assert!((AngleUnit::Degrees.from_radians(PI) - 180.0).abs() < EPSILON);
        assert!((AngleUnit::Gradians.from_radians(PI) - 200.0).abs() < EPSILON);
        assert!((AngleUnit::Turns.from_radians(PI) - 0.5).abs() < EPSILON);
        assert_eq!(AngleUnit::Radians.from_radians(1.25), 1.25);

        assert!((AngleUnit::Degrees.to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((AngleUnit::Gradians.to_radians(100.0) - PI / 2.0).abs() < EPSILON);
        assert!((AngleUnit::Turns.to_radians(0.25) - PI / 2.0).abs() < EPSILON);
        assert_eq!(AngleUnit::Radians.to_radians(-0.75), -0.75);
    }

    #[test]
    fn between_units() {
        assert!((AngleUnit::Degrees.convert_to(90.0, AngleUnit::Gradians) - 100.0).abs() < EPSILON);
        assert!((AngleUnit::Turns.convert_from(270.0, AngleUnit::Degrees) - 0.75).abs() < EPSILON);
        for from in AngleUnit::ALL.iter() {
            for to in AngleUnit::ALL.iter() {
                let x = from.convert_to(0.3 * from.per_turn(), *to);
                assert!((x - 0.3 * to.per_turn()).abs() < EPSILON);
                assert!((to.convert_from(0.3 * from.per_turn(), *from) - x).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn normalize_radians() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(PI), PI);
        assert!((normalize_angle(-PI) - PI).abs() < EPSILON);
        assert!((normalize_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < EPSILON);
        assert!((normalize_angle(-3.0 * PI / 2.0) - PI / 2.0).abs() < EPSILON);
        assert!((normalize_angle(7.0 * TAU + 1.0) - 1.0).abs() < EPSILON);
        assert!((normalize_angle(-5.0 * TAU - 1.0) + 1.0).abs() < EPSILON);
        for k in -50..50 {
            let a = normalize_angle(0.37 * (k as f64));
            assert!(a > -PI && a <= PI);
        }
    }

    #[test]
    fn normalize_other_units() {
        assert!((AngleUnit::Degrees.normalize(270.0) + 90.0).abs() < EPSILON);
        assert!((AngleUnit::Degrees.normalize(-190.0) - 170.0).abs() < EPSILON);
        assert!((AngleUnit::Gradians.normalize(500.0) - 100.0).abs() < EPSILON);
        assert!((AngleUnit::Turns.normalize(0.75) + 0.25).abs() < EPSILON);
        assert!((AngleUnit::Radians.normalize(TAU + 0.5) - 0.5).abs() < EPSILON);
    }

    #[derive(Serialize, Deserialize)]
    struct Settings {
        unit: AngleUnit,
        units: Vec<AngleUnit>,
    }

    #[test]
    fn serializes_by_variant_name() {
        let s = Settings {
            unit: AngleUnit::Gradians,
            units: AngleUnit::ALL.to_vec(),
        };
        let text = toml::to_string(&s).unwrap();
        assert!(text.contains("\"Gradians\""));
        let back: Settings = toml::from_str(&text).unwrap();
        assert_eq!(back.unit, AngleUnit::Gradians);
        assert_eq!(back.units, AngleUnit::ALL.to_vec());

        let read: Settings = toml::from_str("unit = \"Turns\"\nunits = [\"Degrees\"]").unwrap();
        assert_eq!(read.unit, AngleUnit::Turns);
        assert_eq!(read.units, vec![AngleUnit::Degrees]);
        assert!(toml::from_str::<Settings>("unit = \"Furlongs\"\nunits = []").is_err());
    }

    #[test]
    fn names() {
        let names: Vec<String> = AngleUnit::ALL.iter().map(|u| u.to_string()).collect();
        assert_eq!(names, vec!["radians", "degrees", "gradians", "turns"]);
    }
}
