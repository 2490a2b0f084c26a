//! Literal formatting for the generated pyray script.

use cgmath::Vector3;

use crate::gfx::scene::color::Rgba;

use super::ColorMode;

/// Formats a float as a Python literal.
///
/// Finite values use Rust's shortest round-trip representation, so `2.0`
/// becomes `2` and `1.5` stays `1.5`. Non-finite values become `float(...)`
/// expressions, keeping the line valid Python.
pub fn float(value: f32) -> String {
    if value.is_nan() {
        "float(\"nan\")".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "float(\"inf\")".to_string()
        } else {
            "-float(\"inf\")".to_string()
        }
    } else {
        value.to_string()
    }
}

/// `rl.Vector3(x, y, z)`
pub fn vector3(v: Vector3<f32>) -> String {
    format!("rl.Vector3({}, {}, {})", float(v.x), float(v.y), float(v.z))
}

/// Color argument of a draw call.
///
/// `kind_literal` is the fixed palette name used for the object's kind
/// (e.g. `rl.RED`); it wins unless the exporter is set to emit stored colors.
pub fn color(mode: ColorMode, stored: Rgba, kind_literal: &str) -> String {
    match mode {
        ColorMode::KindLiteral => kind_literal.to_string(),
        ColorMode::StoredColor => format!(
            "rl.Color({}, {}, {}, {})",
            stored.r, stored.g, stored.b, stored.a
        ),
    }
}

/// Comment line emitted in place of an object that has no statement form.
pub fn unrecognized(name: &str) -> String {
    format!("# unrecognized object: {name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_shortest_form() {
        assert_eq!(float(0.0), "0");
        assert_eq!(float(2.0), "2");
        assert_eq!(float(1.5), "1.5");
        assert_eq!(float(-3.25), "-3.25");
        assert_eq!(float(0.1), "0.1");
    }

    #[test]
    fn test_float_non_finite() {
        assert_eq!(float(f32::NAN), "float(\"nan\")");
        assert_eq!(float(f32::INFINITY), "float(\"inf\")");
        assert_eq!(float(f32::NEG_INFINITY), "-float(\"inf\")");
    }

    #[test]
    fn test_vector3() {
        assert_eq!(
            vector3(Vector3::new(0.0, 2.0, 0.5)),
            "rl.Vector3(0, 2, 0.5)"
        );
    }

    #[test]
    fn test_color_modes() {
        let stored = Rgba::new(1, 2, 3, 4);
        assert_eq!(color(ColorMode::KindLiteral, stored, "rl.RED"), "rl.RED");
        assert_eq!(
            color(ColorMode::StoredColor, stored, "rl.RED"),
            "rl.Color(1, 2, 3, 4)"
        );
    }
}
