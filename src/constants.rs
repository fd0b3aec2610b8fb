/// Speed of light in m.s⁻¹, default propagation speed.
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Two circles whose center distance matches the reference radius
/// within this margin (in distance units) are treated as tangent:
/// both intersection solutions collapse to a single point.
pub const EPSILON_TANGENT: f64 = 0.01;
