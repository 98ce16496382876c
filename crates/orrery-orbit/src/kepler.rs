//! Kepler's equation and the anomaly conversions that follow from it.

/// Number of Newton-Raphson steps taken for every solve.
///
/// Fixed cost per evaluation; there is no convergence test and no early exit.
/// Ten steps leave residuals at machine precision for e <= 0.967, the most
/// eccentric orbit in the built-in catalog.
pub const KEPLER_ITERATIONS: usize = 10;

/// Solve `M = E - e*sin(E)` for the eccentric anomaly `E` (radians).
///
/// Starts from `E0 = M` and always performs [`KEPLER_ITERATIONS`] steps.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e_anom = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        let delta = e_anom - eccentricity * e_anom.sin() - mean_anomaly;
        let derivative = 1.0 - eccentricity * e_anom.cos();
        e_anom -= delta / derivative;
    }
    e_anom
}

/// `|E - e*sin(E) - M|`, the error left in Kepler's equation.
pub fn kepler_residual(eccentric_anomaly: f64, eccentricity: f64, mean_anomaly: f64) -> f64 {
    (eccentric_anomaly - eccentricity * eccentric_anomaly.sin() - mean_anomaly).abs()
}

/// True anomaly from eccentric anomaly, `2 atan(sqrt((1+e)/(1-e)) tan(E/2))`.
///
/// The result lies in `(-pi, pi]`; only its sine and cosine are used downstream.
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let factor = ((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt();
    2.0 * (factor * (eccentric_anomaly / 2.0).tan()).atan()
}

/// Distance from the focus, `a(1 - e cos E)`.
pub fn orbital_radius(semi_major_axis: f64, eccentricity: f64, eccentric_anomaly: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentric_anomaly.cos())
}
