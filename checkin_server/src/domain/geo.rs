use crate::domain::entities::Coordinate;

// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

// Great-circle distance in meters between two points (haversine).
//
// Total over all finite inputs; out-of-range coordinates are not rejected.
pub fn distance_meters(from: Coordinate, to: Coordinate) -> f64 {
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (delta_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_METERS * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}
