use crate::entities::Coordinates;

const EARTH_RADIUS_KM: f64 = 6371.0;

// haversine, rounded to two decimal places
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    (EARTH_RADIUS_KM * c * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_to_self() {
        let sf = Coordinates::new(37.7749, -122.4194);

        assert_eq!(distance_km(sf, sf), 0.0);
    }

    #[test]
    fn symmetric() {
        let paris = Coordinates::new(48.8566, 2.3522);
        let berlin = Coordinates::new(52.52, 13.405);

        assert_eq!(distance_km(paris, berlin), distance_km(berlin, paris));
    }

    #[test]
    fn san_francisco_to_los_angeles() {
        let sf = Coordinates::new(37.7749, -122.4194);
        let la = Coordinates::new(34.0522, -118.2437);

        let d = distance_km(sf, la);

        assert!((d - 559.12).abs() < 1.0, "got {}", d);
    }
}
