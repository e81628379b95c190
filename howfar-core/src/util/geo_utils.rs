use geo::{BoundingRect, Distance, Haversine, MultiPoint, Point, Rect};

/// great-circle distance between two WGS84 points, in kilometers
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b) / 1000.0
}

/// rounds both ordinates of a point to a fixed number of decimal places.
///
/// # Arguments
///
/// * `point` - value to round
/// * `precision` - number of decimal places to keep
///
/// # Returns
///
/// * a new point with rounded x and y values
pub fn round_coordinate(point: Point<f64>, precision: i32) -> Point<f64> {
    let factor = 10f64.powi(precision);
    Point::new(
        (point.x() * factor).round() / factor,
        (point.y() * factor).round() / factor,
    )
}

/// shifts a point's longitude by whole turns so it lies within 180 degrees of
/// `reference_lon`. points on either side of the antimeridian then stay
/// adjacent in planar coordinates.
pub fn unwrap_longitude(point: Point<f64>, reference_lon: f64) -> Point<f64> {
    let turns = ((point.x() - reference_lon) / 360.0).round();
    Point::new(point.x() - 360.0 * turns, point.y())
}

/// creates the bounding box of a set of points. since an empty set has no
/// extent, the result may be None.
pub fn bounding_rect(points: &[Point<f64>]) -> Option<Rect<f64>> {
    MultiPoint::new(points.to_vec()).bounding_rect()
}

/// true if the rectangle spans a non-zero width and height
pub fn rect_has_area(rect: &Rect<f64>) -> bool {
    rect.width() > 0.0 && rect.height() > 0.0
}

/// signed area of the triangle (a, b, c) times two, positive when counter-clockwise
pub fn orientation(a: geo::Coord<f64>, b: geo::Coord<f64>, c: geo::Coord<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn test_haversine_km_one_degree_latitude() {
        let a = Point::new(4.8912, 52.0);
        let b = Point::new(4.8912, 53.0);
        let d = haversine_km(a, b);
        assert!((d - 111.19).abs() < 0.1, "expected ~111.19 km, found {d}");
    }

    #[test]
    fn test_round_coordinate() {
        let p = round_coordinate(Point::new(4.891234567, 52.373149999), 6);
        assert_eq!(p.x(), 4.891235);
        assert_eq!(p.y(), 52.37315);
    }

    #[test]
    fn test_bounding_rect_empty() {
        assert!(bounding_rect(&[]).is_none());
    }

    #[test]
    fn test_rect_has_area() {
        let flat = bounding_rect(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).unwrap();
        assert!(!rect_has_area(&flat));
        let square = bounding_rect(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();
        assert!(rect_has_area(&square));
    }

    #[test]
    fn test_orientation_sign() {
        let a = coord! { x: 0.0, y: 0.0 };
        let b = coord! { x: 1.0, y: 0.0 };
        let c = coord! { x: 0.0, y: 1.0 };
        assert_eq!(orientation(a, b, c), 1.0);
        assert_eq!(orientation(a, c, b), -1.0);
    }

    #[test]
    fn test_unwrap_longitude() {
        let p = unwrap_longitude(Point::new(-179.99, -16.0), 179.99);
        assert!((p.x() - 180.01).abs() < 1e-9);
        assert_eq!(p.y(), -16.0);
        let p = unwrap_longitude(Point::new(179.99, 10.0), -179.5);
        assert!((p.x() - -180.01).abs() < 1e-9);
        let p = unwrap_longitude(Point::new(4.9, 52.3), 4.8912);
        assert_eq!(p, Point::new(4.9, 52.3));
    }
}
