//! End-to-end overlay tests over GeoJSON text, including hole handling.

use terrakit_algorithms::overlay::intersect;
use terrakit_core::geojson::{parse_multi_polygon, write_multi_polygon};

fn ring(points: &[(f64, f64)]) -> Vec<[f64; 2]> {
    points.iter().map(|&(x, y)| [x, y]).collect()
}

#[test]
fn intersection_preserves_holes() {
    // A 10x10 square with a 2x2 hole, intersected with itself
    let donut = write_multi_polygon(&vec![vec![
        ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]),
        ring(&[(4.0, 4.0), (4.0, 6.0), (6.0, 6.0), (6.0, 4.0), (4.0, 4.0)]),
    ]])
    .unwrap();

    let out = intersect(&donut, &donut).unwrap();
    let coords = parse_multi_polygon(&out).unwrap();

    assert_eq!(coords.len(), 1, "one polygon expected");
    assert_eq!(coords[0].len(), 2, "exterior plus hole expected");

    use geo::Area;
    let multi = terrakit_core::geometry::build_multi_polygon(coords).unwrap();
    assert!((multi.unsigned_area() - 96.0).abs() < 1e-9);
}

#[test]
fn multi_part_inputs() {
    // Two separate unit squares against a band covering only one of them
    let parts = write_multi_polygon(&vec![
        vec![ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)])],
        vec![ring(&[(5.0, 0.0), (5.0, 1.0), (6.0, 1.0), (6.0, 0.0), (5.0, 0.0)])],
    ])
    .unwrap();
    let band = write_multi_polygon(&vec![vec![ring(&[
        (4.0, -1.0),
        (4.0, 2.0),
        (7.0, 2.0),
        (7.0, -1.0),
        (4.0, -1.0),
    ])]])
    .unwrap();

    let out = intersect(&parts, &band).unwrap();
    let coords = parse_multi_polygon(&out).unwrap();

    assert_eq!(coords.len(), 1, "only the second square overlaps the band");
    use geo::Area;
    let multi = terrakit_core::geometry::build_multi_polygon(coords).unwrap();
    assert!((multi.unsigned_area() - 1.0).abs() < 1e-9);
}
