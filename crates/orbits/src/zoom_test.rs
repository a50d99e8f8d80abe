use nalgebra::Point2;

use crate::zoom::ZoomTable;

#[test]
fn test_default_table_has_three_layers() {
    let zoom = ZoomTable::default();
    assert_eq!(zoom.factors(), &[1.0, 10.0, 50.0]);
    assert_eq!(zoom.len(), 3);
    assert!(!zoom.is_empty());
}

#[test]
fn test_projection_scales_each_layer() {
    let zoom = ZoomTable::default();
    let layers = zoom.project(Point2::new(2.0, -3.0));

    assert_eq!(layers.len(), 3);
    assert_eq!(layers[0], Point2::new(2.0, -3.0));
    assert_eq!(layers[1], Point2::new(20.0, -30.0));
    assert_eq!(layers[2], Point2::new(100.0, -150.0));
}

#[test]
fn test_empty_table_projects_nothing() {
    let zoom = ZoomTable::new(vec![]);
    assert!(zoom.project(Point2::new(1.0, 1.0)).is_empty());
}
