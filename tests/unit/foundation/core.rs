use super::*;

#[test]
fn canvas_rejects_zero_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(Canvas::MAX_DIM + 1, 10).is_err());
    assert_eq!(
        Canvas::new(64, 32).unwrap(),
        Canvas {
            width: 64,
            height: 32
        }
    );
}

#[test]
fn canvas_from_size_rounds_up() {
    let c = Canvas::from_size(Size::new(10.2, 0.0)).unwrap();
    assert_eq!(c.width, 11);
    assert_eq!(c.height, 1);
    assert!(Canvas::from_size(Size::new(f64::NAN, 1.0)).is_err());
}

#[test]
fn inches_scale_with_dpi() {
    assert_eq!(inches_to_px(0.5, 96.0), 48.0);
    assert_eq!(inches_to_px(2.5, 96.0), 240.0);
}
