use muscle_plant::simulation::Limits;
use muscle_plant::ui::gauge::{gauge_bar, gauge_line};

const UNIT: Limits = Limits::new(0.0, 1.0);

#[test]
fn test_gauge_width_and_charset() {
    let bar = gauge_bar(0.42, Some(0.7), UNIT, 20);
    assert_eq!(bar.chars().count(), 20);
    for c in bar.chars() {
        assert!("#.|".contains(c));
    }
}

#[test]
fn test_gauge_fill_tracks_value() {
    assert_eq!(gauge_bar(0.0, None, UNIT, 10), "..........");
    assert_eq!(gauge_bar(0.5, None, UNIT, 10), "#####.....");
    assert_eq!(gauge_bar(1.0, None, UNIT, 10), "##########");
}

#[test]
fn test_gauge_clamps_out_of_range_values() {
    assert_eq!(gauge_bar(7.0, None, UNIT, 4), "####");
    assert_eq!(gauge_bar(-7.0, None, UNIT, 4), "....");
    assert_eq!(gauge_bar(f64::NAN, None, UNIT, 4), "....");
}

#[test]
fn test_gauge_marker_position() {
    assert_eq!(gauge_bar(0.0, Some(1.0), UNIT, 5), "....|");
    assert_eq!(gauge_bar(1.0, Some(0.0), UNIT, 5), "|####");
}

#[test]
fn test_gauge_respects_limits() {
    let lims = Limits::new(-1.0, 1.0);
    assert_eq!(gauge_bar(0.0, None, lims, 4), "##..");
}

#[test]
fn test_zero_width_gauge() {
    assert!(gauge_bar(0.5, Some(0.5), UNIT, 0).is_empty());
}

#[test]
fn test_gauge_line_layout() {
    let line = gauge_line("muscle", 0.25, None, UNIT, 4);
    assert!(line.starts_with("muscle"));
    assert!(line.contains("[#...]"));
    assert!(line.ends_with(" 0.250"));
}
