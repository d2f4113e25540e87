mod common;
use common::{date, dt, range, shift};
use shiftchart::config::ChartConfig;
use shiftchart::core::LayoutMapper;
use shiftchart::errors::AppError;
use shiftchart::models::pixel_rect::{BarKind, DayState};
use shiftchart::models::time_range::{TimeRange, day_window};
use shiftchart::utils::date::WeekWindow;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.001
}

#[test]
fn test_layout_on_duty_geometry() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    // Tuesday 08:00-12:00 -> ticks 4..6
    let rect = mapper
        .layout(1, &range("2022-04-26", "08:00", "12:00"), BarKind::OnDuty)
        .expect("layout");

    assert!(approx(rect.x, 60.0 + 4.0 * 32.0));
    assert!(approx(rect.width, 2.0 * 32.0));
    assert!(approx(rect.y, 32.0 + 52.0 + 10.0));
    assert!(approx(rect.height, 32.0));
    assert!(approx(rect.bottom(), 32.0 + 52.0 + 10.0 + 32.0));
    assert!(rect.marker.is_none());
}

#[test]
fn test_layout_idle_is_flush_and_marked() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    let rect = mapper
        .layout(0, &range("2022-04-25", "10:00", "14:00"), BarKind::Idle)
        .expect("layout");

    assert!(approx(rect.y, 32.0 + 1.0));
    assert!(approx(rect.height, 52.0 - 2.0));
    let marker = rect.marker.expect("long idle bar has a marker");
    assert!(approx(marker.cx, rect.x + rect.width / 2.0));
    assert!(approx(marker.radius, 7.0));
}

#[test]
fn test_layout_short_idle_has_no_marker() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    let rect = mapper
        .layout(0, &range("2022-04-25", "10:00", "11:30"), BarKind::Idle)
        .expect("layout");
    assert!(rect.marker.is_none());
}

#[test]
fn test_layout_minute_resolution() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    let rect = mapper
        .layout(0, &range("2022-04-25", "01:30", "02:30"), BarKind::OnDuty)
        .expect("layout");
    assert!(approx(rect.x, 60.0 + 0.75 * 32.0));
    assert!(approx(rect.width, 16.0));
}

#[test]
fn test_layout_full_ignores_range_bounds() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    let rect = mapper
        .layout(5, &range("2022-04-30", "10:00", "11:00"), BarKind::Full)
        .expect("layout");

    assert!(approx(rect.x, 60.0));
    assert!(approx(rect.width, 12.0 * 32.0));
    assert_eq!(rect.range, day_window(date("2022-04-30")));
}

#[test]
fn test_layout_range_ending_at_midnight_is_allowed() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    let r = TimeRange::new_unchecked(dt("2022-04-25 22:00"), dt("2022-04-26 00:00"));
    let rect = mapper.layout(0, &r, BarKind::OnDuty).expect("layout");
    assert!(approx(rect.right(), 60.0 + 12.0 * 32.0));
}

#[test]
fn test_layout_rejects_crossing_midnight() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    let r = TimeRange::new_unchecked(dt("2022-04-25 22:00"), dt("2022-04-26 02:00"));
    assert!(matches!(
        mapper.layout(0, &r, BarKind::OnDuty),
        Err(AppError::CrossesDayBoundary(_))
    ));

    // after splitting, every piece lays out
    for piece in r.split_by_day() {
        assert!(mapper.layout(0, &piece, BarKind::OnDuty).is_ok());
    }
}

#[test]
fn test_layout_rejects_bad_weekday() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");
    assert!(matches!(
        mapper.layout(7, &range("2022-04-25", "08:00", "09:00"), BarKind::OnDuty),
        Err(AppError::InvalidWeekday(7))
    ));
}

#[test]
fn test_day_without_records_is_no_shifts() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    let day = mapper.compute_day_layout(date("2022-04-27"), &[]).expect("day");

    assert_eq!(day.state, DayState::NoShifts);
    assert_eq!(day.weekday, 2);
    assert_eq!(day.rects.len(), 1);
    let rect = &day.rects[0];
    assert_eq!(rect.kind, BarKind::Idle);
    assert!(approx(rect.x, 60.0));
    assert!(approx(rect.width, 12.0 * 32.0));
}

#[test]
fn test_full_day_rounding_gives_full_coverage() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    let records = vec![shift("0002", "w1", range("2022-04-30", "00:00", "23:59"))];
    let day = mapper
        .compute_day_layout(date("2022-04-30"), &records)
        .expect("day");

    assert_eq!(day.weekday, 5);
    assert_eq!(day.state, DayState::FullCoverage);
    assert_eq!(day.rects.len(), 1);
    assert_eq!(day.rects[0].kind, BarKind::Full);
    assert!(approx(day.rects[0].width, 12.0 * 32.0));
}

#[test]
fn test_without_tolerance_last_minute_stays_idle() {
    let cfg = ChartConfig {
        day_end_tolerance_minutes: 0,
        ..ChartConfig::default()
    };
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    let records = vec![shift("0002", "w1", range("2022-04-30", "00:00", "23:59"))];
    let day = mapper
        .compute_day_layout(date("2022-04-30"), &records)
        .expect("day");

    assert_eq!(day.state, DayState::PartialCoverage);
    assert_eq!(day.rects_of(BarKind::Idle).count(), 1);
}

#[test]
fn test_idle_uses_union_of_all_categories() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");
    let d = "2022-04-25";

    let records = vec![
        shift("0001", "w1", range(d, "00:00", "12:00")),
        shift("0002", "w2", range(d, "12:00", "20:00")),
        shift("0003", "w3", range(d, "18:00", "22:00")),
    ];
    let day = mapper.compute_day_layout(date(d), &records).expect("day");

    assert_eq!(day.state, DayState::PartialCoverage);
    assert_eq!(day.rects_of(BarKind::OnDuty).count(), 3);

    let idle: Vec<_> = day.rects_of(BarKind::Idle).collect();
    assert_eq!(idle.len(), 1);
    assert_eq!(idle[0].range.start, dt("2022-04-25 22:00"));
    assert_eq!(idle[0].range.end, dt("2022-04-26 00:00"));
}

#[test]
fn test_categories_together_can_fully_cover_a_day() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");
    let d = "2022-04-25";

    let records = vec![
        shift("0001", "w1", range(d, "00:00", "12:00")),
        shift("0002", "w2", range(d, "12:00", "23:59")),
    ];
    let day = mapper.compute_day_layout(date(d), &records).expect("day");

    assert_eq!(day.state, DayState::FullCoverage);
    assert_eq!(day.rects.len(), 1);
}

#[test]
fn test_partial_day_rects_per_category() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");
    let d = "2022-04-25";

    let records = vec![
        shift("0001", "w1", range(d, "08:00", "10:00")),
        shift("0001", "w2", range(d, "09:00", "11:00")),
        shift("0002", "w3", range(d, "14:00", "16:00")),
    ];
    let day = mapper.compute_day_layout(date(d), &records).expect("day");

    let on_duty: Vec<_> = day.rects_of(BarKind::OnDuty).collect();
    assert_eq!(on_duty.len(), 2);
    assert_eq!(on_duty[0].category.as_deref(), Some("0001"));
    assert_eq!(on_duty[0].range, range(d, "08:00", "11:00"));
    assert_eq!(on_duty[1].category.as_deref(), Some("0002"));

    let idle: Vec<_> = day.rects_of(BarKind::Idle).map(|r| r.range).collect();
    assert_eq!(idle.len(), 3);
    assert_eq!(idle[0], range(d, "00:00", "08:00"));
    assert_eq!(idle[1], range(d, "11:00", "14:00"));

    for r in &day.rects {
        assert!(r.width > 0.0 && r.height > 0.0);
    }
}

#[test]
fn test_overnight_shift_is_clipped_to_its_day() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    let overnight = TimeRange::new_unchecked(dt("2022-04-25 20:00"), dt("2022-04-26 04:00"));
    let day = mapper
        .compute_day_layout(date("2022-04-25"), &[shift("0001", "w1", overnight)])
        .expect("day");

    let on_duty: Vec<_> = day.rects_of(BarKind::OnDuty).collect();
    assert_eq!(on_duty.len(), 1);
    assert_eq!(on_duty[0].range.end, dt("2022-04-26 00:00"));
    assert_eq!(day.rects_of(BarKind::Idle).count(), 1);
}

#[test]
fn test_frame_axes_and_grid() {
    let cfg = ChartConfig::default();
    let mapper = LayoutMapper::new(&cfg).expect("mapper");

    let frame = mapper.frame(&WeekWindow::containing(date("2022-04-30")));

    assert!(approx(frame.width, 12.0 * 32.0 + 60.0 + 40.0));
    assert!(approx(frame.height, 7.0 * 52.0 + 32.0));
    assert_eq!(frame.hour_ticks.len(), 13);
    assert_eq!(frame.hour_ticks[12].label, "24");
    assert_eq!(frame.rows.len(), 7);
    assert_eq!(frame.rows[5].name, "Sat");
    assert_eq!(frame.rows[5].date, "04-30");
    assert_eq!(frame.grid_lines.len(), 8);
}

#[test]
fn test_mapper_rejects_unusable_config() {
    let zero_ticks = ChartConfig {
        ticks: 0,
        ..ChartConfig::default()
    };
    assert!(matches!(LayoutMapper::new(&zero_ticks), Err(AppError::Config(_))));

    let whole_tick_tolerance = ChartConfig {
        day_end_tolerance_minutes: 120,
        ..ChartConfig::default()
    };
    assert!(matches!(
        LayoutMapper::new(&whole_tick_tolerance),
        Err(AppError::Config(_))
    ));
}
