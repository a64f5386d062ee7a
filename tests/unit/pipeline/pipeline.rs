use super::*;
use std::cell::{Cell, RefCell};

const LOGO: &str = include_str!("../../data/logo.svg");

fn pipeline(num_frames: usize) -> LogoPipeline {
    let geometry = LogoGeometry::from_svg_str(LOGO).unwrap();
    let config = TraceConfig {
        iterations: 8,
        num_frames,
        project_onto_animation: false,
    };
    LogoPipeline::new(geometry, config).unwrap()
}

#[test]
fn frame_table_has_one_entry_per_frame() {
    let p = pipeline(30);
    let table = p.frame_table().unwrap();
    assert_eq!(table.len(), 30);
    assert_eq!(table.section_index_by_frame()[0], 0);
    assert_eq!(table.section_index_by_frame()[29], 1);
    assert_eq!(*table.inner_t_by_frame().last().unwrap(), 1.0);
    assert_eq!(*table.outer_t_by_frame().last().unwrap(), 1.0);
}

#[test]
fn changing_the_frame_reuses_the_table() {
    let mut p = pipeline(30);
    let before = p.frame_table().unwrap();
    p.set_frame(12).unwrap();
    assert!(Rc::ptr_eq(&before, &p.frame_table().unwrap()));
    assert_eq!(p.frame().unwrap(), 12);
}

#[test]
fn changing_iterations_rebuilds_the_table() {
    let mut p = pipeline(30);
    let before = p.frame_table().unwrap();
    p.set_iterations(2).unwrap();
    let after = p.frame_table().unwrap();
    assert!(!Rc::ptr_eq(&before, &after));
    assert_eq!(after.len(), 30);
    assert_eq!(p.config().unwrap().iterations, 2);
}

#[test]
fn frame_must_be_in_range() {
    let mut p = pipeline(10);
    assert!(matches!(p.set_frame(10), Err(TraceError::Range(_))));
    assert_eq!(p.frame().unwrap(), 0);
}

#[test]
fn shrinking_frame_count_moves_the_current_frame() {
    let mut p = pipeline(10);
    p.set_frame(9).unwrap();
    p.set_num_frames(4).unwrap();
    assert_eq!(p.frame().unwrap(), 3);
    assert_eq!(p.frame_table().unwrap().len(), 4);
    p.outline().unwrap();

    assert!(matches!(p.set_num_frames(1), Err(TraceError::Config(_))));
}

#[test]
fn outline_subscriber_sees_the_current_frame() {
    let mut p = pipeline(16);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    p.subscribe_outline(move |path| sink.borrow_mut().push(path.to_svg()))
        .unwrap();

    p.set_frame(5).unwrap();
    p.set_frame(15).unwrap();

    let geometry = p.geometry().unwrap();
    let table = p.frame_table().unwrap();
    let expected: Vec<String> = [5, 15]
        .iter()
        .map(|&f| frame_outline(&geometry, &table, f).unwrap().to_svg())
        .collect();
    assert_eq!(*seen.borrow(), expected);
}

#[test]
fn frame_table_subscriber_fires_once_per_relevant_write() {
    let mut p = pipeline(16);
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();
    p.subscribe_frame_table(move |t| {
        assert_eq!(t.len(), 16);
        counter.set(counter.get() + 1);
    })
    .unwrap();

    p.set_iterations(3).unwrap();
    assert_eq!(fired.get(), 1);
    p.set_frame(2).unwrap();
    assert_eq!(fired.get(), 1);
    p.set_project_onto_animation(true).unwrap();
    assert_eq!(fired.get(), 2);
}

#[test]
fn projected_lengths_keep_sections_in_step() {
    let mut p = pipeline(40);
    p.set_project_onto_animation(true).unwrap();
    let table = p.frame_table().unwrap();
    let geometry = p.geometry().unwrap();
    for f in 0..table.len() {
        let pos = table.frame(f).unwrap();
        assert!(pos.section < geometry.section_count());
        assert!(pos.inner.curve < geometry.inner.sections()[pos.section].len());
        assert!(pos.outer.curve < geometry.outer.sections()[pos.section].len());
    }
    assert_eq!(table.section_index_by_frame()[39], 1);
}

#[test]
fn invalid_config_is_rejected() {
    let geometry = LogoGeometry::from_svg_str(LOGO).unwrap();
    let config = TraceConfig {
        num_frames: 1,
        ..TraceConfig::default()
    };
    assert!(matches!(
        LogoPipeline::new(geometry, config),
        Err(TraceError::Config(_))
    ));
}
