use super::*;
use crate::config::StripConfig;

#[derive(Default)]
struct RecordingSink {
    underlines: Vec<UnderlineGeometry>,
    scrolls: Vec<ScrollCommand>,
    pages: Vec<usize>,
}

impl StripSink for RecordingSink {
    fn apply_underline(&mut self, geometry: UnderlineGeometry) {
        self.underlines.push(geometry);
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        self.scrolls.push(command);
    }

    fn request_page(&mut self, page: usize) {
        self.pages.push(page);
    }
}

fn rect(x: f32, width: f32) -> LayoutRect {
    LayoutRect {
        x,
        width,
        height: 49.0,
    }
}

fn config() -> StripConfig {
    StripConfig {
        allow_overscroll_bounce: true,
        ..StripConfig::default()
    }
}

fn three_tabs() -> TabStrip {
    TabStrip::new(
        config(),
        vec!["one".into(), "two".into(), "three".into()],
    )
}

fn mount_three() -> (ProgressSignal, MountedStrip, Rc<RefCell<RecordingSink>>) {
    let signal = ProgressSignal::new(0.0);
    let sink = Rc::new(RefCell::new(RecordingSink::default()));
    let mounted = MountedStrip::mount(&signal, three_tabs(), sink.clone());
    (signal, mounted, sink)
}

fn measure_all(mounted: &MountedStrip) {
    mounted.on_tab_layout(0, rect(0.0, 60.0));
    mounted.on_tab_layout(1, rect(60.0, 80.0));
    mounted.on_tab_layout(2, rect(140.0, 100.0));
    mounted.on_container_layout(LayoutRect {
        x: 0.0,
        width: 300.0,
        height: 50.0,
    });
    mounted.on_strip_layout(rect(0.0, 640.0));
}

#[test]
fn nothing_reaches_sink_before_readiness() {
    let (signal, mounted, sink) = mount_three();
    signal.set(0.5);
    mounted.on_tab_layout(0, rect(0.0, 60.0));

    assert!(sink.borrow().underlines.is_empty());
    assert!(sink.borrow().scrolls.is_empty());
}

#[test]
fn ticks_flow_from_signal_to_sink() {
    let (signal, mounted, sink) = mount_three();
    measure_all(&mounted);
    let baseline = sink.borrow().underlines.len();

    signal.set(0.0);
    signal.set(0.5);

    let sink = sink.borrow();
    assert_eq!(sink.underlines.len(), baseline + 2);
    assert_eq!(sink.scrolls.len(), baseline + 2);
    let last = sink.underlines.last().unwrap();
    assert!((last.left - 30.0).abs() < 1e-4);
    assert!((last.width - 70.0).abs() < 1e-4);
}

#[test]
fn late_layout_publishes_retroactively() {
    let (signal, mounted, sink) = mount_three();
    signal.set(1.0);
    assert!(sink.borrow().underlines.is_empty());

    measure_all(&mounted);

    // The final layout event replayed the 1.0 tick.
    let sink = sink.borrow();
    let last = sink.underlines.last().expect("retroactive publish");
    assert_eq!(last.left, 60.0);
    assert_eq!(last.width, 80.0);
}

#[test]
fn mounting_at_nonzero_page_renders_that_page_first() {
    // The signal already sits at page 1 when the strip mounts; layout
    // events alone must produce tab 1's frame, never page zero's.
    let signal = ProgressSignal::new(1.0);
    let sink = Rc::new(RefCell::new(RecordingSink::default()));
    let mounted = MountedStrip::mount(&signal, three_tabs(), sink.clone());

    measure_all(&mounted);

    let sink = sink.borrow();
    let last = sink.underlines.last().expect("frame from layout alone");
    assert_eq!(last.left, 60.0);
    assert_eq!(last.width, 80.0);
}

#[test]
fn select_tab_requests_page_from_pager() {
    let (_signal, mounted, sink) = mount_three();
    mounted.select_tab(2);
    mounted.select_tab(9);
    assert_eq!(sink.borrow().pages, vec![2]);
}

#[test]
fn unmount_releases_progress_subscription() {
    let (signal, mounted, sink) = mount_three();
    measure_all(&mounted);
    let before = sink.borrow().underlines.len();

    drop(mounted);
    signal.set(1.5);

    assert_eq!(sink.borrow().underlines.len(), before);
}

#[test]
fn identity_change_pauses_publishing_until_remeasure() {
    let (signal, mounted, sink) = mount_three();
    measure_all(&mounted);
    signal.set(0.0);
    let before = sink.borrow().underlines.len();

    mounted.set_tabs(vec!["a".into(), "b".into(), "c".into()]);
    signal.set(0.0);
    assert_eq!(sink.borrow().underlines.len(), before);

    mounted.on_tab_layout(0, rect(0.0, 90.0));
    mounted.on_tab_layout(1, rect(90.0, 90.0));
    signal.set(0.0);
    assert!(sink.borrow().underlines.len() > before);
}
