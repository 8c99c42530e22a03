use std::time::{Duration, Instant};

use legato_config::LegatoConfig;
use legato_gutter::SurfaceId;
use legato_primitives::LineRange;
use legato_scope::GrammarKind;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::host::DocumentId;
use crate::test_host::{DOC, MockHost};

fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn ms(n: u64) -> Duration {
	Duration::from_millis(n)
}

fn engine() -> Engine<u32> {
	Engine::from_config(&LegatoConfig::default()).unwrap()
}

/// 25 lines with tab markers A, B and C on lines 2, 10 and 20.
fn three_tabs() -> String {
	(0..25)
		.map(|line| match line {
			2 => "# [A]".to_string(),
			10 => "# [B]".to_string(),
			20 => "# [C]".to_string(),
			_ => format!("line {line}"),
		})
		.collect::<Vec<_>>()
		.join("\n")
}

fn bounds(engine: &Engine<u32>) -> Vec<(usize, usize, String)> {
	engine
		.spans()
		.iter()
		.map(|span| (span.start_line(), span.end_line(), span.label.clone()))
		.collect()
}

fn move_cursor(engine: &mut Engine<u32>, host: &mut MockHost, line: usize) -> String {
	host.cursor = Some(line);
	engine.handle_event(host, HostEvent::CursorMoved, Instant::now());
	host.status_text()
}

#[test]
fn test_scenario_three_tabs() {
	init_tracing();
	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();

	let outcome = engine.recompute(&mut host);
	assert_eq!(
		outcome,
		PassOutcome::Decorated {
			grammar: GrammarKind::Tabs,
			spans: 3
		}
	);
	assert_eq!(
		bounds(&engine),
		vec![(2, 9, "A".into()), (10, 19, "B".into()), (20, 24, "C".into())]
	);
	assert_eq!(host.applied_labels(), vec!["A", "A", "B", "B", "C", "C"]);
	assert_eq!(host.applied[0].1[0].lines, LineRange::inclusive(2, 2));
	assert_eq!(host.applied[1].1[0].lines, LineRange::inclusive(3, 9));
	assert_eq!(engine.held_marks(), 6);
}

#[test]
fn test_cursor_status() {
	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();
	engine.recompute(&mut host);

	assert_eq!(move_cursor(&mut engine, &mut host, 0), "");
	assert_eq!(move_cursor(&mut engine, &mut host, 2), "Tab: A");
	assert_eq!(move_cursor(&mut engine, &mut host, 9), "Tab: A");
	assert_eq!(move_cursor(&mut engine, &mut host, 10), "Tab: B");
	assert_eq!(move_cursor(&mut engine, &mut host, 24), "Tab: C");
	assert_eq!(
		engine.status(),
		&StatusReadout::Scope {
			prefix: "Tab",
			label: "C".into()
		}
	);
}

#[test]
fn test_cursor_move_does_not_arm_timer() {
	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();
	move_cursor(&mut engine, &mut host, 3);
	assert!(!engine.timer().is_armed());
	assert!(host.created.is_empty());
}

#[test]
fn test_burst_of_edits_recomputes_once() {
	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();
	let t0 = Instant::now();

	for i in 0..5 {
		let now = t0 + ms(100 * i);
		engine.handle_event(&mut host, HostEvent::TextChanged { document: DOC }, now);
		assert_eq!(engine.poll(&mut host, now), None);
	}
	assert!(host.created.is_empty());

	let last = t0 + ms(400);
	assert_eq!(engine.poll(&mut host, last + ms(499)), None);
	assert!(matches!(
		engine.poll(&mut host, last + ms(500)),
		Some(PassOutcome::Decorated { spans: 3, .. })
	));
	assert_eq!(engine.poll(&mut host, last + ms(2_000)), None);
	assert_eq!(host.created.len(), 6);

	engine.handle_event(&mut host, HostEvent::ActiveDocumentChanged, last + ms(3_000));
	assert!(engine.poll(&mut host, last + ms(3_500)).is_some());
	assert_eq!(host.created.len(), 12);
	assert_eq!(host.live_marks(), (6..12).collect::<Vec<_>>());
}

#[test]
fn test_edits_to_other_documents_ignored() {
	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();
	let t0 = Instant::now();

	engine.handle_event(
		&mut host,
		HostEvent::TextChanged {
			document: DocumentId(42),
		},
		t0,
	);
	assert!(!engine.timer().is_armed());
	assert_eq!(engine.poll(&mut host, t0 + ms(1_000)), None);
}

#[test]
fn test_surface_switch_releases_and_reapplies() {
	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();
	engine.recompute(&mut host);
	assert_eq!(move_cursor(&mut engine, &mut host, 12), "Tab: B");

	let t0 = Instant::now();
	let other = SurfaceId(2);
	host.surface = Some(other);
	engine.handle_event(
		&mut host,
		HostEvent::ActiveSurfaceChanged {
			surface: Some(other),
		},
		t0,
	);
	// Spans of the previous surface are not consulted.
	assert_eq!(host.status_text(), "");
	assert_eq!(move_cursor(&mut engine, &mut host, 12), "");

	assert!(engine.poll(&mut host, t0 + ms(500)).is_some());
	assert_eq!(host.released, (0..6).collect::<Vec<_>>());
	assert_eq!(host.live_marks(), (6..12).collect::<Vec<_>>());
	assert_eq!(host.status_text(), "Tab: B");
}

#[test]
fn test_no_grammar_releases_marks() {
	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();
	engine.recompute(&mut host);
	host.cursor = Some(4);

	host.set_text("# Plain prose\n\nNothing to see here.\n");
	assert_eq!(engine.recompute(&mut host), PassOutcome::NoGrammar);
	assert!(host.live_marks().is_empty());
	assert!(engine.spans().is_empty());
	assert_eq!(host.status_text(), "");
}

#[test]
fn test_front_matter_alone_selects_nothing() {
	let mut host = MockHost::markdown("---\ntitle: Quickstart\n---\nBody text\n");
	let mut engine = engine();
	assert_eq!(engine.recompute(&mut host), PassOutcome::NoGrammar);
	assert!(host.created.is_empty());
}

#[test]
fn test_front_matter_with_tab_selects_tabs() {
	let text = "---\ntitle: Quickstart\n---\n# [Python]\nprint()\n---\n";
	let mut host = MockHost::markdown(text);
	let mut engine = engine();
	assert!(matches!(
		engine.recompute(&mut host),
		PassOutcome::Decorated {
			grammar: GrammarKind::Tabs,
			..
		}
	));
	assert_eq!(engine.spans()[0].label, "Python");
}

#[test]
fn test_zones_status_prefix_and_gaps() {
	let text = [
		"intro",
		":::zone pivot=\"windows\"",
		"Run setup.exe",
		":::zone-end",
		"shared",
		":::zone pivot=\"linux\"",
		"Run ./setup",
		":::zone-end",
	]
	.join("\n");
	let mut host = MockHost::markdown(&text);
	let mut engine = engine();
	assert!(matches!(
		engine.recompute(&mut host),
		PassOutcome::Decorated {
			grammar: GrammarKind::Zones,
			spans: 2
		}
	));

	assert_eq!(move_cursor(&mut engine, &mut host, 2), "Zone: windows");
	assert_eq!(move_cursor(&mut engine, &mut host, 4), "");
	assert_eq!(move_cursor(&mut engine, &mut host, 7), "Zone: linux");
}

#[test]
fn test_unrecognized_file_type() {
	let mut host = MockHost::markdown(&three_tabs());
	host.recognized = false;
	host.cursor = Some(5);
	let mut engine = engine();
	assert_eq!(engine.recompute(&mut host), PassOutcome::Unrecognized);
	assert!(host.created.is_empty());
	assert_eq!(host.status_text(), "");
	assert_eq!(host.text_reads.get(), 0);
}

#[test]
fn test_no_surface() {
	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();
	engine.recompute(&mut host);

	assert_eq!(host.text_reads.get(), 1);

	host.surface = None;
	assert_eq!(engine.recompute(&mut host), PassOutcome::NoSurface);
	assert!(host.live_marks().is_empty());
	assert_eq!(host.text_reads.get(), 1);
}

#[test]
fn test_no_document() {
	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();
	engine.recompute(&mut host);

	host.document = None;
	assert_eq!(engine.recompute(&mut host), PassOutcome::NoDocument);
	assert!(host.live_marks().is_empty());
	assert_eq!(engine.held_marks(), 0);
}

#[test]
fn test_dispose_all() {
	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();
	let t0 = Instant::now();
	engine.recompute(&mut host);
	engine.handle_event(&mut host, HostEvent::ActiveDocumentChanged, t0);

	engine.dispose_all(&mut host);
	assert!(host.live_marks().is_empty());
	assert_eq!(host.statuses.last(), Some(&StatusReadout::Hidden));
	assert!(!engine.timer().is_armed());
	assert_eq!(engine.poll(&mut host, t0 + ms(1_000)), None);
	assert_eq!(engine.held_marks(), 0);
}

#[test]
fn test_reset_keeps_marks_until_next_pass() {
	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();
	engine.recompute(&mut host);

	engine.reset();
	assert!(engine.spans().is_empty());
	assert!(engine.status().is_hidden());
	assert_eq!(engine.held_marks(), 6);

	engine.recompute(&mut host);
	assert_eq!(host.live_marks(), (6..12).collect::<Vec<_>>());
}

#[test]
fn test_quiet_window_from_config() {
	let config = LegatoConfig::parse("scheduler { quiet-window-ms 250 }").unwrap();
	let mut engine = Engine::<u32>::from_config(&config).unwrap();
	let mut host = MockHost::markdown(&three_tabs());
	let t0 = Instant::now();

	engine.handle_event(&mut host, HostEvent::ActiveDocumentChanged, t0);
	assert!(engine.poll(&mut host, t0 + ms(250)).is_some());
}

#[test]
fn test_strict_guard_from_config() {
	let config = LegatoConfig::parse(r#"tabs { delimiter-guard "after-opening" }"#).unwrap();
	let mut strict = Engine::<u32>::from_config(&config).unwrap();
	let mut host = MockHost::markdown("# Heading\n---\nbody\n");
	assert_eq!(strict.recompute(&mut host), PassOutcome::NoGrammar);

	let mut lenient = engine();
	assert!(matches!(lenient.recompute(&mut host), PassOutcome::Decorated { .. }));
}

#[rstest]
#[case(HostEvent::ActiveDocumentChanged, true, false)]
#[case(HostEvent::TextChanged { document: DOC }, true, false)]
#[case(HostEvent::ActiveSurfaceChanged { surface: None }, true, true)]
#[case(HostEvent::CursorMoved, false, true)]
fn test_event_reactions(#[case] event: HostEvent, #[case] invalidates: bool, #[case] refreshes: bool) {
	assert_eq!(event.invalidates_spans(), invalidates);
	assert_eq!(event.refreshes_status(), refreshes);

	let mut host = MockHost::markdown(&three_tabs());
	let mut engine = engine();
	engine.handle_event(&mut host, event, Instant::now());
	assert_eq!(engine.timer().is_armed(), invalidates);
	assert_eq!(host.statuses.len(), usize::from(refreshes));
	assert_eq!(host.text_reads.get(), 0);
}
