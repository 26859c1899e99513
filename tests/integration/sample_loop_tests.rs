//! End-to-end windows: real edge counter → FrequencyService → H-bridge
//! driver, with scripted edges and recording pins.

use crate::mock_hw::{LateEdgeInput, MockPin, RecordingSink, ScriptedDelay, leak_counter};

use triggerfreq::adapters::signal_input::SignalInput;
use triggerfreq::app::events::{AppEvent, WindowReport};
use triggerfreq::app::service::FrequencyService;
use triggerfreq::config::FrequencyConfig;
use triggerfreq::control::classifier::ActuatorState;
use triggerfreq::drivers::h_bridge::{Direction, HBridgeDriver};

struct Rig {
    service: FrequencyService,
    input: SignalInput,
    delay: ScriptedDelay,
    bridge: HBridgeDriver<MockPin, MockPin>,
    ena: MockPin,
    dir: MockPin,
    sink: RecordingSink,
}

impl Rig {
    fn new(edges: impl IntoIterator<Item = u32>) -> Self {
        Self::with_config(FrequencyConfig::default(), edges)
    }

    fn with_config(config: FrequencyConfig, edges: impl IntoIterator<Item = u32>) -> Self {
        let counter = leak_counter();
        let ena = MockPin::new();
        let dir = MockPin::new();
        let mut sink = RecordingSink::default();
        let mut service = FrequencyService::new(config);
        service.start(&mut sink);
        Self {
            service,
            input: SignalInput::with_counter(counter),
            delay: ScriptedDelay::new(counter, edges),
            bridge: HBridgeDriver::new(ena.clone(), dir.clone()),
            ena,
            dir,
            sink,
        }
    }

    fn window(&mut self) -> WindowReport {
        self.service.run_window(
            &mut self.input,
            &mut self.delay,
            &mut self.bridge,
            &mut self.sink,
        )
    }
}

// ── Default config (rate 4, margin 50, A 1300 Hz, B 2600 Hz) ──

#[test]
fn count_near_forward_target_enables_forward() {
    let mut rig = Rig::new([320]);
    let r = rig.window();
    assert_eq!(r.pulse_count, 320);
    assert_eq!(r.state, ActuatorState::Forward);
    assert!(rig.ena.is_high(), "ENA must be high");
    assert!(!rig.dir.is_high(), "DIR must be low (forward)");
}

#[test]
fn count_near_reverse_target_enables_reverse() {
    let mut rig = Rig::new([660]);
    let r = rig.window();
    assert_eq!(r.state, ActuatorState::Reverse);
    assert_eq!(r.estimated_hz, 2640);
    assert!(rig.ena.is_high());
    assert!(rig.dir.is_high(), "DIR must be high (reverse)");
}

#[test]
fn count_between_targets_disables() {
    let mut rig = Rig::new([450]);
    assert_eq!(rig.window().state, ActuatorState::Disabled);
    assert!(!rig.ena.is_high());
}

#[test]
fn silent_input_disables() {
    let mut rig = Rig::new([0]);
    let r = rig.window();
    assert_eq!(r.pulse_count, 0);
    assert_eq!(r.state, ActuatorState::Disabled);
    assert!(!rig.ena.is_high());
}

// ── Loop behaviour ────────────────────────────────────────────

#[test]
fn every_window_has_the_same_length() {
    let mut rig = Rig::new([320, 0, 660, 450, 325]);
    for _ in 0..5 {
        rig.window();
    }
    assert_eq!(rig.delay.windows_ms, [250; 5]);
}

#[test]
fn count_restarts_from_zero_each_window() {
    let mut rig = Rig::new([200, 200]);
    assert_eq!(rig.window().pulse_count, 200);
    assert_eq!(rig.window().pulse_count, 200);
}

#[test]
fn disabling_keeps_last_direction() {
    let mut rig = Rig::new([660, 450]);
    rig.window();
    let r = rig.window();
    assert_eq!(r.state, ActuatorState::Disabled);
    assert!(!rig.ena.is_high());
    assert!(rig.dir.is_high(), "DIR untouched when disabled");
    assert_eq!(rig.bridge.direction(), Direction::Reverse);
}

#[test]
fn state_follows_only_the_current_window() {
    let counts = [320, 660, 0, 660, 320, 320, 451];
    let expected = [
        ActuatorState::Forward,
        ActuatorState::Reverse,
        ActuatorState::Disabled,
        ActuatorState::Reverse,
        ActuatorState::Forward,
        ActuatorState::Forward,
        ActuatorState::Disabled,
    ];
    let mut rig = Rig::new(counts);
    let got: Vec<_> = counts.iter().map(|_| rig.window().state).collect();
    assert_eq!(got, expected);
}

#[test]
fn edges_outside_the_window_are_not_counted() {
    let counter = leak_counter();
    let mut input = LateEdgeInput {
        inner: SignalInput::with_counter(counter),
        late_edges: 1_000,
    };
    let mut delay = ScriptedDelay::new(counter, [320, 660]);
    let mut bridge = HBridgeDriver::new(MockPin::new(), MockPin::new());
    let mut sink = RecordingSink::default();
    let mut service = FrequencyService::new(FrequencyConfig::default());

    let r1 = service.run_window(&mut input, &mut delay, &mut bridge, &mut sink);
    let r2 = service.run_window(&mut input, &mut delay, &mut bridge, &mut sink);
    assert_eq!(r1.pulse_count, 320);
    assert_eq!(r2.pulse_count, 660);
}

#[test]
fn events_report_each_window_and_transitions() {
    let mut rig = Rig::new([320, 330, 0]);
    for _ in 0..3 {
        rig.window();
    }

    assert!(matches!(rig.sink.events.first(), Some(AppEvent::Started(_))));
    let windows = rig
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::Window(_)))
        .count();
    assert_eq!(windows, 3);

    let transitions: Vec<_> = rig
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::StateChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        transitions,
        [(ActuatorState::Forward, ActuatorState::Disabled)]
    );
}

#[test]
fn custom_config_changes_window_and_targets() {
    let cfg = FrequencyConfig {
        sample_rate: 10,
        error_margin: 20,
        freq_a: 1000,
        freq_b: 3000,
    };
    let mut rig = Rig::with_config(cfg, [105, 290, 200]);
    assert_eq!(rig.window().state, ActuatorState::Forward);
    assert_eq!(rig.window().state, ActuatorState::Reverse);
    assert_eq!(rig.window().state, ActuatorState::Disabled);
    assert_eq!(rig.delay.windows_ms, [100, 100, 100]);
}
