//! Drives a whole session through in-memory buffers.

use tip_core::SliderSteps;
use tip_terminal_lib::commands::Outcome;
use tip_terminal_lib::session::Session;
use tip_terminal_lib::state::{ConfigState, FormSnapshot};

fn run_script(config: ConfigState, script: &str) -> (Session, String) {
    let mut session = Session::new(config);
    let mut output = Vec::new();
    session.run(script.as_bytes(), &mut output).unwrap();
    (session, String::from_utf8(output).unwrap())
}

#[test]
fn test_scenario_bill_split_tip() {
    let config = ConfigState {
        slider_steps: SliderSteps::continuous(),
        ..ConfigState::default()
    };
    let (session, output) = run_script(
        config,
        "bill 100\nsplit +\nsplit +\nsplit +\ntip 0.2\nshow\n",
    );

    let breakdown = session.form().breakdown();
    assert_eq!(breakdown.tip_amount, 20.0);
    assert_eq!(breakdown.total_per_person, 30.0);
    assert!(output.contains("$30.00"));
    assert!(output.starts_with("Tip calculator."));
}

#[test]
fn test_errors_do_not_end_session() {
    let (session, output) = run_script(
        ConfigState::default(),
        "split +\nbogus\nbill 50\nsplit +\n",
    );

    assert!(output.contains("error: [BillRequired] Enter a bill amount first"));
    assert!(output.contains("error: [UnknownCommand]"));
    assert_eq!(session.form().split_count().get(), 2);
    assert_eq!(session.form().breakdown().total_per_person, 25.0);
}

#[test]
fn test_quit_stops_reading() {
    let (session, _) = run_script(ConfigState::default(), "bill 10\nquit\nbill 20\n");
    assert_eq!(session.form().bill_amount(), Some(10.0));
}

#[test]
fn test_json_output_parses() {
    let (_, output) = run_script(ConfigState::default(), "bill 90\npct 50\njson\n");
    let json_line = output
        .lines()
        .find(|line| line.starts_with('{'))
        .expect("json line");
    let snapshot: FormSnapshot = serde_json::from_str(json_line).unwrap();

    assert_eq!(snapshot.tip_percentage, 50);
    assert_eq!(snapshot.tip_amount, 45.0);
    assert_eq!(snapshot.total_per_person, 135.0);
}

#[test]
fn test_split_capped_by_config() {
    let config = ConfigState {
        max_split: 3,
        ..ConfigState::default()
    };
    let mut session = Session::new(config);
    session.handle_line("bill 30").unwrap();
    for _ in 0..5 {
        session.handle_line("split +").unwrap();
    }

    let Outcome::Render(snapshot) = session.handle_line("show").unwrap() else {
        panic!("expected a render");
    };
    assert_eq!(snapshot.split_count, 3);
    assert_eq!(snapshot.total_per_person, 10.0);
}

#[test]
fn test_default_slider_stops_through_session() {
    let mut session = Session::new(ConfigState::default());
    session.handle_line("bill 600").unwrap();

    let mut seen = Vec::new();
    for pct in [0, 10, 20, 30, 50, 70, 90, 100] {
        session.handle_line(&format!("pct {pct}")).unwrap();
        seen.push(session.form().tip_percentage().value());
    }
    assert_eq!(seen, vec![0, 17, 17, 33, 50, 67, 83, 100]);
}

#[test]
fn test_huge_bill_is_refused_and_totals_stay_finite() {
    let (session, output) = run_script(
        ConfigState::default(),
        "bill 250\nbill 1e307\npct 100\nshow\n",
    );

    assert!(output.contains("error: [ValidationError] bill must be between 0 and 1000000000000"));
    let breakdown = session.form().breakdown();
    assert_eq!(breakdown.tip_amount, 250.0);
    assert_eq!(breakdown.total_per_person, 500.0);
    assert!(!output.contains("n/a"));
}

#[test]
fn test_finest_configured_slider_still_works() {
    let config = ConfigState::from_vars(|key| {
        (key == "TIP_SLIDER_STEPS").then(|| "99".to_string())
    })
    .unwrap();
    let (session, _) = run_script(config, "bill 100\ntip 0.5\n");

    assert_eq!(session.form().tip_percentage().value(), 50);
    assert_eq!(session.form().breakdown().tip_amount, 50.0);
}
