use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use proplog::{
    config::{BuildSelect, Config, SolverAlgorithm, TraceMethod},
    convert,
    frontend::Frontend,
    parse,
    pipeline::Pipeline,
    solve::{Dpll, SolveOutcome, Solver},
    structures::clause::Clause,
    surface::{BufferSurface, Surface},
    types::err::{self},
};

/// A surface which records each clear and each write.
#[derive(Default)]
struct EventSurface {
    events: Mutex<Vec<String>>,
}

impl EventSurface {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Surface for EventSurface {
    fn clear(&self) {
        self.events.lock().unwrap().push("clear".to_string());
    }

    fn show(&self, markup: &str) {
        self.events.lock().unwrap().push(format!("show {markup}"));
    }
}

fn with_delay(millis: u64) -> Config {
    let mut config = Config::default();
    config.delay.value = Duration::from_millis(millis);
    config
}

mod scheduling {
    use super::*;

    #[test]
    fn clear_precedes_the_first_write() {
        let surface = Arc::new(EventSurface::default());
        let mut frontend = Frontend::new(Pipeline::new(with_delay(10)), surface.clone());

        frontend
            .solve("p & q", SolverAlgorithm::Better, TraceMethod::None)
            .unwrap();
        frontend.finish();

        let events = surface.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], "clear");
        assert!(events[1].starts_with("show Clause set is <b>true</b>"));
    }

    #[test]
    fn nothing_is_written_before_the_delay() {
        let surface = Arc::new(BufferSurface::default());
        surface.show("stale");

        let mut frontend = Frontend::new(Pipeline::new(with_delay(300)), surface.clone());
        frontend.build("p | q", BuildSelect::Cnf).unwrap();

        assert_eq!(surface.contents(), "");

        frontend.finish();
        assert_eq!(surface.contents(), "<tt>p q</tt>");
    }

    #[test]
    fn requests_are_not_cancelled() {
        let surface = Arc::new(EventSurface::default());
        let mut frontend = Frontend::new(Pipeline::new(with_delay(50)), surface.clone());

        frontend.build("p", BuildSelect::Cnf).unwrap();
        frontend.build("q", BuildSelect::Cnf).unwrap();
        frontend.finish();

        assert_eq!(
            surface.events(),
            vec!["clear", "clear", "show <tt>p</tt>", "show <tt>q</tt>"]
        );
    }

    #[test]
    fn clear_output_is_immediate() {
        let surface = Arc::new(BufferSurface::default());
        let frontend = Frontend::new(Pipeline::new(Config::default()), surface.clone());

        surface.show("something");
        frontend.clear_output();
        assert_eq!(surface.contents(), "");
    }

    #[test]
    fn finished_frontends_refuse_requests() {
        let surface = Arc::new(BufferSurface::default());
        let mut frontend = Frontend::new(Pipeline::new(with_delay(0)), surface.clone());
        frontend.finish();

        assert_eq!(
            frontend.solve("p", SolverAlgorithm::Better, TraceMethod::None),
            Err(err::SchedulerError::Disconnected)
        );
    }

    #[test]
    fn failed_bodies_leave_the_clear() {
        let mut config = with_delay(0);
        config.truth_table_limit.value = 2;

        let surface = Arc::new(EventSurface::default());
        let mut frontend = Frontend::new(Pipeline::new(config), surface.clone());

        frontend.build("a & b & c", BuildSelect::TruthTable).unwrap();
        frontend.build("a & b", BuildSelect::Cnf).unwrap();
        frontend.finish();

        assert_eq!(
            surface.events(),
            vec!["clear", "clear", "show <tt>a<br>b</tt>"]
        );
    }
}

/// A solver which panics on its first call, and otherwise solves.
#[derive(Default)]
struct PanicOnce {
    panicked: AtomicBool,
}

impl Solver for PanicOnce {
    fn dpll(
        &self,
        clauses: &[Clause],
        max_variable: usize,
        algorithm: SolverAlgorithm,
        trace_method: TraceMethod,
        names: &[String],
    ) -> Result<SolveOutcome, err::SolveError> {
        if !self.panicked.swap(true, Ordering::SeqCst) {
            panic!("solver failure");
        }
        Dpll::default().dpll(clauses, max_variable, algorithm, trace_method, names)
    }
}

mod hostile_input {
    use super::*;

    #[test]
    fn oversized_headers_are_syntax_errors() {
        let surface = Arc::new(EventSurface::default());
        let mut frontend = Frontend::new(Pipeline::new(with_delay(50)), surface.clone());

        frontend
            .solve(
                "p cnf 18446744073709551615 1\n1 0",
                SolverAlgorithm::Better,
                TraceMethod::None,
            )
            .unwrap();
        frontend
            .build("p cnf 18446744073709551615 0", BuildSelect::TruthTable)
            .unwrap();
        frontend.build("p -> q", BuildSelect::TruthTable).unwrap();
        frontend.finish();

        let events = surface.events();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0..3], ["clear", "clear", "clear"]);
        assert!(events[3].starts_with("show Syntax error: "));
        assert!(events[3].contains("exceed the limit"));
        assert!(events[4].starts_with("show Parse error: "));
        assert_eq!(
            events[5],
            "show <tt>p q | value<br>F F | T<br>F T | T<br>T F | F<br>T T | T</tt>"
        );
    }

    #[test]
    fn the_worker_survives_a_panicking_body() {
        let pipeline = Pipeline::with_collaborators(
            parse::Proplog::default(),
            convert::Proplog::from_config(&Config::default()),
            PanicOnce::default(),
            with_delay(50),
        );
        let surface = Arc::new(EventSurface::default());
        let mut frontend = Frontend::new(pipeline, surface.clone());

        frontend
            .solve("p", SolverAlgorithm::Better, TraceMethod::None)
            .unwrap();
        frontend
            .solve("p", SolverAlgorithm::Better, TraceMethod::None)
            .unwrap();
        frontend.build("p | q", BuildSelect::Cnf).unwrap();
        frontend.finish();

        let events = surface.events();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0..3], ["clear", "clear", "clear"]);
        assert!(events[3].starts_with("show Clause set is <b>true</b>"));
        assert_eq!(events[4], "show <tt>p q</tt>");
    }

    #[test]
    fn deep_nesting_is_a_syntax_error() {
        let surface = Arc::new(BufferSurface::default());
        let mut frontend = Frontend::new(Pipeline::new(with_delay(0)), surface.clone());

        let text = format!("{}p{}", "(".repeat(100_000), ")".repeat(100_000));
        frontend.build(&text, BuildSelect::Cnf).unwrap();
        frontend.finish();

        assert!(surface.contents().starts_with("Parse error: "));
        assert!(surface.contents().contains("too deep"));
    }

    #[test]
    fn long_chains_are_solved() {
        let surface = Arc::new(BufferSurface::default());
        let mut frontend = Frontend::new(Pipeline::new(with_delay(0)), surface.clone());

        let names = (0..5000).map(|index| format!("a{index}")).collect::<Vec<_>>();
        frontend
            .solve(&names.join(" & "), SolverAlgorithm::Better, TraceMethod::None)
            .unwrap();
        frontend.finish();

        assert!(surface.contents().starts_with("Clause set is <b>true</b>"));
        assert!(surface.contents().contains("a4999"));
    }
}

mod build_modes {
    use super::*;

    #[test]
    fn named_modes() {
        let surface = Arc::new(BufferSurface::default());
        let mut frontend = Frontend::new(Pipeline::new(with_delay(0)), surface.clone());

        frontend.build_named("p & q", "PARSE_TREE").unwrap();
        frontend.finish();

        assert_eq!(surface.contents(), "[&,p,q]");
    }

    #[test]
    fn unknown_modes_are_reported() {
        let surface = Arc::new(BufferSurface::default());
        let mut frontend = Frontend::new(Pipeline::new(with_delay(0)), surface.clone());

        let result = frontend.build_named("p & q", "<dot>");
        frontend.finish();

        assert_eq!(
            result,
            Err(err::ErrorKind::Config(err::ConfigError::UnknownBuildMode(
                "<dot>".to_string()
            )))
        );
        assert_eq!(surface.contents(), "Unknown build mode: &lt;dot&gt;.");
    }
}
