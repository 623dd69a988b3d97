use std::rc::Rc;

use primer::{
    AbsentValueError, DiagnosticKind, ExecutionContext, Playground, PrimerError,
    failure::{self, DemoError},
    generics::{capitalized, peek},
    memory::{Doctor, Ward},
    operators::repeat_string,
    optional::{self, OPTIONAL_STRING1, OPTIONAL_STRING2, bind_or_else, coalesce, force_unwrap},
    tuples,
    vehicles::{Vehicle, showroom},
};

fn run_snippet(name: &str) -> Vec<String> {
    Playground::new()
        .run_snippet(name)
        .expect("snippet should succeed")
        .lines
}

fn run_error(only: &[&str]) -> PrimerError {
    let context = ExecutionContext {
        echo: false,
        only: only.iter().map(|name| name.to_string()).collect(),
    };
    match Playground::with_context(context).run() {
        Ok(outputs) => panic!("expected error, received {} outputs", outputs.len()),
        Err(err) => err,
    }
}

#[test]
fn force_unwrap_of_absent_value_fails() {
    let err = force_unwrap(None::<i32>, "missing").expect_err("absent value must fail");
    assert_eq!(err, AbsentValueError::new("missing"));
    assert_eq!(coalesce(None, 7), 7);
}

#[test]
fn present_value_wins_over_fallbacks() {
    assert_eq!(force_unwrap(Some(3), "three"), Ok(3));
    assert_eq!(coalesce(Some(3), 7), 3);
    let bound = bind_or_else(Some("value"), |inner| inner.len(), || 0);
    assert_eq!(bound, 5);
    let missed = bind_or_else(None::<&str>, |inner| inner.len(), || 99);
    assert_eq!(missed, 99);
}

#[test]
fn binding_with_condition_requires_hello() {
    assert_eq!(
        optional::greet_if_hello(Some("hello"), OPTIONAL_STRING2),
        Some("hello there".to_string())
    );
    assert_eq!(optional::greet_if_hello(Some("howdy"), OPTIONAL_STRING2), None);
    assert_eq!(optional::greet_if_hello(OPTIONAL_STRING1, OPTIONAL_STRING2), None);
    assert_eq!(
        run_snippet("optional-binding"),
        vec![optional::SOMETHING_BAD]
    );
}

#[test]
fn guard_leaves_early_on_missing_binding() {
    assert_eq!(
        optional::join_both(Some("hi"), Some(" you")),
        Some("hi you".to_string())
    );
    assert_eq!(run_snippet("guard"), vec![optional::SOMETHING_BAD]);
}

#[test]
fn downcast_matches_runtime_construction() {
    let cars = showroom();
    assert!(matches!(cars[0], Vehicle::Plain(_)));
    assert!(cars[0].as_fancy().is_none());
    let fancy = cars[1].as_fancy().expect("second car is fancy");
    assert_eq!(fancy.paint_job, "hot");
    assert_eq!(cars[1].gears(), &[1, 2, 3, 4]);
    assert_eq!(cars[1].paint_job(), Some("hot"));
    assert_eq!(cars[0].paint_job(), None);
}

#[test]
fn downcasting_snippet_reports_each_car() {
    assert_eq!(
        run_snippet("downcasting"),
        vec![
            "FancyCar gears: [1, 2, 3, 4]",
            "cars[0] as FancyCar: absent",
            "cars[1] as FancyCar: FancyCar",
        ]
    );
}

#[test]
fn unreliable_function_only_succeeds_on_true() {
    assert_eq!(
        failure::unreliable_function(true),
        Ok("unreliable string".to_string())
    );
    assert_eq!(failure::unreliable_function(false), Err(DemoError::Bad));
    assert_eq!(failure::attempt(false), None);
    assert_eq!(failure::attempt(true).as_deref(), Some("unreliable string"));
}

#[test]
fn handler_covers_named_kinds_and_catch_all() {
    assert_eq!(failure::handle(failure::do_a_thing()), failure::BAD_MESSAGE);
    assert_eq!(
        failure::handle(Err(DemoError::Worse.into())),
        failure::WORSE_MESSAGE
    );
    assert_eq!(
        failure::handle(Err(anyhow::anyhow!("disk on fire"))),
        failure::UNKNOWN_MESSAGE
    );
    assert_eq!(failure::handle(Ok("fine".to_string())), "fine");
    assert_eq!(run_snippet("errors"), vec!["we hit a bad error!!"]);
}

#[test]
fn weak_back_reference_clears_after_discharge() {
    let mut ward = Ward::new();
    let patient = ward.admit("Pat", Doctor::new("Dr. Grey"));
    let doctor = Rc::clone(&patient.doctor);
    let chart = patient.chart;
    drop(patient);

    let current = doctor.patient().expect("patient is still admitted");
    assert_eq!(current.name, "Pat");
    drop(current);
    assert_eq!(chart.lookup(&ward).map(|p| p.name.clone()).ok(), Some("Pat".into()));

    assert_eq!(ward.len(), 1);
    assert!(ward.discharge(chart.patient).is_some());
    assert!(ward.is_empty());
    assert!(doctor.patient().is_none());
    let diagnostic = chart.lookup(&ward).expect_err("discharged patient");
    assert_eq!(diagnostic.kind, DiagnosticKind::Memory);
}

#[test]
fn memory_snippet_tracks_patient_lifetime() {
    assert_eq!(
        run_snippet("memory"),
        vec![
            "Dr. Grey treats Pat",
            "chart belongs to Pat",
            "Dr. Grey has no patient",
            "chart refers to patient 0 after discharge",
        ]
    );
    assert_eq!(run_snippet("closure-capture"), vec!["my name"]);
}

#[test]
fn mapping_yields_single_pair() {
    let table = tuples::index_table();
    assert_eq!(tuples::pairs(&table), vec![("index", 5)]);
    assert_eq!(run_snippet("tuples"), vec!["index", "5"]);
}

#[test]
fn peek_preserves_type() {
    let text: &str = peek("hello");
    let number: i32 = peek(5) + 5;
    let list: Vec<u8> = peek(vec![1, 2]);
    assert_eq!(capitalized(text), "Hello");
    assert_eq!(number, 10);
    assert_eq!(list, vec![1, 2]);
    assert_eq!(capitalized("hELLO wORLD"), "Hello World");
}

#[test]
fn repeat_string_handles_counts() {
    assert_eq!(repeat_string("a", 6), "aaaaaa");
    assert_eq!(repeat_string("a", 1), "a");
    assert_eq!(repeat_string("a", 0), "");
    assert_eq!(repeat_string("ab", -3), "");
    assert_eq!(repeat_string("ab", 2), "abab");
}

#[test]
fn repeat_string_of_empty_value_ignores_huge_counts() {
    assert_eq!(repeat_string("", 1 << 40), "");
    assert_eq!(repeat_string("", i64::MAX), "");
}

#[test]
fn full_run_keeps_catalogue_order() {
    let outputs = Playground::new().run().expect("playground should run");
    let names: Vec<&str> = outputs.iter().map(|output| output.name).collect();
    assert_eq!(names, Playground::new().names());
    assert_eq!(names.first(), Some(&"deferred-init"));
    assert_eq!(names.last(), Some(&"repeat-operator"));

    let last = outputs.last().expect("at least one snippet");
    assert_eq!(last.lines, vec!["aaaaaa"]);
}

#[test]
fn selection_runs_only_named_snippets() {
    let context = ExecutionContext {
        echo: false,
        only: vec!["coalescing".into(), "force-unwrap".into()],
    };
    let outputs = Playground::with_context(context)
        .run()
        .expect("selection should run");
    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs[0].name, "force-unwrap");
    assert_eq!(
        outputs[0].lines,
        vec![
            "unwrapped \" there\"",
            "unexpectedly found no value while unwrapping `optional_string1`",
        ]
    );
    assert_eq!(outputs[1].lines, vec!["other thing"]);
}

#[test]
fn unknown_snippet_is_a_lookup_diagnostic() {
    match run_error(&["coalescing", "teleport"]) {
        PrimerError::Diagnostic(diag) => {
            assert_eq!(diag.kind, DiagnosticKind::Lookup);
            assert!(diag.message.contains("teleport"));
        }
        other => panic!("expected lookup diagnostic, found {other}"),
    }
}

#[test]
fn access_control_uses_private_members_through_public_view() {
    assert_eq!(
        run_snippet("access-control"),
        vec!["property hello 5", "rows: 1, cell: TableCell { text: None }"]
    );
}

#[test]
fn optional_snippets_print_expected_lines() {
    assert_eq!(run_snippet("deferred-init"), vec!["hello", "hello"]);
    assert_eq!(
        run_snippet("type-spelling"),
        vec!["[] == []: true", "None == None: true"]
    );
    assert_eq!(
        run_snippet("optional-chaining"),
        vec!["paint_job1: Some(\"hot\")", "paint_job2: None"]
    );
    assert_eq!(
        run_snippet("downcast-binding"),
        vec!["gears [1, 2, 3, 4], paint job hot"]
    );
    assert_eq!(run_snippet("try-optional"), vec!["bad_string: None"]);
    assert_eq!(run_snippet("generics"), vec!["Hello", "10"]);
}
