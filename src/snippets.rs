use std::rc::Rc;

use indexmap::IndexMap;

use crate::{
    access::{IndexPath, TableSource, TableViewDataSource},
    console::Console,
    diagnostics::Result,
    failure,
    generics::{capitalized, peek},
    memory::{Doctor, NameCard, Ward},
    operators::repeat_string,
    optional::{
        self, Labelled, OPTIONAL_STRING1, OPTIONAL_STRING2, SOMETHING_BAD, bind_or_else,
        coalesce, force_unwrap,
    },
    tuples,
    vehicles::showroom,
};

/// One self-contained demonstration.
#[derive(Clone)]
pub struct Snippet {
    pub name: &'static str,
    pub summary: &'static str,
    pub callback: fn(&mut Console) -> Result<()>,
}

impl Snippet {
    pub fn run(&self, console: &mut Console) -> Result<()> {
        (self.callback)(console)
    }
}

impl std::fmt::Debug for Snippet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<snippet {}>", self.name)
    }
}

/// Registers the catalogue in the order it runs.
pub fn install(catalogue: &mut IndexMap<&'static str, Snippet>) {
    let entries = [
        snippet(
            "deferred-init",
            "bindings and fields assigned after declaration",
            deferred_init,
        ),
        snippet(
            "type-spelling",
            "sugared and spelled-out generic types are the same",
            type_spelling,
        ),
        snippet(
            "optional-binding",
            "bind two optionals under a condition",
            optional_binding,
        ),
        snippet("guard", "leave early when a binding fails", guard),
        snippet(
            "force-unwrap",
            "unwrapping without a fallback is checked",
            force_unwrapping,
        ),
        snippet(
            "downcasting",
            "narrow a base-typed vehicle to a fancy car",
            downcasting,
        ),
        snippet(
            "optional-chaining",
            "reach through a downcast that may be absent",
            optional_chaining,
        ),
        snippet(
            "downcast-binding",
            "bind the downcast and handle the miss",
            downcast_binding,
        ),
        snippet(
            "errors",
            "propagate a failure, then handle every kind",
            errors,
        ),
        snippet(
            "try-optional",
            "turn any failure into an absent value",
            try_optional,
        ),
        snippet(
            "access-control",
            "public surface over private members",
            access_control,
        ),
        snippet("memory", "weak and id-based back-references", memory),
        snippet(
            "closure-capture",
            "capture a weak handle to self in a closure",
            closure_capture,
        ),
        snippet(
            "tuples",
            "iterate a mapping as key/value pairs",
            tuple_pairs,
        ),
        snippet("generics", "one identity function for every type", generics),
        snippet(
            "coalescing",
            "fall back to a default for an empty optional",
            coalescing,
        ),
        snippet(
            "repeat-operator",
            "repeat a string a number of times",
            repeat_operator,
        ),
    ];
    for entry in entries {
        catalogue.insert(entry.name, entry);
    }
}

fn snippet(
    name: &'static str,
    summary: &'static str,
    callback: fn(&mut Console) -> Result<()>,
) -> Snippet {
    Snippet {
        name,
        summary,
        callback,
    }
}

#[allow(clippy::needless_late_init)]
fn deferred_init(console: &mut Console) -> Result<()> {
    let string: &str;
    string = "hello";
    console.println(string);

    let labelled = Labelled::new(string);
    console.println(&labelled.string);
    Ok(())
}

fn type_spelling(console: &mut Console) -> Result<()> {
    let sugared: Vec<String> = Vec::new();
    let spelled = Vec::<String>::new();
    console.println(format!("{sugared:?} == {spelled:?}: {}", sugared == spelled));

    let sugared: Option<String> = None;
    let spelled = Option::<String>::None;
    console.println(format!("{sugared:?} == {spelled:?}: {}", sugared == spelled));
    Ok(())
}

fn optional_binding(console: &mut Console) -> Result<()> {
    match optional::greet_if_hello(OPTIONAL_STRING1, OPTIONAL_STRING2) {
        Some(greeting) => console.println(greeting),
        None => console.println(SOMETHING_BAD),
    }
    Ok(())
}

fn guard(console: &mut Console) -> Result<()> {
    let Some(joined) = optional::join_both(OPTIONAL_STRING1, OPTIONAL_STRING2) else {
        console.println(SOMETHING_BAD);
        return Ok(());
    };
    console.println(joined);
    Ok(())
}

fn force_unwrapping(console: &mut Console) -> Result<()> {
    let second = force_unwrap(OPTIONAL_STRING2, "optional_string2")?;
    console.println(format!("unwrapped {second:?}"));

    match force_unwrap(OPTIONAL_STRING1, "optional_string1") {
        Ok(first) => console.println(format!("unwrapped {first:?}")),
        Err(err) => console.println(err),
    }
    Ok(())
}

fn downcasting(console: &mut Console) -> Result<()> {
    let cars = showroom();
    let query_car = &cars[1];
    console.println(format!(
        "{} gears: {:?}",
        query_car.type_name(),
        query_car.gears()
    ));

    for (index, car) in cars.iter().enumerate() {
        let outcome = bind_or_else(car.as_fancy(), |_| "FancyCar", || "absent");
        console.println(format!("cars[{index}] as FancyCar: {outcome}"));
    }
    Ok(())
}

fn optional_chaining(console: &mut Console) -> Result<()> {
    let cars = showroom();
    let paint_job1 = cars[1].paint_job();
    let paint_job2 = cars[0].paint_job();
    console.println(format!("paint_job1: {paint_job1:?}"));
    console.println(format!("paint_job2: {paint_job2:?}"));
    Ok(())
}

fn downcast_binding(console: &mut Console) -> Result<()> {
    let cars = showroom();
    if let Some(fancy) = cars[1].as_fancy() {
        console.println(format!(
            "gears {:?}, paint job {}",
            fancy.base.gears, fancy.paint_job
        ));
    } else {
        console.println("cars[1] is not a FancyCar");
    }
    Ok(())
}

fn errors(console: &mut Console) -> Result<()> {
    failure::do_another_thing(console);
    Ok(())
}

fn try_optional(console: &mut Console) -> Result<()> {
    let bad_string = failure::attempt(false);
    console.println(format!("bad_string: {bad_string:?}"));
    Ok(())
}

fn access_control(console: &mut Console) -> Result<()> {
    let source = TableSource::default();
    console.println(source.describe());
    let rows = source.number_of_rows_in_section(0);
    let cell = source.cell_for_row_at(IndexPath { section: 0, row: 0 });
    console.println(format!("rows: {rows}, cell: {cell:?}"));
    Ok(())
}

fn memory(console: &mut Console) -> Result<()> {
    let mut ward = Ward::new();
    let patient = ward.admit("Pat", Doctor::new("Dr. Grey"));
    let doctor = Rc::clone(&patient.doctor);
    let chart = patient.chart;
    drop(patient);

    match doctor.patient() {
        Some(current) => console.println(format!("{} treats {}", doctor.name, current.name)),
        None => console.println(format!("{} has no patient", doctor.name)),
    }
    let charted = chart.lookup(&ward)?;
    console.println(format!("chart belongs to {}", charted.name));

    ward.discharge(chart.patient);
    match doctor.patient() {
        Some(current) => console.println(format!("{} treats {}", doctor.name, current.name)),
        None => console.println(format!("{} has no patient", doctor.name)),
    }
    if let Err(diagnostic) = chart.lookup(&ward) {
        console.println(diagnostic.message);
    }
    Ok(())
}

fn closure_capture(console: &mut Console) -> Result<()> {
    let card = Rc::new(NameCard::default());
    card.print_my_name(console);
    Ok(())
}

fn tuple_pairs(console: &mut Console) -> Result<()> {
    let table = tuples::index_table();
    for (index, value) in tuples::pairs(&table) {
        console.println(index);
        console.println(value);
    }
    Ok(())
}

fn generics(console: &mut Console) -> Result<()> {
    let p = capitalized(peek("hello"));
    let integer = peek(5) + 5;
    console.println(p);
    console.println(integer);
    Ok(())
}

fn coalescing(console: &mut Console) -> Result<()> {
    let coalesced = coalesce(OPTIONAL_STRING1, "other thing");
    console.println(coalesced);
    Ok(())
}

fn repeat_operator(console: &mut Console) -> Result<()> {
    console.println(repeat_string("a", 6));
    Ok(())
}
