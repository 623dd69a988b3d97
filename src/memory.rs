//! Ownership between a patient, the doctor, and the chart.
//!
//! A patient owns its doctor and chart. The doctor looks back through a weak
//! handle that reads as absent once the patient is gone. The chart only holds
//! the patient's id; the ward that issued the id owns the patient.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    console::Console,
    diagnostics::{Diagnostic, DiagnosticKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatientId(pub u32);

#[derive(Debug, Default)]
pub struct Doctor {
    pub name: String,
    patient: RefCell<Weak<Patient>>,
}

impl Doctor {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            patient: RefCell::new(Weak::new()),
        })
    }

    pub fn assign(&self, patient: &Rc<Patient>) {
        *self.patient.borrow_mut() = Rc::downgrade(patient);
    }

    /// The patient under care, if it is still alive.
    pub fn patient(&self) -> Option<Rc<Patient>> {
        self.patient.borrow().upgrade()
    }
}

/// Back-reference by id into a [`Ward`].
///
/// The ward that admitted the patient must outlive every chart naming it.
/// Reading a chart whose patient was discharged is a caller error and is
/// reported, not papered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chart {
    pub patient: PatientId,
}

impl Chart {
    pub fn lookup<'w>(&self, ward: &'w Ward) -> Result<&'w Rc<Patient>, Diagnostic> {
        ward.get(self.patient).ok_or_else(|| {
            Diagnostic::new(
                DiagnosticKind::Memory,
                format!("chart refers to patient {} after discharge", self.patient.0),
            )
            .with_note("a chart must not outlive its patient's stay in the ward")
        })
    }
}

#[derive(Debug)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub doctor: Rc<Doctor>,
    pub chart: Chart,
}

/// Owning registry of patients.
#[derive(Debug, Default)]
pub struct Ward {
    patients: IndexMap<PatientId, Rc<Patient>>,
    next_id: u32,
}

impl Ward {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admit(&mut self, name: impl Into<String>, doctor: Rc<Doctor>) -> Rc<Patient> {
        let id = PatientId(self.next_id);
        self.next_id += 1;
        let patient = Rc::new(Patient {
            id,
            name: name.into(),
            doctor,
            chart: Chart { patient: id },
        });
        patient.doctor.assign(&patient);
        debug!(id = id.0, name = %patient.name, "admitted patient");
        self.patients.insert(id, Rc::clone(&patient));
        patient
    }

    pub fn get(&self, id: PatientId) -> Option<&Rc<Patient>> {
        self.patients.get(&id)
    }

    pub fn discharge(&mut self, id: PatientId) -> Option<Rc<Patient>> {
        let patient = self.patients.shift_remove(&id);
        if patient.is_some() {
            debug!(id = id.0, "discharged patient");
        }
        patient
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

/// Prints its own name from inside a closure that only holds a weak handle.
#[derive(Debug)]
pub struct NameCard {
    pub name: String,
}

impl Default for NameCard {
    fn default() -> Self {
        Self {
            name: "my name".to_string(),
        }
    }
}

impl NameCard {
    pub fn print_my_name(self: &Rc<Self>, console: &mut Console) {
        let weak_self = Rc::downgrade(self);
        let printing_block = |console: &mut Console| {
            if let Some(card) = weak_self.upgrade() {
                console.println(&card.name);
            }
        };
        printing_block(console);
    }
}
