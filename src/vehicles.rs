//! A two-level vehicle hierarchy used to show safe downcasting.
//!
//! The hierarchy is closed: every vehicle carries its variant tag, so
//! narrowing never needs runtime reflection.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub gears: Vec<u8>,
}

impl Default for Car {
    fn default() -> Self {
        Self {
            gears: vec![1, 2, 3, 4],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FancyCar {
    pub base: Car,
    pub paint_job: &'static str,
}

impl Default for FancyCar {
    fn default() -> Self {
        Self {
            base: Car::default(),
            paint_job: "hot",
        }
    }
}

/// A vehicle seen through its base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vehicle {
    Plain(Car),
    Fancy(FancyCar),
}

impl Vehicle {
    /// Attributes every vehicle shares, regardless of how it was built.
    pub fn gears(&self) -> &[u8] {
        match self {
            Vehicle::Plain(car) => &car.gears,
            Vehicle::Fancy(fancy) => &fancy.base.gears,
        }
    }

    /// Narrows to a fancy car when, and only when, one was constructed.
    pub fn as_fancy(&self) -> Option<&FancyCar> {
        match self {
            Vehicle::Fancy(fancy) => Some(fancy),
            Vehicle::Plain(_) => None,
        }
    }

    /// Chained access: absent for plain cars rather than an error.
    pub fn paint_job(&self) -> Option<&'static str> {
        self.as_fancy().map(|fancy| fancy.paint_job)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Vehicle::Plain(_) => "Car",
            Vehicle::Fancy(_) => "FancyCar",
        }
    }
}

impl From<Car> for Vehicle {
    fn from(car: Car) -> Self {
        Vehicle::Plain(car)
    }
}

impl From<FancyCar> for Vehicle {
    fn from(fancy: FancyCar) -> Self {
        Vehicle::Fancy(fancy)
    }
}

/// `[Car, FancyCar]`, both typed as the base.
pub fn showroom() -> Vec<Vehicle> {
    vec![Car::default().into(), FancyCar::default().into()]
}
