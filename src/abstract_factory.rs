//! Abstract Factory: one factory per car line produces a matching family of parts.

use log::info;
#[cfg(test)]
use mockall::automock;

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Combustion,
    V8,
    Hybrid,
}

impl EngineKind {
    fn label(self) -> &'static str {
        match self {
            EngineKind::Combustion => "Combustion",
            EngineKind::V8 => "V8",
            EngineKind::Hybrid => "hybrid",
        }
    }
}

pub trait Engine {
    fn kind(&self) -> EngineKind;

    fn start(&self) -> String {
        let message = format!("Starting {} engine", self.kind().label());
        info!("{}", message);
        message
    }

    fn stop(&self) -> String {
        let message = format!("Stopping {} engine", self.kind().label());
        info!("{}", message);
        message
    }

    fn accelerate(&self) -> String {
        let message = format!("Accelerating {} engine", self.kind().label());
        info!("{}", message);
        message
    }
}

pub struct CombustionEngine;
impl Engine for CombustionEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Combustion
    }
}

pub struct V8Engine;
impl Engine for V8Engine {
    fn kind(&self) -> EngineKind {
        EngineKind::V8
    }
}

pub struct HybridEngine;
impl Engine for HybridEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Hybrid
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompartmentKind {
    Standard,
    Muscle,
    Hybrid,
}

pub trait PassengerCompartment {
    fn kind(&self) -> CompartmentKind;
}

pub struct StandardPassengerCompartment;
impl PassengerCompartment for StandardPassengerCompartment {
    fn kind(&self) -> CompartmentKind {
        CompartmentKind::Standard
    }
}

pub struct MusclePassengerCompartment;
impl PassengerCompartment for MusclePassengerCompartment {
    fn kind(&self) -> CompartmentKind {
        CompartmentKind::Muscle
    }
}

pub struct HybridPassengerCompartment;
impl PassengerCompartment for HybridPassengerCompartment {
    fn kind(&self) -> CompartmentKind {
        CompartmentKind::Hybrid
    }
}

// ============================================================================
// Factories
// ============================================================================

#[cfg_attr(test, automock)]
pub trait CarPartsFactory {
    fn create_engine(&self) -> Box<dyn Engine>;
    fn create_passenger_compartment(&self) -> Box<dyn PassengerCompartment>;
    // Doors, wheels and the rest would follow the same shape
}

pub struct StandardCarPartsFactory;
impl CarPartsFactory for StandardCarPartsFactory {
    fn create_engine(&self) -> Box<dyn Engine> {
        Box::new(CombustionEngine)
    }

    fn create_passenger_compartment(&self) -> Box<dyn PassengerCompartment> {
        Box::new(StandardPassengerCompartment)
    }
}

pub struct MuscleCarPartsFactory;
impl CarPartsFactory for MuscleCarPartsFactory {
    fn create_engine(&self) -> Box<dyn Engine> {
        Box::new(V8Engine)
    }

    fn create_passenger_compartment(&self) -> Box<dyn PassengerCompartment> {
        Box::new(MusclePassengerCompartment)
    }
}

pub struct HybridCarPartsFactory;
impl CarPartsFactory for HybridCarPartsFactory {
    fn create_engine(&self) -> Box<dyn Engine> {
        Box::new(HybridEngine)
    }

    fn create_passenger_compartment(&self) -> Box<dyn PassengerCompartment> {
        Box::new(HybridPassengerCompartment)
    }
}

// ============================================================================
// Client
// ============================================================================

/// A car only knows its factory's interface, never the concrete parts.
pub struct Car {
    engine: Box<dyn Engine>,
    passenger_compartment: Box<dyn PassengerCompartment>,
}

impl Car {
    pub fn new(parts: &dyn CarPartsFactory) -> Self {
        Self {
            engine: parts.create_engine(),
            passenger_compartment: parts.create_passenger_compartment(),
        }
    }

    pub fn start(&self) -> String {
        self.engine.start()
    }

    pub fn stop(&self) -> String {
        self.engine.stop()
    }

    pub fn accelerate(&self) -> String {
        self.engine.accelerate()
    }

    pub fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    pub fn passenger_compartment(&self) -> &dyn PassengerCompartment {
        self.passenger_compartment.as_ref()
    }
}
