//! Decorator: wrap a racket to add accessories, each adding to the price.

pub trait Racket {
    fn price(&self) -> u32;
}

impl<R: Racket + ?Sized> Racket for Box<R> {
    fn price(&self) -> u32 {
        (**self).price()
    }
}

pub struct ConcreteRacket {
    price: u32,
}

impl ConcreteRacket {
    pub fn new() -> Self {
        Self { price: 100 }
    }
}

impl Default for ConcreteRacket {
    fn default() -> Self {
        Self::new()
    }
}

impl Racket for ConcreteRacket {
    fn price(&self) -> u32 {
        self.price
    }
}

/// Adds a fixed surcharge on top of whatever it wraps.
pub struct RacketDecorator<R> {
    name: &'static str,
    surcharge: u32,
    racket: R,
}

impl<R: Racket> RacketDecorator<R> {
    pub fn new(name: &'static str, surcharge: u32, racket: R) -> Self {
        Self {
            name,
            surcharge,
            racket,
        }
    }

    pub fn prince_synthetic_gut(racket: R) -> Self {
        Self::new("Prince synthetic gut string", 5, racket)
    }

    pub fn vs_gut(racket: R) -> Self {
        Self::new("VS gut string", 40, racket)
    }

    pub fn wilson_pro_overgrip(racket: R) -> Self {
        Self::new("Wilson Pro overgrip", 3, racket)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn into_inner(self) -> R {
        self.racket
    }
}

impl<R: Racket> Racket for RacketDecorator<R> {
    fn price(&self) -> u32 {
        self.racket.price() + self.surcharge
    }
}
