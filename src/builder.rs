//! Builder: a waitress directs a bartender through an order, one drink at a time.

use std::fmt;
use std::str::FromStr;

use log::info;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drink {
    Beer,
    Mojito,
    Kamikaze,
    Margarita,
    MaiTai,
    PinaColada,
}

impl Drink {
    pub const MENU: [Drink; 6] = [
        Drink::Beer,
        Drink::Mojito,
        Drink::Kamikaze,
        Drink::Margarita,
        Drink::MaiTai,
        Drink::PinaColada,
    ];

    /// The key customers order by.
    pub fn key(self) -> &'static str {
        match self {
            Drink::Beer => "beer",
            Drink::Mojito => "mojito",
            Drink::Kamikaze => "kamikaze",
            Drink::Margarita => "margarita",
            Drink::MaiTai => "mai_tai",
            Drink::PinaColada => "pina_colada",
        }
    }
}

impl fmt::Display for Drink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Drink::Beer => "Beer",
            Drink::Mojito => "Mojito",
            Drink::Kamikaze => "Kamikaze",
            Drink::Margarita => "Margarita",
            Drink::MaiTai => "Mai Tai",
            Drink::PinaColada => "Pina Colada",
        };
        f.write_str(name)
    }
}

impl FromStr for Drink {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Drink::MENU
            .into_iter()
            .find(|drink| drink.key() == s)
            .ok_or_else(|| OrderError::UnknownDrink(s.to_string()))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum OrderError {
    #[error("`{0}` is not on the menu")]
    UnknownDrink(String),
    #[error("the order was empty")]
    EmptyOrder,
}

#[cfg_attr(test, automock)]
pub trait Bartender {
    fn prepare(&mut self, drink: Drink);
    fn orders_up(&self) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct HouseBartender {
    drinks: Vec<String>,
}

impl HouseBartender {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Bartender for HouseBartender {
    fn prepare(&mut self, drink: Drink) {
        info!("preparing {}", drink);
        self.drinks.push(drink.to_string());
    }

    fn orders_up(&self) -> Vec<String> {
        self.drinks.clone()
    }
}

pub struct Waitress<B> {
    bartender: B,
}

impl<B: Bartender> Waitress<B> {
    pub fn new(bartender: B) -> Self {
        Self { bartender }
    }

    /// Checks the whole order against the menu before anything is prepared,
    /// then returns every drink the bartender has served so far.
    pub fn take_order(&mut self, drinks: &[&str]) -> Result<Vec<String>, OrderError> {
        let order = drinks
            .iter()
            .map(|drink| drink.parse::<Drink>())
            .collect::<Result<Vec<_>, _>>()?;

        if order.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        for drink in order {
            self.bartender.prepare(drink);
        }
        Ok(self.bartender.orders_up())
    }

    pub fn bartender(&self) -> &B {
        &self.bartender
    }
}
