//! Composite: computers and their parts share one pricing interface.

use std::rc::Rc;

pub trait Component {
    /// Totals are widened to `u64` so large trees cannot overflow.
    fn price(&self) -> u64;
    fn add(&mut self, component: Rc<dyn Component>);
    fn remove(&mut self, component: &Rc<dyn Component>);
}

/// Leaf: has a price, holds nothing.
#[derive(Debug)]
pub struct ComputerPart {
    price: u32,
}

impl ComputerPart {
    pub fn new(price: u32) -> Self {
        Self { price }
    }
}

impl Component for ComputerPart {
    fn price(&self) -> u64 {
        u64::from(self.price)
    }

    // no-op
    fn add(&mut self, _component: Rc<dyn Component>) {}

    // no-op
    fn remove(&mut self, _component: &Rc<dyn Component>) {}
}

pub struct Computer {
    price: u32,
    components: Vec<Rc<dyn Component>>,
}

impl Computer {
    pub fn new(price: u32) -> Self {
        Self {
            price,
            components: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl Component for Computer {
    fn price(&self) -> u64 {
        u64::from(self.price) + self.components.iter().map(|c| c.price()).sum::<u64>()
    }

    fn add(&mut self, component: Rc<dyn Component>) {
        self.components.push(component);
    }

    /// Removes every occurrence of this exact component.
    fn remove(&mut self, component: &Rc<dyn Component>) {
        self.components.retain(|c| !Rc::ptr_eq(c, component));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(price: u32) -> Rc<dyn Component> {
        Rc::new(ComputerPart::new(price))
    }

    #[test]
    fn test_price_of_a_part() {
        assert_eq!(ComputerPart::new(99).price(), 99);
    }

    #[test]
    fn test_price_of_an_empty_computer() {
        let computer = Computer::new(1234);
        assert!(computer.is_empty());
        assert_eq!(computer.price(), 1234);
    }

    #[test]
    fn test_adds_parts_and_totals() {
        let mut computer = Computer::new(10);
        computer.add(part(10));
        computer.add(part(10));
        assert_eq!(computer.price(), 30);
    }

    #[test]
    fn test_nests_composites_and_leaves() {
        let mut c3 = Computer::new(1);
        c3.add(part(1));

        let mut c2 = Computer::new(1);
        c2.add(part(1));
        c2.add(Rc::new(c3));

        let mut c1 = Computer::new(1);
        c1.add(part(1));
        c1.add(Rc::new(c2));

        assert_eq!(c1.price(), 6);
    }

    #[test]
    fn test_removes_parts_by_identity() {
        let first = part(10);
        let second = part(10);
        let mut computer = Computer::new(10);
        computer.add(first.clone());
        computer.add(second);

        computer.remove(&first);
        assert_eq!(computer.len(), 1);
        assert_eq!(computer.price(), 20);
    }

    #[test]
    fn test_removing_unknown_part_changes_nothing() {
        let mut computer = Computer::new(10);
        computer.add(part(5));
        computer.remove(&part(5));
        assert_eq!(computer.price(), 15);
    }

    #[test]
    fn test_totals_beyond_u32_range() {
        let mut computer = Computer::new(u32::MAX);
        computer.add(part(u32::MAX));
        computer.add(part(1));
        assert_eq!(computer.price(), 2 * u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_leaf_add_and_remove_are_no_ops() {
        let mut leaf = ComputerPart::new(10);
        let other = part(3);
        leaf.add(other.clone());
        leaf.remove(&other);
        assert_eq!(leaf.price(), 10);
    }
}
