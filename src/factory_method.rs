//! Factory Method: each factory decides which sender it hands out.

use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderType {
    SnailMail,
    Fedex,
    Aramex,
}

pub trait Sender {
    fn send(&self, destination: &str, package: &str) -> String;
    fn sender_type(&self) -> SenderType;
}

pub struct FedexSender;
impl Sender for FedexSender {
    fn send(&self, destination: &str, package: &str) -> String {
        info!("Fedex sending {} to {}", package, destination);
        format!("Fedex sending {package} to {destination}")
    }

    fn sender_type(&self) -> SenderType {
        SenderType::Fedex
    }
}

pub struct SnailMailSender;
impl Sender for SnailMailSender {
    fn send(&self, destination: &str, package: &str) -> String {
        info!("Snail mail sending {} to {}", package, destination);
        format!("Snail mail sending {package} to {destination}")
    }

    fn sender_type(&self) -> SenderType {
        SenderType::SnailMail
    }
}

pub struct AramexSender;
impl Sender for AramexSender {
    fn send(&self, destination: &str, package: &str) -> String {
        info!("Aramex sending {} internationally to {}", package, destination);
        format!("Aramex sending {package} internationally to {destination}")
    }

    fn sender_type(&self) -> SenderType {
        SenderType::Aramex
    }
}

pub trait SenderFactory {
    fn create_sender(&self) -> Box<dyn Sender>;
}

pub struct FedexFactory;
impl SenderFactory for FedexFactory {
    fn create_sender(&self) -> Box<dyn Sender> {
        Box::new(FedexSender)
    }
}

pub struct SnailMailFactory;
impl SenderFactory for SnailMailFactory {
    fn create_sender(&self) -> Box<dyn Sender> {
        Box::new(SnailMailSender)
    }
}

pub struct AramexFactory;
impl SenderFactory for AramexFactory {
    fn create_sender(&self) -> Box<dyn Sender> {
        Box::new(AramexSender)
    }
}

pub fn factory_for(sender_type: SenderType) -> Box<dyn SenderFactory> {
    match sender_type {
        SenderType::SnailMail => Box::new(SnailMailFactory),
        SenderType::Fedex => Box::new(FedexFactory),
        SenderType::Aramex => Box::new(AramexFactory),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_begets_product() {
        let sender = FedexFactory.create_sender();
        assert_eq!(sender.sender_type(), SenderType::Fedex);
        assert_eq!(
            sender.send("Lisbon", "books"),
            "Fedex sending books to Lisbon"
        );
    }

    #[test]
    fn test_each_factory_makes_its_own_sender() {
        assert_eq!(
            SnailMailFactory.create_sender().sender_type(),
            SenderType::SnailMail
        );
        assert_eq!(
            AramexFactory.create_sender().sender_type(),
            SenderType::Aramex
        );
    }

    #[test]
    fn test_factory_for_selects_by_type() {
        for sender_type in [SenderType::SnailMail, SenderType::Fedex, SenderType::Aramex] {
            let sender = factory_for(sender_type).create_sender();
            assert_eq!(sender.sender_type(), sender_type);
        }
    }

    #[test]
    fn test_aramex_sends_internationally() {
        let message = AramexFactory.create_sender().send("Cairo", "spices");
        assert!(message.contains("internationally"));
    }
}
