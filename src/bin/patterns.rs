// Walks through every pattern in the crate.
//
// Run with: RUST_LOG=info cargo run --bin patterns [-- metadata.toml]

use std::cell::RefCell;
use std::env;
use std::rc::Rc;

use anyhow::Context;
use serde_json::json;

use design_patterns::abstract_factory::{Car, HybridCarPartsFactory, MuscleCarPartsFactory};
use design_patterns::builder::{HouseBartender, Waitress};
use design_patterns::command::{
    ConcreteCommand, ConsoleDocument, CutText, DocumentOperations, Invoker, OpenDocument,
    PasteText, Receiver, UiEventsManager,
};
use design_patterns::composite::{Component, Computer, ComputerPart};
use design_patterns::decorator::{ConcreteRacket, Racket, RacketDecorator};
use design_patterns::factory_method::{factory_for, SenderType};
use design_patterns::observer::{ConcreteObserver, Subject};
use design_patterns::state::{self, ConsoleAudioLib, PlayerState};
use design_patterns::static_factory::{Metadata, ProviderFramework};
use design_patterns::strategy::{self, Html5AudioPlayer, SwfAudioPlayer};
use design_patterns::template_method::{
    AacDecoder, AudioDecoder, Mp3Decoder, NativeAacDecoder, NativeMp3Decoder,
};

fn observer_example() {
    let mut subject = Subject::new();
    let first = Rc::new(RefCell::new(ConcreteObserver::<serde_json::Value>::new()));
    let second = Rc::new(RefCell::new(ConcreteObserver::<serde_json::Value>::new()));

    subject.register(&first);
    subject.register(&second);
    subject.register(&first);
    println!("Registered observers: {}", subject.number_of_observers());

    subject.set_state(json!({ "foo": "foo val" }));
    subject.notify();
    println!(
        "{} saw {:?}",
        first.borrow(),
        first.borrow().last_observed_state()
    );

    println!("Unregister {}: {}", second.borrow(), subject.unregister(&second));
    println!("Unregister again: {}", subject.unregister(&second));
    println!("Registered observers: {}", subject.number_of_observers());
}

fn abstract_factory_example() {
    let muscle = Car::new(&MuscleCarPartsFactory);
    println!("{}", muscle.start());
    println!("{}", muscle.accelerate());

    let hybrid = Car::new(&HybridCarPartsFactory);
    println!("{}", hybrid.start());
    println!("{}", hybrid.stop());
}

fn factory_method_example() {
    for sender_type in [SenderType::SnailMail, SenderType::Fedex, SenderType::Aramex] {
        let sender = factory_for(sender_type).create_sender();
        println!("{}", sender.send("Springfield", "parcel"));
    }
}

fn static_factory_example(metadata: Metadata) {
    let providers = ProviderFramework::new(metadata);
    for key in ["moduleA", "moduleB", "bogus"] {
        println!("{} -> {}", key, providers.instance(key).name());
    }
}

fn decorator_example() {
    let racket = RacketDecorator::wilson_pro_overgrip(RacketDecorator::vs_gut(
        ConcreteRacket::new(),
    ));
    println!("Strung and gripped racket: ${}", racket.price());
}

fn builder_example() {
    let mut waitress = Waitress::new(HouseBartender::new());
    match waitress.take_order(&["mojito", "mai_tai", "beer"]) {
        Ok(drinks) => println!("Served: {}", drinks.join(", ")),
        Err(e) => println!("Order failed: {}", e),
    }
    match waitress.take_order(&["mojito", "not_a_drink!"]) {
        Ok(drinks) => println!("Served: {}", drinks.join(", ")),
        Err(e) => println!("Order failed: {}", e),
    }
}

fn composite_example() {
    let mut case = Computer::new(50);
    case.add(Rc::new(ComputerPart::new(120)));
    case.add(Rc::new(ComputerPart::new(80)));

    let mut workstation = Computer::new(200);
    workstation.add(Rc::new(ComputerPart::new(300)));
    workstation.add(Rc::new(case));
    println!("Workstation total: ${}", workstation.price());
}

fn state_example() {
    let mut player = state::AudioPlayer::new(ConsoleAudioLib, PlayerState::Stopped);
    player.pause_audio();
    println!("State: {}", player.state());
    player.play_audio();
    println!("State: {}", player.state());
    player.pause_audio();
    println!("State: {}", player.state());
    player.stop_audio();
    println!("State: {}", player.state());
}

fn strategy_example() {
    let mut player = strategy::AudioPlayer::new(Box::new(Html5AudioPlayer));
    println!("Using: {}", player.strategy_name());
    player.play_audio();
    player.pause_audio();

    player.set_strategy(Box::new(SwfAudioPlayer));
    println!("Switched to: {}", player.strategy_name());
    player.play_audio();
}

struct PrintingReceiver;

impl Receiver for PrintingReceiver {
    fn do_something(&self) {
        println!("Receiver doing something");
    }

    fn undo_something(&self) {
        println!("Receiver undoing something");
    }
}

fn command_example() {
    let mut invoker = Invoker::new();
    invoker.action();
    invoker.set_command(Box::new(ConcreteCommand::new(Rc::new(PrintingReceiver))));
    invoker.action();
    invoker.undo();

    let document: Rc<dyn DocumentOperations> = Rc::new(ConsoleDocument);
    let mut manager = UiEventsManager::new();
    manager.add_menu_command("open", Box::new(OpenDocument::new(document.clone(), "notes.txt")));
    manager.add_menu_command("cut", Box::new(CutText::new(document.clone())));
    manager.add_toolbar_command("paste", Box::new(PasteText::new(document)));

    manager.handle_menu_press("open");
    manager.handle_menu_press("cut");
    manager.handle_toolbar_press("paste");
    manager.handle_undo_toolbar_press("paste");
    manager.handle_undo_menu_press("open");
    println!("Dispatched editor commands");
}

fn template_method_example() {
    Mp3Decoder::new(NativeMp3Decoder, "my_song.mp3").play();
    AacDecoder::new(NativeAacDecoder, "my_song.aac").play();
    println!("Played MP3 and AAC through the same template");
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let metadata = match env::args().nth(1) {
        Some(path) => Metadata::load(&path)
            .with_context(|| format!("loading provider metadata from {}", path))?,
        None => Metadata::builtin(),
    };

    println!("Design Patterns");
    println!("===============\n");

    println!("=== Observer ===");
    observer_example();
    println!();

    println!("=== Abstract Factory ===");
    abstract_factory_example();
    println!();

    println!("=== Factory Method ===");
    factory_method_example();
    println!();

    println!("=== Static Factory ===");
    static_factory_example(metadata);
    println!();

    println!("=== Decorator ===");
    decorator_example();
    println!();

    println!("=== Builder ===");
    builder_example();
    println!();

    println!("=== Composite ===");
    composite_example();
    println!();

    println!("=== State ===");
    state_example();
    println!();

    println!("=== Strategy ===");
    strategy_example();
    println!();

    println!("=== Command ===");
    command_example();
    println!();

    println!("=== Template Method ===");
    template_method_example();

    Ok(())
}
