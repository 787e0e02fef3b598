//! Command: requests wrapped as objects, so invokers can run and undo them
//! without knowing who does the work.

use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, info};
#[cfg(test)]
use mockall::automock;

pub trait Command {
    fn execute(&self);
    fn undo(&self);
}

// ============================================================================
// Example: Invoker and Receiver
// ============================================================================

#[cfg_attr(test, automock)]
pub trait Receiver {
    fn do_something(&self);
    fn undo_something(&self);
}

pub struct ConcreteCommand {
    receiver: Rc<dyn Receiver>,
}

impl ConcreteCommand {
    pub fn new(receiver: Rc<dyn Receiver>) -> Self {
        Self { receiver }
    }
}

impl Command for ConcreteCommand {
    fn execute(&self) {
        self.receiver.do_something();
    }

    fn undo(&self) {
        self.receiver.undo_something();
    }
}

#[derive(Default)]
pub struct Invoker {
    command: Option<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    /// Does nothing until a command is set.
    pub fn action(&self) {
        if let Some(command) = &self.command {
            command.execute();
        }
    }

    pub fn undo(&self) {
        if let Some(command) = &self.command {
            command.undo();
        }
    }
}

// ============================================================================
// Example: Document editor menus and toolbars
// ============================================================================

#[cfg_attr(test, automock)]
pub trait DocumentOperations {
    fn open(&self, file_name: &str);
    fn close(&self, file_name: &str);
    fn cut(&self);
    fn paste(&self);
    fn undo_paste(&self);
}

#[derive(Debug, Default)]
pub struct ConsoleDocument;

impl DocumentOperations for ConsoleDocument {
    fn open(&self, file_name: &str) {
        info!("Opening {}...", file_name);
    }

    fn close(&self, file_name: &str) {
        info!("Closing {}...", file_name);
    }

    fn cut(&self) {
        info!("Cutting some text...");
    }

    fn paste(&self) {
        info!("Pasting some text...");
    }

    fn undo_paste(&self) {
        info!("Undoing last paste operation...");
    }
}

pub struct OpenDocument {
    document: Rc<dyn DocumentOperations>,
    file_name: String,
}

impl OpenDocument {
    pub fn new(document: Rc<dyn DocumentOperations>, file_name: impl Into<String>) -> Self {
        Self {
            document,
            file_name: file_name.into(),
        }
    }
}

impl Command for OpenDocument {
    fn execute(&self) {
        self.document.open(&self.file_name);
    }

    // Undoing an open closes the file again
    fn undo(&self) {
        self.document.close(&self.file_name);
    }
}

pub struct CloseDocument {
    document: Rc<dyn DocumentOperations>,
    file_name: String,
}

impl CloseDocument {
    pub fn new(document: Rc<dyn DocumentOperations>, file_name: impl Into<String>) -> Self {
        Self {
            document,
            file_name: file_name.into(),
        }
    }
}

impl Command for CloseDocument {
    fn execute(&self) {
        self.document.close(&self.file_name);
    }

    fn undo(&self) {}
}

pub struct CutText {
    document: Rc<dyn DocumentOperations>,
}

impl CutText {
    pub fn new(document: Rc<dyn DocumentOperations>) -> Self {
        Self { document }
    }
}

impl Command for CutText {
    fn execute(&self) {
        self.document.cut();
    }

    fn undo(&self) {}
}

pub struct PasteText {
    document: Rc<dyn DocumentOperations>,
}

impl PasteText {
    pub fn new(document: Rc<dyn DocumentOperations>) -> Self {
        Self { document }
    }
}

impl Command for PasteText {
    fn execute(&self) {
        self.document.paste();
    }

    fn undo(&self) {
        self.document.undo_paste();
    }
}

/// Routes menu and toolbar presses to the commands bound to them.
/// Presses on unbound keys are ignored.
#[derive(Default)]
pub struct UiEventsManager {
    menu: HashMap<String, Box<dyn Command>>,
    toolbar: HashMap<String, Box<dyn Command>>,
}

impl UiEventsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_menu_command(&mut self, key: impl Into<String>, command: Box<dyn Command>) {
        self.menu.insert(key.into(), command);
    }

    pub fn add_toolbar_command(&mut self, key: impl Into<String>, command: Box<dyn Command>) {
        self.toolbar.insert(key.into(), command);
    }

    pub fn handle_menu_press(&self, key: &str) {
        Self::dispatch(&self.menu, key, |command| command.execute());
    }

    pub fn handle_undo_menu_press(&self, key: &str) {
        Self::dispatch(&self.menu, key, |command| command.undo());
    }

    pub fn handle_toolbar_press(&self, key: &str) {
        Self::dispatch(&self.toolbar, key, |command| command.execute());
    }

    pub fn handle_undo_toolbar_press(&self, key: &str) {
        Self::dispatch(&self.toolbar, key, |command| command.undo());
    }

    fn dispatch(
        commands: &HashMap<String, Box<dyn Command>>,
        key: &str,
        run: impl FnOnce(&dyn Command),
    ) {
        match commands.get(key) {
            Some(command) => run(command.as_ref()),
            None => debug!("no command bound to `{}`", key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_command_calls_receiver() {
        let mut receiver = MockReceiver::new();
        receiver.expect_do_something().times(1).return_const(());
        receiver.expect_undo_something().never();

        let mut invoker = Invoker::new();
        invoker.set_command(Box::new(ConcreteCommand::new(Rc::new(receiver))));
        invoker.action();
    }

    #[test]
    fn test_undo() {
        let mut receiver = MockReceiver::new();
        receiver.expect_do_something().never();
        receiver.expect_undo_something().times(1).return_const(());

        let mut invoker = Invoker::new();
        invoker.set_command(Box::new(ConcreteCommand::new(Rc::new(receiver))));
        invoker.undo();
    }

    #[test]
    fn test_invoker_without_command_does_nothing() {
        let invoker = Invoker::new();
        invoker.action();
        invoker.undo();
    }

    #[test]
    fn test_menu_open_reaches_document() {
        let mut document = MockDocumentOperations::new();
        document
            .expect_open()
            .with(eq("foofile.txt"))
            .times(1)
            .return_const(());

        let command = OpenDocument::new(Rc::new(document), "foofile.txt");
        command.execute();
    }

    #[test]
    fn test_events_manager_routes_menu_and_toolbar() {
        let mut document = MockDocumentOperations::new();
        document.expect_cut().times(2).return_const(());
        document.expect_paste().times(1).return_const(());
        document.expect_undo_paste().times(1).return_const(());
        let document: Rc<dyn DocumentOperations> = Rc::new(document);

        let mut manager = UiEventsManager::new();
        manager.add_menu_command("cut", Box::new(CutText::new(document.clone())));
        manager.add_toolbar_command("cut", Box::new(CutText::new(document.clone())));
        manager.add_toolbar_command("paste", Box::new(PasteText::new(document)));

        manager.handle_menu_press("cut");
        manager.handle_toolbar_press("cut");
        manager.handle_toolbar_press("paste");
        manager.handle_undo_toolbar_press("paste");
        // Cut has no undo
        manager.handle_undo_menu_press("cut");
    }

    #[test]
    fn test_events_manager_ignores_unbound_keys() {
        let mut document = MockDocumentOperations::new();
        document.expect_close().never();
        let document: Rc<dyn DocumentOperations> = Rc::new(document);

        let mut manager = UiEventsManager::new();
        manager.add_menu_command("close", Box::new(CloseDocument::new(document, "a.txt")));

        manager.handle_menu_press("open");
        manager.handle_toolbar_press("close");
    }
}
