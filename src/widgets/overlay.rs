/// Open/close surface anchored to a widget's trigger.
pub trait Overlay {
    fn is_open(&self) -> bool;
    fn set_open(&mut self, open: bool);

    fn open(&mut self) {
        self.set_open(true);
    }

    fn close(&mut self) {
        self.set_open(false);
    }

    fn toggle(&mut self) {
        let open = self.is_open();
        self.set_open(!open);
    }
}

/// Plain in-memory popover; the terminal front end draws it below the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Popover {
    open: bool,
}

impl Popover {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Overlay for Popover {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}
