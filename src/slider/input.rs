#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Raw input, already resolved to the element it hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Click on the left or right advance control.
    Control(Side),
    /// Left or right arrow key, wherever the pointer is.
    Arrow(Side),
    /// Click on the indicator with this ordinal.
    Indicator(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    GoTo(usize),
}

/// Receiver of routed slider commands.
pub trait SlideHandler {
    fn on_advance(&mut self);
    fn on_retreat(&mut self);
    fn on_go_to(&mut self, index: usize);
}

pub fn route(event: InputEvent) -> Command {
    match event {
        InputEvent::Control(Side::Right) | InputEvent::Arrow(Side::Right) => Command::Advance,
        InputEvent::Control(Side::Left) | InputEvent::Arrow(Side::Left) => Command::Retreat,
        InputEvent::Indicator(index) => Command::GoTo(index),
    }
}

/// Applies every event in order, one command per event.
pub fn dispatch<H, I>(handler: &mut H, events: I)
where
    H: SlideHandler,
    I: IntoIterator<Item = InputEvent>,
{
    for event in events {
        match route(event) {
            Command::Advance => handler.on_advance(),
            Command::Retreat => handler.on_retreat(),
            Command::GoTo(index) => handler.on_go_to(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Command>,
    }

    impl SlideHandler for Recorder {
        fn on_advance(&mut self) {
            self.calls.push(Command::Advance);
        }

        fn on_retreat(&mut self) {
            self.calls.push(Command::Retreat);
        }

        fn on_go_to(&mut self, index: usize) {
            self.calls.push(Command::GoTo(index));
        }
    }

    #[test]
    fn controls_and_arrows_share_commands() {
        assert_eq!(route(InputEvent::Control(Side::Right)), Command::Advance);
        assert_eq!(route(InputEvent::Arrow(Side::Right)), Command::Advance);
        assert_eq!(route(InputEvent::Control(Side::Left)), Command::Retreat);
        assert_eq!(route(InputEvent::Arrow(Side::Left)), Command::Retreat);
    }

    #[test]
    fn indicator_click_goes_directly() {
        assert_eq!(route(InputEvent::Indicator(2)), Command::GoTo(2));
    }

    #[test]
    fn bursts_are_neither_coalesced_nor_reordered() {
        let mut recorder = Recorder::default();
        dispatch(
            &mut recorder,
            [
                InputEvent::Arrow(Side::Right),
                InputEvent::Arrow(Side::Right),
                InputEvent::Indicator(0),
                InputEvent::Control(Side::Left),
            ],
        );
        assert_eq!(
            recorder.calls,
            vec![
                Command::Advance,
                Command::Advance,
                Command::GoTo(0),
                Command::Retreat,
            ]
        );
    }
}
