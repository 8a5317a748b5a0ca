use crate::ui::counter::CounterIntent;

/// Clickable/focusable buttons on the counter screen, in focus order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Control {
    /// `[-]` in the title bar.
    TitleDecrement,
    /// `[+]` in the title bar.
    TitleIncrement,
    Reset,
    DecrementBy10,
    IncrementBy10,
    Decrement,
    Increment,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Control::TitleDecrement,
        Control::TitleIncrement,
        Control::Reset,
        Control::DecrementBy10,
        Control::IncrementBy10,
        Control::Decrement,
        Control::Increment,
    ];

    pub fn intent(self) -> CounterIntent {
        match self {
            Control::TitleDecrement | Control::Decrement => CounterIntent::Decrement,
            Control::TitleIncrement | Control::Increment => CounterIntent::Increment,
            Control::Reset => CounterIntent::Reset,
            Control::DecrementBy10 => CounterIntent::DecrementBy10,
            Control::IncrementBy10 => CounterIntent::IncrementBy10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::TitleDecrement => "[-]",
            Control::TitleIncrement => "[+]",
            Control::Reset => "Reset",
            Control::DecrementBy10 => "- 10",
            Control::IncrementBy10 => "+ 10",
            Control::Decrement => "-",
            Control::Increment => "+",
        }
    }

    /// Human-readable name shown in the footer for the focused button.
    pub fn description(self) -> &'static str {
        match self {
            Control::TitleDecrement | Control::Decrement => "Decrement Counter",
            Control::TitleIncrement | Control::Increment => "Increment Counter",
            Control::Reset => "Reset Counter",
            Control::DecrementBy10 => "Dec by 10",
            Control::IncrementBy10 => "Inc by 10",
        }
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|control| *control == self)
            .unwrap_or(0)
    }

    /// Next control in focus order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous control in focus order, wrapping around.
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}
