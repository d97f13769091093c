//! Messages that change the meter from outside the event loop.

use std::str::FromStr;

use crate::format::{FormatMode, ParseFormatModeError};
use crate::meter::AmpMeter;
use crate::schedule::{Clock, Scheduler};

/// Command enum for type-safe meter updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeterCommand {
    SetValue(f64),
    SetFormatMode(FormatMode),
    SetDemoAnimation(bool),
}

impl MeterCommand {
    pub fn apply<S: Scheduler, C: Clock>(self, meter: &mut AmpMeter<S, C>) {
        match self {
            MeterCommand::SetValue(value) => meter.set_value(value),
            MeterCommand::SetFormatMode(mode) => meter.set_number_format_mode(mode),
            MeterCommand::SetDemoAnimation(enabled) => meter.set_demo_animation_enabled(enabled),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error(transparent)]
    Mode(#[from] ParseFormatModeError),

    #[error("expected on or off, got `{0}`")]
    Toggle(String),

    #[error("unrecognized command `{0}`")]
    Unrecognized(String),
}

/// Line syntax: `<number>`, `mode <name>` or `animate <on|off>`.
impl FromStr for MeterCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseCommandError::Empty);
        };
        let arg = words.next().unwrap_or_default();
        if words.next().is_some() {
            return Err(ParseCommandError::Unrecognized(s.trim().to_string()));
        }

        match head.to_ascii_lowercase().as_str() {
            "mode" => Ok(MeterCommand::SetFormatMode(arg.parse()?)),
            "animate" => match arg.to_ascii_lowercase().as_str() {
                "on" | "true" | "1" => Ok(MeterCommand::SetDemoAnimation(true)),
                "off" | "false" | "0" => Ok(MeterCommand::SetDemoAnimation(false)),
                _ => Err(ParseCommandError::Toggle(arg.to_string())),
            },
            _ if arg.is_empty() => head
                .parse::<f64>()
                .map(MeterCommand::SetValue)
                .map_err(|_| ParseCommandError::Unrecognized(head.to_string())),
            _ => Err(ParseCommandError::Unrecognized(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number_sets_value() {
        assert_eq!("42.5".parse(), Ok(MeterCommand::SetValue(42.5)));
        assert_eq!("  -3 ".parse(), Ok(MeterCommand::SetValue(-3.0)));
    }

    #[test]
    fn mode_and_animate() {
        assert_eq!(
            "mode integer".parse(),
            Ok(MeterCommand::SetFormatMode(FormatMode::Integer))
        );
        assert_eq!("animate on".parse(), Ok(MeterCommand::SetDemoAnimation(true)));
        assert_eq!("ANIMATE off".parse(), Ok(MeterCommand::SetDemoAnimation(false)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<MeterCommand>(), Err(ParseCommandError::Empty));
        assert!(matches!(
            "mode hex".parse::<MeterCommand>(),
            Err(ParseCommandError::Mode(_))
        ));
        assert_eq!(
            "animate maybe".parse::<MeterCommand>(),
            Err(ParseCommandError::Toggle("maybe".to_string()))
        );
        assert!(matches!(
            "volts 3".parse::<MeterCommand>(),
            Err(ParseCommandError::Unrecognized(_))
        ));
        assert!(matches!(
            "abc".parse::<MeterCommand>(),
            Err(ParseCommandError::Unrecognized(_))
        ));
    }
}
