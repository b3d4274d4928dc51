//! Line-oriented console input.
//!
//! [`Console`] asks for the hero roster before the session starts and then
//! serves as the session's [`ActionProvider`]. Invalid input is reported and
//! asked again; only a closed input stream ends the prompt loop.

use std::io::{BufRead, Write};

use maze_core::{
    ActionProvider, GameConfig, GameState, Hero, HeroAction, ProviderError, Roster, RosterError,
};

pub const ACTION_PROMPT: &str = "Enter hero's action (l,r,d,u,a,h,p): ";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prints `message` and reads one line, without its line ending.
    fn prompt(&mut self, message: &str) -> Result<String, ProviderError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ProviderError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    /// Asks for the number of heroes and their names.
    ///
    /// Every hero starts on the configured start cell. Duplicate names are
    /// refused and asked again.
    pub fn read_roster(&mut self, config: &GameConfig) -> Result<Roster, ProviderError> {
        let count = loop {
            let line = self.prompt("Enter the number of heroes: ")?;
            match line.trim().parse::<usize>() {
                Ok(count) if count > 0 => break count,
                _ => writeln!(self.output, "Please enter a positive whole number")?,
            }
        };

        let mut roster = Roster::new();
        while roster.len() < count {
            let name = self.prompt(&format!("Enter the name of hero {} : ", roster.len() + 1))?;
            match roster.add(&name, config.start_position, config) {
                Ok(id) => tracing::debug!(hero = %name.trim(), %id, "hero joined"),
                Err(RosterError::DuplicateName(_)) => {
                    writeln!(self.output, "A hero with this name already exists")?
                }
                Err(RosterError::EmptyName) => {
                    writeln!(self.output, "The name cannot be empty")?
                }
            }
        }

        Ok(roster)
    }
}

impl<R: BufRead, W: Write> ActionProvider for Console<R, W> {
    fn provide_action(
        &mut self,
        _hero: &Hero,
        _state: &GameState,
    ) -> Result<HeroAction, ProviderError> {
        loop {
            let line = self.prompt(ACTION_PROMPT)?;
            match line.parse::<HeroAction>() {
                Ok(action) => return Ok(action),
                Err(error) => {
                    tracing::warn!(%error, "invalid action input");
                    writeln!(self.output, "Invalid input")?;
                }
            }
        }
    }
}
