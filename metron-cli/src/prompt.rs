//! Interactive prompt loop
//!
//! Reads a value, a source unit and a target unit, prints the conversion,
//! and repeats until the user declines or input ends. Recoverable errors
//! re-prompt for the offending field.

use std::io::{self, BufRead, Write};
use metron::config::Settings;
use metron::format::{cli_line, parse_value};
use metron::{ConversionRequest, MetronError, Session, UnitSymbol};
use tracing::debug;

pub struct Prompt<'a, R, W> {
    input: R,
    output: W,
    settings: &'a Settings,
}

impl<'a, R: BufRead, W: Write> Prompt<'a, R, W> {
    pub fn new(input: R, output: W, settings: &'a Settings) -> Self {
        Prompt { input, output, settings }
    }

    /// Run until the user stops or input ends
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Unit Converter")?;
        let units = session.gateway().list_units();
        writeln!(self.output, "Available units: {}", join(&units))?;

        loop {
            if !self.convert_once(session)? {
                break;
            }
            if !self.ask_again(session)? {
                break;
            }
        }

        writeln!(self.output, "Goodbye")?;
        Ok(())
    }

    /// One conversion; `false` when input ended
    fn convert_once(&mut self, session: &mut Session) -> io::Result<bool> {
        let Some(value) = self.ask_value()? else {
            return Ok(false);
        };
        let Some(from) = self.ask_from_unit(session)? else {
            return Ok(false);
        };
        let Some(to) = self.ask_to_unit(session, &from)? else {
            return Ok(false);
        };

        let req = ConversionRequest::new(value, from, to);
        match session.convert(&req) {
            Ok(result) => writeln!(self.output, "{}", cli_line(&req, &result))?,
            Err(e) => writeln!(self.output, "Failed to perform conversion: {}", e)?,
        }
        Ok(true)
    }

    fn ask_value(&mut self) -> io::Result<Option<f64>> {
        loop {
            let Some(text) = self.ask("Enter the value to convert: ")? else {
                return Ok(None);
            };
            match parse_value(&text) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn ask_from_unit(&mut self, session: &Session) -> io::Result<Option<String>> {
        loop {
            let Some(unit) = self.ask("Enter the unit to convert from: ")? else {
                return Ok(None);
            };
            match session.gateway().list_compatible_units(&unit) {
                Ok(compatible) => {
                    writeln!(
                        self.output,
                        "You can convert to the following units: {}",
                        join(&compatible)
                    )?;
                    return Ok(Some(unit));
                }
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn ask_to_unit(&mut self, session: &Session, from: &str) -> io::Result<Option<String>> {
        loop {
            let Some(unit) = self.ask("Enter the unit to convert to: ")? else {
                return Ok(None);
            };
            match session.gateway().is_compatible(from, &unit) {
                Ok(true) => return Ok(Some(unit)),
                Ok(false) => writeln!(
                    self.output,
                    "Invalid conversion unit entered: {} cannot be converted to {}",
                    from, unit
                )?,
                Err(e) => self.report(&e)?,
            }
        }
    }

    /// `false` when the user is done
    fn ask_again(&mut self, session: &Session) -> io::Result<bool> {
        loop {
            let Some(answer) = self.ask("Convert another? [y/N/save]: ")? else {
                return Ok(false);
            };
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "save" => {
                    let settings = self.settings;
                    let path = &settings.history_path;
                    match session.save_history(path) {
                        Ok(count) => writeln!(
                            self.output,
                            "Saved {} conversion(s) to {}",
                            count,
                            path.display()
                        )?,
                        Err(e) => self.report(&e)?,
                    }
                }
                _ => return Ok(false),
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, error: &MetronError) -> io::Result<()> {
        writeln!(self.output, "{}. {}", error, error.suggestion())
    }
}

fn join(units: &[UnitSymbol]) -> String {
    units.iter().map(UnitSymbol::as_str).collect::<Vec<_>>().join(", ")
}
