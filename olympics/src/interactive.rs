//! Interactive mode: summarize countries until the user asks to stop.

use std::io::{BufRead, Write};

use olympicslib::{CountrySummary, RecordStore};
use tracing::{debug, warn};

use crate::sink::OutputSink;

pub const PROMPT: &str = "Country name or NOC(exit() if you want to close the program): ";

/// Input that ends the session.
pub const EXIT_COMMAND: &str = "exit()";

pub const FAREWELL: &str = "\nExiting...";

/// A prompt loop over a shared, read-only record store.
pub struct Session<'a, R: BufRead, W: Write> {
    store: &'a RecordStore,
    input: R,
    sink: &'a mut OutputSink<W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a RecordStore, input: R, sink: &'a mut OutputSink<W>) -> Self {
        Self { store, input, sink }
    }

    /// Prompt, summarize, repeat. Stops on `exit()` or end of input.
    ///
    /// A country without entries prints a message and prompts again. Write
    /// failures on the console or output file end the session with an error.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        loop {
            write!(self.sink.out(), "{}", PROMPT)?;
            self.sink.out().flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let country = line.trim_end_matches(['\r', '\n']);
            if country == EXIT_COMMAND {
                break;
            }

            match CountrySummary::query(self.store, country) {
                Ok(summary) => self.sink.emit(&summary.to_report().render())?,
                Err(e) if e.is_empty_result() => {
                    debug!(country, "no entries for country");
                    writeln!(self.sink.out(), "{}", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        writeln!(self.sink.out(), "{}", FAREWELL)?;
        Ok(())
    }
}

/// Say goodbye and leave cleanly on Ctrl-C while waiting for input.
pub fn install_interrupt_handler() {
    if let Err(e) = ctrlc::set_handler(|| {
        println!("{}", FAREWELL);
        std::process::exit(0);
    }) {
        warn!("Failed to set Ctrl-C handler: {}", e);
    }
}
