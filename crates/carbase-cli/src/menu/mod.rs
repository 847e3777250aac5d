//! Interactive numbered menu.
//!
//! The menu owns no records: it borrows the store mutably for the whole
//! session and talks to the user through any `BufRead`/`Write` pair, so the
//! same loop drives a terminal, a pipe, or a test buffer.

mod prompt;

use std::io::{BufRead, Write};
use std::path::Path;

use chrono::Local;
use tracing::debug;

use carbase_core::{search, CarbaseError, Criterion, Field, FieldKind, MatchMode, RecordStore, VehicleRecord};

use crate::output::record_block;
use crate::ui::format::{cars, format_timestamp};

use prompt::{Prompter, Stop};

pub const MAIN_MENU: &str = "Please select one of the following functions:\n\
1-Add a car\n\
2-Display cars\n\
3-Save to a file\n\
4-Search\n\
5-Remove a car\n\
6-Exit";

pub const SEARCH_MENU: &str = "Enter the parameter to search by:\n\
1-Brand\n\
2-Model\n\
3-Year\n\
4-Capacity\n\
5-Fuel\n\
6-Type\n\
7-Registration Number\n\
8-Back to the main menu";

const SEARCH_BACK: u32 = 8;

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user picked option 6.
    Chosen,
    /// Input ran out before option 6.
    EndOfInput,
}

/// One interactive session over a store.
pub struct Menu<'s, R, W> {
    store: &'s mut RecordStore,
    data_path: &'s Path,
    prompt: Prompter<R, W>,
}

impl<'s, R: BufRead, W: Write> Menu<'s, R, W> {
    pub fn new(store: &'s mut RecordStore, data_path: &'s Path, input: R, output: W) -> Self {
        Self {
            store,
            data_path,
            prompt: Prompter::new(input, output),
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<MenuExit> {
        match self.run_loop() {
            Ok(()) => Ok(MenuExit::Chosen),
            Err(Stop::EndOfInput) => {
                debug!("menu input ended");
                Ok(MenuExit::EndOfInput)
            }
            Err(Stop::Io(err)) => Err(anyhow::anyhow!("Console I/O failed: {}", err)),
        }
    }

    fn run_loop(&mut self) -> Result<(), Stop> {
        loop {
            self.prompt.say(MAIN_MENU)?;
            let choice = self.prompt.word()?;
            debug!(choice = %choice, "main menu");
            match choice.as_str() {
                "1" => self.add()?,
                "2" => self.display()?,
                "3" => self.save()?,
                "4" => self.search()?,
                "5" => self.remove()?,
                "6" => return Ok(()),
                _ => self.prompt.say("Please choose an option from 1 to 6.")?,
            }
        }
    }

    fn add(&mut self) -> Result<(), Stop> {
        self.prompt.say("Add a car!")?;
        self.prompt
            .say(&format!("This will be car number {}", self.store.len() + 1))?;

        let brand = self.prompt.ask_word("Enter brand: ")?;
        let model = self.prompt.ask_word("Enter model: ")?;
        let year = self.prompt.ask_int("Enter year: ", "year")?;
        let capacity = self.prompt.ask_int("Enter capacity: ", "capacity")?;
        let fuel = self.prompt.ask_word("Enter fuel: ")?;
        let vehicle_type = self.prompt.ask_word("Enter vehicle type: ")?;
        let registration = self.prompt.ask_word("Enter registration number: ")?;

        let ordinal = self.store.append(VehicleRecord::new(
            brand,
            model,
            year,
            capacity,
            fuel,
            vehicle_type,
            registration,
        ));
        debug!(ordinal, "appended car");
        Ok(())
    }

    fn display(&mut self) -> Result<(), Stop> {
        self.prompt.say("Display cars!")?;
        if self.store.is_empty() {
            return self.prompt.say("No cars in the database.");
        }
        self.prompt.say("List of cars in the database:")?;
        for (index, record) in self.store.all().iter().enumerate() {
            self.prompt.say(&format!("\n{}", record_block(index + 1, record)))?;
        }
        self.prompt.say("")
    }

    fn save(&mut self) -> Result<(), Stop> {
        self.prompt.say("\nSave to a file!")?;
        match self.store.save(self.data_path) {
            Ok(()) => self.prompt.say(&format!(
                "\nSaved {} to {} at {}.\n",
                cars(self.store.len()),
                self.data_path.display(),
                format_timestamp(&Local::now())
            )),
            Err(err @ CarbaseError::Io { .. }) => self
                .prompt
                .say(&format!("Unable to open the file for writing: {}\n", err)),
            Err(err) => self.prompt.say(&format!("{}\n", err)),
        }
    }

    fn search(&mut self) -> Result<(), Stop> {
        self.prompt.say(&format!("\n{}", SEARCH_MENU))?;
        let choice = self.prompt.word()?;
        let field = match choice.parse::<u32>() {
            Ok(SEARCH_BACK) => return Ok(()),
            Ok(number) => Field::from_menu(number),
            Err(_) => Err(CarbaseError::InvalidField(format!("{:?}", choice))),
        };
        let field = match field {
            Ok(field) => field,
            Err(err) => return self.prompt.say(&format!("{} (choose 1 to 8)", err)),
        };

        self.prompt.say(&mode_question(field))?;
        let mode_choice = self.prompt.word()?.parse::<u32>().unwrap_or(0);
        let mode = match MatchMode::from_menu(field, mode_choice) {
            Ok(mode) => mode,
            Err(_) => {
                return self
                    .prompt
                    .say("Invalid option. You should have chosen 1 or 2!")
            }
        };

        let criterion = self.ask_criterion(field, mode)?;
        let hits = match search(&*self.store, field, &criterion) {
            Ok(hits) => hits,
            Err(err) => return self.prompt.say(&err.to_string()),
        };
        debug!(field = %field, hits = hits.len(), "search");

        if hits.is_empty() {
            return self.prompt.say("No matching cars found.");
        }
        for hit in &hits {
            self.prompt
                .say(&format!("\n{}", record_block(hit.ordinal, hit.record)))?;
        }
        Ok(())
    }

    fn ask_criterion(&mut self, field: Field, mode: MatchMode) -> Result<Criterion, Stop> {
        let label = field.label().to_lowercase();
        Ok(match mode {
            MatchMode::Exact => {
                Criterion::Exact(self.prompt.ask_word(&format!("Enter the full {}:\n", label))?)
            }
            MatchMode::Contains => Criterion::Contains(
                self.prompt
                    .ask_word(&format!("Enter the full {} or a part of it:\n", label))?,
            ),
            MatchMode::Equals => Criterion::Equals(
                self.prompt
                    .ask_int(&format!("Enter the {} to search for:\n", label), &label)?,
            ),
            MatchMode::Range => {
                let min = self
                    .prompt
                    .ask_int(&format!("Enter the minimum {} to search for:\n", label), &label)?;
                let max = self
                    .prompt
                    .ask_int(&format!("Enter the maximum {} to search for:\n", label), &label)?;
                Criterion::Range { min, max }
            }
        })
    }

    fn remove(&mut self) -> Result<(), Stop> {
        self.prompt.say("Remove a car!")?;
        if self.store.is_empty() {
            return self.prompt.say("No cars in the database.");
        }
        self.prompt.say("Which car number do you want to remove?")?;
        loop {
            let line = self.prompt.word()?;
            if let Ok(ordinal) = line.parse::<usize>() {
                if let Ok(removed) = self.store.remove_at(ordinal) {
                    debug!(ordinal, "removed car");
                    return self.prompt.say(&format!(
                        "Removed car number {} ({} {}).",
                        ordinal, removed.brand, removed.model
                    ));
                }
            }
            self.prompt
                .say("Invalid input. Please enter a valid car number.")?;
        }
    }
}

fn mode_question(field: Field) -> String {
    let label = field.label().to_lowercase();
    match field.kind() {
        FieldKind::Text => format!(
            "Choose 1 if you want to search for the entire {}, or 2 if you only know a part:",
            label
        ),
        FieldKind::Numeric => format!(
            "Choose 1 if you want to search for a specific {}, or 2 if you want to search within a range.",
            label
        ),
    }
}
