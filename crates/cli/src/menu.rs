//! Interactive line-oriented menu.
//!
//! Generic over the reader and writer so whole sessions can be scripted in
//! tests with in-memory buffers.

use crate::session::{Command, Controller};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use stockroom_auth::CredentialStore;
use stockroom_core::error::{StockroomError, StockroomResult};
use stockroom_core::{Operation, Product, ProductPatch};

/// Terminal pair: prompts go to `output`, answers come from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `label` and reads one line without its line terminator.
    /// `None` means the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.output.write_all(label.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Writes `text`, appending a newline when it lacks one.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.output.write_all(b"\n")?;
        }
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Runs one full session: login, then the menu loop until logout or end of
/// input. Only terminal I/O failures are returned as errors.
pub fn run<S, R, W>(
    controller: &mut Controller<S>,
    console: &mut Console<R, W>,
    username: Option<String>,
) -> StockroomResult<()>
where
    S: CredentialStore,
    R: BufRead,
    W: Write,
{
    let username = match username {
        Some(name) => name,
        None => match console.prompt("Username: ")? {
            Some(name) => name,
            None => return Ok(()),
        },
    };
    let Some(password) = console.prompt("Password: ")? else {
        return Ok(());
    };

    match controller.login(&username, &password) {
        Ok(_) => console.say(&format!("Welcome, {username}!"))?,
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            console.say(&e.to_string())?;
            return Ok(());
        }
    }

    while !controller.is_terminated() {
        let role = controller
            .role()
            .ok_or_else(|| StockroomError::InvalidState("session lost its role".into()))?;

        console.say(&format!("Logged in as {role}"))?;
        for op in role.menu() {
            console.say(&op.to_string())?;
        }

        let Some(choice) = console.prompt("Enter your choice: ")? else {
            tracing::info!("input closed, ending session");
            controller.logout()?;
            break;
        };

        match step(controller, console, &choice) {
            Ok(Some(rendered)) => console.say(&rendered)?,
            Ok(None) => {
                tracing::info!("input closed, ending session");
                controller.logout()?;
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => console.say(&e.to_string())?,
        }
    }
    Ok(())
}

/// Handles one menu choice. `Ok(None)` means input ended mid-command.
fn step<S, R, W>(
    controller: &mut Controller<S>,
    console: &mut Console<R, W>,
    choice: &str,
) -> StockroomResult<Option<String>>
where
    S: CredentialStore,
    R: BufRead,
    W: Write,
{
    let operation = Operation::from_choice(choice)?;
    // A number the role's menu does not list is just another unknown choice.
    let offered = controller
        .role()
        .is_some_and(|role| role.menu().any(|op| op == operation));
    if !offered {
        return Err(StockroomError::InvalidChoice(choice.trim().to_string()));
    }

    let Some(command) = read_command(console, operation)? else {
        return Ok(None);
    };
    let outcome = controller.dispatch(command)?;
    Ok(Some(outcome.render()))
}

/// Reads the field prompts for `operation` and assembles a [`Command`].
///
/// Every prompt is answered before numeric fields are parsed, so a bad
/// number never leaves answers behind to be read as menu choices.
pub fn read_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    operation: Operation,
) -> StockroomResult<Option<Command>> {
    // Bails out with `Ok(None)` when input ends.
    macro_rules! ask {
        ($label:expr) => {
            match console.prompt($label)? {
                Some(answer) => answer,
                None => return Ok(None),
            }
        };
    }

    let command = match operation {
        Operation::View => Command::View,
        Operation::Add => {
            let id = ask!("Enter product ID: ");
            let name = ask!("Enter product name: ");
            let category = ask!("Enter product category: ");
            let price = ask!("Enter product price: ");
            let stock = ask!("Enter stock quantity: ");
            Command::Add(Product::new(
                id,
                name,
                category,
                parse_required("price", &price)?,
                parse_required("stock quantity", &stock)?,
            ))
        }
        Operation::Edit => {
            let id = ask!("Enter product ID to edit: ");
            let name = non_empty(ask!("Enter new product name (or leave empty): "));
            let category = non_empty(ask!("Enter new product category (or leave empty): "));
            let price = ask!("Enter new product price (or leave empty): ");
            let stock = ask!("Enter new stock quantity (or leave empty): ");
            Command::Edit {
                id,
                patch: ProductPatch {
                    name,
                    category,
                    price: parse_optional("price", &price)?,
                    stock_quantity: parse_optional("stock quantity", &stock)?,
                },
            }
        }
        Operation::Delete => Command::Delete {
            id: ask!("Enter product ID to delete: "),
        },
        Operation::Search => {
            let name = non_empty(ask!("Enter product name (or leave empty): "));
            let category = non_empty(ask!("Enter product category (or leave empty): "));
            Command::Search { name, category }
        }
        Operation::AdjustStock => {
            let id = ask!("Enter product ID to adjust stock: ");
            let delta = parse_required(
                "stock adjustment",
                &ask!("Enter stock adjustment (positive to restock, negative to reduce): "),
            )?;
            Command::AdjustStock { id, delta }
        }
        Operation::LowStock => Command::LowStock,
        Operation::Logout => Command::Logout,
    };
    Ok(Some(command))
}

fn non_empty(answer: String) -> Option<String> {
    (!answer.is_empty()).then_some(answer)
}

fn parse_required<T: FromStr>(field: &'static str, input: &str) -> StockroomResult<T> {
    input.trim().parse().map_err(|_| StockroomError::Parse {
        field,
        input: input.to_string(),
    })
}

fn parse_optional<T: FromStr>(field: &'static str, input: &str) -> StockroomResult<Option<T>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_required(field, input).map(Some)
}
