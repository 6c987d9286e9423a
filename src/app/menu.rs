// FHRSView - app/menu.rs
//
// Interactive text menu. Each action reads its inputs through the console,
// calls into the session/core, and renders the result. Running out of input
// at any prompt ends the loop as if Quit had been chosen.

use crate::app::session::Session;
use crate::core::query::{RatingPredicate, RatingQuery};
use crate::core::rating::Categorical;
use crate::ui::console::Console;
use crate::ui::table;
use std::io::{self, BufRead, Write};

/// Top-level menu entries, in display order.
pub const MAIN_MENU: [&str; 6] = [
    "List our local authorities",
    "List all recorded businesses",
    "List all premise ratings",
    "List premise ratings with a specified rating",
    "Reserved (not yet available)",
    "Quit",
];

/// Business browser entries.
pub const BROWSE_MENU: [&str; 4] = ["Previous", "Next", "Display Everything", "Quit"];

/// Rating predicate entries.
pub const PREDICATE_MENU: [&str; 4] = [
    "Above a specified value",
    "Below a specified value",
    "Within a specified range",
    "A special value (Exempt or Awaiting Inspection)",
];

/// Whether the menu loop should keep going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the main menu until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(session: &Session, console: &mut Console<R, W>) -> io::Result<()> {
    loop {
        let Some(choice) = console.choose(&MAIN_MENU)? else {
            tracing::debug!("Input closed at main menu");
            return Ok(());
        };
        tracing::debug!(choice, "Main menu selection");

        let flow = match choice {
            1 => list_authorities(session, console)?,
            2 => browse_businesses(session, console)?,
            3 => list_all_ratings(session, console)?,
            4 => list_filtered_ratings(session, console)?,
            5 => {
                writeln!(console.out(), "This option is not available yet.")?;
                Flow::Continue
            }
            _ => Flow::Quit,
        };

        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

fn list_authorities<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let out = console.out();
    writeln!(out, " -- Local Authorities -- ")?;
    writeln!(out, "We have data for these authorities: ")?;
    for name in session.authority_names() {
        writeln!(out, "{name}")?;
    }
    Ok(Flow::Continue)
}

fn browse_businesses<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let mut pager = session.browse_businesses();
    writeln!(console.out(), "We have data for the following businesses")?;
    writeln!(console.out(), "We have {} businesses", pager.len())?;

    loop {
        let Some(choice) = console.choose(&BROWSE_MENU)? else {
            return Ok(Flow::Quit);
        };
        let window = match choice {
            1 => pager.previous(),
            2 => pager.next(),
            3 => pager.all(),
            _ => return Ok(Flow::Continue),
        };
        let out = console.out();
        for (index, name) in window {
            writeln!(out, "{index} - {name} ")?;
        }
    }
}

fn list_all_ratings<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let Some(name) = console.prompt_line("\nEnter the business name: ")? else {
        return Ok(Flow::Quit);
    };
    let query = RatingQuery::by_name(name);
    let results = session.ratings(&query);
    table::render(console.out(), &query.business_name, &results)?;
    Ok(Flow::Continue)
}

fn list_filtered_ratings<R: BufRead, W: Write>(
    session: &Session,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let Some(name) = console.prompt_line("\nEnter the business name: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(predicate) = read_predicate(console)? else {
        return Ok(Flow::Quit);
    };
    let query = RatingQuery::filtered(name, predicate);
    let results = session.ratings(&query);
    table::render(console.out(), &query.business_name, &results)?;
    Ok(Flow::Continue)
}

/// Ask which rating predicate to apply and read its operands.
fn read_predicate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<RatingPredicate>> {
    let Some(choice) = console.choose(&PREDICATE_MENU)? else {
        return Ok(None);
    };

    let predicate = match choice {
        1 => console
            .prompt_int("Please enter a value: ")?
            .map(RatingPredicate::Above),
        2 => console
            .prompt_int("Please enter a value: ")?
            .map(RatingPredicate::Below),
        3 => {
            let Some(minimum) = console.prompt_int("Please enter the minimum rating: ")? else {
                return Ok(None);
            };
            console
                .prompt_int("Please enter the maximum rating: ")?
                .map(|maximum| RatingPredicate::Range { minimum, maximum })
        }
        _ => console
            .prompt_parsed(
                "Please enter Exempt or Awaiting Inspection: ",
                "Please type either Exempt or Awaiting Inspection.",
                Categorical::parse,
            )?
            .map(RatingPredicate::Categorical),
    };
    Ok(predicate)
}
