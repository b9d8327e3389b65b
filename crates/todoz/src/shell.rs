//! Interactive shell: one command per line against a live engine.
//!
//! Every mutating or filtering command re-renders the current page, mirroring
//! the live-view behavior the engine is built for. Unknown ids and blank text
//! are no-ops in the engine, so the shell never has to special-case them.

use std::io::{self, BufRead, Write};

use colored::*;
use console::style;
use todozapp::engine::TodoView;
use todozapp::error::Result;
use todozapp::source::DataSource;

use crate::render;

pub fn run(view: &mut TodoView, source: &dyn DataSource) -> Result<()> {
    println!("{}", "todoz interactive shell. Type 'help' for commands.".dimmed());
    render::print_view(&view.view(), false);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{} ", style("todoz>").cyan());
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            return Ok(());
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (input, ""),
        };

        match command {
            "add" | "a" => {
                if view.add(rest).is_none() {
                    println!("{}", "Nothing to add.".yellow());
                }
                render::print_view(&view.view(), false);
            }
            "done" | "d" => with_id(rest, |id| {
                view.toggle(id);
                render::print_view(&view.view(), false);
            }),
            "rm" => with_id(rest, |id| {
                view.remove(id);
                render::print_view(&view.view(), false);
            }),
            "edit" | "e" => match rest.split_once(char::is_whitespace) {
                Some((id, text)) => with_id(id, |id| {
                    view.edit(id, text);
                    render::print_view(&view.view(), false);
                }),
                None => println!("{}", "Usage: edit <id> <new text>".yellow()),
            },
            "search" | "s" => {
                view.set_search(rest);
                render::print_view(&view.view(), false);
            }
            "from" => with_date(rest, |date| {
                view.set_from(date);
                render::print_view(&view.view(), false);
            }),
            "to" => with_date(rest, |date| {
                view.set_to(date);
                render::print_view(&view.view(), false);
            }),
            "status" => match rest.parse() {
                Ok(status) => {
                    view.set_status(status);
                    render::print_view(&view.view(), false);
                }
                Err(message) => println!("{}", message.yellow()),
            },
            "page" | "p" => match rest.parse() {
                Ok(page) => {
                    view.set_page(page);
                    render::print_view(&view.view(), false);
                }
                Err(_) => println!("{}", "Usage: page <number>".yellow()),
            },
            "next" | "n" => {
                view.next_page();
                render::print_view(&view.view(), false);
            }
            "prev" => {
                view.prev_page();
                render::print_view(&view.view(), false);
            }
            "reload" => match source.fetch() {
                Ok(records) => {
                    view.replace_all(records);
                    render::print_view(&view.view(), false);
                }
                Err(e) => println!("{}", format!("Reload failed: {}", e).red()),
            },
            "stats" => render::print_stats(&view.stats()),
            "help" | "?" => print_help(),
            "quit" | "q" | "exit" => return Ok(()),
            other => println!("{}", format!("Unknown command: {}", other).yellow()),
        }
    }
}

fn with_id(arg: &str, action: impl FnOnce(u64)) {
    match arg.parse() {
        Ok(id) => action(id),
        Err(_) => println!("{}", "Expected a numeric id.".yellow()),
    }
}

/// An empty argument clears the bound.
fn with_date(arg: &str, action: impl FnOnce(Option<chrono::NaiveDate>)) {
    if arg.is_empty() {
        action(None);
        return;
    }
    match arg.parse() {
        Ok(date) => action(Some(date)),
        Err(_) => println!("{}", "Expected a date as YYYY-MM-DD.".yellow()),
    }
}

fn print_help() {
    println!("  add <text>         Add a new todo");
    println!("  done <id>          Toggle completion");
    println!("  edit <id> <text>   Replace a todo's text");
    println!("  rm <id>            Delete a todo");
    println!("  search [text]      Set (or clear) the search filter");
    println!("  from [date]        Set (or clear) the earliest creation date");
    println!("  to [date]          Set (or clear) the latest creation date");
    println!("  status <which>     Show all, pending, or completed");
    println!("  page <n>           Jump to a page");
    println!("  next / prev        Step through pages");
    println!("  reload             Re-fetch the collection from its source");
    println!("  stats              Show completion counters");
    println!("  quit               Leave the shell");
}
