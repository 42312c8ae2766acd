use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::balance::Balance;
use crate::models::lunch_record::LunchRecord;
use crate::models::week::Week;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_balance, color_for_deficit};
use crate::utils::formatting::bold;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { weeks_only } = cmd {
        let mut pool = open_db(cfg)?;
        let overview = Core::overview(&mut pool, cfg)?;

        print_balance(&overview.balance);

        if !*weeks_only {
            print_records(&overview.records);
        }
        print_weeks(&overview.weeks);
    }
    Ok(())
}

fn print_balance(b: &Balance) {
    println!();
    println!(
        "{} {}{}{} ({} min)",
        bold("Balance:"),
        color_for_balance(b.remaining_minutes),
        mins2readable(b.remaining_minutes, false, false),
        RESET,
        b.remaining_minutes
    );
    println!(
        "{} {} ({} min) of {}",
        bold("Deficit:"),
        mins2readable(b.total_deficit_minutes, false, false),
        b.total_deficit_minutes,
        mins2readable(b.initial_allowance_minutes, false, false)
    );
    println!();
}

fn print_records(records: &[LunchRecord]) {
    header("Lunch breaks");

    if records.is_empty() {
        println!("No lunch breaks recorded.\n");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("DATE", 10),
        Column::new("LEFT", 5),
        Column::new("BACK", 5),
        Column::new("BREAK", 6),
        Column::new("DEFICIT", 7),
    ]);

    for r in records {
        table.add_row(vec![
            r.id.to_string(),
            r.date_str(),
            r.departure_str(),
            r.return_str(),
            r.break_minutes.to_string(),
            r.deficit_minutes.to_string(),
        ]);
    }

    // color whole rows after padding; the first two lines are the header
    for (i, line) in table.render().lines().enumerate() {
        match i.checked_sub(2).and_then(|idx| records.get(idx)) {
            Some(r) => println!("{}{}{}", color_for_deficit(r.deficit_minutes), line, RESET),
            None => println!("{}", line),
        }
    }
    println!();
}

fn print_weeks(weeks: &[Week]) {
    header("Weeks");

    if weeks.is_empty() {
        println!("No weeks closed yet.\n");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("NAME", 24),
        Column::new("DEFICIT", 12),
    ]);

    for w in weeks {
        table.add_row(vec![
            w.id.to_string(),
            w.name.clone(),
            format!(
                "{} ({})",
                mins2readable(w.deficit_total, false, true),
                w.deficit_total
            ),
        ]);
    }

    print!("{}", table.render());
    println!();
}
