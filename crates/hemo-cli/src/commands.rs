use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;

use hemo_bank::{BankError, BloodBank, BloodGroup, Role, TransactionKind, TransactionStatus};
use hemo_store::JsonFileStore;

use crate::cli::{Cli, Command, DonateArgs, LoginArgs, RequestArgs, RoleArg};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = JsonFileStore::open(&cli.store)
        .with_context(|| format!("cannot open store at {}", cli.store.display()))?;
    let bank = BloodBank::open(Arc::new(store))?;

    match cli.command {
        Command::Login(args) => cmd_login(&bank, args),
        Command::Logout => cmd_logout(&bank),
        Command::Whoami => cmd_whoami(&bank),
        Command::Inventory => cmd_inventory(&bank),
        Command::Donate(args) => cmd_donate(&bank, args),
        Command::Request(args) => cmd_request(&bank, args),
        Command::History => cmd_history(&bank),
    }
}

fn cmd_login(bank: &BloodBank<JsonFileStore>, args: LoginArgs) -> anyhow::Result<()> {
    let role = match args.role {
        RoleArg::Donor => Role::Donor,
        RoleArg::Receiver => Role::Receiver,
    };
    match bank.login(&args.email, role) {
        Ok(session) => {
            println!(
                "{} Logged in as {} ({})",
                "✓".green().bold(),
                session.email.bold(),
                session.role.to_string().cyan()
            );
            Ok(())
        }
        Err(err) => rejected_or_bail(err),
    }
}

fn cmd_logout(bank: &BloodBank<JsonFileStore>) -> anyhow::Result<()> {
    if bank.logout()? {
        println!("{} Logged out", "✓".green().bold());
    } else {
        println!("No active session.");
    }
    Ok(())
}

fn cmd_whoami(bank: &BloodBank<JsonFileStore>) -> anyhow::Result<()> {
    match bank.current_session()? {
        Some(session) => println!(
            "{} ({})",
            session.email.bold(),
            session.role.to_string().cyan()
        ),
        None => println!("Not logged in."),
    }
    Ok(())
}

fn cmd_inventory(bank: &BloodBank<JsonFileStore>) -> anyhow::Result<()> {
    println!("{}", "Blood inventory".bold());
    for (group, units) in bank.inventory()? {
        let count = match units {
            0 => units.to_string().red().bold(),
            1..=9 => units.to_string().yellow(),
            _ => units.to_string().normal(),
        };
        println!("  {:<4} {:>4} unit(s)", group.label(), count);
    }
    Ok(())
}

fn cmd_donate(bank: &BloodBank<JsonFileStore>, args: DonateArgs) -> anyhow::Result<()> {
    let group = parse_group(&args.group)?;
    match bank.donate(group, args.units) {
        Ok(record) => {
            println!(
                "{} Donated {} unit(s) of {} (receipt {})",
                "✓".green().bold(),
                record.units,
                record.blood_group.to_string().bold(),
                format!("#{}", record.id).yellow()
            );
            Ok(())
        }
        Err(err) => rejected_or_bail(err),
    }
}

fn cmd_request(bank: &BloodBank<JsonFileStore>, args: RequestArgs) -> anyhow::Result<()> {
    let group = parse_group(&args.group)?;
    match bank.request(group, args.units, args.confirm) {
        Ok(record) => {
            println!(
                "{} Received {} unit(s) of {} (receipt {})",
                "✓".green().bold(),
                record.units,
                record.blood_group.to_string().bold(),
                format!("#{}", record.id).yellow()
            );
            Ok(())
        }
        Err(err) => rejected_or_bail(err),
    }
}

fn cmd_history(bank: &BloodBank<JsonFileStore>) -> anyhow::Result<()> {
    let records = match bank.history() {
        Ok(records) => records,
        Err(err) => return rejected_or_bail(err),
    };
    if records.is_empty() {
        println!("No transactions yet.");
        return Ok(());
    }
    for record in records {
        let verb = match record.kind {
            TransactionKind::Donate => "donated",
            TransactionKind::Purchase => "received",
        };
        let status = match record.status {
            TransactionStatus::Completed => record.status.to_string().green(),
            TransactionStatus::Failed => record.status.to_string().red(),
            TransactionStatus::Pending => record.status.to_string().yellow(),
        };
        println!(
            "{}  {} {} unit(s) of {}  {}  {}",
            format!("#{}", record.id).yellow(),
            verb,
            record.units,
            record.blood_group.to_string().bold(),
            status,
            record.ts.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }
    Ok(())
}

fn parse_group(raw: &str) -> anyhow::Result<BloodGroup> {
    BloodGroup::from_str(raw).with_context(|| {
        let labels: Vec<&str> = BloodGroup::ALL.iter().map(BloodGroup::label).collect();
        format!("expected one of: {}", labels.join(", "))
    })
}

/// Validation rejections print inline and return control, like the forms
/// they replace; anything else aborts the command.
fn rejected_or_bail(err: BankError) -> anyhow::Result<()> {
    if err.is_validation() {
        println!("{} {err}", "✗".red().bold());
        Ok(())
    } else {
        Err(err.into())
    }
}
