//! contactbook CLI
//!
//! Command-line interface over a contact book file.

use std::process;

use clap::{Parser, Subcommand};
use contactbook::{Config, Contact, ContactBook, ContactError};
use tracing_subscriber::{fmt, EnvFilter};

/// contactbook CLI
#[derive(Parser, Debug)]
#[command(name = "contactbook")]
#[command(about = "Manage contacts stored in a fixed-layout binary file")]
#[command(version)]
struct Args {
    /// Binary data file
    #[arg(short, long, default_value = "data/contacts.bin")]
    data_file: String,

    /// Directory for CSV exports
    #[arg(short, long, default_value = "data")]
    export_dir: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a contact
    Add {
        name: String,
        phone: String,
        email: String,
    },

    /// List all contacts
    List,

    /// Search name, phone and email (case-sensitive)
    Search {
        term: String,
    },

    /// Show one contact
    Show {
        id: u32,
    },

    /// Edit a contact; omitted fields are kept
    Edit {
        id: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a contact
    Delete {
        id: u32,
    },

    /// Export contacts to CSV under the export directory
    Export {
        /// File name; ".csv" is appended if missing
        file: String,
    },

    /// Show memory usage of the store
    Stats,

    /// Generate test contacts and time generation and save
    Stress {
        count: usize,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,contactbook=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_file(&args.data_file)
        .export_dir(&args.export_dir)
        .build();

    let mut book = match ContactBook::open(config) {
        Ok(book) => book,
        Err(e) => {
            tracing::error!("Failed to open contact book: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&mut book, args.command) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(book: &mut ContactBook, command: Commands) -> contactbook::Result<()> {
    match command {
        Commands::Add { name, phone, email } => {
            let name = required("name", &name)?;
            let phone = required("phone", &phone)?;
            let email = required("email", &email)?;

            let id = book.add(name, phone, email)?;
            println!("Contact added with ID {}", id);
        }
        Commands::List => {
            let contacts: Vec<&Contact> = book.iter().collect();
            if contacts.is_empty() {
                println!("No contacts registered.");
            } else {
                print_table(&contacts);
                println!("\nTotal: {} contact(s)", contacts.len());
            }
        }
        Commands::Search { term } => {
            let term = required("search term", &term)?;
            let found = book.search(term);
            if found.is_empty() {
                println!("No contacts match '{}'.", term);
            } else {
                print_table(&found);
                println!("\nTotal: {} contact(s) found", found.len());
            }
        }
        Commands::Show { id } => {
            let contact = book.find_by_id(id).ok_or(ContactError::NotFound(id))?;
            println!("ID:    {}", contact.id());
            println!("Name:  {}", contact.name());
            println!("Phone: {}", contact.phone());
            println!("Email: {}", contact.email());
        }
        Commands::Edit { id, name, phone, email } => {
            book.edit(
                id,
                name.as_deref().map(str::trim),
                phone.as_deref().map(str::trim),
                email.as_deref().map(str::trim),
            )?;
            println!("Contact {} updated", id);
        }
        Commands::Delete { id } => {
            let removed = book.delete(id)?;
            println!("Contact {} ({}) deleted", removed.id(), removed.name());
        }
        Commands::Export { file } => {
            let file = required("file name", &file)?;
            let report = book.export_csv(file)?;
            println!("Exported {} contact(s) to {}", report.rows, report.path.display());
        }
        Commands::Stats => {
            println!("{}", book.memory_report());
        }
        Commands::Stress { count } => {
            let report = book.generate_test_records(count)?;
            println!(
                "{} contacts generated in {:.3} s",
                report.generated,
                report.generate_time.as_secs_f64()
            );
            println!("Data saved in {:.3} s", report.save_time.as_secs_f64());
            println!();
            println!("{}", book.memory_report());
        }
    }

    Ok(())
}

/// Trim a user-supplied field, rejecting it when nothing is left
fn required<'a>(field: &str, value: &'a str) -> contactbook::Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactError::Config(format!("{} cannot be empty", field)));
    }
    Ok(value)
}

fn print_table(contacts: &[&Contact]) {
    println!("\n{:<5} {:<30} {:<20} {:<30}", "ID", "Name", "Phone", "Email");
    println!("{}", "-".repeat(80));
    for contact in contacts {
        println!("{}", contact);
    }
}
