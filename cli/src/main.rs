//! Reference presentation shell for the card services: collects arguments,
//! calls into `eduid-core` and prints outcomes. All behavior lives in the
//! core crate.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use eduid_common::model::card::{CardRecord, CardRequest, DEPARTMENTS};
use eduid_common::session::{AppEvent, AppState};
use eduid_core::services::{accounts, cards, records};
use eduid_core::AppConfig;
use env_logger::Env;
use log::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "eduid", version, about = "Student ID card generator")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account.
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Verify credentials and print the resulting application state.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Render a card and write it as a PNG.
    Generate {
        #[command(flatten)]
        card: CardArgs,
        /// Output PNG path.
        #[arg(long)]
        out: PathBuf,
    },
    /// Save the form as a record without producing a PDF.
    Save {
        #[command(flatten)]
        card: CardArgs,
    },
    /// Render a card, export it as a single-page PDF and save a record.
    Pdf {
        #[command(flatten)]
        card: CardArgs,
        /// Output PDF path.
        #[arg(long)]
        out: PathBuf,
    },
    /// Work with saved records.
    Records {
        #[command(subcommand)]
        cmd: RecordsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum RecordsCommand {
    /// List records, optionally only those matching a student id.
    List {
        #[arg(long)]
        student_id: Option<String>,
    },
    /// Delete every record with this student id.
    Delete {
        #[arg(long)]
        student_id: String,
    },
    /// Re-export the first record with this student id as a PDF.
    Export {
        #[arg(long)]
        student_id: String,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Args, Debug)]
struct CardArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    student_id: String,
    #[arg(long, default_value = "")]
    course: String,
    #[arg(long, default_value = "")]
    year: String,
    #[arg(long, default_value = "")]
    department: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    /// Background image path.
    #[arg(long)]
    background: Option<PathBuf>,
    /// Logo image path.
    #[arg(long)]
    logo: Option<PathBuf>,
    /// Photo image path.
    #[arg(long)]
    photo: Option<PathBuf>,
}

impl From<CardArgs> for CardRequest {
    fn from(args: CardArgs) -> Self {
        // The original form offered a fixed department list; free text is
        // still accepted here, with a heads-up.
        if !args.department.is_empty() && !DEPARTMENTS.contains(&args.department.as_str()) {
            warn!(
                "department '{}' is not one of the usual choices ({})",
                args.department,
                DEPARTMENTS.join(", ")
            );
        }
        CardRequest {
            name: args.name,
            student_id: args.student_id,
            course: args.course,
            year: args.year,
            department: args.department,
            phone: args.phone,
            email: args.email,
            background: args.background,
            logo: args.logo,
            photo: args.photo,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::from_env();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Signup {
            username,
            email,
            password,
        } => {
            accounts::create_account(&config, &username, &email, &password)?;
            println!("account '{username}' created");
        }
        Command::Login { username, password } => {
            let state = AppState::Login;
            let event = if accounts::verify_login(&config, &username, &password)? {
                AppEvent::LoginSucceeded { username }
            } else {
                AppEvent::LoginFailed
            };
            let next = state.apply(event);
            match &next {
                AppState::Dashboard { username, .. } => println!("logged in as '{username}'"),
                _ => println!("invalid credentials"),
            }
            info!("application state: {next:?}");
        }
        Command::Generate { card, out } => {
            let request: CardRequest = card.into();
            let image = cards::generate_card(&config, &request)?;
            image
                .save(&out)
                .with_context(|| format!("write png '{}'", out.display()))?;
            println!("card written to {}", out.display());
        }
        Command::Save { card } => {
            let request: CardRequest = card.into();
            if !request.has_mandatory_fields() {
                anyhow::bail!("name and student id are required");
            }
            let rowid = records::insert_record(&config, &CardRecord::from_request(&request, ""))?;
            println!("record {rowid} saved");
        }
        Command::Pdf { card, out } => {
            let request: CardRequest = card.into();
            cards::export_pdf(&config, &request, &out)?;
            println!("PDF written to {}", out.display());
        }
        Command::Records { cmd } => match cmd {
            RecordsCommand::List { student_id } => {
                let rows = records::list_records(&config, student_id.as_deref())?;
                if rows.is_empty() {
                    println!("no records");
                }
                for r in rows {
                    println!(
                        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                        r.id.unwrap_or_default(),
                        r.name,
                        r.student_id,
                        r.course,
                        r.year,
                        r.department,
                        r.phone,
                        r.email,
                        r.pdf_path
                    );
                }
            }
            RecordsCommand::Delete { student_id } => {
                let deleted = records::delete_records(&config, &student_id)?;
                println!("{deleted} record(s) deleted");
            }
            RecordsCommand::Export { student_id, out } => {
                cards::export_record_pdf(&config, &student_id, &out)?;
                println!("PDF written to {}", out.display());
            }
        },
    }

    Ok(())
}
