use chrono::naive::NaiveDate;
use clap::ArgAction;
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use log::warn;
use std::path::PathBuf;

fn main() {
    let args = CliArgs::parse();
    let dotenv_result = dotenv();

    let env = env_logger::Env::new().filter_or(
        "RUST_LOG",
        match args.global_opts.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        },
    );
    env_logger::Builder::from_env(env).init();
    if dotenv_result.is_err() {
        warn!("Could not read .env file: {}", dotenv_result.unwrap_err());
    }

    let data_file = args.global_opts.data_file;
    let result = match args.command {
        Command::ListRooms => hotel_booking::cli::print_room_list(data_file),
        Command::ListBookings => hotel_booking::cli::print_booking_list(data_file),
        Command::Book {
            start_date,
            end_date,
        } => hotel_booking::cli::book_room(data_file, start_date, end_date),
        Command::FindRoom {
            start_date,
            end_date,
        } => hotel_booking::cli::print_available_room(data_file, start_date, end_date),
        Command::Occupancy {
            start_date,
            end_date,
        } => hotel_booking::cli::print_fully_occupied_dates(data_file, start_date, end_date),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// A minimal hotel booking manager, operating on a JSON data file
#[derive(Debug, Parser)]
#[clap(name = "hotel-booking", version)]
pub struct CliArgs {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all rooms
    ListRooms,
    /// List all bookings
    ListBookings,
    /// Create a new booking, if a room is available for the requested period
    Book {
        /// First date of the booking (YYYY-MM-DD, queried interactively if omitted)
        #[clap(long)]
        start_date: Option<NaiveDate>,
        /// Last date of the booking (YYYY-MM-DD, queried interactively if omitted)
        #[clap(long)]
        end_date: Option<NaiveDate>,
    },
    /// Find the first available room for a period
    FindRoom {
        /// First date of the period (YYYY-MM-DD)
        #[clap(long)]
        start_date: NaiveDate,
        /// Last date of the period (YYYY-MM-DD)
        #[clap(long)]
        end_date: NaiveDate,
    },
    /// List the dates in a period on which all rooms are occupied
    Occupancy {
        /// First date of the period (YYYY-MM-DD)
        #[clap(long)]
        start_date: NaiveDate,
        /// Last date of the period (YYYY-MM-DD)
        #[clap(long)]
        end_date: NaiveDate,
    },
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Verbosity level (can be specified multiple times)
    #[clap(long, short, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Path of the JSON data file (defaults to the BOOKING_DATA_FILE environment variable)
    #[clap(long, short, global = true)]
    data_file: Option<PathBuf>,
}
