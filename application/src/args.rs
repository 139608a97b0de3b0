//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use service::domain::{customer, employee, property, slot::DisplayMode, Status};

/// Client booking property visits in the real estate CRM.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command of the client.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the bookable visit times.
    Slots {
        /// Clock to print the times in, `12` or `24`.
        ///
        /// Defaults to the configured one.
        #[arg(long)]
        mode: Option<DisplayMode>,
    },

    /// Prints the properties a customer is interested in.
    Interests {
        /// ID of the customer.
        #[arg(long)]
        customer: customer::Id,
    },

    /// Books a property visit.
    Schedule {
        /// ID of the customer to book the visit for.
        #[arg(long)]
        customer: customer::Id,

        /// Current status of the customer.
        #[arg(long, default_value = "available")]
        customer_status: Status,

        /// ID of the employee booking the visit.
        #[arg(long)]
        employee: employee::Id,

        /// Date of the visit, e.g. `2025-06-01`.
        #[arg(long, value_parser = common::datetime::parse_date)]
        date: common::Date,

        /// Time of the visit as labeled, e.g. `2 30pm` or `14 30`.
        #[arg(long)]
        time: String,

        /// ID of the property to visit.
        #[arg(long)]
        property: property::Id,
    },
}
