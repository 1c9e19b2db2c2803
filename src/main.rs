// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use boardcore::commands::info::InfoCommand;
use boardcore::commands::list::ListCommand;
use boardcore::commands::search::SearchCommand;
use boardcore::config::new_boardcore_config;
use boardcore::error::{Result, format_error_chain, get_exit_code};
use boardcore::logging;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "boardcore")]
#[command(author, version, about = "Board platform package query tool", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List installed platform releases
    #[command(visible_alias = "ls")]
    List {
        /// Show only platforms with a newer release available
        #[arg(long)]
        updatable: bool,

        /// Show the latest release of every known platform
        #[arg(long)]
        all: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search platform releases by text or USB vid:pid pair
    #[command(visible_alias = "s")]
    Search {
        /// Query to search for (e.g., "uno", "avr", "arduino:avr", "2341:0043")
        query: String,

        /// Show every release of each matching platform
        #[arg(long)]
        all_versions: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show registry snapshot information
    Info,
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    // Load configuration once at startup
    let config = match new_boardcore_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    let result: Result<()> = (|| match cli.command {
        Commands::List {
            updatable,
            all,
            json,
        } => {
            let command = ListCommand::new(&config)?;
            command.execute(updatable, all, json)
        }
        Commands::Search {
            query,
            all_versions,
            json,
        } => {
            let command = SearchCommand::new(&config)?;
            command.execute(&query, all_versions, json)
        }
        Commands::Info => {
            let command = InfoCommand::new(&config)?;
            command.execute()
        }
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}
