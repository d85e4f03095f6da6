// Copyright 2025 The quizsmith authors
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

use std::process::exit;

use clap::Parser;
use tokio::spawn;

use crate::cmd::export::export_quizzes;
use crate::cmd::serve::server::ServerConfig;
use crate::cmd::serve::server::start_server;
use crate::config::Config;
use crate::error::Fallible;
use crate::utils::wait_for_server;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATABASE: &str = "quizsmith.db";

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Serve the quiz CRUD API and HTML exports.
    Serve {
        /// Path to a config file. By default, quizsmith.toml is read if present.
        #[arg(long)]
        config: Option<String>,
        /// The host address to bind to. Default is 127.0.0.1.
        #[arg(long)]
        host: Option<String>,
        /// The port to use for the web server. Default is 8000.
        #[arg(long)]
        port: Option<u16>,
        /// Path to the SQLite database. Default is quizsmith.db.
        #[arg(long)]
        database: Option<String>,
        /// Whether to open the browser automatically. Default is false.
        #[arg(long)]
        open_browser: Option<bool>,
    },
    /// Export quiz JSON to a standalone interactive HTML document.
    Export {
        /// A quiz JSON file, or a directory of them.
        input: String,
        /// Output file for single-file input. By default, the document is
        /// printed to stdout; directory input always writes .html siblings.
        #[arg(long)]
        output: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Serve {
            config,
            host,
            port,
            database,
            open_browser,
        } => {
            let file = Config::load(config.as_deref())?;
            let host = host
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string());
            let port = port.or(file.port).unwrap_or(DEFAULT_PORT);
            let database = database
                .or(file.database)
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
            if open_browser.unwrap_or(false) {
                // Start a separate task to open the browser once the server is up.
                let browser_host = host.clone();
                spawn(async move {
                    match wait_for_server(&browser_host, port).await {
                        Ok(_) => {
                            let _ = open::that(format!("http://{browser_host}:{port}/"));
                        }
                        Err(e) => {
                            eprintln!("Failed to connect to server: {e}");
                            exit(-1)
                        }
                    }
                });
            }
            let config = ServerConfig {
                host,
                port,
                database: Some(database),
            };
            start_server(config).await
        }
        Command::Export { input, output } => export_quizzes(&input, output.as_deref()),
    }
}
