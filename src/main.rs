// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Zktree CLI entrypoint.
//!
//! Walks the namespace below `--root-path` and prints it as text (optionally as a tree) or JSON.
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `zktree=warn`).

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use zktree::client::fixtures::demo_tree;
use zktree::client::{TreeClient, ZkClient};
use zktree::config::{Cli, OutputFormat};
use zktree::model::{SortedRecords, ZPath};
use zktree::render::{write_json, write_text};
use zktree::walk::walk;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zktree=warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = ZPath::parse(&cli.root_path) {
        eprintln!("zktree: {err}");
        return ExitCode::from(2);
    }

    let mut client: Box<dyn TreeClient> = if cli.demo {
        Box::new(demo_tree())
    } else {
        match ZkClient::connect(&cli.zk_config()) {
            Ok(client) => Box::new(client),
            Err(err) => {
                eprintln!("zktree: {err}");
                return ExitCode::FAILURE;
            }
        }
    };

    // Skipped subtrees are already logged by the walk.
    let records = match walk(Some(client.as_mut()), &cli.root_path, cli.depth) {
        Ok(snapshot) => snapshot.into_sorted().0,
        Err(err) => {
            eprintln!("zktree: {err}");
            SortedRecords::default()
        }
    };
    drop(client);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let written = match cli.format {
        OutputFormat::Text => write_text(&mut out, &records, &cli.render_config()),
        OutputFormat::Json => write_json(&mut out, &records, cli.data),
    }
    .and_then(|()| out.flush());

    match written {
        Ok(()) => ExitCode::SUCCESS,
        // A closed pipe (`zktree | head`) is not an error.
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("zktree: {err}");
            ExitCode::FAILURE
        }
    }
}
