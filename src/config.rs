// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command-line configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::client::zk::{DEFAULT_SERVER, DEFAULT_SESSION_TIMEOUT};
use crate::client::ZkConfig;
use crate::render::RenderConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per node.
    #[default]
    Text,
    /// Pretty-printed JSON array of nodes.
    Json,
}

/// List a ZooKeeper namespace as a flat listing or a box-drawing tree.
#[derive(Debug, Clone, Parser)]
#[command(name = "zktree", version, about)]
pub struct Cli {
    /// Absolute path to start the walk from.
    #[arg(short = 'p', long, default_value = "/")]
    pub root_path: String,

    /// Maximum walk level below the root (0 = unbounded).
    #[arg(short, long, default_value_t = 0)]
    pub depth: u32,

    /// Ensemble members as comma-separated host:port pairs, tried in order.
    #[arg(long, env = "ZKTREE_ZK", value_delimiter = ',', default_value = DEFAULT_SERVER)]
    pub zk: Vec<String>,

    /// Session timeout in seconds (at least 1).
    #[arg(
        long,
        default_value_t = DEFAULT_SESSION_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub session_timeout: u64,

    /// Append each node's payload.
    #[arg(long)]
    pub data: bool,

    /// Show czxid, mzxid and pzxid.
    #[arg(long = "txid")]
    pub txids: bool,

    /// Show version, cversion and aversion.
    #[arg(long)]
    pub versions: bool,

    /// Show ctime and mtime.
    #[arg(long)]
    pub times: bool,

    /// Show the ephemeral owner session.
    #[arg(long)]
    pub owner: bool,

    /// Show the payload length.
    #[arg(long)]
    pub length: bool,

    /// Show the child count.
    #[arg(long)]
    pub children: bool,

    /// Show every metadata column.
    #[arg(short = 'a', long = "all")]
    pub all_metadata: bool,

    /// Draw tree connectors.
    #[arg(short, long)]
    pub tree: bool,

    /// Print full paths instead of base names.
    #[arg(short, long)]
    pub full_path: bool,

    /// Prefix each line with its walk level.
    #[arg(short, long)]
    pub level: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Walk a built-in sample namespace instead of connecting.
    #[arg(long)]
    pub demo: bool,
}

impl Cli {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            txids: self.txids,
            versions: self.versions,
            times: self.times,
            owner: self.owner,
            length: self.length,
            children: self.children,
            all_metadata: self.all_metadata,
            tree: self.tree,
            full_path: self.full_path,
            data: self.data,
            level: self.level,
        }
    }

    pub fn zk_config(&self) -> ZkConfig {
        let servers = self
            .zk
            .iter()
            .map(|server| server.trim())
            .filter(|server| !server.is_empty())
            .map(str::to_owned)
            .collect::<Vec<_>>();
        let servers = if servers.is_empty() { vec![DEFAULT_SERVER.to_owned()] } else { servers };
        ZkConfig { servers, session_timeout: Duration::from_secs(self.session_timeout) }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Cli, OutputFormat};
    use crate::render::RenderConfig;
    use clap::Parser;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("zktree").chain(args.iter().copied())).expect("parse")
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.root_path, "/");
        assert_eq!(cli.depth, 0);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.demo);
        assert_eq!(cli.render_config(), RenderConfig::default());
        assert_eq!(cli.session_timeout, 10);
    }

    #[test]
    fn ensemble_list_and_timeout() {
        let cli = parse(&["--zk", "zk1:2181, zk2:2181,,", "--session-timeout", "3"]);
        let config = cli.zk_config();
        assert_eq!(config.servers, vec!["zk1:2181", "zk2:2181"]);
        assert_eq!(config.session_timeout, Duration::from_secs(3));
    }

    #[rstest]
    #[case(&["--txid"], RenderConfig { txids: true, ..RenderConfig::default() })]
    #[case(&["--versions", "--times"], RenderConfig { versions: true, times: true, ..RenderConfig::default() })]
    #[case(&["--owner", "--length", "--children"], RenderConfig { owner: true, length: true, children: true, ..RenderConfig::default() })]
    #[case(&["-a"], RenderConfig { all_metadata: true, ..RenderConfig::default() })]
    #[case(&["-t", "-f", "-l", "--data"], RenderConfig { tree: true, full_path: true, level: true, data: true, ..RenderConfig::default() })]
    fn flags_map_onto_render_config(#[case] args: &[&str], #[case] expected: RenderConfig) {
        assert_eq!(parse(args).render_config(), expected);
    }

    #[test]
    fn root_depth_and_format() {
        let cli = parse(&["-p", "/services", "-d", "2", "--format", "json", "--demo"]);
        assert_eq!(cli.root_path, "/services");
        assert_eq!(cli.depth, 2);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.demo);
    }

    #[test]
    fn rejects_zero_session_timeout() {
        assert!(Cli::try_parse_from(["zktree", "--session-timeout", "0"]).is_err());
        assert_eq!(parse(&["--session-timeout", "1"]).session_timeout, 1);
    }

    #[test]
    fn rejects_negative_depth() {
        assert!(Cli::try_parse_from(["zktree", "--depth", "-1"]).is_err());
    }
}
