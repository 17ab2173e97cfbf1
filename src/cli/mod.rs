//! CLI 模块

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "taskpad")]
#[command(version)]
#[command(about = "Single-screen terminal task list")]
pub struct Cli {
    /// Color theme (Auto, Dark, Light, Nord, Gruvbox); overrides the config file
    #[arg(short, long)]
    pub theme: Option<String>,
    /// Config file path (defaults to ~/.taskpad/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Log file path; overrides the config file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
