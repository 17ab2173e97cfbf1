mod app;
mod cli;
mod error;
mod event;
mod logging;
mod model;
mod notifier;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use app::App;
use cli::Cli;
use storage::config::{self, Config};

/// 解析配置文件路径、加载配置并应用命令行覆盖
fn load_settings(cli: &Cli) -> (Config, Option<PathBuf>) {
    let config_path = match cli.config.clone() {
        Some(path) => Some(path),
        None => config::default_config_path().ok(),
    };

    let mut config = config_path
        .as_deref()
        .map(config::load_config)
        .unwrap_or_default();

    if let Some(ref theme) = cli.theme {
        config.theme.name = theme.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.log.file = Some(file.clone());
    }

    (config, config_path)
}

/// 初始化日志，失败只提示不退出
fn init_logging(config: &Config) {
    let path = match config.log.file.clone() {
        Some(path) => path,
        None => match storage::taskpad_dir() {
            Ok(dir) => dir.join("taskpad.log"),
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                return;
            }
        },
    };
    if let Err(e) = logging::init(&config.log.level, &path) {
        eprintln!("Logging disabled: {}", e);
    }
}

fn restore_terminal() {
    let _ = execute!(io::stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let cli = Cli::parse();
    let (config, config_path) = load_settings(&cli);
    init_logging(&config);

    // 命令行传入的主题不写回配置
    let persist_path = if cli.theme.is_some() { None } else { config_path };
    let mut app = App::new(&config, persist_path);

    // 初始化终端
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;
    info!("session started");

    let result = run(&mut terminal, &mut app);

    // 恢复终端
    restore_terminal();

    match result {
        Ok(()) => info!(tasks = app.store.len(), "session ended"),
        Err(ref e) => warn!(error = %e, "session aborted"),
    }
    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        app.ui.click_areas.reset();
        terminal.draw(|frame| ui::task_screen::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
