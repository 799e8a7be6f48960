// Terminal Sokoban.
// Controls: 1-9 pick a level, W/A/S/D or arrow keys move, I shows instructions, M returns to the
// title screen, Q quits. Configuration is read from sokoban.toml or the path given as the first argument.

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sokoban_engine::config::{AppConfig, DEFAULT_CONFIG_FILE};
use sokoban_engine::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use sokoban_engine::core::RulesConfig;
use sokoban_engine::level::LevelFile;
use sokoban_engine::models::GameRenderState;
use sokoban_engine::session::Session;
use sokoban_engine::{levels, logging};
use std::io;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).unwrap_or(DEFAULT_CONFIG_FILE.to_string());
    let config = AppConfig::load_or_default(&config_path)?;
    logging::init(&config.logging)?;
    info!(config = %config_path, rules = ?config.rules, "starting");

    let catalog = levels::load_catalog(&config.levels)?;
    info!(levels = catalog.len(), file = ?config.levels.file, "level catalog ready");

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&config.rules, &catalog, &mut terminal);
    cleanup_terminal()?;
    result
}

fn run_interactive(
    rules: &RulesConfig,
    catalog: &[LevelFile],
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let level_names: Vec<String> = catalog.iter().map(|level| level.name.clone()).collect();
    let mut session = Session::title_screen()?;
    let mut show_instructions = false;

    loop {
        render_game(
            terminal,
            &GameRenderState {
                title: &session.title,
                game: &session.game,
                level_names: &level_names,
                show_instructions,
                message: session.message.clone(),
                last_change: session.last_change,
            },
        )?;

        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::Timeout => {}
            ConsoleInput::Unknown => {}
            ConsoleInput::ToggleInstructions => show_instructions = !show_instructions,
            ConsoleInput::Menu => session.menu()?,
            ConsoleInput::ChooseLevel(number) => session.choose_level(catalog, number)?,
            ConsoleInput::UserAction(action) => session.user_action(action, rules)?,
        }
    }

    Ok(())
}
