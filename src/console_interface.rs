use crate::core::{Direction, PuzzleState, TileKind, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const INSTRUCTIONS: &str = "Sokoban is a puzzle game. You are the blue dot, and must push the brown boxes \
onto the pink circles. Boxes must be pushed from behind, and only 1 box can be pushed at a time. \
Use the arrow keys to move!";

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

fn tile_span(c: TileKind) -> Span<'static> {
    let (text, style) = match c {
        TileKind::Wall => ("██", Style::default().fg(Color::DarkGray)),
        TileKind::Floor => ("  ", Style::default().bg(Color::Rgb(245, 245, 220))),
        TileKind::Void => ("  ", Style::default()),
        TileKind::Box => ("[]", Style::default().fg(Color::Rgb(205, 133, 63))),
        TileKind::BoxOnGoal => ("[]", Style::default().fg(Color::Rgb(139, 69, 19))),
        TileKind::Goal => ("()", Style::default().fg(Color::LightRed)),
        TileKind::Player => ("@@", Style::default().fg(Color::Blue)),
        TileKind::PlayerOnGoal => ("@@", Style::default().fg(Color::Blue).bg(Color::LightRed)),
    };
    Span::styled(text, style)
}

pub fn render_game_lines(game: &PuzzleState) -> Vec<Line<'static>> {
    game.grid()
        .rows()
        .iter()
        .map(|row| Line::from(row.iter().map(|&c| tile_span(c)).collect::<Vec<_>>()))
        .collect()
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let instructions_height = if state.show_instructions { 5 } else { 0 };
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(instructions_height),
                Constraint::Length(3),
            ])
            .split(f.area());

        let menu = state
            .level_names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("[{}] {}", i + 1, name))
            .collect::<Vec<_>>()
            .join("  ");
        let menu_paragraph = Paragraph::new(menu)
            .block(Block::default().borders(Borders::ALL).title("Please choose a level"))
            .alignment(Alignment::Center);
        f.render_widget(menu_paragraph, chunks[0]);

        let game_paragraph = Paragraph::new(render_game_lines(state.game))
            .block(Block::default().borders(Borders::ALL).title(state.title))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[1]);

        if state.show_instructions {
            let instructions_paragraph = Paragraph::new(INSTRUCTIONS)
                .block(Block::default().borders(Borders::ALL).title("Instructions"))
                .wrap(Wrap { trim: true });
            f.render_widget(instructions_paragraph, chunks[2]);
        }

        let controls = "Controls: 1-9 choose level, WASD or Arrow keys to move, I instructions, M menu, Q to quit";
        let controls = if let Some(message) = &state.message {
            format!("{} | {}", controls, message)
        } else {
            controls.to_string()
        };
        let controls = if let Some(change_type) = &state.last_change {
            format!("{} | Last: {:?}", controls, change_type)
        } else {
            controls
        };

        let controls_paragraph = Paragraph::new(controls)
            .block(Block::default().borders(Borders::ALL).title("Controls"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(controls_paragraph, chunks[3]);
    })?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    UserAction(UserAction),
    ChooseLevel(usize),
    ToggleInstructions,
    Menu,
    Quit,
    Timeout,
    Unknown,
}

pub fn map_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        KeyCode::Char('i') | KeyCode::Char('I') => ConsoleInput::ToggleInstructions,
        KeyCode::Char('m') | KeyCode::Char('M') => ConsoleInput::Menu,
        KeyCode::Char(c @ '1'..='9') => ConsoleInput::ChooseLevel(c as usize - '0' as usize),
        _ => ConsoleInput::Unknown,
    }
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(map_key(code));
        }
    }
    Ok(ConsoleInput::Timeout)
}
