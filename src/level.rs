//! Text and JSON level payloads.
//!
//! Legacy symbols: `#` wall, `_` floor, `.` void, `+` box, `!` box on goal,
//! `8` player, `~` player on goal, `@` goal.
//!
//! XSB symbols: `#` wall, ` ` floor, `-` void, `$` box, `*` box on goal,
//! `@` player, `+` player on goal, `.` goal.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::TileKind::{Box, BoxOnGoal, Floor, Goal, Player, PlayerOnGoal, Void, Wall};
use crate::core::{EngineError, Grid, PuzzleState, Result, TileKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolSet {
    #[default]
    Legacy,
    Xsb,
}

impl SymbolSet {
    pub fn symbol(self, kind: TileKind) -> char {
        match self {
            SymbolSet::Legacy => match kind {
                Wall => '#',
                Floor => '_',
                Void => '.',
                Box => '+',
                BoxOnGoal => '!',
                Player => '8',
                PlayerOnGoal => '~',
                Goal => '@',
            },
            SymbolSet::Xsb => match kind {
                Wall => '#',
                Floor => ' ',
                Void => '-',
                Box => '$',
                BoxOnGoal => '*',
                Player => '@',
                PlayerOnGoal => '+',
                Goal => '.',
            },
        }
    }

    pub fn tile(self, ch: char) -> Option<TileKind> {
        let kind = match (self, ch) {
            (_, '#') => Wall,
            (SymbolSet::Legacy, '_') => Floor,
            (SymbolSet::Legacy, '.') => Void,
            (SymbolSet::Legacy, '+') => Box,
            (SymbolSet::Legacy, '!') => BoxOnGoal,
            (SymbolSet::Legacy, '8') => Player,
            (SymbolSet::Legacy, '~') => PlayerOnGoal,
            (SymbolSet::Legacy, '@') => Goal,
            (SymbolSet::Xsb, ' ' | '_') => Floor,
            (SymbolSet::Xsb, '-') => Void,
            (SymbolSet::Xsb, '$') => Box,
            (SymbolSet::Xsb, '*') => BoxOnGoal,
            (SymbolSet::Xsb, '@') => Player,
            (SymbolSet::Xsb, '+') => PlayerOnGoal,
            (SymbolSet::Xsb, '.') => Goal,
            _ => return None,
        };
        Some(kind)
    }
}

/// Builds a grid from text rows. Blank lines before and after the level are
/// dropped; rows in between keep their own length.
pub fn parse_grid(s: &str, symbols: SymbolSet) -> Result<Grid> {
    let lines: Vec<&str> = s.lines().map(|line| line.trim_end_matches('\r')).collect();
    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return Err(EngineError::InvalidLevel("level has no rows".to_string()));
    };

    let mut grid = Vec::with_capacity(last - first + 1);
    for (i, line) in lines[first..=last].iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (j, ch) in line.chars().enumerate() {
            let c = symbols.tile(ch).ok_or_else(|| {
                EngineError::InvalidLevel(format!("unknown symbol {:?} at row {}, column {}", ch, i, j))
            })?;
            row.push(c);
        }
        grid.push(row);
    }
    Ok(Grid::from_rows(grid))
}

pub fn parse_level(s: &str, symbols: SymbolSet) -> Result<PuzzleState> {
    PuzzleState::load(parse_grid(s, symbols)?)
}

/// Parses a title or win screen, which has no player.
pub fn parse_screen(s: &str, symbols: SymbolSet) -> Result<PuzzleState> {
    Ok(PuzzleState::inactive(parse_grid(s, symbols)?))
}

pub fn render_grid_to_string(grid: &Grid, symbols: SymbolSet) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        for &c in row {
            result.push(symbols.symbol(c));
        }
        result.push('\n');
    }
    result
}

/// A level as stored in JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFile {
    pub name: String,
    #[serde(default)]
    pub symbols: SymbolSet,
    pub rows: Vec<String>,
    /// Non-interactive screens carry no player.
    #[serde(default)]
    pub screen: bool,
}

impl LevelFile {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reads a JSON array of levels.
    pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Reads a plain-text collection. Levels are separated by blank lines and
    /// a `;` line names the level it is attached to.
    pub fn load_text_catalog(path: impl AsRef<Path>, symbols: SymbolSet) -> Result<Vec<Self>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse_text_catalog(&contents, symbols))
    }

    pub fn parse_text_catalog(s: &str, symbols: SymbolSet) -> Vec<Self> {
        let mut levels = Vec::new();
        let mut name: Option<String> = None;
        let mut rows: Vec<String> = Vec::new();

        let mut finish = |name: &mut Option<String>, rows: &mut Vec<String>| {
            if rows.is_empty() {
                return;
            }
            let number = levels.len() + 1;
            levels.push(LevelFile {
                name: name.take().unwrap_or_else(|| format!("Level {}", number)),
                symbols,
                rows: std::mem::take(rows),
                screen: false,
            });
        };

        for line in s.lines().map(|line| line.trim_end_matches('\r')) {
            if let Some(comment) = line.strip_prefix(';') {
                let comment = comment.trim();
                if name.is_none() && !comment.is_empty() {
                    name = Some(comment.to_string());
                }
            } else if line.trim().is_empty() {
                finish(&mut name, &mut rows);
            } else {
                rows.push(line.to_string());
            }
        }
        finish(&mut name, &mut rows);
        levels
    }

    pub fn from_state(name: impl Into<String>, state: &PuzzleState, symbols: SymbolSet) -> Self {
        LevelFile {
            name: name.into(),
            symbols,
            rows: render_grid_to_string(state.grid(), symbols)
                .lines()
                .map(str::to_string)
                .collect(),
            screen: !state.is_active(),
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_state(&self) -> Result<PuzzleState> {
        let text = self.rows.join("\n");
        let parsed = if self.screen {
            parse_screen(&text, self.symbols)
        } else {
            parse_level(&text, self.symbols)
        };
        parsed.map_err(|err| match err {
            EngineError::InvalidLevel(msg) => EngineError::InvalidLevel(format!("{}: {}", self.name, msg)),
            other => other,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{GoalCount, Position};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn both_symbol_sets_cover_every_tile_kind() {
        for symbols in [SymbolSet::Legacy, SymbolSet::Xsb] {
            for kind in TileKind::ALL {
                assert_eq!(symbols.tile(symbols.symbol(kind)), Some(kind), "{:?} {:?}", symbols, kind);
            }
        }
    }

    #[test]
    fn parse_keeps_jagged_rows_and_drops_surrounding_blank_lines() {
        let state = parse_level(
            r#"
#####
#8+@#
###
"#,
            SymbolSet::Legacy,
        )
        .unwrap();

        assert_eq!(state.grid().dimensions(), (3, vec![5, 5, 3]));
        assert_eq!(state.player(), Position::new(1, 1));
        assert_eq!(state.goal_count(), GoalCount::Active(1));
        assert_eq!(state.grid().get(Position::new(2, 4)), Void);
    }

    #[test]
    fn parse_xsb_matches_legacy() {
        let legacy = parse_level("#8+@#", SymbolSet::Legacy).unwrap();
        let xsb = parse_level("#@$.#", SymbolSet::Xsb).unwrap();
        assert_eq!(legacy, xsb);
    }

    #[test]
    fn unknown_symbol_is_invalid_level() {
        let err = parse_level("#8?#", SymbolSet::Legacy).unwrap_err();
        let EngineError::InvalidLevel(msg) = &err else {
            panic!("expected InvalidLevel, got {err:?}");
        };
        assert!(msg.contains("'?'"), "{msg}");
    }

    #[test]
    fn empty_text_is_invalid_level() {
        assert!(matches!(parse_level("\n\n", SymbolSet::Legacy), Err(EngineError::InvalidLevel(_))));
    }

    #[test]
    fn screen_needs_no_player() {
        let screen = parse_screen("#.#\n.#.", SymbolSet::Legacy).unwrap();
        assert!(!screen.is_active());
        assert_eq!(screen.goal_count(), GoalCount::Inactive);
    }

    #[test]
    fn render_writes_rows_back_out() {
        let text = "#8+@#\n#_!~#\n";
        let grid = parse_grid(text, SymbolSet::Legacy).unwrap();
        assert_eq!(render_grid_to_string(&grid, SymbolSet::Legacy), text);
        assert_eq!(render_grid_to_string(&grid, SymbolSet::Xsb), "#@$.#\n# *+#\n");
    }

    #[test]
    fn level_file_from_json() {
        let json = serde_json::json!({ "name": "tiny", "symbols": "xsb", "rows": ["#####", "#@$.#", "#####"] });
        let file = LevelFile::from_json_str(&json.to_string()).unwrap();
        assert_eq!(file.symbols, SymbolSet::Xsb);
        assert!(!file.screen);

        let state = file.to_state().unwrap();
        assert_eq!(state.player(), Position::new(1, 1));
        assert_eq!(state.goal_count(), GoalCount::Active(1));
    }

    #[test]
    fn level_file_errors_name_the_level() {
        let json = serde_json::json!({ "name": "broken", "rows": ["#_#"] });
        let file = LevelFile::from_json_str(&json.to_string()).unwrap();
        let err = file.to_state().unwrap_err();
        assert!(err.to_string().contains("broken"), "{err}");
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(LevelFile::from_json_str("{ nope"), Err(EngineError::Json(_))));
    }

    #[test]
    fn text_catalog_splits_on_blank_lines_and_takes_names_from_comments() {
        let text = "; First\n#####\n#8+@#\n#####\n\n\n#####\n#8+@#\n#####\n; 2\n\n; trailing note\n";
        let catalog = LevelFile::parse_text_catalog(text, SymbolSet::Legacy);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "First");
        assert_eq!(catalog[1].name, "2");
        assert_eq!(catalog[0].rows, vec!["#####", "#8+@#", "#####"]);
        for file in &catalog {
            assert_eq!(file.symbols, SymbolSet::Legacy);
            assert_eq!(file.to_state().unwrap().goal_count(), GoalCount::Active(1));
        }
    }

    #[test]
    fn text_catalog_names_unnamed_levels_by_position() {
        let catalog = LevelFile::parse_text_catalog("#####\n#@$.#\n#####\n\n#####\n# @ #\n#####\n", SymbolSet::Xsb);
        let names: Vec<&str> = catalog.iter().map(|file| file.name.as_str()).collect();
        assert_eq!(names, ["Level 1", "Level 2"]);
        assert_eq!(catalog[1].to_state().unwrap().player(), Position::new(1, 2));
    }

    #[test]
    fn level_file_loads_from_disk() {
        let file = LevelFile::from_state("one", &parse_level("#8+@#", SymbolSet::Legacy).unwrap(), SymbolSet::Xsb);
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(file.to_json_string().unwrap().as_bytes()).unwrap();

        assert_eq!(LevelFile::load(tmp.path()).unwrap(), file);
        assert!(matches!(LevelFile::load("does/not/exist.json"), Err(EngineError::Io(_))));
    }

    #[test]
    fn text_catalog_loads_from_disk() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(b"; Tiny\n#####\n#@$.#\n#####\n").unwrap();

        let catalog = LevelFile::load_text_catalog(tmp.path(), SymbolSet::Xsb).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "Tiny");
    }

    #[test]
    fn level_file_survives_json() {
        let state = parse_level("#8+@#", SymbolSet::Legacy).unwrap();
        let file = LevelFile::from_state("one", &state, SymbolSet::Legacy);
        let json = file.to_json_string().unwrap();
        assert_eq!(LevelFile::from_json_str(&json).unwrap().to_state().unwrap(), state);
    }
}
