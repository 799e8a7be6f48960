//! Built-in levels and screens, in legacy symbols.

use crate::config::LevelsConfig;
use crate::core::{EngineError, PuzzleState, Result};
use crate::level::{LevelFile, SymbolSet, parse_level, parse_screen};

const TITLE_SCREEN: &str = r#"
+++.+++.+.+.+++
+...+.+.+.+.+.+
+++.+.+.++..+.+
..+.+.+.+.+.+.+
+++.+++.+.+.+++
...............
..###..#..###..
..#.#.#.#.#.#..
..##..###.#.#..
..#.#.#.#.#.#..
..###.#.#.#.#..
"#;

const WIN_SCREEN: &str = r#"
#...#.###.#..#.#
#...#..#..#..#.#
#...#..#..##.#.#
#.#.#..#..#.##.#
##.##..#..#..#..
#...#.###.#..#.#
"#;

pub const LEVELS: [(&str, &str); 5] = [
    (
        "Level 1",
        r#"
..#####.
###___#.
#@8+__#.
###_+@#.
#@##+_#.
#_#_@_##
#+_!++@#
#___@__#
########
"#,
    ),
    (
        "Level 2",
        r#"
....#####.............
....#___#.............
....#+__#.............
..###__+###...........
..#__+__+_#...........
###_#_###_#.....######
#___#_###_#######__@@#
#_+__+_____________@@#
#####_####_#8####__@@#
....#______###..######
....########..........
"#,
    ),
    (
        "Level 3",
        r#"
############..
#@@__#_____###
#@@__#_+__+__#
#@@__#+####__#
#@@____8_##__#
#@@__#_#__+_##
######_##+_+_#
..#_+__+_+_+_#
..#____#_____#
..############
"#,
    ),
    (
        "Level 4",
        r#"
........########.
........#_____8#.
........#_+#+_##.
........#_+__+#..
........##+_+_#..
#########_+_#_###
#@@@@__##_+__+__#
##@@@____+__+___#
#@@@@__##########
########.........
"#,
    ),
    (
        "Level 5",
        r#"
..............########
..............#__@@@@#
...############__@@@@#
...#____#__+_+___@@@@#
...#_+++#+__+_#__@@@@#
...#__+_____+_#__@@@@#
...#_++_#+_+_+########
####__+_#_____#.......
#___#_#########.......
#____+__##............
#_++#++_8#............
#___#___##............
#########.............
"#,
    ),
];

pub fn title_screen() -> Result<PuzzleState> {
    parse_screen(TITLE_SCREEN, SymbolSet::Legacy)
}

pub fn win_screen() -> Result<PuzzleState> {
    parse_screen(WIN_SCREEN, SymbolSet::Legacy)
}

/// `number` counts from 1, as on the menu.
pub fn level(number: usize) -> Option<Result<PuzzleState>> {
    let index = number.checked_sub(1)?;
    LEVELS
        .get(index)
        .map(|&(_, rows)| parse_level(rows, SymbolSet::Legacy))
}

pub fn catalog() -> Vec<LevelFile> {
    LEVELS
        .iter()
        .map(|&(name, rows)| LevelFile {
            name: name.to_string(),
            symbols: SymbolSet::Legacy,
            rows: rows.trim_matches('\n').lines().map(str::to_string).collect(),
            screen: false,
        })
        .collect()
}

/// The configured catalog: a `.json` file holds `LevelFile`s, any other file
/// is plain text in `config.symbols`. Without a file, the built-in levels.
pub fn load_catalog(config: &LevelsConfig) -> Result<Vec<LevelFile>> {
    let Some(path) = &config.file else {
        return Ok(catalog());
    };
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let catalog = if is_json {
        LevelFile::load_catalog(path)?
    } else {
        LevelFile::load_text_catalog(path, config.symbols)?
    };
    if catalog.is_empty() {
        return Err(EngineError::InvalidLevel(format!("no levels in {}", path.display())));
    }
    Ok(catalog)
}
