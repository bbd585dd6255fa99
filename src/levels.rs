//! XSB level loading for the demo binary. Caller-side scaffolding, not part
//! of the solving core (spec §1 explicitly places level-file parsing outside
//! the core's scope) — this module exists only so `main.rs` has something to
//! hand to `solve`.

use crate::error::LevelError;
use crate::split_xsb;
use std::fs;

/// One parsed level: board dimensions plus the two grids `solve` expects.
pub struct Level {
    pub width: usize,
    pub height: usize,
    pub map_data: Vec<String>,
    pub items_data: Vec<String>,
}

impl Level {
    pub fn map_refs(&self) -> Vec<&str> {
        self.map_data.iter().map(|s| s.as_str()).collect()
    }

    pub fn items_refs(&self) -> Vec<&str> {
        self.items_data.iter().map(|s| s.as_str()).collect()
    }
}

/// A collection of Sokoban levels parsed from XSB-formatted text.
pub struct Levels {
    levels: Vec<Level>,
}

impl Levels {
    /// Parse XSB-formatted levels from a string.
    ///
    /// The XSB format uses:
    /// - Lines starting with `;` as level separators/comments
    /// - Blank lines between levels (optional)
    /// - Standard Sokoban characters (`#`, `@`, `$`, `.`, `*`, `+`, space)
    pub fn from_text(contents: &str) -> Result<Self, LevelError> {
        let mut levels = Vec::new();
        let mut current_level = String::new();

        let mut flush = |current_level: &mut String, levels: &mut Vec<Level>| {
            if current_level.is_empty() {
                return;
            }
            let text = current_level.trim_end();
            let (width, height, map_data, items_data) = split_xsb(text);
            levels.push(Level {
                width,
                height,
                map_data,
                items_data,
            });
            current_level.clear();
        };

        for line in contents.lines() {
            if line.trim_start().starts_with(';') {
                flush(&mut current_level, &mut levels);
                continue;
            }
            if line.is_empty() {
                flush(&mut current_level, &mut levels);
                continue;
            }
            current_level.push_str(line);
            current_level.push('\n');
        }
        flush(&mut current_level, &mut levels);

        Ok(Levels { levels })
    }

    /// Parse XSB-formatted levels from a text file.
    pub fn from_file(path: &str) -> Result<Self, LevelError> {
        let contents = fs::read_to_string(path)?;
        Self::from_text(&contents)
    }

    /// Get the nth level (0-indexed).
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
