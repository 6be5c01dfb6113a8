//! Shell-facing output.
//!
//! A child process cannot change its parent shell's directory or
//! environment. Instead, `reloc` can print a short script that the shell
//! integration evaluates: a `cd`, the changed navigation variables, and the
//! resulting path. [`ShellScript`] builds such scripts; [`integration`]
//! renders the wrapper functions that evaluate them.

mod integration;
mod shell;

use std::path::Path;

use crate::navigation::NavigationState;

pub use integration::integration;
pub use shell::ShellType;

/// Statements to be evaluated by the calling shell.
///
/// # Examples
///
/// ```
/// use reloc::output::{ShellScript, ShellType};
/// use reloc::NavigationState;
/// use std::path::Path;
///
/// let before = NavigationState::default();
/// let mut after = before.clone();
/// after.apply_navigate_update("/a", "/b");
///
/// let script = ShellScript::new(ShellType::Bash)
///     .cd(Path::new("/b"))
///     .state_changes(&after, &before)
///     .print(Path::new("/b"))
///     .render();
/// assert_eq!(
///     script,
///     "cd -- '/b'\nexport r='/b'\nexport rr='/a'\nprintf '%s\\n' '/b'\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ShellScript {
    shell: ShellType,
    lines: Vec<String>,
}

impl ShellScript {
    /// Starts an empty script for `shell`.
    #[must_use]
    pub fn new(shell: ShellType) -> Self {
        Self {
            shell,
            lines: Vec::new(),
        }
    }

    /// Adds a change-directory statement.
    #[must_use]
    pub fn cd(mut self, dir: &Path) -> Self {
        self.lines.push(self.shell.format_cd(&dir.to_string_lossy()));
        self
    }

    /// Adds exports (or unsets) for every slot that differs from `before`.
    #[must_use]
    pub fn state_changes(mut self, after: &NavigationState, before: &NavigationState) -> Self {
        for (var, value) in after.changes_since(before) {
            let line = match value {
                Some(path) => self.shell.format_export(var, &path.to_string_lossy()),
                None => self.shell.format_unset(var),
            };
            self.lines.push(line);
        }
        self
    }

    /// Adds exports for every set slot.
    #[must_use]
    pub fn state(mut self, state: &NavigationState) -> Self {
        for (var, path) in state.exports() {
            self.lines
                .push(self.shell.format_export(var, &path.to_string_lossy()));
        }
        self
    }

    /// Adds a statement printing `path`.
    #[must_use]
    pub fn print(mut self, path: &Path) -> Self {
        self.lines
            .push(self.shell.format_print(&path.to_string_lossy()));
        self
    }

    /// Whether no statements were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The script text, one statement per line.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }
}
