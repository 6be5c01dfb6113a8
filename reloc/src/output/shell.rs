//! Shell detection, quoting and statement formatting.

use std::env;
use std::fmt;

use clap::ValueEnum;

/// Supported shell types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShellType {
    /// Bourne Again Shell (bash), also used for plain `sh`.
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell", alias = "pwsh")]
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` environment variable (path like `/bin/bash`)
    /// 5. Default to bash if unable to determine
    #[must_use]
    pub fn detect() -> Self {
        if env::var("ZSH_VERSION").is_ok() {
            return Self::Zsh;
        }
        if env::var("FISH_VERSION").is_ok() {
            return Self::Fish;
        }
        if env::var("PSModulePath").is_ok() {
            return Self::PowerShell;
        }

        match env::var("SHELL") {
            Ok(shell_path) if shell_path.contains("zsh") => Self::Zsh,
            Ok(shell_path) if shell_path.contains("fish") => Self::Fish,
            Ok(shell_path) if shell_path.contains("pwsh") || shell_path.contains("powershell") => {
                Self::PowerShell
            }
            _ => Self::Bash,
        }
    }

    /// Quote `value` as a single literal word for this shell.
    ///
    /// # Examples
    ///
    /// ```
    /// use reloc::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.quote("/srv/it's"), r"'/srv/it'\''s'");
    /// assert_eq!(ShellType::Fish.quote("/srv/it's"), r"'/srv/it\'s'");
    /// assert_eq!(ShellType::PowerShell.quote("/srv/it's"), "'/srv/it''s'");
    /// ```
    #[must_use]
    pub fn quote(&self, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("'{}'", value.replace('\'', r"'\''")),
            Self::Fish => format!(
                "'{}'",
                value.replace('\\', r"\\").replace('\'', r"\'")
            ),
            Self::PowerShell => format!("'{}'", value.replace('\'', "''")),
        }
    }

    /// Format an export statement for this shell type.
    ///
    /// # Examples
    ///
    /// ```
    /// use reloc::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.format_export("r", "/src"), "export r='/src'");
    /// assert_eq!(ShellType::Fish.format_export("r", "/src"), "set -gx r '/src'");
    /// assert_eq!(ShellType::PowerShell.format_export("r", "/src"), "$env:r = '/src'");
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        let quoted = self.quote(value);
        match self {
            Self::Bash | Self::Zsh => format!("export {var}={quoted}"),
            Self::Fish => format!("set -gx {var} {quoted}"),
            Self::PowerShell => format!("$env:{var} = {quoted}"),
        }
    }

    /// Format a statement removing `var` from the environment.
    #[must_use]
    pub fn format_unset(&self, var: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("unset {var}"),
            Self::Fish => format!("set -e {var}"),
            Self::PowerShell => format!("Remove-Item Env:{var} -ErrorAction SilentlyContinue"),
        }
    }

    /// Format a change-directory statement.
    #[must_use]
    pub fn format_cd(&self, dir: &str) -> String {
        let quoted = self.quote(dir);
        match self {
            Self::Bash | Self::Zsh => format!("cd -- {quoted}"),
            Self::Fish => format!("cd {quoted}"),
            Self::PowerShell => format!("Set-Location -LiteralPath {quoted}"),
        }
    }

    /// Format a statement printing `line` on standard output.
    #[must_use]
    pub fn format_print(&self, line: &str) -> String {
        let quoted = self.quote(line);
        match self {
            Self::Bash | Self::Zsh | Self::Fish => format!("printf '%s\\n' {quoted}"),
            Self::PowerShell => format!("Write-Output {quoted}"),
        }
    }
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bash => write!(f, "bash"),
            Self::Zsh => write!(f, "zsh"),
            Self::Fish => write!(f, "fish"),
            Self::PowerShell => write!(f, "powershell"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_names() {
        assert_eq!(ShellType::from_str("bash", false), Ok(ShellType::Bash));
        assert_eq!(ShellType::from_str("Zsh", true), Ok(ShellType::Zsh));
        assert_eq!(ShellType::from_str("pwsh", false), Ok(ShellType::PowerShell));
        assert_eq!(
            ShellType::from_str("powershell", false),
            Ok(ShellType::PowerShell)
        );
        assert!(ShellType::from_str("tcsh", false).is_err());
    }

    #[test]
    fn test_quote_plain() {
        assert_eq!(ShellType::Zsh.quote("/a b"), "'/a b'");
        assert_eq!(ShellType::Fish.quote(r"/a\b"), r"'/a\\b'");
    }

    #[test]
    fn test_format_cd() {
        assert_eq!(ShellType::Bash.format_cd("/x y"), "cd -- '/x y'");
        assert_eq!(ShellType::Fish.format_cd("/x"), "cd '/x'");
        assert_eq!(
            ShellType::PowerShell.format_cd("/x"),
            "Set-Location -LiteralPath '/x'"
        );
    }

    #[test]
    fn test_format_unset() {
        assert_eq!(ShellType::Bash.format_unset("rp"), "unset rp");
        assert_eq!(ShellType::Fish.format_unset("rp"), "set -e rp");
    }

    #[test]
    fn test_format_print() {
        assert_eq!(ShellType::Bash.format_print("/x"), r"printf '%s\n' '/x'");
        assert_eq!(ShellType::PowerShell.format_print("/x"), "Write-Output '/x'");
    }

    #[test]
    fn test_value_enum_names() {
        assert_eq!(
            ShellType::from_str("powershell", true).unwrap(),
            ShellType::PowerShell
        );
        assert_eq!(ShellType::from_str("pwsh", true).unwrap(), ShellType::PowerShell);
        assert_eq!(ShellType::from_str("fish", true).unwrap(), ShellType::Fish);
    }

    #[test]
    fn test_display_matches_value_names() {
        for shell in ShellType::value_variants() {
            assert_eq!(
                ShellType::from_str(&shell.to_string(), false).unwrap(),
                *shell
            );
        }
    }
}
