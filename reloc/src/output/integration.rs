//! Shell integration snippets printed by `reloc init`.
//!
//! Each snippet defines two functions:
//!
//! - `rcd`: runs `reloc go --emit <shell>` and evaluates its output, so the
//!   shell itself changes directory and picks up `r`/`rr`
//! - `rq`: runs `reloc query --update-state --emit <shell>` and evaluates
//!   its output, updating `rp`/`r1`/`r2`
//!
//! Both preserve `reloc`'s exit status, so the advisory code survives.

use super::ShellType;

const POSIX: &str = r#"# reloc shell integration ({shell})
rcd() {
    local __reloc_out __reloc_status
    __reloc_out="$(command reloc go --emit {shell} "$@")"
    __reloc_status=$?
    [ -n "$__reloc_out" ] && eval "$__reloc_out"
    return $__reloc_status
}

rq() {
    local __reloc_out __reloc_status
    __reloc_out="$(command reloc query --update-state --emit {shell} "$@")"
    __reloc_status=$?
    [ -n "$__reloc_out" ] && eval "$__reloc_out"
    return $__reloc_status
}
"#;

const FISH: &str = r#"# reloc shell integration (fish)
function rcd
    set -l __reloc_out (command reloc go --emit fish $argv | string collect)
    set -l __reloc_status $pipestatus[1]
    test -n "$__reloc_out"; and printf '%s\n' $__reloc_out | source
    return $__reloc_status
end

function rq
    set -l __reloc_out (command reloc query --update-state --emit fish $argv | string collect)
    set -l __reloc_status $pipestatus[1]
    test -n "$__reloc_out"; and printf '%s\n' $__reloc_out | source
    return $__reloc_status
end
"#;

const POWERSHELL: &str = r#"# reloc shell integration (powershell)
function rcd {
    $relocOut = & reloc go --emit powershell @args
    $relocStatus = $LASTEXITCODE
    if ($relocOut) { Invoke-Expression ($relocOut -join "`n") }
    $global:LASTEXITCODE = $relocStatus
}

function rq {
    $relocOut = & reloc query --update-state --emit powershell @args
    $relocStatus = $LASTEXITCODE
    if ($relocOut) { Invoke-Expression ($relocOut -join "`n") }
    $global:LASTEXITCODE = $relocStatus
}
"#;

/// The integration snippet for `shell`.
///
/// # Examples
///
/// ```
/// use reloc::output::{integration, ShellType};
///
/// let snippet = integration(ShellType::Zsh);
/// assert!(snippet.contains("rcd()"));
/// assert!(snippet.contains("--emit zsh"));
/// ```
#[must_use]
pub fn integration(shell: ShellType) -> String {
    match shell {
        ShellType::Bash | ShellType::Zsh => POSIX.replace("{shell}", &shell.to_string()),
        ShellType::Fish => FISH.to_string(),
        ShellType::PowerShell => POWERSHELL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shell_defines_both_functions() {
        for shell in [
            ShellType::Bash,
            ShellType::Zsh,
            ShellType::Fish,
            ShellType::PowerShell,
        ] {
            let snippet = integration(shell);
            assert!(snippet.contains("rcd"), "{shell}");
            assert!(snippet.contains("rq"), "{shell}");
            assert!(snippet.contains(&format!("--emit {shell}")), "{shell}");
        }
    }

    #[test]
    fn test_posix_placeholder_filled() {
        assert!(!integration(ShellType::Bash).contains("{shell}"));
    }
}
