use is_terminal::IsTerminal;

/// Set by Xcode for every build phase script
const XCODE_VAR: &str = "XCODE_VERSION_ACTUAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub is_github_actions: bool,
    pub is_xcode: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    from_env(
        |key| std::env::var(key).ok(),
        std::io::stderr().is_terminal(),
    )
}

fn from_env(get_env: impl Fn(&str) -> Option<String>, stderr_is_tty: bool) -> TerminalCapabilities {
    let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    let is_xcode = get_env(XCODE_VAR).is_some();

    TerminalCapabilities {
        // Xcode's build log shows escape codes verbatim
        supports_color: stderr_is_tty && !dumb && !is_xcode && get_env("NO_COLOR").is_none(),
        is_github_actions: get_env("GITHUB_ACTIONS").is_some(),
        is_xcode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(vars: &[(&str, &str)], tty: bool) -> TerminalCapabilities {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        from_env(
            |key| vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()),
            tty,
        )
    }

    #[test]
    fn color_on_plain_tty() {
        assert!(caps(&[("TERM", "xterm-256color")], true).supports_color);
    }

    #[test]
    fn no_color_wins() {
        assert!(!caps(&[("NO_COLOR", "1")], true).supports_color);
    }

    #[test]
    fn no_color_when_piped_or_dumb() {
        assert!(!caps(&[], false).supports_color);
        assert!(!caps(&[("TERM", "dumb")], true).supports_color);
    }

    #[test]
    fn github_actions_detected() {
        let c = caps(&[("GITHUB_ACTIONS", "true")], false);
        assert!(c.is_github_actions);
        assert!(!c.is_xcode);
    }

    #[test]
    fn xcode_build_phase_disables_color() {
        let c = caps(&[("XCODE_VERSION_ACTUAL", "1600")], true);
        assert!(c.is_xcode);
        assert!(!c.supports_color);
    }
}
