//! Toggle command catalog
//!
//! The built-in marker set plus commands generated from configured
//! custom tags.

use crate::config::Config;
use crate::marker::MarkerSpec;

/// A named, invocable toggle bound to one marker pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleCommand {
    pub id: String,
    pub name: String,
    pub spec: MarkerSpec,
}

impl ToggleCommand {
    fn new(id: &str, name: &str, spec: MarkerSpec) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            spec,
        }
    }
}

/// The built-in toggle commands, in registration order
pub fn builtin_commands() -> Vec<ToggleCommand> {
    vec![
        ToggleCommand::new("highlight", "Toggle Highlight", MarkerSpec::new("==", "==")),
        ToggleCommand::new(
            "faint",
            "Toggle Faint Text",
            MarkerSpec::new("<span class=\"faint-text\">", "</span>")
                .with_identifying_substring("<span class"),
        ),
        ToggleCommand::new("orange", "Toggle 🟠", MarkerSpec::new("🟠 ", "")),
        ToggleCommand::new("red", "Toggle 🔴", MarkerSpec::new("🔴 ", "")),
        ToggleCommand::new("green", "Toggle 🟢", MarkerSpec::new("🟢 ", "")),
    ]
}

/// Built-in commands followed by one prefix-toggle per configured
/// custom tag, preserving config order
pub fn commands_for(config: &Config) -> Vec<ToggleCommand> {
    let mut commands = builtin_commands();
    for (idx, tag) in config.custom_tags.iter().enumerate() {
        commands.push(ToggleCommand::new(
            &format!("custom-{idx}"),
            &format!("Toggle {tag}"),
            MarkerSpec::new(format!("{tag} "), ""),
        ));
    }
    commands
}

/// Look up a command by id
pub fn find_command<'a>(commands: &'a [ToggleCommand], id: &str) -> Option<&'a ToggleCommand> {
    commands.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order() {
        let ids: Vec<_> = builtin_commands().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["highlight", "faint", "orange", "red", "green"]);
    }

    #[test]
    fn test_highlight_spec() {
        let commands = builtin_commands();
        let cmd = find_command(&commands, "highlight").unwrap();
        assert_eq!(cmd.spec, MarkerSpec::new("==", "=="));
    }

    #[test]
    fn test_faint_uses_identifying_substring() {
        let commands = builtin_commands();
        let cmd = find_command(&commands, "faint").unwrap();
        assert_eq!(cmd.spec.identifying_substring.as_deref(), Some("<span class"));
    }

    #[test]
    fn test_custom_tags_appended_in_order() {
        let config = Config {
            custom_tags: vec!["⭐".to_string(), "TODO:".to_string()],
            ..Default::default()
        };
        let commands = commands_for(&config);
        let builtin_len = builtin_commands().len();

        assert_eq!(commands.len(), builtin_len + 2);
        assert_eq!(commands[builtin_len].id, "custom-0");
        assert_eq!(commands[builtin_len].spec, MarkerSpec::new("⭐ ", ""));
        assert_eq!(commands[builtin_len + 1].id, "custom-1");
        assert_eq!(commands[builtin_len + 1].spec, MarkerSpec::new("TODO: ", ""));
    }

    #[test]
    fn test_find_unknown_command() {
        let commands = builtin_commands();
        assert!(find_command(&commands, "nope").is_none());
    }
}
