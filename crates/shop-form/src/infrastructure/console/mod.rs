//! Line-based console driver for the form engine.
//!
//! The `shop-form` binary has no UI: it reads one command per line from
//! stdin, turns it into a [`FormInput`], and prints every [`FormEvent`] the
//! engine publishes.  This module holds the parsing and rendering so they can
//! be tested without a terminal.
//!
//! | Command              | Effect                                   |
//! |----------------------|------------------------------------------|
//! | `shop <text>`        | shop-name field changed                  |
//! | `domain <text>`      | domain-name field changed                |
//! | `city <id>`          | city picked from the catalog             |
//! | `city none`          | city picker cancelled                    |
//! | `postal-open`        | postal-code picker requested             |
//! | `postal <code>`      | postal code picked                       |
//! | `postal none`        | postal-code picker closed without a code |
//! | `cities`             | list the catalog                         |
//! | `state`              | print the current form state as JSON     |
//! | `help`               | print this table                         |
//! | `quit`               | end the session                          |
//!
//! Text arguments are taken verbatim after the first space, so
//! `shop  padded ` sets the shop name to `" padded "`.

use serde::Serialize;
use thiserror::Error;

use crate::application::events::{FormEvent, FormInput};
use crate::infrastructure::storage::config::CatalogConfig;

/// Help text printed by the `help` command.
pub const HELP: &str = "\
commands:
  shop <text>      type a shop name
  domain <text>    type a domain name
  city <id|none>   pick a city, or cancel the picker
  postal-open      open the postal-code picker
  postal <code|none>
                   pick a postal code, or close the picker
  cities           list selectable cities
  state            print the current form state
  help             show this help
  quit             end the session";

/// Error type for unparseable console lines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("no city with id {0} (try `cities`)")]
    UnknownCity(String),
}

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Forward to the engine.
    Input(FormInput),
    ListCities,
    /// Print a snapshot of the form state.
    State,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

/// How events are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `field: value` lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Parses one console line.
///
/// # Errors
///
/// Returns a [`ConsoleError`] for unknown commands, missing arguments, or
/// city ids that are not in `catalog`.
pub fn parse_command(line: &str, catalog: &CatalogConfig) -> Result<ConsoleCommand, ConsoleError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(ConsoleCommand::Nothing);
    }

    let (verb, arg) = match line.split_once(' ') {
        Some((verb, arg)) => (verb, Some(arg)),
        None => (line, None),
    };

    let command = match verb {
        // Text fields accept an empty argument: `shop ` clears the name.
        "shop" => ConsoleCommand::Input(FormInput::ShopNameChanged(
            arg.unwrap_or_default().to_string(),
        )),
        "domain" => ConsoleCommand::Input(FormInput::DomainNameChanged(
            arg.unwrap_or_default().to_string(),
        )),
        "city" => {
            let id = arg.map(str::trim).ok_or(ConsoleError::MissingArgument("city"))?;
            let city = if id == "none" {
                None
            } else {
                let city = catalog
                    .find_city(id)
                    .ok_or_else(|| ConsoleError::UnknownCity(id.to_string()))?;
                Some(city.clone())
            };
            ConsoleCommand::Input(FormInput::CitySelected(city))
        }
        "postal-open" => ConsoleCommand::Input(FormInput::PostalCodeRequested),
        "postal" => {
            let code = arg
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .ok_or(ConsoleError::MissingArgument("postal"))?;
            let value = (code != "none").then(|| code.to_string());
            ConsoleCommand::Input(FormInput::PostalCodeChanged(value))
        }
        "cities" => ConsoleCommand::ListCities,
        "state" => ConsoleCommand::State,
        "help" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(ConsoleError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

/// Renders one event in the requested format.
///
/// # Errors
///
/// Returns the `serde_json` error if JSON serialization fails.
pub fn render_event(event: &FormEvent, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(event),
        OutputFormat::Text => Ok(match event {
            FormEvent::ShopNameValue(v) => format!("shop name: {v:?}"),
            FormEvent::ShopNameError(m) => format!("shop name error: {m}"),
            FormEvent::ShopNameErrorHidden(h) => format!("shop name error hidden: {h}"),
            FormEvent::DomainNameValue(v) => format!("domain name: {v:?}"),
            FormEvent::DomainNameError(Some(m)) => format!("domain name error: {m}"),
            FormEvent::DomainNameError(None) => "domain name error: none".to_string(),
            FormEvent::DomainErrorHidden(h) => format!("domain name error hidden: {h}"),
            FormEvent::City(c) => format!("city: {} ({})", c.name, c.id),
            FormEvent::CityError(m) => format!("city error: {m}"),
            FormEvent::CityErrorHidden(h) => format!("city error hidden: {h}"),
            FormEvent::PostalCode(v) => format!("postal code: {v}"),
            FormEvent::PostalErrorHidden(h) => format!("postal error hidden: {h}"),
        }),
    }
}

/// Renders any serializable summary (e.g. the final form state).
///
/// # Errors
///
/// Returns the `serde_json` error if serialization fails.
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::form_state::FormState;
    use shop_core::City;

    fn catalog() -> CatalogConfig {
        CatalogConfig::default()
    }

    // ── Parsing ───────────────────────────────────────────────────────────────

    #[test]
    fn test_shop_command_keeps_argument_verbatim() {
        assert_eq!(
            parse_command("shop  padded ", &catalog()),
            Ok(ConsoleCommand::Input(FormInput::ShopNameChanged(
                " padded ".to_string()
            )))
        );
    }

    #[test]
    fn test_bare_shop_command_clears_the_name() {
        assert_eq!(
            parse_command("shop", &catalog()),
            Ok(ConsoleCommand::Input(FormInput::ShopNameChanged(String::new())))
        );
    }

    #[test]
    fn test_city_command_resolves_catalog_entry() {
        assert_eq!(
            parse_command("city 2", &catalog()),
            Ok(ConsoleCommand::Input(FormInput::CitySelected(Some(
                City::jakarta()
            ))))
        );
    }

    #[test]
    fn test_city_none_cancels_picker() {
        assert_eq!(
            parse_command("city none", &catalog()),
            Ok(ConsoleCommand::Input(FormInput::CitySelected(None)))
        );
    }

    #[test]
    fn test_unknown_city_is_rejected() {
        assert_eq!(
            parse_command("city 42", &catalog()),
            Err(ConsoleError::UnknownCity("42".to_string()))
        );
    }

    #[test]
    fn test_postal_commands() {
        assert_eq!(
            parse_command("postal 4444", &catalog()),
            Ok(ConsoleCommand::Input(FormInput::PostalCodeChanged(Some(
                "4444".to_string()
            ))))
        );
        assert_eq!(
            parse_command("postal none", &catalog()),
            Ok(ConsoleCommand::Input(FormInput::PostalCodeChanged(None)))
        );
        assert_eq!(
            parse_command("postal-open", &catalog()),
            Ok(ConsoleCommand::Input(FormInput::PostalCodeRequested))
        );
        assert_eq!(
            parse_command("postal", &catalog()),
            Err(ConsoleError::MissingArgument("postal"))
        );
    }

    #[test]
    fn test_state_command() {
        assert_eq!(parse_command("state", &catalog()), Ok(ConsoleCommand::State));
        assert_eq!(parse_command("state\r\n", &catalog()), Ok(ConsoleCommand::State));
    }

    #[test]
    fn test_blank_line_and_unknown_verb() {
        assert_eq!(parse_command("   ", &catalog()), Ok(ConsoleCommand::Nothing));
        assert_eq!(
            parse_command("submit", &catalog()),
            Err(ConsoleError::UnknownCommand("submit".to_string()))
        );
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    #[test]
    fn test_text_rendering_quotes_field_values() {
        let line = render_event(
            &FormEvent::ShopNameValue("shop ".to_string()),
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(line, r#"shop name: "shop ""#);
    }

    #[test]
    fn test_state_snapshot_renders_as_json() {
        // Arrange
        let state = FormState {
            shop_name: "asdf".to_string(),
            ..FormState::default()
        };

        // Act
        let compact = render_json(&state, false).unwrap();
        let pretty = render_json(&state, true).unwrap();

        // Assert
        assert!(compact.contains(r#""shop_name":"asdf""#));
        assert!(compact.contains(r#""domain_name_checked":false"#));
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_json_rendering_is_single_line() {
        let line = render_event(&FormEvent::PostalErrorHidden(true), OutputFormat::Json).unwrap();
        assert_eq!(line, r#"{"event":"postal_error_hidden","value":true}"#);
    }
}
