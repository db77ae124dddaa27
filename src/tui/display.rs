//! 终端输出模块
//!
//! 非交互输出：类型目录与完成的配置。

use crate::Result;
use crate::catalog::TypeCatalog;
use crate::wizard::InputConfiguration;
use rust_i18n::t;

const RULE_WIDTH: usize = 60;

/// 类型目录文本
pub fn format_catalog(catalog: &TypeCatalog) -> String {
    let mut out = format!("{}\n{}\n", t!("catalog_heading"), "─".repeat(RULE_WIDTH));
    for descriptor in catalog.list() {
        out.push_str(&format!(
            "  {:<10} {:<10} {}\n",
            descriptor.id,
            descriptor.display_name,
            descriptor.property_names.join(", ")
        ));
    }
    out
}

/// 完成配置的文本形式；空值显示为 `empty_value_text`
pub fn format_configuration(config: &InputConfiguration, empty_value_text: &str) -> String {
    let rule = "═".repeat(RULE_WIDTH);
    let mut out = format!(
        "{rule}\n{:^width$}\n{rule}\n  {}\n  {}\n",
        t!("configuration_heading"),
        t!("preview_type", name = config.display_name),
        "─".repeat(40),
        width = RULE_WIDTH,
    );
    for entry in &config.properties {
        let value = if entry.is_empty() {
            empty_value_text
        } else {
            entry.value.as_str()
        };
        out.push_str(&format!("    {}: {}\n", entry.name, value));
    }
    out
}

/// 完成配置的 JSON 形式
pub fn configuration_json(config: &InputConfiguration) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// 打印类型目录
pub fn print_catalog(catalog: &TypeCatalog) {
    print!("{}", format_catalog(catalog));
}

/// 打印完成的配置
pub fn print_configuration(
    config: Option<&InputConfiguration>,
    empty_value_text: &str,
    json: bool,
) -> Result<()> {
    match config {
        Some(config) if json => println!("{}", configuration_json(config)?),
        Some(config) => print!("{}", format_configuration(config, empty_value_text)),
        None if json => println!("null"),
        None => println!("{}", t!("no_configuration")),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardController;

    fn finished_numeric() -> InputConfiguration {
        let mut wizard = WizardController::default();
        wizard.open();
        wizard.select_type("numeric").unwrap();
        wizard.next();
        wizard.set_property_value("label", "Age").unwrap();
        wizard.set_property_value("min", "0").unwrap();
        wizard.next();
        wizard.configuration().unwrap()
    }

    #[test]
    fn test_format_catalog_lists_every_type() {
        let text = format_catalog(&TypeCatalog::builtin());
        for id in ["text", "numeric", "datetime", "checkbox", "radio", "dropdown", "popup"] {
            assert!(text.contains(id), "missing {id}");
        }
        assert!(text.contains("minLength"));
    }

    #[test]
    fn test_format_configuration_uses_placeholder() {
        let text = format_configuration(&finished_numeric(), "Not set");
        assert!(text.contains("Type: Numeric"));
        assert!(text.contains("label: Age"));
        assert!(text.contains("min: 0"));
        assert!(text.contains("max: Not set"));
    }

    #[test]
    fn test_format_configuration_layout() {
        let text = format_configuration(&finished_numeric(), "Not set");
        let lines: Vec<&str> = text.lines().collect();
        let rule = "═".repeat(RULE_WIDTH);
        assert_eq!(lines[0], rule);
        assert!(lines[1].contains("Finished input configuration"));
        assert_eq!(lines[2], rule);
        // header, type, separator, then one line per property
        assert_eq!(lines.len(), 5 + 6);
        assert!(text.ends_with("step: Not set\n"));
    }

    #[test]
    fn test_configuration_json() {
        let json = configuration_json(&finished_numeric()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type_id"], "numeric");
        assert_eq!(value["display_name"], "Numeric");
        assert_eq!(value["properties"][0]["name"], "label");
        assert_eq!(value["properties"][0]["value"], "Age");
        assert_eq!(value["properties"][2]["value"], "");
    }
}
