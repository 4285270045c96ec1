//! List rules command implementation.

use gocheckstyle::go::Gofmt;
use gocheckstyle::rules::{all_rules, default_config};

/// Runs the list-rules command.
pub fn run() {
    let defaults = default_config();

    println!("Available rules:\n");
    println!("{:<14} {:<10} Description", "Tag", "Default");
    println!("{}", "-".repeat(72));

    for (tag, description) in all_rules(Box::new(Gofmt::new())).describe() {
        let default = match tag {
            gocheckstyle::RuleType::FileLine => defaults.file_line.to_string(),
            gocheckstyle::RuleType::FuncLine => defaults.func_line.to_string(),
            gocheckstyle::RuleType::ParamsNum => defaults.params_num.to_string(),
            gocheckstyle::RuleType::ResultsNum => defaults.results_num.to_string(),
            gocheckstyle::RuleType::Formated
            | gocheckstyle::RuleType::PkgName
            | gocheckstyle::RuleType::CamelName => "on".to_string(),
        };
        println!("{:<14} {default:<10} {description}", tag.as_str());
    }

    println!("\nSet a limit to 0 or a flag to false to disable a rule.");
    println!("List tags under \"fatal\" to fail the run on their problems, e.g.:");
    println!("  {{\"func_line\": 80, \"fatal\": [\"formated\", \"func_line\"]}}");
}
