//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - step-through statevector simulator",
        style("QStep").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qstep-ir   Circuit representation");
    println!("  qstep-dsl  Circuit language parser and emitter");
    println!("  qstep-sim  Statevector kernels and stepwise executor");
    println!("  qstep-cli  Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/qstep-dev/qstep").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
