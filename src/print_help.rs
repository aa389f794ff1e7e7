use crate::cli::HELP_FLAGS;
use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " WHISK ".yellow());
    println!("Usage:");
    println!("  {} [options] <instruction>", "whisk".bold().green());
    println!("\nOptions:");
    println!(
        "  {}   square, portrait or landscape (default).",
        "-a, --aspect <ratio>".bold().cyan()
    );
    println!(
        "  {}      Fixed seed, random when omitted.",
        "-s, --seed <n>".bold().cyan()
    );
    println!(
        "  {}   Image model (default R2I).",
        "-m, --model <name>".bold().cyan()
    );
    println!(
        "  {}      Directory for generated images.",
        "-o, --out <dir>".bold().cyan()
    );
    println!(
        "  {}   Subject media input.",
        "--subject <id>[:caption]".bold().magenta()
    );
    println!(
        "  {}     Scene media input.",
        "--scene <id>[:caption]".bold().magenta()
    );
    println!(
        "  {}     Style media input.",
        "--style <id>[:caption]".bold().magenta()
    );
    println!(
        "  {}   Display this help message.",
        HELP_FLAGS.join(", ").bold().blue()
    );
    println!(
        "  {}                   End of options, the rest is the instruction.",
        "--".bold().blue()
    );
    println!("\nEnvironment:");
    println!("  {}  Bearer token (required).", "WHISK_BEARER_TOKEN".bold().red());
    println!("  {}       Endpoint override.", "WHISK_API_URL".bold());
    println!("  {}    Default output directory.", "WHISK_OUTPUT_DIR".bold());
    println!("  {}  Request timeout in seconds (120).", "WHISK_TIMEOUT_SECS".bold());
    println!("\nExamples:");
    println!(
        "  {} An astronaut on Mars in a rusty spacesuit holding a crab",
        "whisk".bold().green()
    );
    println!(
        "  {} CAMaJDk1:a ginger cat {} CAMaJGY2 put it on a beach",
        "whisk -a square --subject".bold().green(),
        "--scene".bold().green()
    );
    println!("{:━^60}", "".yellow());
}
