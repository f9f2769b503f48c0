mod accumulate;
mod fmt;
mod parse;
mod stats;
mod triangle;

use anyhow::{bail, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--help" || a == "-h")
        || args.first().map(|s| s.as_str()) == Some("help")
    {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--no-color") {
        fmt::disable_color();
    }

    match args.first().map(|s| s.as_str()) {
        Some("triangle") => triangle::run(&args[1..]),
        _ => accumulate::run(parse_run_args(&args)?).await,
    }
}

fn parse_run_args(args: &[String]) -> Result<accumulate::RunArgs> {
    let mut out = accumulate::RunArgs::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--every" => {
                let Some(n) = args.get(i + 1).and_then(|s| s.parse::<usize>().ok()) else {
                    bail!("--every takes a line count");
                };
                if n == 0 {
                    bail!("--every must be at least 1");
                }
                out.every = n;
                i += 1;
            }
            "--json" => out.json = true,
            _ => {}
        }
        i += 1;
    }
    Ok(out)
}

fn print_help() {
    println!("logtally {}", env!("CARGO_PKG_VERSION"));
    println!("Summarize HTTP access logs from stdin — byte totals and status code counts.\n");
    println!("USAGE:");
    println!("  logtally [OPTIONS]       Read log lines from stdin, report every 10 lines");
    println!("  logtally triangle <n>    Print the first n rows of Pascal's triangle");
    println!("  logtally help            Show this message\n");
    println!("OPTIONS:");
    println!("  --every <n>   Lines between reports (default: 10)");
    println!("  --json        Emit each report as a JSON object instead of text");
    println!("  --no-color    Plain stderr diagnostics\n");
    println!("INPUT FORMAT:");
    println!("  <client> [<YYYY-MM-DD HH:MM:SS.ffffff>] - \"<request>\" <status> <size>");
    println!("  Lines that do not match contribute 0 bytes and no status count.\n");
    println!("A final report is printed on end of input or ctrl+c; both exit 0.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn run_args_default_to_every_ten_text() {
        let args = parse_run_args(&[]).expect("empty args parse");
        assert_eq!(args.every, 10);
        assert!(!args.json);
    }

    #[test]
    fn run_args_accept_every_override() {
        let args = parse_run_args(&to_args(&["--every", "25"])).expect("--every parses");
        assert_eq!(args.every, 25);
    }

    #[test]
    fn run_args_reject_zero_interval() {
        assert!(parse_run_args(&to_args(&["--every", "0"])).is_err());
    }

    #[test]
    fn run_args_reject_missing_interval_value() {
        assert!(parse_run_args(&to_args(&["--every"])).is_err());
        assert!(parse_run_args(&to_args(&["--every", "soon"])).is_err());
    }

    #[test]
    fn run_args_pick_up_json_flag() {
        let args = parse_run_args(&to_args(&["--json"])).expect("--json parses");
        assert!(args.json);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let args = parse_run_args(&to_args(&["--verbose", "--json"])).expect("unknown ignored");
        assert!(args.json);
        assert_eq!(args.every, 10);
    }
}
