use log::error;
use std::io::{self, Read};

use reported_company_sniffer::{analyze_job, has_compensation_signal, JobInput};

fn main() {
    // Initialize the logger
    env_logger::init();

    // Read the input text from stdin; each non-empty line is treated as a
    // scraped company name.
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    for line in input.lines() {
        let company = line.trim();
        if company.is_empty() {
            continue;
        }

        match analyze_job(&JobInput::from_company(company)) {
            Ok(result) => {
                if result.detected {
                    println!(
                        "{}: {} ({:.2}) {}",
                        company,
                        result.match_type.as_str(),
                        result.confidence,
                        result.message
                    );
                } else if has_compensation_signal(company) {
                    // Lines that aren't company names still get flagged when
                    // they carry pay information.
                    println!("{}: compensation signal", company);
                } else {
                    println!("{}: no match", company);
                }
            }
            Err(e) => {
                error!("Error analyzing company name: {}", e);
                std::process::exit(1);
            }
        }
    }
}
