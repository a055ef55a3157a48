// src/main.rs

use env_logger::Env;
use log::{debug, info};
use polyhunter::checks::make_check;
use polyhunter::config::SearchConfig;
use polyhunter::gf::make_gf;
use polyhunter::pipeline::Pipeline;
use polyhunter::poly::GfPoly;
use polyhunter::CheckResult;

fn main() {
    // Load configuration first (before logging is initialized)
    let mut config = SearchConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
        SearchConfig::default()
    });

    // Positional overrides: polyhunter [base [degree [count]]]
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].parse() {
            Ok(base) => config.base = base,
            Err(e) => {
                eprintln!("Error parsing base '{}': {}", args[1], e);
                eprintln!("Usage: {} [base [degree [count]]]", args[0]);
                eprintln!("Example: {} 2 5 3", args[0]);
                std::process::exit(1);
            }
        }
    }
    if args.len() > 2 {
        config.degree = args[2].parse().unwrap_or(config.degree);
    }
    if args.len() > 3 {
        config.count = args[3].parse().unwrap_or(config.count);
    }

    // Initialize logging based on config (can be overridden by RUST_LOG)
    let env = Env::default().filter_or("RUST_LOG", config.log_level.clone());
    env_logger::Builder::from_env(env).init();

    let threads = config.threads.unwrap_or_else(num_cpus::get);

    info!("================================================================================");
    info!("POLYHUNTER SEARCH");
    info!("================================================================================");
    info!("Field: GF({})", config.base);
    info!("Degree: {}", config.degree);
    info!("Polynomials wanted: {}", config.count);
    info!("Irreducibility method: {:?}", config.irreducible_method);
    info!("Primitivity method: {:?}", config.primitive_method);
    info!("Threads: {} (total cores: {})", threads, num_cpus::get());
    info!("================================================================================");

    let field = match make_gf(config.base) {
        Ok(field) => field,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let check = make_check(config.irreducible_method, config.primitive_method);
    let mut pipeline: Pipeline<GfPoly, CheckResult> = Pipeline::new(threads);
    debug!("searching with {} workers", pipeline.workers());

    let degree = config.degree;
    let count = config.count;
    let mut found: Vec<GfPoly> = Vec::with_capacity(count);
    pipeline.run(
        || GfPoly::random(&field, degree),
        check,
        |poly, result| {
            if result.irreducible && result.primitive {
                found.push(poly.clone());
                info!("accepted {} ({}/{})", poly, found.len(), count);
                found.len() >= count
            } else {
                debug!("rejected {}", poly);
                false
            }
        },
        config.strict,
    );

    for poly in &found {
        println!("{}", poly);
    }
}
