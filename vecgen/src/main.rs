use bary::pipeline::*;
use tracing_subscriber::EnvFilter;

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig::default();
    let generator = Generator::new(config)?;

    println!(
        "Generating {} test vectors and expected lambdas ({}.{} fixed-point)...\n",
        generator.config().num_cases,
        32 - generator.config().frac_bits,
        generator.config().frac_bits
    );

    let summary = generator.run(|eval| println!("{}\n", CaseReport(eval)))?;

    let names: Vec<String> = summary
        .files
        .iter()
        .filter_map(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .collect();
    println!("Successfully generated files: {}", names.join(", "));
    Ok(())
}
