use solsim::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "sun_mercury_gr.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml()?;

    let mut scenario = Scenario::build(scenario_cfg).context("building scenario")?;
    let summary = scenario.run().context("running scenario")?;

    println!(
        "Simulated {:.3} years with {} bodies.",
        summary.years, summary.bodies
    );
    println!(
        "Energy: kinetic {:.6e}, potential {:.6e}, total {:.6e}",
        summary.kinetic_energy, summary.potential_energy, summary.total_energy
    );

    if let (Some(min), Some(max)) = (summary.min_distance, summary.max_distance) {
        println!("Tracked pair separation: min {min:.6e} AU, max {max:.6e} AU");
    }

    if let Some(p) = summary.perihelion {
        // Apsidal angle in the orbital plane, reported in arcseconds
        let arcsec = p.y.atan2(p.x).to_degrees() * 3600.0;
        println!(
            "Perihelion offset: ({:.6e}, {:.6e}, {:.6e}) AU, angle {arcsec:.3} arcsec",
            p.x, p.y, p.z
        );
    }

    Ok(())
}
