use carbon_sim_core::{
    compare_locations, estimate, CarbonIntensitySelection, FacilityParameters, GramsCo2ePerKwh,
    HardwareProfile, Hours, JobParameters, LocationRegistry, Percent, Pue, Watts,
};
use clap::Parser;

/// HPC job carbon footprint estimator with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "carbon-demo")]
#[command(about = "HPC job carbon footprint estimation demo", long_about = None)]
struct Args {
    /// Number of compute nodes used
    #[arg(short, long, default_value_t = 100)]
    nodes: u32,

    /// Job duration in hours
    #[arg(short, long, default_value_t = 24.0)]
    duration: f64,

    /// Average node utilisation in % (0-100)
    #[arg(short, long, default_value_t = 75.0)]
    utilisation: f64,

    /// Power per node when idle (Watts)
    #[arg(long, default_value_t = 150.0)]
    idle_power: f64,

    /// Power per node at peak load (Watts)
    #[arg(long, default_value_t = 600.0)]
    peak_power: f64,

    /// Data centre PUE (Power Usage Effectiveness, >= 1.0)
    #[arg(long, default_value_t = 1.5)]
    pue: f64,

    /// Hosting location (determines grid carbon intensity)
    #[arg(short, long, default_value = "UK (Mixed, increasing Renewables)")]
    location: String,

    /// Custom carbon intensity in gCO2e/kWh (overrides --location)
    #[arg(short, long)]
    custom_intensity: Option<f64>,

    /// List known locations and exit
    #[arg(long)]
    list_locations: bool,

    /// Skip the per-location comparison table
    #[arg(long)]
    no_comparison: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let registry = LocationRegistry::default();

    if args.list_locations {
        println!("Known hosting locations:");
        for entry in registry.entries() {
            println!("  {:<38} {}", entry.name, entry.carbon_intensity);
        }
        return;
    }

    let job = JobParameters::new(
        args.nodes,
        Hours::new(args.duration),
        Percent::new(args.utilisation),
    );
    let hardware = HardwareProfile::new(Watts::new(args.idle_power), Watts::new(args.peak_power));
    let facility = FacilityParameters::new(Pue::new(args.pue));

    let selection = match args.custom_intensity {
        Some(value) => CarbonIntensitySelection::Custom(GramsCo2ePerKwh::new(value)),
        None => CarbonIntensitySelection::Location(args.location.clone()),
    };

    let intensity = match selection.resolve(&registry) {
        Ok(intensity) => intensity,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let result = match estimate(&job, &hardware, &facility, intensity) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("HPC Job Carbon Footprint Estimate");
    println!("=================================");
    println!(
        "{} nodes, {}, {} average utilisation, {}",
        args.nodes, job.duration, job.average_utilisation, facility.pue
    );
    println!("Grid: {} ({})", args.location, intensity);
    println!();
    println!("Job Impact Summary");
    println!("  Avg. power / node:     {}", result.average_power_per_node);
    println!("  IT equipment energy:   {}", result.it_energy);
    println!("  Total energy (w/ PUE): {}", result.total_energy);
    println!("  Carbon emissions:      {}", result.total_emissions);
    println!();
    println!("Context & Equivalencies (approximate)");
    println!(
        "  Driving: {} ({:.1} miles) in an average passenger car",
        result.equivalencies.distance_driven,
        result.equivalencies.distance_driven.to_miles()
    );
    println!(
        "  Trees:   CO2 sequestered by {:.1} mature trees in one year",
        result.equivalencies.tree_years
    );

    if !args.no_comparison {
        println!();
        println!("Location Comparison (same job, hardware, and PUE)");
        match compare_locations(&registry, &job, &hardware, &facility) {
            Ok(rows) => {
                for row in rows {
                    println!(
                        "  {:<38} {:>14}   {}",
                        row.name,
                        row.carbon_intensity.to_string(),
                        row.total_emissions
                    );
                }
            }
            Err(e) => eprintln!("error: {e}"),
        }
    }

    println!();
    println!("Model assumptions: constant average power draw, annual-average");
    println!("grid intensity, constant PUE, homogeneous nodes, no embodied");
    println!("carbon. Simplified estimates for educational use only.");
}
