use clap::{Arg, Command};
use laserscan_driver::ScanHistory;

fn get_resolution() -> f64 {
    let matches = Command::new("Laser scan simulator.")
        .about("Feeds synthetic sweeps into the scan history and queries it.")
        .disable_version_flag(true)
        .arg(
            Arg::new("resolution")
                .help("Angular resolution in degrees, between 0.1 and 1.0")
                .default_value("1.0"),
        )
        .get_matches();

    let resolution: &String = matches.get_one("resolution").unwrap();
    resolution.parse().expect("resolution must be a number")
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let resolution = get_resolution();
    let mut history = ScanHistory::new(resolution).unwrap();
    println!(
        "scan history created: {} degree steps, {} samples per reading",
        history.resolution(),
        history.n_samples()
    );

    let n = history.n_samples();
    // A slowly receding wall, then a flat one at 50 meters.
    let ramp: Vec<f64> = (0..n).map(|i| 10. + (i as f64) * 0.1).collect();
    let wall = vec![50.; n];

    history.new_scan(&ramp);
    history.new_scan(&wall);

    let points = history.last_points().unwrap();
    println!("{}", serde_json::to_string(&points).unwrap());

    for angle in [-5., 0., 5., 45.5, 90., 400.] {
        println!(
            "distance at {:>6.1} deg = {}",
            angle,
            history.distance_at(angle)
        );
    }

    let snapshot = history.clone();
    history.clear_buffer();
    println!(
        "after clearing the original, the snapshot still holds {} readings",
        snapshot.len()
    );

    let oldest = history.get_scan();
    println!("extraction from the cleared history: {:?}", oldest.err());
}
