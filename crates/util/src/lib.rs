//! Core type aliases, traits, and constants for agglo.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the agglo workspace.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Record identifier, and the seed label of the cluster it starts.
pub type Id = i64;
/// Attribute values, centroid coordinates, and centroid distances.
pub type Energy = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DATASET SCHEMA
// Grocery purchase records: one id column followed by twelve counts.
// ============================================================================
/// Header of the id column in input and export files.
pub const ID_COLUMN: &str = "ID";
/// Attribute names, in column order.
pub const ATTRIBUTES: [&str; 12] = [
    "Milk", "PetFood", "Veggies", "Cereal", "Nuts", "Rice", "Meat", "Eggs", "Yogurt", "Chips",
    "Cola", "Fruit",
];
/// Number of attributes per record.
pub const N_ATTRIBUTES: usize = ATTRIBUTES.len();

// ============================================================================
// AGGLOMERATIVE CLUSTERING
// ============================================================================
/// Number of clusters left standing when merging stops.
pub const TARGET_CLUSTER_COUNT: usize = 3;
/// Linkage criterion used for both clustering and the dendrogram.
pub const LINKAGE_METHOD: &str = "centroid";
/// Number of merged clusters shown as leaves in a truncated dendrogram.
pub const DENDROGRAM_LEAVES: usize = 30;
/// Number of merge history entries printed after a run.
pub const HISTORY_TAIL: usize = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Global interrupt flag for cooperative cancellation between merges.
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Check if a graceful stop was requested.
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
}

/// Request a graceful stop. Long-running loops observe it at their next check.
pub fn interrupt() {
    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
}

/// Register graceful interrupt handler. Type "Q" + Enter to stop after the current merge.
#[cfg(feature = "cli")]
pub fn brb() {
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current merge...");
                    interrupt();
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}
